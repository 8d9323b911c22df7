pub mod classifier;

pub use classifier::{
    classify_category, extract_age, extract_division, extract_gender, unique_age_groups,
    unique_divisions, unique_genders, CategoryInfo, Division, Gender, UNKNOWN_AGE,
};

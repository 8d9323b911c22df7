use serde::{Deserialize, Serialize};
use std::fmt;

/// Age label returned when a category name carries no "U<digits>" group.
pub const UNKNOWN_AGE: &str = "Unknown";

/// Competitive tier inferred from the category label.
///
/// Variant order matches the lexicographic order of the display labels,
/// so sorting divisions sorts their labels too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Division {
    Copa,
    Liga,
    #[serde(rename = "Other", alias = "OTHER")]
    Other,
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::Copa => "COPA",
            Division::Liga => "LIGA",
            Division::Other => "Other",
        }
    }

    /// Parse a user-supplied division label (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "COPA" => Some(Division::Copa),
            "LIGA" => Some(Division::Liga),
            "OTHER" => Some(Division::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant order matches lexicographic order of the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Boys,
    Girls,
    Mixed,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Boys => "Boys",
            Gender::Girls => "Girls",
            Gender::Mixed => "Mixed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boys" => Some(Gender::Boys),
            "girls" => Some(Gender::Girls),
            "mixed" => Some(Gender::Mixed),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub age: String,
    pub gender: Gender,
    pub division: Division,
}

/// Split a free-text category label into age group, gender and division.
///
/// `"U10/11 GIRLS (9v9)"` -> `U10`, `Girls`, `Other`.
pub fn classify_category(category_name: &str) -> CategoryInfo {
    CategoryInfo {
        age: extract_age(category_name),
        gender: extract_gender(category_name),
        division: extract_division(category_name),
    }
}

/// First "U<digits>" group, case-insensitive. Combined groups such as
/// "U12/13" or "U12/U13" collapse to the first number.
pub fn extract_age(category_name: &str) -> String {
    let bytes = category_name.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if !b.eq_ignore_ascii_case(&b'u') {
            continue;
        }
        let digits: String = category_name[i + 1..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if !digits.is_empty() {
            return format!("U{}", digits);
        }
    }
    UNKNOWN_AGE.to_string()
}

pub fn extract_gender(category_name: &str) -> Gender {
    let upper = category_name.to_uppercase();

    // GIRLS/WOMEN first: "WOMEN" contains "MEN"
    if upper.contains("GIRLS") || upper.contains("WOMEN") {
        Gender::Girls
    } else if upper.contains("BOYS") || upper.contains("MEN") {
        Gender::Boys
    } else {
        // "MIXED" and unlabelled categories both land here
        Gender::Mixed
    }
}

pub fn extract_division(category_name: &str) -> Division {
    let upper = category_name.to_uppercase();

    if upper.contains("COPA") {
        Division::Copa
    } else if upper.contains("LIGA") {
        Division::Liga
    } else {
        Division::Other
    }
}

/// Distinct age groups, ascending by their number. Unknown ages are left out.
pub fn unique_age_groups<S: AsRef<str>>(category_names: &[S]) -> Vec<String> {
    let mut ages: Vec<String> = Vec::new();
    for name in category_names {
        let age = extract_age(name.as_ref());
        if age != UNKNOWN_AGE && !ages.contains(&age) {
            ages.push(age);
        }
    }

    // Stable sort: equal numbers ("U9", "U09") keep first-seen order
    ages.sort_by_key(|age| age_number(age));
    ages
}

fn age_number(age: &str) -> u32 {
    let digits: String = age
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

pub fn unique_genders<S: AsRef<str>>(category_names: &[S]) -> Vec<Gender> {
    let mut genders: Vec<Gender> = category_names
        .iter()
        .map(|name| extract_gender(name.as_ref()))
        .collect();
    genders.sort();
    genders.dedup();
    genders
}

pub fn unique_divisions<S: AsRef<str>>(category_names: &[S]) -> Vec<Division> {
    let mut divisions: Vec<Division> = category_names
        .iter()
        .map(|name| extract_division(name.as_ref()))
        .collect();
    divisions.sort();
    divisions.dedup();
    divisions
}

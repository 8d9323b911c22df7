pub mod formatter;
pub mod json;

pub use formatter::{
    format_categories, format_club_breakdown, format_points, format_rules, format_table,
    format_team_history, format_tsv, should_use_colors, StandingRow,
};
pub use json::{to_json, write_json};

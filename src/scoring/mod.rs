pub mod aggregation;
pub mod config;
pub mod engine;
pub mod overall;
pub mod ranking;
pub mod rules;
pub mod validation;

pub use aggregation::aggregate_clubs;
pub use config::ScoringConfig;
pub use engine::{row_points, score_teams, score_teams_with, skip_reason};
pub use overall::{overall_clubs, overall_clubs_with, overall_teams, overall_teams_with};
pub use ranking::{compare_names, sort_standings, Ranked};
pub use rules::{get_points, ScoringRule, ScoringTable, DEFAULT_RULES};
pub use validation::{validate_rules, validate_scoring};

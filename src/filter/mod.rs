pub mod category;
pub mod drilldown;

pub use category::{filter_rows, filter_team_scores, CategoryFilter};
pub use drilldown::{category_names, club_breakdown, team_history, Placement, TeamHistory};

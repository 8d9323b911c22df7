//! Team and club standings for youth cup tournaments.
//!
//! Placements (1st-4th in cup and plate finals) become points through a fixed
//! table keyed by division, stage and rank. Points are summed per team and
//! category, per club, and across a season of tournaments.

pub mod category;
pub mod config;
pub mod data;
pub mod filter;
pub mod models;
pub mod output;
pub mod scoring;

pub use category::{classify_category, CategoryInfo, Division, Gender};
pub use models::{
    ClubScore, OverallClubScore, OverallTeamScore, ResultRow, StageType, Team, TeamScore,
    TournamentResult,
};
pub use scoring::{aggregate_clubs, get_points, overall_clubs, overall_teams, score_teams};

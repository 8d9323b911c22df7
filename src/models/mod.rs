pub mod types;

pub use types::{
    ClubScore, MatchScore, OverallClubScore, OverallTeamScore, ResultRow, StageType, Team,
    TeamScore, TournamentResult,
};

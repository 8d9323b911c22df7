use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::aggregation::aggregate_clubs;
use super::engine::score_teams_with;
use super::ranking::sort_standings;
use super::rules::ScoringTable;
use crate::models::{OverallClubScore, OverallTeamScore, TournamentResult};

pub fn overall_teams(tournaments: &[TournamentResult]) -> Vec<OverallTeamScore> {
    overall_teams_with(tournaments, &ScoringTable::default())
}

/// Season totals per team.
///
/// Each tournament is scored on its own, then folded by team id alone: a team
/// that placed in several categories ends up with a single season entry
/// whose category name comes from the first score seen.
pub fn overall_teams_with(
    tournaments: &[TournamentResult],
    table: &ScoringTable,
) -> Vec<OverallTeamScore> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut overall: Vec<OverallTeamScore> = Vec::new();

    for tournament in tournaments {
        let scores = score_teams_with(&tournament.results, table);
        log::debug!(
            "{}: {} team scores from {} results",
            tournament.tournament_name,
            scores.len(),
            tournament.results.len()
        );

        for score in scores {
            match index.entry(score.team_id.clone()) {
                Entry::Occupied(entry) => {
                    let existing = &mut overall[*entry.get()];
                    existing.score.total_points =
                        existing.score.total_points.saturating_add(score.total_points);
                    add_tournament(&mut existing.tournaments, &tournament.tournament_name);
                }
                Entry::Vacant(entry) => {
                    entry.insert(overall.len());
                    overall.push(OverallTeamScore {
                        score,
                        tournaments: vec![tournament.tournament_name.clone()],
                    });
                }
            }
        }
    }

    sort_standings(&mut overall);
    overall
}

pub fn overall_clubs(tournaments: &[TournamentResult]) -> Vec<OverallClubScore> {
    overall_clubs_with(tournaments, &ScoringTable::default())
}

/// Season totals per club, built from each tournament's club aggregation.
pub fn overall_clubs_with(
    tournaments: &[TournamentResult],
    table: &ScoringTable,
) -> Vec<OverallClubScore> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut overall: Vec<OverallClubScore> = Vec::new();

    for tournament in tournaments {
        let clubs = aggregate_clubs(&score_teams_with(&tournament.results, table));
        log::debug!("{}: {} club scores", tournament.tournament_name, clubs.len());

        for score in clubs {
            match index.entry(score.club_id.clone()) {
                Entry::Occupied(entry) => {
                    let existing = &mut overall[*entry.get()];
                    existing.score.total_points =
                        existing.score.total_points.saturating_add(score.total_points);
                    add_tournament(&mut existing.tournaments, &tournament.tournament_name);
                }
                Entry::Vacant(entry) => {
                    entry.insert(overall.len());
                    overall.push(OverallClubScore {
                        score,
                        tournaments: vec![tournament.tournament_name.clone()],
                    });
                }
            }
        }
    }

    sort_standings(&mut overall);
    overall
}

fn add_tournament(tournaments: &mut Vec<String>, name: &str) {
    if !tournaments.iter().any(|t| t == name) {
        tournaments.push(name.to_string());
    }
}

use serde::Serialize;

use crate::models::{ClubScore, MatchScore, StageType, TeamScore, TournamentResult};
use crate::scoring::{row_points, score_teams_with, ScoringTable};

/// One scored placement of a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub tournament_name: String,
    pub category_name: String,
    pub stage_type: StageType,
    pub rank: u32,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<MatchScore>>,
}

/// Every placement of a single team across the season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamHistory {
    pub team_id: String,
    pub team_name: String,
    pub club_id: String,
    pub club_name: String,
    pub placements: Vec<Placement>,
    pub total_points: u32,
}

/// Collect a team's placements across tournaments.
///
/// Rows that scoring would skip are left out, so `total_points` always equals
/// the team's season total. Returns `None` if the team never scored.
pub fn team_history(
    tournaments: &[TournamentResult],
    team_id: &str,
    table: &ScoringTable,
) -> Option<TeamHistory> {
    let mut history: Option<TeamHistory> = None;

    for tournament in tournaments {
        for row in tournament.results.iter().filter(|r| r.team.team_id == team_id) {
            let (Some(points), Some(stage), Some(rank)) =
                (row_points(row, table), row.stage_type, row.rank)
            else {
                continue;
            };

            let entry = history.get_or_insert_with(|| TeamHistory {
                team_id: row.team.team_id.clone(),
                team_name: row.team.team_name.clone(),
                club_id: row.team.club_id.clone(),
                club_name: row.team.club_name.clone(),
                placements: Vec::new(),
                total_points: 0,
            });
            entry.total_points = entry.total_points.saturating_add(points);
            entry.placements.push(Placement {
                tournament_name: tournament.tournament_name.clone(),
                category_name: row.category_name.clone(),
                stage_type: stage,
                rank,
                points,
                matches: row.matches.clone(),
            });
        }
    }

    history
}

/// The club's score and its member teams, best first.
pub fn club_breakdown(
    tournament: &TournamentResult,
    club_id: &str,
    table: &ScoringTable,
) -> Option<(ClubScore, Vec<TeamScore>)> {
    let teams: Vec<TeamScore> = score_teams_with(&tournament.results, table)
        .into_iter()
        .filter(|t| t.club_id == club_id)
        .collect();

    let first = teams.first()?;
    let club = ClubScore {
        club_id: first.club_id.clone(),
        club_name: first.club_name.clone(),
        total_points: teams
            .iter()
            .fold(0u32, |total, t| total.saturating_add(t.total_points)),
    };
    Some((club, teams))
}

/// All category names in the loaded tournaments, first-seen order, no duplicates.
pub fn category_names(tournaments: &[TournamentResult]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for row in tournaments.iter().flat_map(|t| t.results.iter()) {
        if !names.contains(&row.category_name) {
            names.push(row.category_name.clone());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResultRow, Team};
    use crate::scoring::{aggregate_clubs, overall_teams};

    fn row(team_id: &str, club_id: &str, category: &str, stage: Option<StageType>, rank: u32) -> ResultRow {
        ResultRow {
            category_id: category.to_string(),
            category_name: category.to_string(),
            stage_type: stage,
            rank: Some(rank),
            team: Team {
                team_id: team_id.to_string(),
                team_name: format!("Team {}", team_id),
                club_id: club_id.to_string(),
                club_name: format!("Club {}", club_id),
            },
            matches: None,
        }
    }

    fn season() -> Vec<TournamentResult> {
        vec![
            TournamentResult {
                tournament_id: "1".to_string(),
                tournament_name: "Shepparton Cup".to_string(),
                season: "2025".to_string(),
                results: vec![
                    row("A", "X", "U12 COPA", Some(StageType::CupFinal), 1),
                    row("B", "X", "U12 COPA", Some(StageType::CupFinal), 2),
                    row("C", "Y", "U12 COPA", Some(StageType::CupFinal), 3),
                    row("A", "X", "U13 LIGA", None, 1),
                ],
            },
            TournamentResult {
                tournament_id: "2".to_string(),
                tournament_name: "Bendigo Cup".to_string(),
                season: "2025".to_string(),
                results: vec![
                    row("A", "X", "U12 LIGA", Some(StageType::PlateFinal), 1),
                    row("C", "Y", "U12 GIRLS", Some(StageType::CupFinal), 1),
                ],
            },
        ]
    }

    #[test]
    fn test_team_history_across_tournaments() {
        let history = team_history(&season(), "A", &ScoringTable::default()).unwrap();
        assert_eq!(history.team_name, "Team A");
        assert_eq!(history.placements.len(), 2);
        assert_eq!(history.placements[0].tournament_name, "Shepparton Cup");
        assert_eq!(history.placements[0].points, 24);
        assert_eq!(history.placements[1].tournament_name, "Bendigo Cup");
        assert_eq!(history.placements[1].points, 6);
        assert_eq!(history.total_points, 30);
    }

    #[test]
    fn test_team_history_total_matches_overall() {
        let tournaments = season();
        let overall = overall_teams(&tournaments);
        for score in &overall {
            let history =
                team_history(&tournaments, &score.score.team_id, &ScoringTable::default()).unwrap();
            assert_eq!(history.total_points, score.score.total_points);
        }
    }

    #[test]
    fn test_team_history_total_saturates() {
        let table = ScoringTable::new(vec![
            crate::scoring::ScoringRule {
                division: crate::category::Division::Copa,
                stage: StageType::CupFinal,
                rank: 1,
                points: u32::MAX,
            },
            crate::scoring::ScoringRule {
                division: crate::category::Division::Liga,
                stage: StageType::PlateFinal,
                rank: 1,
                points: u32::MAX,
            },
        ]);
        // Team A wins the U12 COPA cup and the U12 LIGA plate
        let history = team_history(&season(), "A", &table).unwrap();
        assert_eq!(history.total_points, u32::MAX);
    }

    #[test]
    fn test_team_history_unknown_team() {
        assert!(team_history(&season(), "nobody", &ScoringTable::default()).is_none());
    }

    #[test]
    fn test_club_breakdown() {
        let tournaments = season();
        let (club, teams) = club_breakdown(&tournaments[0], "X", &ScoringTable::default()).unwrap();
        assert_eq!(club.total_points, 46);
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].team_id, "A");

        let clubs = aggregate_clubs(&score_teams_with(&tournaments[0].results, &ScoringTable::default()));
        assert_eq!(clubs[0], club);
    }

    #[test]
    fn test_club_breakdown_total_saturates() {
        let huge = |rank| crate::scoring::ScoringRule {
            division: crate::category::Division::Copa,
            stage: StageType::CupFinal,
            rank,
            points: u32::MAX,
        };
        let table = ScoringTable::new(vec![huge(1), huge(2)]);
        let (club, teams) = club_breakdown(&season()[0], "X", &table).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(club.total_points, u32::MAX);
    }

    #[test]
    fn test_club_breakdown_unknown_club() {
        assert!(club_breakdown(&season()[0], "Z", &ScoringTable::default()).is_none());
    }

    #[test]
    fn test_category_names_deduplicated() {
        let names = category_names(&season());
        assert_eq!(names, vec!["U12 COPA", "U13 LIGA", "U12 LIGA", "U12 GIRLS"]);
    }
}

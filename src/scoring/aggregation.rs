use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::ranking::sort_standings;
use crate::models::{ClubScore, TeamScore};

/// Sum team scores per club. The first team seen for a club supplies its name.
pub fn aggregate_clubs(team_scores: &[TeamScore]) -> Vec<ClubScore> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut clubs: Vec<ClubScore> = Vec::new();

    for team in team_scores {
        match index.entry(team.club_id.as_str()) {
            Entry::Occupied(entry) => {
                let club = &mut clubs[*entry.get()];
                club.total_points = club.total_points.saturating_add(team.total_points);
            }
            Entry::Vacant(entry) => {
                entry.insert(clubs.len());
                clubs.push(ClubScore {
                    club_id: team.club_id.clone(),
                    club_name: team.club_name.clone(),
                    total_points: team.total_points,
                });
            }
        }
    }

    sort_standings(&mut clubs);
    clubs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_score(team_id: &str, club_id: &str, club_name: &str, points: u32) -> TeamScore {
        TeamScore {
            team_id: team_id.to_string(),
            team_name: format!("{} {}", club_name, team_id),
            club_id: club_id.to_string(),
            club_name: club_name.to_string(),
            category_name: "U12 COPA (9v9)".to_string(),
            total_points: points,
        }
    }

    #[test]
    fn test_sums_teams_of_same_club() {
        let teams = vec![
            team_score("A", "X", "Club X", 24),
            team_score("B", "X", "Club X", 22),
        ];
        let clubs = aggregate_clubs(&teams);
        assert_eq!(clubs.len(), 1);
        assert_eq!(clubs[0].club_id, "X");
        assert_eq!(clubs[0].total_points, 46);
    }

    #[test]
    fn test_clubs_sorted_with_name_tiebreak() {
        let teams = vec![
            team_score("A", "k", "Keilor Park SC", 20),
            team_score("B", "a", "Altona North SC", 12),
            team_score("C", "a", "Altona North SC", 8),
            team_score("D", "g", "Glen Eira FC", 30),
        ];
        let clubs = aggregate_clubs(&teams);
        let names: Vec<&str> = clubs.iter().map(|c| c.club_name.as_str()).collect();
        assert_eq!(names, vec!["Glen Eira FC", "Altona North SC", "Keilor Park SC"]);
    }

    #[test]
    fn test_club_total_conserves_team_total() {
        let teams = vec![
            team_score("A", "x", "X", 24),
            team_score("B", "y", "Y", 18),
            team_score("C", "x", "X", 6),
            team_score("D", "z", "Z", 0),
        ];
        let clubs = aggregate_clubs(&teams);
        let team_total: u32 = teams.iter().map(|t| t.total_points).sum();
        let club_total: u32 = clubs.iter().map(|c| c.total_points).sum();
        assert_eq!(team_total, club_total);
        assert_eq!(clubs.len(), 3);
    }

    #[test]
    fn test_first_team_names_the_club() {
        let teams = vec![
            team_score("A", "x", "Original Name", 10),
            team_score("B", "x", "Other Name", 10),
        ];
        let clubs = aggregate_clubs(&teams);
        assert_eq!(clubs[0].club_name, "Original Name");
    }

    #[test]
    fn test_club_total_saturates() {
        let teams = vec![
            team_score("A", "x", "X", u32::MAX - 1),
            team_score("B", "x", "X", 5),
        ];
        let clubs = aggregate_clubs(&teams);
        assert_eq!(clubs[0].total_points, u32::MAX);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_clubs(&[]).is_empty());
    }
}

use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::category::{Division, Gender};
use crate::filter::TeamHistory;
use crate::models::{ClubScore, OverallClubScore, OverallTeamScore, TeamScore};
use crate::scoring::ScoringTable;

const EMPTY_MESSAGE: &str = "No results found.";

/// One line of a standings list, independent of what is being ranked.
pub struct StandingRow<'a> {
    pub name: &'a str,
    pub detail: String, // e.g. club and category, or contributing tournaments
    pub points: u32,
}

impl<'a> StandingRow<'a> {
    pub fn from_team(score: &'a TeamScore) -> Self {
        Self {
            name: &score.team_name,
            detail: format!("{} | {}", score.club_name, score.category_name),
            points: score.total_points,
        }
    }

    pub fn from_club(score: &'a ClubScore) -> Self {
        Self {
            name: &score.club_name,
            detail: String::new(),
            points: score.total_points,
        }
    }

    pub fn from_overall_team(score: &'a OverallTeamScore) -> Self {
        Self {
            name: &score.score.team_name,
            detail: format!("{} | {}", score.score.club_name, tournament_count(&score.tournaments)),
            points: score.score.total_points,
        }
    }

    pub fn from_overall_club(score: &'a OverallClubScore) -> Self {
        Self {
            name: &score.score.club_name,
            detail: tournament_count(&score.tournaments),
            points: score.score.total_points,
        }
    }
}

fn tournament_count(tournaments: &[String]) -> String {
    match tournaments.len() {
        1 => "1 tournament".to_string(),
        n => format!("{} tournaments", n),
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// "24 pts", "1 pt"
pub fn format_points(points: u32) -> String {
    if points == 1 {
        "1 pt".to_string()
    } else {
        format!("{} pts", points)
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format standings with columns: Index, Points, Name, Detail.
/// Index column: 3 chars (fits "99."), right-aligned.
/// Points column: right-aligned, 8 chars wide (fits "9999 pts").
pub fn format_table(rows: &[StandingRow], use_colors: bool) -> String {
    if rows.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let points_width = 8;
    let separator = "  ";

    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let index_str = format!("{:>3}.", idx + 1);
            let points_padded = format!("{:>width$}", format_points(row.points), width = points_width);

            let fixed_width = index_width + 1 + 1 + points_width + separator.len() * 2 + row.detail.len();
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_name(row.name, width - fixed_width),
                Some(_) => truncate_name(row.name, 20),
                None => row.name.to_string(),
            };

            let mut line = if use_colors {
                format!(
                    "{} {}{}{}",
                    index_str.dimmed(),
                    points_padded.bold(),
                    separator,
                    name
                )
            } else {
                format!("{} {}{}{}", index_str, points_padded, separator, name)
            };

            if !row.detail.is_empty() {
                line.push_str(separator);
                if use_colors {
                    line.push_str(&row.detail.cyan().to_string());
                } else {
                    line.push_str(&row.detail);
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format standings as tab-separated values for scripting.
/// Columns: position, points, name, detail (no headers, no colors)
pub fn format_tsv(rows: &[StandingRow]) -> String {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| format!("{}\t{}\t{}\t{}", idx + 1, row.points, row.name, row.detail))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line placement history for one team
pub fn format_team_history(history: &TeamHistory, use_colors: bool) -> String {
    let mut lines = Vec::new();
    if use_colors {
        lines.push(format!("{}", history.team_name.bold()));
        lines.push(format!("  Club: {}", history.club_name.cyan()));
    } else {
        lines.push(history.team_name.clone());
        lines.push(format!("  Club: {}", history.club_name));
    }
    lines.push(format!("  Total: {}", format_points(history.total_points)));

    for placement in &history.placements {
        lines.push(format!(
            "  {} | {} | {} #{} | {}",
            placement.tournament_name,
            placement.category_name,
            placement.stage_type.display_name(),
            placement.rank,
            format_points(placement.points)
        ));
        for game in placement.matches.iter().flatten() {
            let penalties = if game.penalties { " (pens)" } else { "" };
            lines.push(format!(
                "      {}: {} {}-{} vs {}{}",
                game.round_name, game.result, game.home_goals, game.away_goals, game.opponent, penalties
            ));
        }
    }

    lines.join("\n")
}

/// A club's total followed by its member teams
pub fn format_club_breakdown(club: &ClubScore, teams: &[TeamScore], use_colors: bool) -> String {
    let header = if use_colors {
        format!("{} ({} total)", club.club_name.bold(), format_points(club.total_points))
    } else {
        format!("{} ({} total)", club.club_name, format_points(club.total_points))
    };

    let mut lines = vec![header];
    for team in teams {
        lines.push(format!(
            "  - {} [{}]: {}",
            team.team_name,
            team.category_name,
            format_points(team.total_points)
        ));
    }
    lines.join("\n")
}

/// Filter values available in the loaded data
pub fn format_categories(ages: &[String], genders: &[Gender], divisions: &[Division]) -> String {
    let join = |items: Vec<&str>| {
        if items.is_empty() {
            "(none)".to_string()
        } else {
            items.join(", ")
        }
    };
    format!(
        "Age groups: {}\nGenders: {}\nDivisions: {}",
        join(ages.iter().map(String::as_str).collect()),
        join(genders.iter().map(Gender::as_str).collect()),
        join(divisions.iter().map(Division::as_str).collect())
    )
}

/// Print the active points table, one rule per line
pub fn format_rules(table: &ScoringTable) -> String {
    table
        .rules()
        .iter()
        .map(|rule| {
            format!(
                "{:<6} {:<12} #{}  {:>8}",
                rule.division.as_str(),
                rule.stage.display_name(),
                rule.rank,
                format_points(rule.points)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Placement;
    use crate::models::StageType;

    fn sample_team() -> TeamScore {
        TeamScore {
            team_id: "team001".to_string(),
            team_name: "Altona North SC U11 COPA".to_string(),
            club_id: "club001".to_string(),
            club_name: "Altona North SC".to_string(),
            category_name: "U11 COPA (9v9)".to_string(),
            total_points: 24,
        }
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(24), "24 pts");
        assert_eq!(format_points(1), "1 pt");
        assert_eq!(format_points(0), "0 pts");
    }

    #[test]
    fn test_truncate_name_short() {
        assert_eq!(truncate_name("Short name", 20), "Short name");
    }

    #[test]
    fn test_truncate_name_long() {
        assert_eq!(truncate_name("Brunswick Juventus U14 Boys", 15), "Brunswick Ju...");
    }

    #[test]
    fn test_truncate_name_very_narrow() {
        assert_eq!(truncate_name("Keilor", 3), "Kei");
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<StandingRow> = vec![];
        assert_eq!(format_table(&rows, false), "No results found.");
    }

    #[test]
    fn test_format_table_team() {
        let team = sample_team();
        let rows = vec![StandingRow::from_team(&team)];
        let result = format_table(&rows, false);
        assert!(result.starts_with("  1."));
        assert!(result.contains("24 pts"));
        assert!(result.contains("Altona North SC U11 COPA"));
        assert!(result.contains("Altona North SC | U11 COPA (9v9)"));
    }

    #[test]
    fn test_format_table_multiple_indices() {
        let first = sample_team();
        let mut second = sample_team();
        second.team_name = "Glen Eira FC U11 COPA".to_string();
        second.total_points = 22;
        let rows = vec![StandingRow::from_team(&first), StandingRow::from_team(&second)];
        let result = format_table(&rows, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("  1."));
        assert!(lines[1].contains("  2."));
        assert!(lines[1].contains("22 pts"));
    }

    #[test]
    fn test_format_table_club_has_no_detail() {
        let club = ClubScore {
            club_id: "club001".to_string(),
            club_name: "Altona North SC".to_string(),
            total_points: 46,
        };
        let result = format_table(&[StandingRow::from_club(&club)], false);
        assert!(result.ends_with("Altona North SC"));
    }

    #[test]
    fn test_overall_detail_counts_tournaments() {
        let overall = OverallClubScore {
            score: ClubScore {
                club_id: "club001".to_string(),
                club_name: "Altona North SC".to_string(),
                total_points: 70,
            },
            tournaments: vec!["Cup A".to_string(), "Cup B".to_string()],
        };
        let row = StandingRow::from_overall_club(&overall);
        assert_eq!(row.detail, "2 tournaments");
    }

    #[test]
    fn test_format_tsv() {
        let team = sample_team();
        let result = format_tsv(&[StandingRow::from_team(&team)]);
        assert_eq!(
            result,
            "1\t24\tAltona North SC U11 COPA\tAltona North SC | U11 COPA (9v9)"
        );
    }

    #[test]
    fn test_format_tsv_empty() {
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_team_history() {
        let history = TeamHistory {
            team_id: "team001".to_string(),
            team_name: "Altona North SC U11 COPA".to_string(),
            club_id: "club001".to_string(),
            club_name: "Altona North SC".to_string(),
            placements: vec![Placement {
                tournament_name: "Shepparton Cup".to_string(),
                category_name: "U11 COPA (9v9)".to_string(),
                stage_type: StageType::CupFinal,
                rank: 1,
                points: 24,
                matches: None,
            }],
            total_points: 24,
        };
        let result = format_team_history(&history, false);
        assert!(result.contains("Club: Altona North SC"));
        assert!(result.contains("Total: 24 pts"));
        assert!(result.contains("Shepparton Cup | U11 COPA (9v9) | Cup Final #1 | 24 pts"));
    }

    #[test]
    fn test_format_club_breakdown() {
        let team = sample_team();
        let club = ClubScore {
            club_id: "club001".to_string(),
            club_name: "Altona North SC".to_string(),
            total_points: 24,
        };
        let result = format_club_breakdown(&club, &[team], false);
        assert!(result.starts_with("Altona North SC (24 pts total)"));
        assert!(result.contains("  - Altona North SC U11 COPA [U11 COPA (9v9)]: 24 pts"));
    }

    #[test]
    fn test_format_categories() {
        let result = format_categories(
            &["U9".to_string(), "U12".to_string()],
            &[Gender::Boys],
            &[],
        );
        assert_eq!(result, "Age groups: U9, U12\nGenders: Boys\nDivisions: (none)");
    }

    #[test]
    fn test_format_rules_lists_every_rule() {
        let table = ScoringTable::default();
        let result = format_rules(&table);
        assert_eq!(result.lines().count(), 24);
        assert!(result.lines().next().unwrap().contains("24 pts"));
    }
}

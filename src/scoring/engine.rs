use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::ranking::sort_standings;
use super::rules::ScoringTable;
use crate::models::{ResultRow, TeamScore};

/// A team's entry within one category. Kept as separate fields so ids
/// containing separators cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TeamCategoryKey<'a> {
    team_id: &'a str,
    category_id: &'a str,
}

/// Why a row cannot be scored, or `None` if it can.
///
/// A rank of 0 is treated the same as a missing rank, as is any rank value
/// that was not a positive whole number in the source data.
pub fn skip_reason(row: &ResultRow) -> Option<&'static str> {
    if row.stage_type.is_none() {
        Some("missing stage type")
    } else if row.rank.unwrap_or(0) == 0 {
        Some("missing, zero or invalid rank")
    } else {
        None
    }
}

/// Points a single row earns, or `None` if the row is skipped.
pub fn row_points(row: &ResultRow, table: &ScoringTable) -> Option<u32> {
    match (row.stage_type, row.rank) {
        (Some(stage), Some(rank)) if rank > 0 => {
            Some(table.points_for_category(stage, rank, &row.category_name))
        }
        _ => None,
    }
}

/// Score rows with the canonical points table.
pub fn score_teams(rows: &[ResultRow]) -> Vec<TeamScore> {
    score_teams_with(rows, &ScoringTable::default())
}

/// One score per distinct (team, category), summing duplicate placements.
///
/// The first row seen for a key fixes the names carried in the score; later
/// rows only add points. Malformed rows are logged and skipped.
pub fn score_teams_with(rows: &[ResultRow], table: &ScoringTable) -> Vec<TeamScore> {
    let mut index: HashMap<TeamCategoryKey, usize> = HashMap::new();
    let mut scores: Vec<TeamScore> = Vec::new();

    for row in rows {
        let Some(points) = row_points(row, table) else {
            log::warn!(
                "Skipping result for team {} in category {}: {}",
                row.team.team_id,
                row.category_id,
                skip_reason(row).unwrap_or("malformed row")
            );
            continue;
        };

        let key = TeamCategoryKey {
            team_id: &row.team.team_id,
            category_id: &row.category_id,
        };

        match index.entry(key) {
            Entry::Occupied(entry) => {
                let score = &mut scores[*entry.get()];
                score.total_points = score.total_points.saturating_add(points);
            }
            Entry::Vacant(entry) => {
                entry.insert(scores.len());
                scores.push(TeamScore {
                    team_id: row.team.team_id.clone(),
                    team_name: row.team.team_name.clone(),
                    club_id: row.team.club_id.clone(),
                    club_name: row.team.club_name.clone(),
                    category_name: row.category_name.clone(),
                    total_points: points,
                });
            }
        }
    }

    sort_standings(&mut scores);
    scores
}

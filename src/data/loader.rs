use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::models::TournamentResult;

/// Load every tournament from files matching a glob pattern (or a plain path).
///
/// Files are read in sorted path order and each may hold a single tournament
/// object or an array of them.
///
/// # Errors
///
/// Returns an error if:
/// - The pattern is not a valid glob
/// - No file matches
/// - Any matching file cannot be read or parsed
pub fn load_tournaments(pattern: &str) -> Result<Vec<TournamentResult>> {
    let mut paths: Vec<PathBuf> = glob::glob(pattern)
        .with_context(|| format!("Invalid data pattern '{}'", pattern))?
        .collect::<Result<_, _>>()
        .with_context(|| format!("Failed to read paths matching '{}'", pattern))?;

    if paths.is_empty() {
        anyhow::bail!("No tournament data found matching '{}'", pattern);
    }
    paths.sort();

    let mut tournaments = Vec::new();
    for path in &paths {
        let loaded = load_tournament_file(path)?;
        log::debug!("Loaded {} tournament(s) from {}", loaded.len(), path.display());
        tournaments.extend(loaded);
    }

    Ok(tournaments)
}

/// Parse one JSON file holding a tournament object or an array of them.
pub fn load_tournament_file(path: &Path) -> Result<Vec<TournamentResult>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open tournament file at {}", path.display()))?;

    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse tournament file: invalid JSON in {}", path.display()))?;

    let tournaments = match value {
        Value::Array(_) => serde_json::from_value::<Vec<TournamentResult>>(value),
        other => serde_json::from_value(other).map(|t: TournamentResult| vec![t]),
    }
    .with_context(|| format!("Unexpected tournament data layout in {}", path.display()))?;

    Ok(tournaments)
}

/// Look up a loaded tournament by id.
pub fn find_tournament<'a>(
    tournaments: &'a [TournamentResult],
    tournament_id: &str,
) -> Option<&'a TournamentResult> {
    tournaments.iter().find(|t| t.tournament_id == tournament_id)
}

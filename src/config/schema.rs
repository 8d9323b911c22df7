use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

/// Rows shown per standings list unless overridden.
pub const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Glob pattern or path of the tournament JSON files
    #[serde(default)]
    pub data: Option<String>,

    /// Rows printed per list
    #[serde(default)]
    pub limit: Option<usize>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Config {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}

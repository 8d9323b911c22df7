use serde::{Deserialize, Serialize};

use super::rules::{ScoringRule, ScoringTable};

/// Scoring section of the config file.
///
/// When `rules` is present it replaces the built-in table entirely.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   rules:
///     - { division: COPA, stage: CUP_FINAL, rank: 1, points: 30 }
///     - { division: LIGA, stage: CUP_FINAL, rank: 1, points: 15 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub rules: Option<Vec<ScoringRule>>,
}

impl ScoringConfig {
    /// The table to score with: configured rules, or the built-in table.
    pub fn table(&self) -> ScoringTable {
        match &self.rules {
            Some(rules) => ScoringTable::new(rules.clone()),
            None => ScoringTable::default(),
        }
    }
}

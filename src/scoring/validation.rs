use std::collections::HashSet;

use super::config::ScoringConfig;
use super::rules::ScoringRule;
use crate::models::StageType;

/// Validate the scoring section at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    match &config.rules {
        Some(rules) => validate_rules(rules),
        None => Ok(()),
    }
}

/// Check a custom rule list for entries that could never match or would be
/// shadowed by an earlier rule.
pub fn validate_rules(rules: &[ScoringRule]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if rules.is_empty() {
        errors.push("scoring.rules: must contain at least one rule".to_string());
    }

    let mut seen = HashSet::new();
    for (i, rule) in rules.iter().enumerate() {
        if rule.rank == 0 {
            errors.push(format!("scoring.rules[{}].rank: must be 1 or greater", i));
        }
        if rule.stage == StageType::Unrecognized {
            errors.push(format!(
                "scoring.rules[{}].stage: must be CUP_FINAL or PLATE_FINAL",
                i
            ));
        }
        if !seen.insert((rule.division, rule.stage, rule.rank)) {
            errors.push(format!(
                "scoring.rules[{}]: duplicate rule for {} {} rank {}",
                i, rule.division, rule.stage, rule.rank
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

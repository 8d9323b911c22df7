use serde::{Deserialize, Serialize};

use crate::category::{extract_division, Division};
use crate::models::StageType;

/// Points awarded for finishing `rank` in a `stage` of a `division` category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringRule {
    pub division: Division,
    pub stage: StageType,
    pub rank: u32,
    pub points: u32,
}

const fn rule(division: Division, stage: StageType, rank: u32, points: u32) -> ScoringRule {
    ScoringRule {
        division,
        stage,
        rank,
        points,
    }
}

/// Canonical points table. Unclassified divisions score like LIGA.
pub const DEFAULT_RULES: [ScoringRule; 24] = [
    rule(Division::Copa, StageType::CupFinal, 1, 24),
    rule(Division::Copa, StageType::CupFinal, 2, 22),
    rule(Division::Copa, StageType::CupFinal, 3, 20),
    rule(Division::Copa, StageType::CupFinal, 4, 20),
    rule(Division::Copa, StageType::PlateFinal, 1, 18),
    rule(Division::Copa, StageType::PlateFinal, 2, 16),
    rule(Division::Copa, StageType::PlateFinal, 3, 14),
    rule(Division::Copa, StageType::PlateFinal, 4, 14),
    rule(Division::Liga, StageType::CupFinal, 1, 12),
    rule(Division::Liga, StageType::CupFinal, 2, 10),
    rule(Division::Liga, StageType::CupFinal, 3, 8),
    rule(Division::Liga, StageType::CupFinal, 4, 8),
    rule(Division::Liga, StageType::PlateFinal, 1, 6),
    rule(Division::Liga, StageType::PlateFinal, 2, 4),
    rule(Division::Liga, StageType::PlateFinal, 3, 2),
    rule(Division::Liga, StageType::PlateFinal, 4, 2),
    rule(Division::Other, StageType::CupFinal, 1, 12),
    rule(Division::Other, StageType::CupFinal, 2, 10),
    rule(Division::Other, StageType::CupFinal, 3, 8),
    rule(Division::Other, StageType::CupFinal, 4, 8),
    rule(Division::Other, StageType::PlateFinal, 1, 6),
    rule(Division::Other, StageType::PlateFinal, 2, 4),
    rule(Division::Other, StageType::PlateFinal, 3, 2),
    rule(Division::Other, StageType::PlateFinal, 4, 2),
];

/// Ordered rule list with first-match lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringTable {
    rules: Vec<ScoringRule>,
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
        }
    }
}

impl ScoringTable {
    pub fn new(rules: Vec<ScoringRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ScoringRule] {
        &self.rules
    }

    /// Points for a placement; combinations missing from the table score 0.
    pub fn points(&self, division: Division, stage: StageType, rank: u32) -> u32 {
        lookup(&self.rules, division, stage, rank)
    }

    /// Points for a placement in the named category, classifying its division first.
    pub fn points_for_category(&self, stage: StageType, rank: u32, category_name: &str) -> u32 {
        self.points(extract_division(category_name), stage, rank)
    }
}

fn lookup(rules: &[ScoringRule], division: Division, stage: StageType, rank: u32) -> u32 {
    rules
        .iter()
        .find(|r| r.division == division && r.stage == stage && r.rank == rank)
        .map(|r| r.points)
        .unwrap_or(0)
}

/// Points from the canonical table for a placement in `category_name`.
pub fn get_points(stage: StageType, rank: u32, category_name: &str) -> u32 {
    lookup(&DEFAULT_RULES, extract_division(category_name), stage, rank)
}

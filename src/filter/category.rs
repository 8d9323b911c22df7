use crate::category::{classify_category, Division, Gender};
use crate::models::{OverallTeamScore, ResultRow};

/// Age/gender/division selection applied to category names.
/// Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    pub age: Option<String>,
    pub gender: Option<Gender>,
    pub division: Option<Division>,
}

impl CategoryFilter {
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.gender.is_none() && self.division.is_none()
    }

    pub fn matches(&self, category_name: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        let info = classify_category(category_name);
        self.age
            .as_deref()
            .map_or(true, |age| age.eq_ignore_ascii_case(&info.age))
            && self.gender.map_or(true, |g| g == info.gender)
            && self.division.map_or(true, |d| d == info.division)
    }
}

/// Keep rows in matching categories. Used before scoring a single tournament.
pub fn filter_rows(rows: &[ResultRow], filter: &CategoryFilter) -> Vec<ResultRow> {
    rows.iter()
        .filter(|row| filter.matches(&row.category_name))
        .cloned()
        .collect()
}

/// Keep season scores whose recorded category matches. Input order is kept,
/// so a ranked list stays ranked.
pub fn filter_team_scores(
    scores: Vec<OverallTeamScore>,
    filter: &CategoryFilter,
) -> Vec<OverallTeamScore> {
    scores
        .into_iter()
        .filter(|score| filter.matches(&score.score.category_name))
        .collect()
}

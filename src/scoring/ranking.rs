use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::{ClubScore, OverallClubScore, OverallTeamScore, TeamScore};

/// Anything that appears in a standings list.
pub trait Ranked {
    fn points(&self) -> u32;
    fn name(&self) -> &str;
}

impl Ranked for TeamScore {
    fn points(&self) -> u32 {
        self.total_points
    }

    fn name(&self) -> &str {
        &self.team_name
    }
}

impl Ranked for ClubScore {
    fn points(&self) -> u32 {
        self.total_points
    }

    fn name(&self) -> &str {
        &self.club_name
    }
}

impl Ranked for OverallTeamScore {
    fn points(&self) -> u32 {
        self.score.total_points
    }

    fn name(&self) -> &str {
        &self.score.team_name
    }
}

impl Ranked for OverallClubScore {
    fn points(&self) -> u32 {
        self.score.total_points
    }

    fn name(&self) -> &str {
        &self.score.club_name
    }
}

/// Base letters only: decomposed, accents dropped, lowercased.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Name order used for ties, close to a locale collation: base letters
/// first ("Éire" sorts with "Eire"), then unaccented before accented, then
/// lowercase before uppercase. Not a full per-locale collation; punctuation
/// and digits compare by code point.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Sort by points descending, then name ascending. Stable, so entries equal
/// on both keep their input order.
pub fn sort_standings<T: Ranked>(entries: &mut [T]) {
    entries.sort_by(|a, b| {
        b.points()
            .cmp(&a.points())
            .then_with(|| compare_names(a.name(), b.name()))
    });
}

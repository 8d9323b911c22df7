use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Tournament phase a placement was earned in.
///
/// Any label other than `CUP_FINAL` / `PLATE_FINAL` is kept as
/// `Unrecognized` so the row still counts (for zero points) instead of
/// failing the whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StageType {
    CupFinal,
    PlateFinal,
    Unrecognized,
}

impl StageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageType::CupFinal => "CUP_FINAL",
            StageType::PlateFinal => "PLATE_FINAL",
            StageType::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Human label used in tables ("Cup Final", "Plate Final")
    pub fn display_name(&self) -> &'static str {
        match self {
            StageType::CupFinal => "Cup Final",
            StageType::PlateFinal => "Plate Final",
            StageType::Unrecognized => "Unknown stage",
        }
    }
}

impl From<String> for StageType {
    fn from(s: String) -> Self {
        match s.trim() {
            "CUP_FINAL" => StageType::CupFinal,
            "PLATE_FINAL" => StageType::PlateFinal,
            _ => StageType::Unrecognized,
        }
    }
}

impl From<StageType> for String {
    fn from(stage: StageType) -> Self {
        stage.as_str().to_string()
    }
}

impl fmt::Display for StageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference data for a team and the club that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: String,
    pub team_name: String,
    pub club_id: String,
    pub club_name: String,
}

/// A single match played on the way to a placement. Only carried through
/// for display; scoring never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub opponent: String,
    #[serde(default)]
    pub opponent_id: String,
    pub home_goals: u32,
    pub away_goals: u32,
    #[serde(default)]
    pub is_home: bool,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub round_name: String,
    #[serde(default)]
    pub penalties: bool,
}

/// One placement record as supplied by the data loader.
///
/// `stage_type` and `rank` are optional because source data is not
/// validated upfront: rows missing either are skipped at scoring time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub category_id: String,
    pub category_name: String,
    #[serde(default, deserialize_with = "deserialize_stage")]
    pub stage_type: Option<StageType>,
    #[serde(default, deserialize_with = "deserialize_rank")]
    pub rank: Option<u32>,
    pub team: Team,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<MatchScore>>,
}

/// Empty stage labels count as missing, same as an absent key or null.
fn deserialize_stage<'de, D>(deserializer: D) -> Result<Option<StageType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()).map(StageType::from))
}

/// Only positive whole numbers are ranks. Negative, fractional, oversized or
/// non-numeric values read as missing so the row is skipped, not the file.
fn deserialize_rank<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(raw
        .and_then(|v| v.as_u64())
        .and_then(|n| u32::try_from(n).ok()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResult {
    pub tournament_id: String,
    #[serde(alias = "name")]
    pub tournament_name: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub results: Vec<ResultRow>,
}

/// Points earned by one team in one category during a single scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScore {
    pub team_id: String,
    pub team_name: String,
    pub club_id: String,
    pub club_name: String,
    pub category_name: String,
    pub total_points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubScore {
    pub club_id: String,
    pub club_name: String,
    pub total_points: u32,
}

/// Season-wide team total plus the tournaments it was drawn from
/// (first-seen order, no duplicates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallTeamScore {
    #[serde(flatten)]
    pub score: TeamScore,
    pub tournaments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallClubScore {
    #[serde(flatten)]
    pub score: ClubScore,
    pub tournaments: Vec<String>,
}

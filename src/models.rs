use std::fmt;

use serde::de::IgnoredAny;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestType {
    Cf,
    Ioi,
    Icpc,
    #[serde(other)]
    Other,
}

impl fmt::Display for ContestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContestType::Cf => "CF",
            ContestType::Ioi => "IOI",
            ContestType::Icpc => "ICPC",
            ContestType::Other => "OTHER",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestPhase {
    Before,
    Coding,
    PendingSystemTest,
    SystemTest,
    Finished,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantType {
    Contestant,
    Practice,
    Virtual,
    Manager,
    OutOfCompetition,
    #[serde(other)]
    Other,
}

/// One entry of the archive's contest catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestMetadata {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub contest_type: ContestType,
    pub phase: ContestPhase,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
}

impl ContestMetadata {
    /// Leading year of a `YYYY-YYYY` season label.
    pub fn season_start_year(&self) -> Option<i32> {
        self.season
            .as_deref()
            .and_then(|season| season.get(..4))
            .and_then(|year| year.parse().ok())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub participant_type: ParticipantType,
    #[serde(default)]
    pub ghost: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    pub party: Party,
    pub points: f64,
}

impl TeamResult {
    /// Ghost rows replay historical submissions as virtual participants.
    pub fn is_ghost(&self) -> bool {
        self.party.participant_type == ParticipantType::Virtual && self.party.ghost
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Standings {
    /// Only the number of problems matters.
    pub problems: Vec<IgnoredAny>,
    pub rows: Vec<TeamResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContestScore {
    pub contest_id: i64,
    pub coefficient: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedContest {
    pub rank: usize,
    pub contest_id: i64,
    pub name: String,
    pub coefficient: f64,
}

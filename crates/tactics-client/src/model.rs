//! Response shapes returned by the analysis service.
//!
//! The service answers `POST /analyze` with a JSON object keyed by game id:
//!
//! ```json
//! {"game_1": {"executed": [{"move_number": 5, "tactic": "pin"}], "missed": [], "allowed": []}}
//! ```

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TacticKind {
    Pin,
    Skewer,
}

impl TacticKind {
    pub fn label(self) -> &'static str {
        match self {
            TacticKind::Pin => "Pin",
            TacticKind::Skewer => "Skewer",
        }
    }
}

/// How a tactic relates to the player who moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Played on the board
    Executed,
    /// Available (engine best move) but not played
    Missed,
    /// Handed to the opponent by the move
    Allowed,
}

impl Outcome {
    /// Display order used for summary counters and per-game columns.
    pub const ALL: [Outcome; 3] = [Outcome::Executed, Outcome::Missed, Outcome::Allowed];

    /// Wire key of this outcome in a game record.
    pub fn key(self) -> &'static str {
        match self {
            Outcome::Executed => "executed",
            Outcome::Missed => "missed",
            Outcome::Allowed => "allowed",
        }
    }

    /// Inverse of `key`; `None` for keys the client does not know.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "executed" => Some(Outcome::Executed),
            "missed" => Some(Outcome::Missed),
            "allowed" => Some(Outcome::Allowed),
            _ => None,
        }
    }

    /// Caption for the summary counter.
    pub fn heading(self) -> &'static str {
        match self {
            Outcome::Executed => "Executed Tactics",
            Outcome::Missed => "Missed Opportunities",
            Outcome::Allowed => "Allowed Tactics",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TacticEvent {
    #[serde(deserialize_with = "deserialize_move_number")]
    pub move_number: u32,
    pub tactic: TacticKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl TacticEvent {
    pub fn new(move_number: u32, tactic: TacticKind) -> Self {
        Self {
            move_number,
            tactic,
            piece: None,
            target: None,
        }
    }

    pub fn with_pieces(mut self, piece: impl Into<String>, target: impl Into<String>) -> Self {
        self.piece = Some(piece.into());
        self.target = Some(target.into());
        self
    }
}

fn deserialize_move_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = u32::deserialize(deserializer)?;
    if n == 0 {
        return Err(de::Error::invalid_value(
            de::Unexpected::Unsigned(0),
            &"a move number of at least 1",
        ));
    }
    Ok(n)
}

/// Tactics found in one game, bucketed by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTactics {
    pub executed: Vec<TacticEvent>,
    pub missed: Vec<TacticEvent>,
    pub allowed: Vec<TacticEvent>,
}

impl GameTactics {
    pub fn events(&self, outcome: Outcome) -> &[TacticEvent] {
        match outcome {
            Outcome::Executed => &self.executed,
            Outcome::Missed => &self.missed,
            Outcome::Allowed => &self.allowed,
        }
    }
}

/// Per-game tactics in the order the service returned them.
///
/// Stored as a list rather than a map: game ids are neither sorted nor
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    games: Vec<(String, GameTactics)>,
}

impl AnalysisResult {
    /// Decode a response body. Anything that is not the expected shape is a
    /// `MalformedResponse`.
    pub fn from_json(body: &[u8]) -> Result<Self, AnalyzeError> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// First game stored under `game_id`.
    pub fn get(&self, game_id: &str) -> Option<&GameTactics> {
        self.games
            .iter()
            .find(|(id, _)| id == game_id)
            .map(|(_, tactics)| tactics)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GameTactics)> {
        self.games.iter().map(|(id, tactics)| (id.as_str(), tactics))
    }
}

impl FromIterator<(String, GameTactics)> for AnalysisResult {
    fn from_iter<I: IntoIterator<Item = (String, GameTactics)>>(iter: I) -> Self {
        Self {
            games: iter.into_iter().collect(),
        }
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.games.iter().map(|(id, tactics)| (id, tactics)))
    }
}

impl<'de> Deserialize<'de> for AnalysisResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GamesVisitor;

        impl<'de> Visitor<'de> for GamesVisitor {
            type Value = AnalysisResult;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping game ids to tactics")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut games = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, tactics)) = map.next_entry::<String, GameTactics>()? {
                    games.push((id, tactics));
                }
                Ok(AnalysisResult { games })
            }
        }

        deserializer.deserialize_map(GamesVisitor)
    }
}

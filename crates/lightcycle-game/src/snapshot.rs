use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::wall::Wall;
use crate::{PLAYER_COUNT, Point};

/// Serializable copy of an arena's round state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub walls: Vec<Wall>,
    pub players: Vec<Player>,
    pub anchors: Vec<Point>,
    pub ticks: i64,
    pub round: u32,
    pub scores: [u32; PLAYER_COUNT],
}

#[derive(Debug)]
pub enum SnapshotError {
    Encode(String),
    Decode(String),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(e) => write!(f, "snapshot encode error: {e}"),
            Self::Decode(e) => write!(f, "snapshot decode error: {e}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl ArenaSnapshot {
    /// MessagePack encoding, stable for identical states.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        rmp_serde::to_vec(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        rmp_serde::from_slice(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))
    }
}

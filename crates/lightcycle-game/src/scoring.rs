use serde::{Deserialize, Serialize};

use crate::{PLAYER_COUNT, PlayerIndex};

/// Points awarded to the survivor when the other cycle crashes.
pub const CRASH_POINTS: u32 = 1;

/// Cumulative score per player. Survives round resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    scores: [u32; PLAYER_COUNT],
}

impl Scoreboard {
    pub fn as_array(&self) -> [u32; PLAYER_COUNT] {
        self.scores
    }

    /// Credit the opponent of `loser`. Returns the scoring player and their new total.
    pub fn award_opponent_of(&mut self, loser: PlayerIndex) -> (PlayerIndex, u32) {
        let winner = opponent_of(loser);
        self.scores[winner] += CRASH_POINTS;
        (winner, self.scores[winner])
    }
}

pub fn opponent_of(player: PlayerIndex) -> PlayerIndex {
    (player + 1) % PLAYER_COUNT
}

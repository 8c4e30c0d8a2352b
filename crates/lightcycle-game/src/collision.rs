use crate::PlayerIndex;
use crate::player::Player;
use crate::wall::{Wall, WallId};

/// A cycle touched a wall it is not exempt from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crash {
    pub loser: PlayerIndex,
    pub wall: WallId,
}

/// Every cycle that touches a wall it is not exempt from, in player order.
///
/// A cycle is reported once, against the first such wall in list order.
/// Exemptions are per cycle: a wall that is exempt for its owner still
/// crashes the opponent, so both cycles can crash in the same tick.
pub fn find_crashes(walls: &[Wall], players: &[Player]) -> Vec<Crash> {
    players
        .iter()
        .enumerate()
        .filter_map(|(loser, player)| {
            walls
                .iter()
                .find(|wall| {
                    wall.check_collision(player.position()) && !player.is_exempt(wall.id())
                })
                .map(|wall| Crash {
                    loser,
                    wall: wall.id(),
                })
        })
        .collect()
}

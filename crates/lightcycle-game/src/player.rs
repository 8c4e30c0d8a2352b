use serde::{Deserialize, Serialize};

use crate::wall::WallId;
use crate::{Color, Heading, Point};

/// Distance a cycle travels per tick.
pub const MOVE_DISTANCE: i32 = 5;

/// Turn tick given to fresh cycles so the first turn is never rate limited.
pub const INITIAL_LAST_TURN_TICK: i64 = -3;

/// Exempt slot for the temporary wall drawn this tick.
pub const TEMP_SLOT: usize = 0;
/// Exempt slot for the most recently committed wall.
pub const COMMITTED_SLOT: usize = 1;

/// A light cycle.
///
/// Turn legality (reversal and rate limiting) is enforced by the arena;
/// `set_heading` here is unconditional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    position: Point,
    heading: Heading,
    color: Color,
    last_turn_tick: i64,
    /// Walls this cycle cannot crash into: `[temporary, committed]`.
    exempt_walls: [Option<WallId>; 2],
}

impl Player {
    pub fn new(position: Point, color: Color, heading: Heading) -> Self {
        Self {
            position,
            heading,
            color,
            last_turn_tick: INITIAL_LAST_TURN_TICK,
            exempt_walls: [None, None],
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn last_turn_tick(&self) -> i64 {
        self.last_turn_tick
    }

    pub fn exempt_walls(&self) -> [Option<WallId>; 2] {
        self.exempt_walls
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Advance one step along the current heading. No bounds checks; border
    /// walls stop the cycle.
    pub fn advance(&mut self) {
        let (dx, dy) = self.heading.delta();
        self.position.x += dx * MOVE_DISTANCE;
        self.position.y += dy * MOVE_DISTANCE;
    }

    pub(crate) fn record_turn(&mut self, tick: i64) {
        self.last_turn_tick = tick;
    }

    pub(crate) fn set_exempt(&mut self, slot: usize, wall: Option<WallId>) {
        self.exempt_walls[slot] = wall;
    }

    /// Whether `wall` is one of this cycle's own just-drawn segments.
    pub fn is_exempt(&self, wall: WallId) -> bool {
        self.exempt_walls.contains(&Some(wall))
    }
}

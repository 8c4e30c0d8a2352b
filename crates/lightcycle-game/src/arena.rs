use serde::{Deserialize, Serialize};

use crate::collision;
use crate::player::{COMMITTED_SLOT, Player, TEMP_SLOT};
use crate::renderer::Renderer;
use crate::scoring::Scoreboard;
use crate::snapshot::ArenaSnapshot;
use crate::wall::{Wall, WallId};
use crate::{Color, Heading, PLAYER_COUNT, PlayerIndex, Point};

/// Logical canvas width.
pub const ARENA_WIDTH: i32 = 1280;
/// Logical canvas height.
pub const ARENA_HEIGHT: i32 = 720;
/// The bottom border sits above the canvas edge, leaving a visual margin.
pub const BOTTOM_BORDER_Y: i32 = 707;
/// Ticks that must pass between two accepted turns of the same cycle.
pub const TURN_COOLDOWN_TICKS: i64 = 2;

/// Where and how a cycle starts each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub position: Point,
    pub heading: Heading,
    pub color: Color,
}

pub const SPAWN_POINTS: [SpawnPoint; PLAYER_COUNT] = [
    SpawnPoint {
        position: Point::new(100, 350),
        heading: Heading::East,
        color: Color::Blue,
    },
    SpawnPoint {
        position: Point::new(1180, 350),
        heading: Heading::West,
        color: Color::Red,
    },
];

/// Why a turn request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRejected {
    UnknownPlayer(PlayerIndex),
    /// The request repeats or reverses the current heading.
    SameAxis { current: Heading, requested: Heading },
    /// The previous turn was too recent.
    TooSoon { ticks_since_last: i64 },
}

impl std::fmt::Display for TurnRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPlayer(index) => write!(f, "no player with index {index}"),
            Self::SameAxis { current, requested } => {
                write!(f, "cannot turn {requested:?} while heading {current:?}")
            },
            Self::TooSoon { ticks_since_last } => write!(
                f,
                "turned {ticks_since_last} tick(s) ago, need {TURN_COOLDOWN_TICKS}"
            ),
        }
    }
}

impl std::error::Error for TurnRejected {}

/// Events emitted by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaEvent {
    Crashed { loser: PlayerIndex, wall: WallId },
    ScoreUpdate { player: PlayerIndex, score: u32 },
    /// A new round started; `round` is its 1-based number.
    RoundReset { round: u32 },
}

/// Round state: walls, cycles, turn anchors and the cumulative score.
///
/// The arena is the only mutator of its walls and cycles. Renderers get
/// read-only slices during [`Arena::tick`].
#[derive(Debug, Clone)]
pub struct Arena {
    walls: Vec<Wall>,
    players: [Player; PLAYER_COUNT],
    /// Corner where each cycle last turned (or spawned).
    anchors: [Point; PLAYER_COUNT],
    ticks: i64,
    round: u32,
    scores: Scoreboard,
    next_wall_id: u64,
    playing: bool,
}

impl Arena {
    pub fn new() -> Self {
        let mut arena = Self {
            walls: Vec::new(),
            players: SPAWN_POINTS.map(|s| Player::new(s.position, s.color, s.heading)),
            anchors: SPAWN_POINTS.map(|s| s.position),
            ticks: 0,
            round: 1,
            scores: Scoreboard::default(),
            next_wall_id: 0,
            playing: true,
        };
        arena.build_border_walls();
        arena
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: PlayerIndex) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn anchor(&self, index: PlayerIndex) -> Option<Point> {
        self.anchors.get(index).copied()
    }

    pub fn wall(&self, id: WallId) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id() == id)
    }

    /// Completed ticks since the arena was created. Not reset between rounds.
    pub fn ticks(&self) -> i64 {
        self.ticks
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Try to turn `index` toward `heading`.
    ///
    /// On success the trail since the last turn is committed as a permanent
    /// wall and its id returned. `Ok(None)` means the turn was taken where the
    /// previous one was (or at spawn before moving), so there was no segment
    /// to commit.
    pub fn request_turn(
        &mut self,
        index: PlayerIndex,
        heading: Heading,
    ) -> Result<Option<WallId>, TurnRejected> {
        let player = self
            .players
            .get(index)
            .ok_or(TurnRejected::UnknownPlayer(index))?;

        if player.heading().shares_axis(heading) {
            return Err(TurnRejected::SameAxis {
                current: player.heading(),
                requested: heading,
            });
        }
        if player.last_turn_tick() > self.ticks - TURN_COOLDOWN_TICKS {
            return Err(TurnRejected::TooSoon {
                ticks_since_last: self.ticks - player.last_turn_tick(),
            });
        }

        let committed = self.commit_wall(index);
        let player = &mut self.players[index];
        player.set_heading(heading);
        player.record_turn(self.ticks);
        tracing::debug!(
            player = index,
            ?heading,
            tick = self.ticks,
            wall = ?committed,
            "turn accepted"
        );
        Ok(committed)
    }

    /// Advance the round by one tick.
    ///
    /// Cycles move, temporary trail walls are drawn, the renderer sees the
    /// frame, crashes are resolved, and temporary walls are torn down. Each
    /// crashed cycle scores its opponent, so a mutual crash scores both, and
    /// the round then resets once.
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Vec<ArenaEvent> {
        let mut events = Vec::new();

        for player in &mut self.players {
            player.advance();
        }

        let temp_walls = self.create_temp_walls();
        renderer.draw(&self.players, &self.walls);

        let crashes = collision::find_crashes(&self.walls, &self.players);
        for crash in &crashes {
            self.playing = false;
            let (winner, score) = self.scores.award_opponent_of(crash.loser);
            tracing::info!(
                loser = crash.loser,
                wall = crash.wall.0,
                winner,
                score,
                round = self.round,
                "cycle crashed"
            );
            events.push(ArenaEvent::Crashed {
                loser: crash.loser,
                wall: crash.wall,
            });
            events.push(ArenaEvent::ScoreUpdate {
                player: winner,
                score,
            });
        }
        if !crashes.is_empty() {
            let [blue, red] = self.scores.as_array();
            renderer.set_score(blue, red);
        }

        self.delete_temp_walls(&temp_walls);
        self.ticks += 1;

        if !self.playing {
            self.reset_round();
            events.push(ArenaEvent::RoundReset { round: self.round });
        }

        tracing::trace!(tick = self.ticks, walls = self.walls.len(), "tick complete");
        events
    }

    /// Capture the full round state.
    pub fn snapshot(&self) -> ArenaSnapshot {
        ArenaSnapshot {
            walls: self.walls.clone(),
            players: self.players.to_vec(),
            anchors: self.anchors.to_vec(),
            ticks: self.ticks,
            round: self.round,
            scores: self.scores.as_array(),
        }
    }

    fn alloc_wall_id(&mut self) -> WallId {
        let id = WallId(self.next_wall_id);
        self.next_wall_id += 1;
        id
    }

    fn build_border_walls(&mut self) {
        let top = Wall::horizontal(self.alloc_wall_id(), 0, ARENA_WIDTH, 0, Color::Black);
        let bottom = Wall::horizontal(
            self.alloc_wall_id(),
            0,
            ARENA_WIDTH,
            BOTTOM_BORDER_Y,
            Color::Black,
        );
        let left = Wall::vertical(self.alloc_wall_id(), 0, 0, ARENA_HEIGHT, Color::Black);
        let right = Wall::vertical(
            self.alloc_wall_id(),
            ARENA_WIDTH,
            0,
            ARENA_HEIGHT,
            Color::Black,
        );
        self.walls.extend([top, bottom, left, right]);
    }

    /// Trail segment from the cycle's anchor to where it is now.
    fn trail_segment(&mut self, index: PlayerIndex) -> Option<Wall> {
        let id = self.alloc_wall_id();
        let player = &self.players[index];
        Wall::between(id, self.anchors[index], player.position(), player.color())
    }

    fn commit_wall(&mut self, index: PlayerIndex) -> Option<WallId> {
        let wall = self.trail_segment(index)?;
        let id = wall.id();
        self.walls.push(wall);
        self.players[index].set_exempt(COMMITTED_SLOT, Some(id));
        self.anchors[index] = self.players[index].position();
        Some(id)
    }

    fn create_temp_walls(&mut self) -> Vec<WallId> {
        let mut created = Vec::with_capacity(PLAYER_COUNT);
        for index in 0..PLAYER_COUNT {
            let wall = self.trail_segment(index);
            let id = wall.as_ref().map(Wall::id);
            self.players[index].set_exempt(TEMP_SLOT, id);
            if let Some(wall) = wall {
                created.push(wall.id());
                self.walls.push(wall);
            }
        }
        created
    }

    fn delete_temp_walls(&mut self, temp_walls: &[WallId]) {
        self.walls.retain(|w| !temp_walls.contains(&w.id()));
        for player in &mut self.players {
            player.set_exempt(TEMP_SLOT, None);
        }
    }

    fn reset_round(&mut self) {
        self.walls.clear();
        self.players = SPAWN_POINTS.map(|s| Player::new(s.position, s.color, s.heading));
        self.anchors = SPAWN_POINTS.map(|s| s.position);
        self.build_border_walls();
        self.round += 1;
        self.playing = true;
        tracing::debug!(round = self.round, "round reset");
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

pub mod arena;
pub mod collision;
pub mod config;
pub mod input;
pub mod player;
pub mod renderer;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod time;
pub mod wall;

use serde::{Deserialize, Serialize};

pub use arena::{Arena, ArenaEvent, TurnRejected};
pub use config::LightcycleConfig;
pub use input::{InputMapper, TurnRequest};
pub use player::Player;
pub use renderer::Renderer;
pub use session::{Game, GamePhase};
pub use wall::{Wall, WallId};

/// Index of a player in the arena (0 = blue, 1 = red).
pub type PlayerIndex = usize;

/// Number of players in every round.
pub const PLAYER_COUNT: usize = 2;

/// Integer position on the arena canvas. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Cardinal heading of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// 0 degrees.
    East,
    /// 90 degrees.
    North,
    /// 180 degrees.
    West,
    /// 270 degrees.
    South,
}

impl Heading {
    pub const ALL: [Heading; 4] = [
        Heading::East,
        Heading::North,
        Heading::West,
        Heading::South,
    ];

    pub fn degrees(self) -> u16 {
        match self {
            Heading::East => 0,
            Heading::North => 90,
            Heading::West => 180,
            Heading::South => 270,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Heading::East => Heading::West,
            Heading::North => Heading::South,
            Heading::West => Heading::East,
            Heading::South => Heading::North,
        }
    }

    /// Unit step on screen axes.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::East => (1, 0),
            Heading::North => (0, -1),
            Heading::West => (-1, 0),
            Heading::South => (0, 1),
        }
    }

    /// True when `other` is this heading or its reversal.
    pub fn shares_axis(self, other: Heading) -> bool {
        other == self || other == self.opposite()
    }
}

/// Color tag carried by walls and cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Blue,
    Red,
}

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Red => "red",
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::arena::{Arena, ArenaEvent};
    use crate::player::Player;
    use crate::renderer::Renderer;
    use crate::wall::Wall;

    /// One `draw` call captured by [`RecordingRenderer`].
    #[derive(Debug, Clone)]
    pub struct Frame {
        pub players: Vec<Player>,
        pub walls: Vec<Wall>,
    }

    /// Renderer that keeps every call for later inspection.
    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub frames: Vec<Frame>,
        pub scores: Vec<(u32, u32)>,
        pub intro_shown: usize,
        pub playfield_shown: usize,
    }

    impl RecordingRenderer {
        pub fn last_frame(&self) -> Option<&Frame> {
            self.frames.last()
        }
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, players: &[Player], walls: &[Wall]) {
            self.frames.push(Frame {
                players: players.to_vec(),
                walls: walls.to_vec(),
            });
        }

        fn set_score(&mut self, blue: u32, red: u32) {
            self.scores.push((blue, red));
        }

        fn show_intro(&mut self) {
            self.intro_shown += 1;
        }

        fn show_playfield(&mut self) {
            self.playfield_shown += 1;
        }
    }

    /// Run `n` ticks with a throwaway renderer, returning all accumulated events.
    pub fn run_ticks(arena: &mut Arena, n: usize) -> Vec<ArenaEvent> {
        let mut renderer = crate::renderer::NullRenderer;
        let mut events = Vec::new();
        for _ in 0..n {
            events.extend(arena.tick(&mut renderer));
        }
        events
    }
}

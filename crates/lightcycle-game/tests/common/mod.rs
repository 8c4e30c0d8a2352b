#![allow(dead_code)]

use lightcycle_game::renderer::NullRenderer;
use lightcycle_game::{Arena, ArenaEvent, Heading, PlayerIndex};

/// One scripted input: a turn request or a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Turn(PlayerIndex, Heading),
    Tick,
}

/// Replay `script` against a fresh arena, dropping rejected turns.
pub fn replay(script: &[Step]) -> (Arena, Vec<ArenaEvent>) {
    let mut arena = Arena::new();
    let mut renderer = NullRenderer;
    let mut events = Vec::new();
    for step in script {
        match *step {
            Step::Turn(player, heading) => {
                let _ = arena.request_turn(player, heading);
            },
            Step::Tick => events.extend(arena.tick(&mut renderer)),
        }
    }
    (arena, events)
}

pub fn ticks(n: usize) -> impl Iterator<Item = Step> {
    std::iter::repeat_n(Step::Tick, n)
}

use crate::arena::{Arena, ArenaEvent};
use crate::input::InputMapper;
use crate::renderer::Renderer;

/// Game-level phase. `Intro -> Playing` is one-way; rounds then loop
/// inside `Playing` until the host shuts down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Intro,
    Playing,
}

/// A game session: the arena, its key bindings and the renderer it feeds.
pub struct Game<R: Renderer> {
    arena: Arena,
    input: InputMapper,
    renderer: R,
    phase: GamePhase,
}

impl<R: Renderer> Game<R> {
    /// Create a session on the intro screen.
    pub fn new(mut renderer: R) -> Self {
        renderer.show_intro();
        Self {
            arena: Arena::new(),
            input: InputMapper::new(),
            renderer,
            phase: GamePhase::Intro,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Leave the intro and show the playfield. Repeated calls do nothing.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::Playing;
        self.renderer.show_playfield();
        let [blue, red] = self.arena.scores().as_array();
        self.renderer.set_score(blue, red);
        tracing::info!("game started");
    }

    /// Handle a key-down event. Returns true if it produced an accepted turn.
    ///
    /// Keys are only live while playing; unbound keys and rejected turns are
    /// dropped.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let Some(request) = self.input.map(key) else {
            tracing::trace!(key, "unbound key");
            return false;
        };
        match self.arena.request_turn(request.player, request.heading) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(key, player = request.player, reason = %e, "turn rejected");
                false
            },
        }
    }

    /// Run one arena tick. Does nothing on the intro screen.
    pub fn tick(&mut self) -> Vec<ArenaEvent> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }
        self.arena.tick(&mut self.renderer)
    }
}

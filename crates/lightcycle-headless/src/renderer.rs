use lightcycle_game::{Player, Renderer, Wall};

/// Renderer that reports through `tracing` instead of drawing.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, players: &[Player], walls: &[Wall]) {
        self.frames += 1;
        for player in players {
            let pos = player.position();
            tracing::trace!(
                frame = self.frames,
                color = player.color().name(),
                x = pos.x,
                y = pos.y,
                heading = player.heading().degrees(),
                "cycle"
            );
        }
        tracing::trace!(frame = self.frames, walls = walls.len(), "frame drawn");
    }

    fn set_score(&mut self, blue: u32, red: u32) {
        tracing::info!(blue, red, "score");
    }

    fn show_intro(&mut self) {
        tracing::info!("Light cycles: type `start` to play, w/a/s/d and Up/Left/Down/Right to steer");
    }

    fn show_playfield(&mut self) {
        tracing::info!("playfield shown");
    }
}

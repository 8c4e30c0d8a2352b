use crate::player::Player;
use crate::wall::Wall;

/// Presentation boundary. The arena and session push state through this
/// trait; implementations only read what they are given.
pub trait Renderer {
    /// Draw the current frame: both cycles and every wall, temporary trail
    /// segments included.
    fn draw(&mut self, players: &[Player], walls: &[Wall]);

    /// Update the displayed score.
    fn set_score(&mut self, blue: u32, red: u32);

    /// Show the intro screen with its start action.
    fn show_intro(&mut self);

    /// Swap the intro screen for the playfield.
    fn show_playfield(&mut self);
}

/// Renderer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _players: &[Player], _walls: &[Wall]) {}

    fn set_score(&mut self, _blue: u32, _red: u32) {}

    fn show_intro(&mut self) {}

    fn show_playfield(&mut self) {}
}

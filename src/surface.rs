//! What the game needs from its host: somewhere to paint and something that
//! makes noise.

use anyhow::Result;

use crate::palette::Rgb;

/// Width and height in surface units.
pub type Viewport = (u16, u16);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Rect { x, y, width, height }
    }
}

pub trait Surface {
    fn viewport(&self) -> Viewport;
    fn resize(&mut self, viewport: Viewport);

    fn clear(&mut self) -> Result<()>;
    fn fill_background(&mut self) -> Result<()>;
    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> Result<()>;
    fn stroke_rect(&mut self, rect: Rect, color: Rgb) -> Result<()>;
    fn text(&mut self, x: u16, y: u16, text: &str, color: Rgb) -> Result<()>;

    /// Pushes everything drawn since the last call to the screen.
    fn present(&mut self) -> Result<()>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cue {
    Eat,
    GameOver,
    BackgroundLoop,
}

/// Fire-and-forget sound triggers.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

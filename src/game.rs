use anyhow::Result;
use rand::rngs::StdRng;

use crate::config::{Config, HEADING};
use crate::layout::{CellMetrics, Layout};
use crate::palette::{FRAME_COLOR, HEADING_COLOR, SCORE_COLOR};
use crate::session::{Feeding, Session};
use crate::snake::{Direction, MoveResult};
use crate::surface::{Cue, CuePlayer, Surface, Viewport};

/// What a single frame ended with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameEvent {
    Continued,
    Ate,
    /// The snake bit itself and a new session began.
    Crashed,
    /// The snake filled the board and a new session began.
    Filled,
}

pub struct SnakeGame<S, A> {
    session: Session,
    surface: S,
    audio: A,
    metrics: CellMetrics,
    layout: Layout,
}

impl<S: Surface, A: CuePlayer> SnakeGame<S, A> {
    pub fn new(config: Config, rng: StdRng, surface: S, audio: A, metrics: CellMetrics) -> Self {
        let session = Session::new(config, rng);
        let layout = Layout::new(surface.viewport(), config.dimension(), metrics);

        SnakeGame { session, surface, audio, metrics, layout }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn start(&mut self) {
        let (rows, cols) = self.session.grid().dimensions();
        tracing::info!(rows, cols, "game started");
        self.audio.play(Cue::BackgroundLoop);
    }

    pub fn steer(&mut self, direction: Direction) {
        if self.session.snake_mut().set_direction(direction) {
            tracing::trace!(direction = ?self.session.snake().get_direction(), "direction changed");
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.surface.resize(viewport);
        self.layout = Layout::new(viewport, self.session.grid().dimensions().0, self.metrics);
        tracing::debug!(?viewport, "layout recomputed");
    }

    /// Runs one frame. The grid is drawn before this frame's overlays are
    /// painted, so what reaches the screen is always one frame behind.
    pub fn frame(&mut self) -> Result<FrameEvent> {
        self.surface.clear()?;
        self.surface.fill_background()?;
        self.draw_heading()?;
        self.draw_grid()?;
        self.session.grid_mut().reset_colors();
        self.draw_score()?;

        if let MoveResult::Moved { new_head, old_head, old_tail } = self.session.advance() {
            tracing::trace!(?old_head, ?new_head, ?old_tail, "snake moved");
        }
        self.session.paint_snake();

        if self.session.snake().is_colliding() {
            self.audio.play(Cue::GameOver);
            self.restart("self collision");
            self.surface.present()?;
            return Ok(FrameEvent::Crashed);
        }

        self.session.paint_food();
        let event = match self.session.feed() {
            Feeding::Nothing => FrameEvent::Continued,
            Feeding::Ate => {
                self.audio.play(Cue::Eat);
                FrameEvent::Ate
            }
            Feeding::BoardFilled => {
                self.audio.play(Cue::Eat);
                self.restart("board filled");
                FrameEvent::Filled
            }
        };
        self.session.update_score();

        self.surface.present()?;
        Ok(event)
    }

    fn restart(&mut self, reason: &str) {
        tracing::info!(reason, score = self.session.score().value(), length = self.session.snake().len(), "session over");
        self.session.reset();
    }

    fn draw_heading(&mut self) -> Result<()> {
        let (x, y) = self.layout.heading_anchor(HEADING);
        self.surface.text(x, y, HEADING, HEADING_COLOR)
    }

    fn draw_grid(&mut self) -> Result<()> {
        for cell in self.session.grid().cells() {
            self.surface.fill_rect(self.layout.cell_rect(cell.pos()), cell.color())?;
        }
        self.surface.stroke_rect(self.layout.frame_rect(), FRAME_COLOR)
    }

    fn draw_score(&mut self) -> Result<()> {
        self.surface.stroke_rect(self.layout.score_rect(), FRAME_COLOR)?;
        let (x, y) = self.layout.score_anchor();
        self.surface.text(x, y, &self.session.score().display(), SCORE_COLOR)
    }
}

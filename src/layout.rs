use crate::surface::{Rect, Viewport};
use crate::{Coords, GridInt};

/// Size of a single cell on the surface and the spacing between cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellMetrics {
    pub width: u16,
    pub height: u16,
    pub gap: u16,
}

const FRAME_PADDING: u16 = 1;
const SCORE_BOX_HEIGHT: u16 = 3;
const SCORE_INSET: u16 = 2;
const HEADING_ROW: u16 = 0;

/// Screen geometry derived from the viewport. Rebuilt on every resize, never
/// holds game state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    origin: (u16, u16),
    dimension: GridInt,
    metrics: CellMetrics,
    viewport: Viewport,
}

impl Layout {
    pub fn new(viewport: Viewport, dimension: GridInt, metrics: CellMetrics) -> Self {
        let (board_w, board_h) = board_extent(dimension, metrics);
        let origin = (
            viewport.0.saturating_sub(board_w) / 2,
            viewport.1.saturating_sub(board_h) / 2,
        );

        Layout { origin, dimension, metrics, viewport }
    }

    pub fn cell_rect(&self, (row, col): Coords) -> Rect {
        let m = self.metrics;
        Rect::new(
            self.origin.0.saturating_add(col.saturating_mul(m.width + m.gap)),
            self.origin.1.saturating_add(row.saturating_mul(m.height + m.gap)),
            m.width,
            m.height,
        )
    }

    pub fn frame_rect(&self) -> Rect {
        let (board_w, board_h) = board_extent(self.dimension, self.metrics);
        Rect::new(
            self.origin.0.saturating_sub(FRAME_PADDING),
            self.origin.1.saturating_sub(FRAME_PADDING),
            board_w + 2 * FRAME_PADDING,
            board_h + 2 * FRAME_PADDING,
        )
    }

    /// Box sitting directly on top of the board frame.
    pub fn score_rect(&self) -> Rect {
        let frame = self.frame_rect();
        Rect::new(frame.x, frame.y.saturating_sub(SCORE_BOX_HEIGHT), frame.width, SCORE_BOX_HEIGHT)
    }

    pub fn score_anchor(&self) -> (u16, u16) {
        let rect = self.score_rect();
        (rect.x + SCORE_INSET, rect.y + SCORE_BOX_HEIGHT / 2)
    }

    pub fn heading_anchor(&self, text: &str) -> (u16, u16) {
        let len = text.chars().count() as u16;
        (self.viewport.0.saturating_sub(len) / 2, HEADING_ROW)
    }
}

fn board_extent(dimension: GridInt, m: CellMetrics) -> (u16, u16) {
    (
        dimension.saturating_mul(m.width + m.gap),
        dimension.saturating_mul(m.height + m.gap),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERM: CellMetrics = CellMetrics { width: 2, height: 1, gap: 0 };

    #[test]
    fn centers_the_board() {
        let layout = Layout::new((80, 40), 25, TERM);
        assert_eq!(layout.cell_rect((0, 0)), Rect::new(15, 7, 2, 1));
        assert_eq!(layout.cell_rect((24, 24)), Rect::new(63, 31, 2, 1));
        assert_eq!(layout.frame_rect(), Rect::new(14, 6, 52, 27));
    }

    #[test]
    fn gaps_push_cells_apart() {
        let layout = Layout::new((100, 100), 2, CellMetrics { width: 20, height: 20, gap: 1 });
        assert_eq!(layout.cell_rect((0, 0)), Rect::new(29, 29, 20, 20));
        assert_eq!(layout.cell_rect((1, 1)), Rect::new(50, 50, 20, 20));
    }

    #[test]
    fn score_box_sits_above_the_frame() {
        let layout = Layout::new((80, 40), 25, TERM);
        assert_eq!(layout.score_rect(), Rect::new(14, 3, 52, 3));
        assert_eq!(layout.score_anchor(), (16, 4));
    }

    #[test]
    fn heading_is_centered() {
        let layout = Layout::new((80, 40), 25, TERM);
        assert_eq!(layout.heading_anchor("* SNAKE ARCADE *"), (32, 0));
    }

    #[test]
    fn small_viewport_pins_to_the_corner() {
        let layout = Layout::new((20, 10), 25, TERM);
        assert_eq!(layout.cell_rect((0, 0)), Rect::new(0, 0, 2, 1));
        assert_eq!(layout.frame_rect().x, 0);
        assert_eq!(layout.heading_anchor("a very long heading indeed"), (0, 0));
    }
}

use crate::palette::{self, Rgb};
use crate::{Coords, GridInt};

/// One board square. The terrain color is fixed at construction, the overlay
/// lives for a single render pass and is wiped by `Grid::reset_colors`.
#[derive(Copy, Clone, Debug)]
pub struct Cell {
    pos: Coords,
    terrain: Rgb,
    overlay: Option<Rgb>,
}

impl Cell {
    fn new(pos: Coords) -> Self {
        Cell { pos, terrain: palette::terrain(pos.0, pos.1), overlay: None }
    }

    pub fn pos(&self) -> Coords {
        self.pos
    }

    pub fn color(&self) -> Rgb {
        self.overlay.unwrap_or_else(|| self.terrain())
    }

    pub fn terrain(&self) -> Rgb {
        self.terrain
    }

    pub fn paint(&mut self, color: Rgb) {
        self.overlay = Some(color);
    }

    pub fn reset(&mut self) {
        self.overlay = None;
    }
}

/// Square matrix of cells, stored row-major. Its shape never changes after
/// construction; callers are expected to pass in-bounds coordinates.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: GridInt,
    cols: GridInt,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(dimension: GridInt) -> Self {
        let cells = (0..dimension)
            .flat_map(|row| (0..dimension).map(move |col| Cell::new((row, col))))
            .collect();

        Grid { rows: dimension, cols: dimension, cells }
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (GridInt, GridInt) {
        (self.rows, self.cols)
    }

    #[cfg(test)]
    pub fn cell_at(&self, pos: Coords) -> &Cell {
        &self.cells[self.index(pos)]
    }

    pub fn cell_at_mut(&mut self, pos: Coords) -> &mut Cell {
        let idx = self.index(pos);
        &mut self.cells[idx]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn reset_colors(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset();
        }
    }

    fn index(&self, (row, col): Coords) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "cell ({}, {}) out of bounds", row, col);
        self.cols as usize * row as usize + col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{CELL_COLOR_EVEN, CELL_COLOR_ODD, FOOD_COLOR};

    #[test]
    fn builds_square_grid() {
        let grid = Grid::new(25);
        assert_eq!(grid.dimensions(), (25, 25));
        assert_eq!(grid.cells().count(), 625);
        assert_eq!(grid.cell_at((24, 3)).pos(), (24, 3));
    }

    #[test]
    fn cells_follow_checkerboard() {
        let grid = Grid::new(4);
        for cell in grid.cells() {
            let (row, col) = cell.pos();
            let expected = if (row + col) % 2 == 0 { CELL_COLOR_EVEN } else { CELL_COLOR_ODD };
            assert_eq!(cell.color(), expected);
        }
    }

    #[test]
    fn overlay_wins_until_reset() {
        let mut grid = Grid::new(3);
        grid.cell_at_mut((1, 2)).paint(FOOD_COLOR);
        grid.cell_at_mut((0, 0)).paint(FOOD_COLOR);

        assert_eq!(grid.cell_at((1, 2)).color(), FOOD_COLOR);
        assert_eq!(grid.cell_at((1, 2)).terrain(), CELL_COLOR_ODD);

        grid.reset_colors();
        assert!(grid.cells().all(|cell| cell.color() == cell.terrain()));
    }
}

use rand::seq::SliceRandom;
use rand::Rng;

use crate::snake::Snake;
use crate::{Coords, GridInt};

/// A single piece of food, kept off the snake at all times.
#[derive(Copy, Clone, Debug)]
pub struct Food {
    pos: Coords,
}

impl Food {
    /// Places the food on a free cell. Returns `None` when the snake covers
    /// the whole board.
    pub fn spawn<R: Rng + ?Sized>(bounds: (GridInt, GridInt), snake: &Snake, rng: &mut R) -> Option<Self> {
        let mut food = Food { pos: (0, 0) };
        if food.relocate(bounds, snake, rng) {
            Some(food)
        } else {
            None
        }
    }

    #[cfg(test)]
    pub fn at(pos: Coords) -> Self {
        Food { pos }
    }

    pub fn pos(&self) -> Coords {
        self.pos
    }

    /// Moves the food to a uniformly random cell the snake does not occupy.
    ///
    /// Rejection sampling while the board is mostly free; past four fifths
    /// coverage it draws from the list of free cells instead, which also
    /// terminates on a full board. Returns whether a free cell was found.
    pub fn relocate<R: Rng + ?Sized>(&mut self, bounds: (GridInt, GridInt), snake: &Snake, rng: &mut R) -> bool {
        let (rows, cols) = bounds;
        let cell_count = rows as usize * cols as usize;

        if snake.len() * 5 > cell_count * 4 {
            let free: Vec<Coords> = (0..rows)
                .flat_map(|row| (0..cols).map(move |col| (row, col)))
                .filter(|pos| !snake.occupies(*pos))
                .collect();

            return match free.choose(rng) {
                Some(pos) => {
                    self.pos = *pos;
                    tracing::debug!(pos = ?self.pos, free = free.len(), "food placed from free list");
                    true
                }
                None => false,
            };
        }

        loop {
            let pos = (rng.gen_range(0..rows), rng.gen_range(0..cols));
            if !snake.occupies(pos) {
                self.pos = pos;
                tracing::debug!(pos = ?self.pos, "food placed");
                return true;
            }
        }
    }

    pub fn is_eaten_by(&self, snake: &Snake) -> bool {
        snake.head() == self.pos
    }
}

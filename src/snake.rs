use std::collections::VecDeque;

use crate::{Coords, GridInt};
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// The move timer has not reached the cadence yet.
    Waiting,
    Moved { new_head: Coords, old_head: Coords, old_tail: Option<Coords> },
}

/// The head plus a queue of body segments ordered from neck to tail.
///
/// The head is not part of the body queue, so a self-collision is a body
/// segment sitting on the head's coordinates.
#[derive(Clone, Debug)]
pub struct Snake {
    head: Coords,
    body: VecDeque<Coords>,
    direction: Direction,
    ticks: u32,
    cadence: u32,
    bounds: (GridInt, GridInt),
}

impl Snake {
    /// A lone head in the top-left corner, heading down.
    pub fn new(bounds: (GridInt, GridInt), cadence: u32) -> Self {
        Snake {
            head: (0, 0),
            body: VecDeque::new(),
            direction: Down,
            ticks: 0,
            cadence,
            bounds,
        }
    }

    #[cfg(test)]
    pub fn from_parts(
        bounds: (GridInt, GridInt),
        cadence: u32,
        head: Coords,
        body: &[Coords],
        direction: Direction,
    ) -> Self {
        Snake { head, body: body.iter().copied().collect(), direction, ticks: 0, cadence, bounds }
    }

    pub fn head(&self) -> Coords {
        self.head
    }

    pub fn body(&self) -> impl Iterator<Item = &Coords> {
        self.body.iter()
    }

    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Cells covered by the snake, head included.
    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Applies a player turn. Repeating the current direction or reversing
    /// into the neck is a no-op; returns whether the direction changed.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction || new_direction == self.direction.opposite() {
            return false;
        }
        self.direction = new_direction;
        true
    }

    /// Advances the move timer and moves one cell once it reaches the cadence.
    pub fn tick(&mut self) -> MoveResult {
        self.ticks += 1;
        if self.ticks < self.cadence {
            return Waiting;
        }
        self.ticks = 0;

        let old_head = self.head;
        let old_tail = self.body.pop_back();
        if old_tail.is_some() {
            self.body.push_front(old_head);
        }
        self.head = self.next_head();

        Moved { new_head: self.head, old_head, old_tail }
    }

    /// Appends a segment on top of the current tail (or the head when there
    /// is no body yet) and primes the timer so the next tick moves.
    pub fn grow(&mut self) {
        let tail = self.body.back().copied().unwrap_or(self.head);
        self.body.push_back(tail);
        self.ticks = self.cadence;
    }

    pub fn is_colliding(&self) -> bool {
        self.body.contains(&self.head)
    }

    fn next_head(&self) -> Coords {
        let (row, col) = self.head;
        let (rows, cols) = self.bounds;

        match self.direction {
            Up => (if row == 0 { rows - 1 } else { row - 1 }, col),
            Down => (if row + 1 >= rows { 0 } else { row + 1 }, col),
            Left => (row, if col == 0 { cols - 1 } else { col - 1 }),
            Right => (row, if col + 1 >= cols { 0 } else { col + 1 }),
        }
    }
}

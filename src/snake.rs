//! The snake itself: an ordered body of cells, a travel direction and a
//! buffered steering input.
//!
//! The body keeps its head at the front of the deque. `length` is the target
//! size the body grows toward; `body.len() <= length` holds at all times.

use std::collections::VecDeque;

use crate::grid::{Cell, Direction, Size};

#[derive(Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending: Option<Direction>,
    length: usize,
    start: Cell,
    vacated: Option<Cell>,
}

impl Snake {
    pub fn new(start: Cell) -> Self {
        Snake {
            body: VecDeque::from([start]),
            direction: Direction::Right,
            pending: None,
            length: 1,
            start,
            vacated: None,
        }
    }

    pub fn head(&self) -> Cell {
        // The body is never empty; reset and advance both maintain that.
        *self.body.front().expect("snake body is never empty")
    }

    pub fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn target_length(&self) -> usize {
        self.length
    }

    /// The cell the tail left on the last advance, if any. A renderer doing
    /// incremental drawing erases exactly this cell.
    pub fn vacated(&self) -> Option<Cell> {
        self.vacated
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Buffers a steering input for the next advance. A turn straight back
    /// into the body is silently ignored.
    pub fn steer(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.pending = Some(new_direction);
        }
    }

    /// Moves the snake one cell, wrapping at the arena edges. Applies the
    /// buffered direction first, then drops the tail unless the body is
    /// still short of its target length.
    pub fn advance(&mut self, arena: Size) {
        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }

        let new_head = self.head().wrapped_add(self.direction.into(), arena);
        self.body.push_front(new_head);

        if self.body.len() > self.length {
            self.vacated = self.body.pop_back();
        } else {
            self.vacated = None;
        }
    }

    /// Raises the target length by one; the next advance keeps the tail it
    /// would otherwise drop.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// True iff the head overlaps any other body cell. The sole losing
    /// condition in the game.
    pub fn hit_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    /// Collapses back to a single cell at the starting position, heading
    /// right with no steering buffered.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_front(self.start);
        self.direction = Direction::Right;
        self.pending = None;
        self.length = 1;
        self.vacated = None;
    }
}

//! One game session: the snake, the apple and the score, advanced a tick at
//! a time.

use log::info;
use rand::Rng;

use crate::apple::Apple;
use crate::grid::{Cell, Direction, Size};
use crate::snake::Snake;

/// Score awarded per apple.
const APPLE_REWARD: u32 = 10;

/// What a single tick of the session produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Normal movement, nothing special happened.
    Moving,
    /// The snake ate the apple; carries the new score.
    Ate(u32),
    /// The snake ran into its own body.
    SelfHit,
    /// The snake covers every cell; no apple can be placed.
    BoardFull,
}

#[derive(Debug)]
pub struct Arena {
    size: Size,
    snake: Snake,
    apple: Apple,
    score: u32,
}

impl Default for Arena {
    /// An empty husk, used only as the placeholder when a live session is
    /// moved between game states. Never stepped.
    fn default() -> Self {
        Arena {
            size: Size::default(),
            snake: Snake::new(Cell { x: 0, y: 0 }),
            apple: Apple::at(Cell { x: 0, y: 0 }),
            score: 0,
        }
    }
}

impl Arena {
    /// Starts a session with a length-1 snake at the arena center and a
    /// randomly placed apple.
    pub fn new(size: Size, rng: &mut impl Rng) -> Self {
        let snake = Snake::new(size.center());
        let apple = Apple::place(size, &snake, rng)
            .expect("a fresh arena always has free cells for the apple");
        Arena {
            size,
            snake,
            apple,
            score: 0,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple_pos(&self) -> Cell {
        self.apple.pos()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn steer(&mut self, direction: Direction) {
        self.snake.steer(direction);
    }

    /// Resolves one tick: advance the snake (buffered steering applies
    /// first), feed it if it reached the apple, then check for
    /// self-collision.
    pub fn step(&mut self, rng: &mut impl Rng) -> StepOutcome {
        self.snake.advance(self.size);

        if self.snake.head() == self.apple.pos() {
            self.snake.grow();
            self.score += APPLE_REWARD;
            info!("apple eaten, score {}", self.score);
            if !self.apple.relocate(self.size, &self.snake, rng) {
                return StepOutcome::BoardFull;
            }
            return StepOutcome::Ate(self.score);
        }

        if self.snake.hit_itself() {
            return StepOutcome::SelfHit;
        }

        StepOutcome::Moving
    }

    /// Collapses the session back to its starting state: length-1 snake,
    /// score zero, apple somewhere new.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.snake.reset();
        self.score = 0;
        if !self.apple.relocate(self.size, &self.snake, rng) {
            unreachable!("a length-1 snake cannot cover the arena");
        }
    }

    /// Drops a specific apple onto the board. The cell must be off the
    /// snake, matching the placement invariant.
    #[cfg(test)]
    pub fn put_apple(&mut self, pos: Cell) {
        assert!(
            !self.snake.occupies(pos),
            "attempted to place the apple on the snake"
        );
        self.apple = Apple::at(pos);
    }
}

//! The apple: a single cell the snake eats to grow.

use rand::Rng;

use crate::grid::{Cell, Size};
use crate::snake::Snake;

/// Uniform samples drawn before falling back to an exhaustive scan. The
/// rejection loop alone has no termination bound once the snake covers most
/// of the arena.
const MAX_SAMPLES: u32 = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Apple {
    pos: Cell,
}

impl Apple {
    /// Places an apple on a random free cell, or `None` if the snake covers
    /// the whole arena.
    pub fn place(arena: Size, snake: &Snake, rng: &mut impl Rng) -> Option<Apple> {
        random_free_cell(arena, snake, rng).map(|pos| Apple { pos })
    }

    pub fn at(pos: Cell) -> Apple {
        Apple { pos }
    }

    pub fn pos(&self) -> Cell {
        self.pos
    }

    /// Moves the apple to a random cell off the snake. Returns false when no
    /// free cell exists, leaving the position unchanged; the caller treats a
    /// full arena as a terminal state rather than retrying forever.
    pub fn relocate(&mut self, arena: Size, snake: &Snake, rng: &mut impl Rng) -> bool {
        match random_free_cell(arena, snake, rng) {
            Some(pos) => {
                self.pos = pos;
                true
            }
            None => false,
        }
    }
}

fn random_free_cell(arena: Size, snake: &Snake, rng: &mut impl Rng) -> Option<Cell> {
    for _ in 0..MAX_SAMPLES {
        let cell = Cell {
            x: rng.gen_range(0..arena.width),
            y: rng.gen_range(0..arena.height),
        };
        if !snake.occupies(cell) {
            return Some(cell);
        }
    }

    // The snake covers nearly everything; enumerate what little is left and
    // pick from that instead of sampling blind.
    let free: Vec<Cell> = (0..arena.height)
        .flat_map(|y| (0..arena.width).map(move |x| Cell { x, y }))
        .filter(|&cell| !snake.occupies(cell))
        .collect();
    if free.is_empty() {
        None
    } else {
        Some(free[rng.gen_range(0..free.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    const ARENA: Size = Size {
        width: 4,
        height: 3,
    };

    fn long_snake(cells_to_fill: usize) -> Snake {
        // Grows a snake along a boustrophedon path so it occupies exactly
        // `cells_to_fill` cells of the 4x3 arena without self-collision.
        let mut snake = Snake::new(Cell { x: 0, y: 0 });
        for _ in 1..cells_to_fill {
            snake.grow();
        }
        let turns = [
            Direction::Right,
            Direction::Right,
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Left,
            Direction::Left,
            Direction::Down,
            Direction::Right,
            Direction::Right,
            Direction::Right,
        ];
        for dir in turns.iter().take(cells_to_fill - 1) {
            snake.steer(*dir);
            snake.advance(ARENA);
        }
        assert_eq!(snake.len(), cells_to_fill);
        assert!(!snake.hit_itself());
        snake
    }

    #[test]
    fn never_lands_on_the_snake() {
        let snake = long_snake(10);
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let apple = Apple::place(ARENA, &snake, &mut rng).expect("free cells remain");
            assert!(!snake.occupies(apple.pos()));
        }
    }

    #[test]
    fn relocate_finds_the_last_free_cell() {
        let snake = long_snake(11);
        let mut rng = rand::thread_rng();
        let mut apple = Apple::at(Cell { x: 0, y: 0 });
        assert!(apple.relocate(ARENA, &snake, &mut rng));
        assert!(!snake.occupies(apple.pos()));
    }

    #[test]
    fn full_arena_reports_failure() {
        let snake = long_snake(12);
        let mut rng = rand::thread_rng();
        assert!(Apple::place(ARENA, &snake, &mut rng).is_none());

        let before = Cell { x: 0, y: 0 };
        let mut apple = Apple::at(before);
        assert!(!apple.relocate(ARENA, &snake, &mut rng));
        assert_eq!(apple.pos(), before);
    }
}

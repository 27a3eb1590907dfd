//! Arena geometry: cells, directions and wrap-around arithmetic.
//!
//! The arena is a torus; stepping off one edge reenters from the opposite
//! edge. All wrapping goes through [`Cell::wrapped_add`].

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether a game fits here: the snake and the apple need a cell each,
    /// and random placement needs both extents nonzero.
    pub fn has_room(&self) -> bool {
        self.cell_count() >= 2
    }

    /// The cell in the middle of the arena, where a fresh snake starts.
    pub fn center(&self) -> Cell {
        Cell {
            x: self.width / 2,
            y: self.height / 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// One grid unit, addressed by column and row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

/// A signed per-axis step; every `Direction` converts to a unit delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for Delta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Delta { x: 0, y: -1 },
            Direction::Down => Delta { x: 0, y: 1 },
            Direction::Left => Delta { x: -1, y: 0 },
            Direction::Right => Delta { x: 1, y: 0 },
        }
    }
}

impl Cell {
    pub fn wrapped_add(&self, delta: Delta, size: Size) -> Cell {
        let x = (self.x as i32 + delta.x).rem_euclid(size.width as i32) as u16;
        let y = (self.y as i32 + delta.y).rem_euclid(size.height as i32) as u16;
        Cell { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: Size = Size {
        width: 12,
        height: 8,
    };

    #[test]
    fn opposites_are_involutive() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);

        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn unit_steps() {
        let cell = Cell { x: 5, y: 4 };
        assert_eq!(
            cell.wrapped_add(Direction::Up.into(), ARENA),
            Cell { x: 5, y: 3 }
        );
        assert_eq!(
            cell.wrapped_add(Direction::Down.into(), ARENA),
            Cell { x: 5, y: 5 }
        );
        assert_eq!(
            cell.wrapped_add(Direction::Left.into(), ARENA),
            Cell { x: 4, y: 4 }
        );
        assert_eq!(
            cell.wrapped_add(Direction::Right.into(), ARENA),
            Cell { x: 6, y: 4 }
        );
    }

    #[test]
    fn wraps_at_every_edge() {
        // Rightmost column moving right lands at column 0 of the same row.
        let cell = Cell { x: 11, y: 3 };
        assert_eq!(
            cell.wrapped_add(Direction::Right.into(), ARENA),
            Cell { x: 0, y: 3 }
        );

        let cell = Cell { x: 0, y: 3 };
        assert_eq!(
            cell.wrapped_add(Direction::Left.into(), ARENA),
            Cell { x: 11, y: 3 }
        );

        let cell = Cell { x: 6, y: 0 };
        assert_eq!(
            cell.wrapped_add(Direction::Up.into(), ARENA),
            Cell { x: 6, y: 7 }
        );

        let cell = Cell { x: 6, y: 7 };
        assert_eq!(
            cell.wrapped_add(Direction::Down.into(), ARENA),
            Cell { x: 6, y: 0 }
        );
    }

    #[test]
    fn whole_arena_delta_is_identity() {
        let cell = Cell { x: 7, y: 2 };
        assert_eq!(cell.wrapped_add(Delta { x: 12, y: 8 }, ARENA), cell);
        assert_eq!(cell.wrapped_add(Delta { x: -12, y: -8 }, ARENA), cell);
    }

    #[test]
    fn center_of_arena() {
        assert_eq!(ARENA.center(), Cell { x: 6, y: 4 });
        assert_eq!(ARENA.cell_count(), 96);
    }

    #[test]
    fn room_for_a_game() {
        assert!(ARENA.has_room());
        assert!(Size {
            width: 2,
            height: 1
        }
        .has_room());

        // One cell fits the snake but leaves nowhere for the apple; a zero
        // extent fits nothing at all.
        assert!(!Size {
            width: 1,
            height: 1
        }
        .has_room());
        assert!(!Size {
            width: 16,
            height: 0
        }
        .has_room());
        assert!(!Size::default().has_room());
    }
}

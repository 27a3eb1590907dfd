//! Slither - a terminal Snake on a toroidal arena.
//!
//! The game-state core (grid, snake, apple, arena, app state machine) lives
//! here and knows nothing about terminals; the `ui` module and the binary
//! wrap it in ratatui plumbing.

pub mod app;
pub mod apple;
pub mod arena;
pub mod grid;
pub mod snake;
pub mod ui;

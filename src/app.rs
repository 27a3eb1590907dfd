//! Top-level state machine: ready, playing, paused, and the two terminal
//! screens. Input dispatch and the per-tick update both live here; drawing
//! is in `ui`.

use crossterm::event::{KeyCode, KeyEvent};
use log::info;

use crate::arena::{Arena, StepOutcome};
use crate::grid::{Direction, Size};

#[derive(Debug)]
pub enum GameState {
    ReadyToStart,
    Playing(Arena),
    Paused(Arena),
    GameOver { arena: Arena, final_score: u32 },
    BoardFull { arena: Arena, final_score: u32 },
    Exit,
}

pub struct App {
    pub(crate) state: GameState,
    /// Measured from the drawn frame while on the start screen; a session
    /// cannot begin until the first draw has happened.
    pub(crate) arena_size: Option<Size>,
}

impl App {
    pub fn new() -> Self {
        App {
            state: GameState::ReadyToStart,
            arena_size: None,
        }
    }

    pub fn should_exit(&self) -> bool {
        matches!(self.state, GameState::Exit)
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        let new_state = match &mut self.state {
            GameState::ReadyToStart => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(GameState::Exit),
                // A session only starts once the frame has been measured and
                // the arena can hold a snake and an apple.
                KeyCode::Char(' ') => match self.arena_size {
                    Some(size) if size.has_room() => {
                        let mut rng = rand::thread_rng();
                        info!("session started on a {}x{} arena", size.width, size.height);
                        Some(GameState::Playing(Arena::new(size, &mut rng)))
                    }
                    _ => None,
                },
                _ => None,
            },
            GameState::Playing(arena) => match key.code {
                KeyCode::Esc => Some(GameState::Exit),
                KeyCode::Char('q') => {
                    let final_score = arena.score();
                    info!("forfeit, final score {}", final_score);
                    Some(GameState::GameOver {
                        arena: std::mem::take(arena),
                        final_score,
                    })
                }
                KeyCode::Char(' ') => Some(GameState::Paused(std::mem::take(arena))),
                KeyCode::Up | KeyCode::Char('w') => {
                    arena.steer(Direction::Up);
                    None
                }
                KeyCode::Down | KeyCode::Char('s') => {
                    arena.steer(Direction::Down);
                    None
                }
                KeyCode::Left | KeyCode::Char('a') => {
                    arena.steer(Direction::Left);
                    None
                }
                KeyCode::Right | KeyCode::Char('d') => {
                    arena.steer(Direction::Right);
                    None
                }
                _ => None,
            },
            GameState::Paused(arena) => match key.code {
                KeyCode::Esc => Some(GameState::Exit),
                KeyCode::Char('q') => {
                    let final_score = arena.score();
                    Some(GameState::GameOver {
                        arena: std::mem::take(arena),
                        final_score,
                    })
                }
                KeyCode::Char(' ') => Some(GameState::Playing(std::mem::take(arena))),
                _ => None,
            },
            GameState::GameOver { arena, .. } | GameState::BoardFull { arena, .. } => {
                match key.code {
                    KeyCode::Esc => Some(GameState::Exit),
                    // Restart in place: same arena, collapsed back to a
                    // length-1 snake with a fresh apple and a zero score.
                    KeyCode::Char(' ') => {
                        let mut arena = std::mem::take(arena);
                        let mut rng = rand::thread_rng();
                        arena.reset(&mut rng);
                        info!("restart");
                        Some(GameState::Playing(arena))
                    }
                    KeyCode::Char('q') => Some(GameState::ReadyToStart),
                    _ => None,
                }
            }
            GameState::Exit => None,
        };

        if let Some(new_state) = new_state {
            self.state = new_state;
        }
    }

    /// Advances the live session by one tick, if there is one.
    pub fn update(&mut self) {
        if let GameState::Playing(arena) = &mut self.state {
            let mut rng = rand::thread_rng();
            match arena.step(&mut rng) {
                StepOutcome::SelfHit => {
                    let final_score = arena.score();
                    info!("self collision, final score {}", final_score);
                    self.state = GameState::GameOver {
                        arena: std::mem::take(arena),
                        final_score,
                    };
                }
                StepOutcome::BoardFull => {
                    let final_score = arena.score();
                    info!("board filled, final score {}", final_score);
                    self.state = GameState::BoardFull {
                        arena: std::mem::take(arena),
                        final_score,
                    };
                }
                StepOutcome::Ate(_) | StepOutcome::Moving => {}
            }
        }
    }
}

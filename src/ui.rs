//! All drawing: the arena widget and the chrome around it. The core state
//! types know nothing about any of this.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, GameState};
use crate::arena::Arena;
use crate::grid::Size;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let score_line = match &self.state {
            GameState::Playing(arena) | GameState::Paused(arena) => {
                format!("SLITHER    Score: {}", arena.score())
            }
            GameState::GameOver { final_score, .. }
            | GameState::BoardFull { final_score, .. } => {
                format!("SLITHER    Score: {}", final_score)
            }
            _ => "SLITHER".to_string(),
        };

        let layout = Layout::default()
            .direction(layout::Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + score
                Constraint::Min(0),    // Arena
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(score_line)
                .alignment(Alignment::Left)
                .block(Block::default().borders(Borders::ALL)),
            layout[0],
        );

        match &self.state {
            GameState::ReadyToStart => {
                let block = Block::default().borders(Borders::ALL);
                let inner = block.inner(layout[1]);
                // The session plays on whatever area the frame gives us.
                let size = Size {
                    width: inner.width,
                    height: inner.height,
                };
                self.arena_size = Some(size);
                let message = if size.has_room() {
                    "Press SPACE to start"
                } else {
                    "Terminal too small"
                };
                frame.render_widget(
                    Paragraph::new(message)
                        .alignment(Alignment::Center)
                        .block(block),
                    layout[1],
                );
            }
            GameState::Playing(arena) => {
                let block = Block::default().title("Playing").borders(Borders::ALL);
                let inner = block.inner(layout[1]);
                frame.render_widget(block, layout[1]);
                frame.render_widget(arena, inner);
            }
            GameState::Paused(arena) => {
                let block = Block::default()
                    .title("Paused. Press SPACE to continue")
                    .borders(Borders::ALL);
                let inner = block.inner(layout[1]);
                frame.render_widget(block, layout[1]);
                frame.render_widget(arena, inner);
            }
            GameState::GameOver { arena, final_score } => {
                let block = Block::default().borders(Borders::ALL);
                let inner = block.inner(layout[1]);
                frame.render_widget(block, layout[1]);
                frame.render_widget(arena, inner);
                frame.render_widget(
                    Paragraph::new(format!(
                        "GAME OVER\nFinal Score: {}\nPress SPACE to play again",
                        final_score
                    ))
                    .alignment(Alignment::Center),
                    inner,
                );
            }
            GameState::BoardFull { arena, final_score } => {
                let block = Block::default().borders(Borders::ALL);
                let inner = block.inner(layout[1]);
                frame.render_widget(block, layout[1]);
                frame.render_widget(arena, inner);
                frame.render_widget(
                    Paragraph::new(format!(
                        "YOU WIN - the board is full!\nFinal Score: {}\nPress SPACE to play again",
                        final_score
                    ))
                    .alignment(Alignment::Center),
                    inner,
                );
            }
            GameState::Exit => {}
        }
    }
}

impl Widget for &Arena {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // The area can shrink under us if the terminal is resized mid-game;
        // cells outside it are simply not drawn.
        let visible = |x: u16, y: u16| x < area.width && y < area.height;

        for cell in self.snake().body() {
            if visible(cell.x, cell.y) {
                buf[(cell.x + area.x, cell.y + area.y)]
                    .set_symbol(" ")
                    .set_bg(Color::Green);
            }
        }

        let head = self.snake().head();
        if visible(head.x, head.y) {
            buf[(head.x + area.x, head.y + area.y)]
                .set_symbol("@")
                .set_fg(Color::Yellow)
                .set_bg(Color::Green);
        }

        let apple = self.apple_pos();
        if visible(apple.x, apple.y) {
            buf[(apple.x + area.x, apple.y + area.y)]
                .set_symbol("●")
                .set_fg(Color::LightRed);
        }
    }
}

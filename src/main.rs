use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

use slither::app::App;

/// 20 ticks per second, fixed.
const TICK_RATE: Duration = Duration::from_millis(50);

fn main() -> Result<(), io::Error> {
    // Set up logging before anything else
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create("slither.log")?,
    )
    .expect("Failed to initialize logger");

    info!("Starting Slither");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let mut last_tick = Instant::now();

    // One key per tick; further presses are dropped until the next update,
    // which keeps a rapid double-turn from landing inside a single tick.
    let mut ignore_input = false;
    loop {
        terminal.draw(|f| app.render(f))?;

        if !ignore_input && event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                app.handle_input(key);
                ignore_input = true;
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.update();
            last_tick = Instant::now();
            ignore_input = false;
        }

        if app.should_exit() {
            break;
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Exiting");
    Ok(())
}

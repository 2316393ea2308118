//! ptrack - Terminal Project Tracker
//!
//! Add projects through a form and move them between an active and a
//! finished list. Projects live in memory for the length of the session.

use std::io;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use project_tracker::application::{App, AppMode};
use project_tracker::config::Config;
use project_tracker::logging::init_logging;
use project_tracker::presentation::{render_ui, InputHandler};

/// Entry point for the ptrack terminal project tracker.
///
/// Reads configuration from the environment, starts file logging when a log
/// directory is configured, then runs the UI until the user quits.
///
/// # Errors
///
/// Returns an error for invalid configuration, a failed logger start, or
/// terminal setup problems.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    if let Some(ref log_dir) = config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.rules);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }
    info!(
        "event=app_exit status=ok projects={}",
        app.store.projects().len()
    );

    Ok(())
}

/// Main application event loop.
///
/// Redraws after every key press. Returns when the user presses 'q' in
/// normal mode.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}

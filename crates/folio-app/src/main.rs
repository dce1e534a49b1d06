//! folio terminal entry point.
//!
//! Runs the resume terminal full-screen in the current tty. Type commands
//! at the prompt, Up/Down recall history, PageUp/PageDown scroll the log,
//! Esc or Ctrl+C quits. Logs go to a file because the screen is ours.

mod app_state;
mod backend;
mod input;

use std::fs::File;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

use app_state::AppState;
use backend::CrosstermBackend;
use folio_types::backend::TermBackend;
use folio_types::config::TerminalConfig;
use folio_types::input::InputEvent;
use input::InputResult;

/// Restores the tty on drop, including during a panic unwind.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> Result<()> {
    init_logging()?;

    let config = load_config()?;
    log::info!(
        "Starting folio (tick {} ms, {} custom projects)",
        config.tick_ms,
        config.projects.len(),
    );

    let mut state = AppState::new(&config);

    terminal::enable_raw_mode()?;
    let _guard = TerminalGuard;
    crossterm::execute!(io::stdout(), EnterAlternateScreen)?;
    let mut backend = CrosstermBackend::stdout()?;

    let tick = Duration::from_millis(u64::from(config.tick_ms));
    let mut last = Instant::now();
    loop {
        if state.needs_redraw(backend.size()) {
            state.view.render(&mut backend, &state.session)?;
        }

        if event::poll(tick)? {
            if let Some(ev) = input::map_event(event::read()?) {
                if let InputEvent::Resize { cols, rows } = ev {
                    backend.resize(cols, rows);
                }
                if input::handle_input(&ev, &mut state) == InputResult::Quit {
                    break;
                }
            }
        }

        let now = Instant::now();
        let dt_ms = u32::try_from(now.duration_since(last).as_millis()).unwrap_or(u32::MAX);
        last = now;
        state.tick(dt_ms);
    }

    log::info!("Shutting down after {} frames", state.frame_counter);
    Ok(())
}

/// Log to `FOLIO_LOG_FILE` (default `folio.log`), filtered by `RUST_LOG`.
fn init_logging() -> Result<()> {
    let path = std::env::var("FOLIO_LOG_FILE").unwrap_or_else(|_| "folio.log".to_string());
    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Config from the first CLI arg or `FOLIO_CONFIG`, else built-in defaults.
fn load_config() -> Result<TerminalConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok());
    match path {
        Some(path) => {
            log::info!("Loading config from {path}");
            TerminalConfig::load(Path::new(&path))
                .with_context(|| format!("loading config {path}"))
        },
        None => Ok(TerminalConfig::default()),
    }
}

//! cubist - terminal editor for cube states.
//!
//! # Architecture
//!
//! The binary wires [`cubist_core`] (editing logic) to [`cubist_tui`]
//! (rendering and input) over a [`JsonFileStore`], and owns the terminal
//! through an RAII session so it is restored on every exit path.
//!
//! ```text
//! main() -> config + store -> App -> TerminalSession::new() -> run_app()
//! ```
//!
//! # Event Loop
//!
//! 1. Wait up to one frame for input (100 ms idle, 8 ms while a mouse
//!    button is held)
//! 2. Apply queued key and mouse events to the app
//! 3. Redraw if anything changed

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, File, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cubist_config::CubistConfig;
use cubist_core::{KeyValueStore, NeutralParity, PersistenceGateway};
use cubist_store::JsonFileStore;
use cubist_tui::{App, UiOptions, draw, handle_events};
use cubist_types::AnswerState;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Without a log file, no logs at all: stdout/stderr belong to the TUI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.cubist/logs/cubist.log
    if let Some(config_path) = CubistConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("cubist.log"));
    }

    // Fallback: ./.cubist/logs/cubist.log
    candidates.push(PathBuf::from(".cubist").join("logs").join("cubist.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Enables raw mode, the alternate screen and mouse capture; drop restores
/// all three even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn load_config() -> CubistConfig {
    match CubistConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(path = %e.path().display(), "Using default config");
            CubistConfig::default()
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = load_config();
    let answer = config.answer().unwrap_or_else(|e| {
        tracing::warn!("Ignoring [puzzle] answer: {e}");
        AnswerState::identity()
    });
    let options = UiOptions {
        ascii_only: config.ascii_only(),
        high_contrast: config.high_contrast(),
    };

    let path = config
        .storage_path()
        .context("could not determine where to keep the save file")?;
    let store = JsonFileStore::open(&path)
        .with_context(|| format!("failed to open save file {}", path.display()))?;
    let resume = !store.is_empty();

    let mut app = App::new(
        answer,
        Box::new(NeutralParity),
        PersistenceGateway::new(store),
        options,
    );
    if resume {
        app.load();
    }

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app)
    };

    if let Err(err) = &result {
        eprintln!("Error: {err:?}");
    }
    result
}

fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App<S>) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: KeyValueStore,
{
    terminal.draw(|frame| draw(frame, app))?;
    app.take_redraw();

    loop {
        handle_events(app)?;
        if app.should_quit() {
            return Ok(());
        }
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, app))?;
        }
    }
}

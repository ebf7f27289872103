// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # DuckOn terminal client.
//!
//! Browse minor and rising K-pop artists and search YouTube through a DuckOn
//! backend, from the terminal.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background HTTP worker.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering and all
//!   view state.
//! * The **Task Worker** performs backend requests one at a time and reports
//!   the results back as events.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state, including the debounce timers.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the worker is handled via `std::sync::mpsc` channels.
//! Every request carries a query token, and results whose token has been
//! superseded are discarded when they arrive.

mod api;
mod commander;
mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::info;

use crate::{
    commander::Commander,
    components::{ArtistListView, SearchView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::session::Session,
    tasks::AppTask,
    theme::Theme,
};

/// Interval between ticks, which bounds how late a debounced query can fire.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq)]
enum MainView {
    Search,
    Artists,
}

/// The last message shown in the status line.
#[derive(Debug, Clone, PartialEq)]
enum StatusMessage {
    Info(String),
    Error(String),
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub session: Session,

    pub search_view: SearchView,
    pub artist_view: ArtistListView,

    pub commander: Commander,

    pub status: Option<StatusMessage>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            session: Session::new(config.access_token.clone()),
            search_view: SearchView::new(&config),
            artist_view: ArtistListView::new(&config),
            config,
            theme: Theme::default(),
            main_view: MainView::Artists,
            event_tx,
            event_rx,
            task_tx,
            commander: Commander::new(),
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let _log_guard = logging::init_logging().context("Failed to initialise logging")?;

    let config = config::load_config();
    info!(base_url = %config.api_base_url, "Starting duckterm");

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    info!("Exiting duckterm");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to perform backend requests for [`AppTask`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to drive debounce timers and periodic redraws.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to perform backend requests.
    tasks::spawn_task_worker(
        &app.config,
        app.session.access_token(),
        task_rx,
        app.event_tx.clone(),
    );

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is both
    // the debounce resolution and the minimum "frame rate" for rendering.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Open the artist list so its first page loads
    app.event_tx
        .send(AppEvent::SetMainView(MainView::Artists))
        .context("Failed to send initial view")?;

    if app.session.is_signed_in() {
        app.task_tx
            .send(AppTask::FetchFollowedArtists)
            .context("Failed to request followed artists")?;
    }

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

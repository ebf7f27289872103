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

//! Application logic, event handling, and command dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Key presses, ticks and task worker results all arrive here as
//! [`AppEvent`]s on a single channel, so every state change happens on the
//! main thread.
//!
//! # Organization
//!
//! * [`handlers`]: One function per event, applying it to the [`App`] state.
//! * [`key_handlers`]: Routes key presses to the command line, the active
//!   view, and finally the global bindings.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView,
    commander::Command,
    model::{Artist, Page, Video, paged::QueryToken},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Tick,

    SetMainView(MainView),

    ArtistsLoaded(QueryToken, Page<Artist>),
    SuggestionsLoaded(QueryToken, Page<Artist>),
    VideosLoaded(QueryToken, Page<Video>),
    VideoSearchFailed(QueryToken, String),
    FollowedArtistsLoaded(Vec<i64>),

    Command(Command),

    Status(String),
    Error(String),

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed. After every redraw the artist list gets the chance to request
/// its next page, since only then is its scroll position known.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Tick => handle_tick(app)?,
            AppEvent::SetMainView(view) => handle_set_main_view(app, view)?,
            AppEvent::ArtistsLoaded(token, page) => handle_artists_loaded(app, token, page),
            AppEvent::SuggestionsLoaded(token, page) => handle_suggestions_loaded(app, token, page),
            AppEvent::VideosLoaded(token, page) => handle_videos_loaded(app, token, page),
            AppEvent::VideoSearchFailed(token, message) => {
                handle_video_search_failed(app, token, message)
            }
            AppEvent::FollowedArtistsLoaded(ids) => handle_followed_artists_loaded(app, ids),
            AppEvent::Command(command) => handle_command(app, command)?,
            AppEvent::Status(message) => handle_status(app, message),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::ExitApplication => {}
        }

        terminal.draw(|f| draw(f, app))?;

        handle_after_draw(app)?;
    }

    Ok(())
}

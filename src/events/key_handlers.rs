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

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{App, MainView, events::AppEvent};

/// Maps keyboard input to application actions.
///
/// Key events are offered, in order, to:
///
/// * **The command line**, which takes every key while it is open.
/// * **The active view**, for text entry, list navigation and selection.
/// * **Global bindings**, for switching views and exiting.
///
/// # Errors
///
/// Returns an error if a task or event fails to send.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    // Any other key dismisses the last status message
    app.status = None;

    let now = Instant::now();
    let handled = match app.main_view {
        MainView::Search => {
            app.search_view
                .process_event(&event, now, &app.task_tx, &app.event_tx)?
        }
        MainView::Artists => app.artist_view.process_event(&event, now, &app.task_tx)?,
    };

    if !handled {
        process_global_key_event(app, key)?;
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('1') => app.event_tx.send(AppEvent::SetMainView(MainView::Search))?,
        KeyCode::Char('2') => app.event_tx.send(AppEvent::SetMainView(MainView::Artists))?,

        _ => {}
    }

    Ok(())
}

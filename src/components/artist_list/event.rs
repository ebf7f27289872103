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

//! Event routing for the artist list view.
//!
//! While the keyword filter has focus every key goes to the text input;
//! otherwise keys drive list navigation and the kind and sort selectors.

use std::{sync::mpsc::Sender, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{components::ArtistListView, tasks::AppTask};

impl ArtistListView {
    /// Handles a terminal event, returning whether the view consumed it.
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        now: Instant,
        task_tx: &Sender<AppTask>,
    ) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if self.editing {
            match key_event.code {
                KeyCode::Esc => self.editing = false,

                KeyCode::Enter => {
                    self.editing = false;
                    self.on_keyword_edited(now);
                    if self.keyword.flush().is_some() {
                        self.reload(task_tx)?;
                    }
                }

                _ => {
                    if self.keyword_input.handle_event(event).is_some() {
                        self.on_keyword_edited(now);
                    }
                }
            }

            return Ok(true);
        }

        match key_event.code {
            KeyCode::Char('/') => self.editing = true,

            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Char('t') => self.set_kind(self.kind.toggled(), task_tx)?,
            KeyCode::Char('s') => self.cycle_sort(task_tx)?,
            KeyCode::Char('r') => self.reload(task_tx)?,

            _ => return Ok(false),
        }

        Ok(true)
    }
}

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

//! Event routing for the search view.
//!
//! With the search box focused, keys edit the query and move through the
//! suggestion dropdown. With the results focused, keys go to the video table.

use std::{sync::mpsc::Sender, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{SearchFocus, SearchView, VideoTableAction},
    events::AppEvent,
    tasks::AppTask,
};

impl SearchView {
    /// Handles a terminal event, returning whether the view consumed it.
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        now: Instant,
        task_tx: &Sender<AppTask>,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match self.focus {
            SearchFocus::Input => {
                match key_event.code {
                    KeyCode::Esc if !self.suggestions.is_empty() => {
                        self.query.cancel();
                        self.close_suggestions();
                    }
                    KeyCode::Esc | KeyCode::Tab => self.focus = SearchFocus::Results,

                    KeyCode::Down => self.next_suggestion(),
                    KeyCode::Up => self.previous_suggestion(),

                    KeyCode::Enter => {
                        let query = match self.highlighted_suggestion() {
                            Some(artist) => artist.display_name().to_string(),
                            None => self.input.value().to_string(),
                        };
                        self.submit(&query, task_tx)?;
                    }

                    _ => {
                        if self.input.handle_event(event).is_some() {
                            self.on_query_edited(now);
                        }
                    }
                }

                Ok(true)
            }

            SearchFocus::Results => {
                if matches!(key_event.code, KeyCode::Tab | KeyCode::Char('/')) {
                    self.focus = SearchFocus::Input;
                    return Ok(true);
                }

                let videos = self.videos.items();
                match self.video_table.process_event(event, videos) {
                    Some(VideoTableAction::ActivateCurrent(video)) => {
                        event_tx.send(AppEvent::Status(format!(
                            "{} {}",
                            video.title,
                            video.watch_url()
                        )))?;
                        Ok(true)
                    }
                    Some(VideoTableAction::SelectionChanged) => {
                        event_tx.send(AppEvent::Status(format!(
                            "{} videos selected",
                            self.video_table.selection().len()
                        )))?;
                        Ok(true)
                    }
                    Some(VideoTableAction::Moved) => Ok(true),
                    None => Ok(false),
                }
            }
        }
    }
}

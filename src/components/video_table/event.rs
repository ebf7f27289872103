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

//! Input handling and event processing for the video table.
//!
//! This module maps raw terminal keyboard events to table navigation and
//! selection. Keys the table does not use yield `None` so the owning view can
//! pass them on.

use crossterm::event::{Event, KeyCode};

use crate::{
    components::{VideoTable, VideoTableAction},
    model::Video,
};

impl VideoTable {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        videos: &[Video],
    ) -> Option<VideoTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        let len = videos.len();
        self.ensure_cursor(len);

        let action = match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.goto_next(len);
                VideoTableAction::Moved
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.goto_previous(len);
                VideoTableAction::Moved
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.goto_first(len);
                VideoTableAction::Moved
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.goto_last(len);
                VideoTableAction::Moved
            }

            KeyCode::Char(' ') => {
                self.toggle_select_current(videos);
                self.goto_next(len);
                VideoTableAction::SelectionChanged
            }

            KeyCode::Backspace => {
                self.toggle_select_current(videos);
                self.goto_previous(len);
                VideoTableAction::SelectionChanged
            }

            KeyCode::Enter => match self.current(videos) {
                Some(video) => VideoTableAction::ActivateCurrent(video.clone()),
                None => VideoTableAction::Moved,
            },

            _ => return None,
        };

        Some(action)
    }
}

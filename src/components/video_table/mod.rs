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

//! Interactive video table widget and selection management.
//!
//! The table displays whatever video results it is handed and owns the
//! cursor and the selection. The selection is ordered, keeps the order in
//! which videos were picked, and is independent of the current results, so
//! it survives new searches.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::Video;

pub(crate) enum VideoTableAction {
    Moved,
    SelectionChanged,
    ActivateCurrent(Video),
}

pub(crate) struct VideoTable {
    selection: Vec<Video>,
    table_state: TableState,
}

impl VideoTable {
    pub(crate) fn new() -> Self {
        Self {
            selection: vec![],
            table_state: TableState::new(),
        }
    }

    pub(crate) fn selection(&self) -> &[Video] {
        &self.selection
    }

    /// The 1-based position of a video in the selection.
    pub(crate) fn selection_number(&self, video_id: &str) -> Option<usize> {
        self.selection
            .iter()
            .position(|video| video.video_id == video_id)
            .map(|index| index + 1)
    }

    /// Appends a video to the selection, returning `false` if it was already
    /// selected.
    pub(crate) fn add_to_selection(&mut self, video: Video) -> bool {
        if self.selection_number(&video.video_id).is_some() {
            return false;
        }
        self.selection.push(video);
        true
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub(crate) fn reset_cursor(&mut self) {
        self.table_state = TableState::new();
    }

    pub(crate) fn current<'a>(&self, videos: &'a [Video]) -> Option<&'a Video> {
        self.table_state.selected().and_then(|index| videos.get(index))
    }

    /// Puts the cursor on the first row if there are rows but no cursor.
    fn ensure_cursor(&mut self, len: usize) {
        if len > 0 && self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    fn toggle_select_current(&mut self, videos: &[Video]) {
        let Some(video) = self.current(videos) else {
            return;
        };

        match self.selection_number(&video.video_id) {
            Some(number) => {
                self.selection.remove(number - 1);
            }
            None => self.selection.push(video.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, style::Modifier};

    use super::*;
    use crate::theme::Theme;

    fn videos(ids: &[&str]) -> Vec<Video> {
        ids.iter().map(|id| Video::from_id(id.to_string())).collect()
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn selection_keeps_pick_order() {
        let results = videos(&["aaaaaaaaaaa", "bbbbbbbbbbb", "ccccccccccc"]);
        let mut table = VideoTable::new();

        table.process_event(&key(KeyCode::Char('G')), &results);
        table.process_event(&key(KeyCode::Char(' ')), &results);
        table.process_event(&key(KeyCode::Char('g')), &results);
        table.process_event(&key(KeyCode::Char(' ')), &results);

        assert_eq!(table.selection_number("ccccccccccc"), Some(1));
        assert_eq!(table.selection_number("aaaaaaaaaaa"), Some(2));
        assert_eq!(table.selection_number("bbbbbbbbbbb"), None);
    }

    #[test]
    fn toggling_again_removes_and_renumbers() {
        let results = videos(&["aaaaaaaaaaa", "bbbbbbbbbbb"]);
        let mut table = VideoTable::new();

        table.process_event(&key(KeyCode::Char(' ')), &results);
        table.process_event(&key(KeyCode::Char(' ')), &results);
        table.process_event(&key(KeyCode::Char('g')), &results);
        table.process_event(&key(KeyCode::Char(' ')), &results);

        assert_eq!(table.selection_number("aaaaaaaaaaa"), None);
        assert_eq!(table.selection_number("bbbbbbbbbbb"), Some(1));
    }

    #[test]
    fn selection_survives_new_results() {
        let mut table = VideoTable::new();
        table.process_event(&key(KeyCode::Char(' ')), &videos(&["aaaaaaaaaaa"]));

        table.reset_cursor();
        let next_results = videos(&["ddddddddddd"]);
        table.process_event(&key(KeyCode::Char(' ')), &next_results);

        assert_eq!(table.selection().len(), 2);
        assert!(!table.add_to_selection(Video::from_id("ddddddddddd".to_string())));
    }

    #[test]
    fn unused_keys_are_passed_on() {
        let results = videos(&["aaaaaaaaaaa"]);
        let mut table = VideoTable::new();

        assert!(table.process_event(&key(KeyCode::Char('q')), &results).is_none());
    }

    #[test]
    fn enter_activates_the_current_row() {
        let results = videos(&["aaaaaaaaaaa", "bbbbbbbbbbb"]);
        let mut table = VideoTable::new();

        table.process_event(&key(KeyCode::Char('j')), &results);

        match table.process_event(&key(KeyCode::Enter), &results) {
            Some(VideoTableAction::ActivateCurrent(video)) => {
                assert_eq!(video.video_id, "bbbbbbbbbbb")
            }
            _ => panic!("expected the current row to be activated"),
        }
    }

    #[test]
    fn header_is_bold_and_selection_is_numbered() {
        let results = videos(&["aaaaaaaaaaa", "bbbbbbbbbbb"]);
        let theme = Theme::default();
        let mut table = VideoTable::new();
        table.process_event(&key(KeyCode::Char(' ')), &results);

        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal
            .draw(|f| table.draw(f, f.area(), &results, &theme))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer[(0, 0)].modifier.contains(Modifier::BOLD));
        assert_eq!(buffer[(0, 0)].fg, theme.accent_colour);
        // Header and its margin take the first two rows
        assert_eq!(buffer[(2, 2)].symbol(), "1");
        assert_eq!(buffer[(2, 2)].bg, theme.accent_colour);
        assert!(buffer[(2, 3)].symbol().trim().is_empty());
    }
}

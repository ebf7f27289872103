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

//! Search view: artist autocomplete and video search.
//!
//! Two result sets hang off the one search box:
//!
//! * **Suggestions** follow the debounced text as it is typed. A blank query
//!   clears them without a request, and failures leave them empty without
//!   telling the user.
//! * **Videos** are only searched when a query is submitted. A failed search
//!   is shown as an inline banner.
//!
//! Picked videos live in the [`VideoTable`] selection, which outlasts any
//! single search.

mod event;
mod render;

use std::{sync::mpsc::Sender, time::Instant};

use anyhow::Result;
use tracing::debug;
use tui_input::Input;

use crate::{
    api::PageRequest,
    components::VideoTable,
    config::AppConfig,
    model::{
        Artist, Page, Video,
        paged::{PagedList, QueryToken},
    },
    tasks::AppTask,
    util::debounce::Debouncer,
};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum SearchFocus {
    Input,
    Results,
}

pub(crate) struct SearchView {
    pub(crate) is_active: bool,
    focus: SearchFocus,
    input: Input,
    query: Debouncer<String>,
    suggestions: PagedList<Artist>,
    suggestion_index: Option<usize>,
    videos: PagedList<Video>,
    submitted: Option<String>,
    video_table: VideoTable,
}

impl SearchView {
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            is_active: false,
            focus: SearchFocus::Input,
            input: Input::default(),
            query: Debouncer::new(String::new(), config.debounce()),
            suggestions: PagedList::new(config.suggestion_limit),
            suggestion_index: None,
            videos: PagedList::new(config.video_max_results),
            submitted: None,
            video_table: VideoTable::new(),
        }
    }

    pub(crate) fn focus(&self) -> SearchFocus {
        self.focus
    }

    pub(crate) fn suggestions(&self) -> &[Artist] {
        self.suggestions.items()
    }

    pub(crate) fn videos(&self) -> &PagedList<Video> {
        &self.videos
    }

    pub(crate) fn selection(&self) -> &[Video] {
        self.video_table.selection()
    }

    pub(crate) fn activate(&mut self) {
        self.is_active = true;
        self.focus = SearchFocus::Input;
    }

    /// Hides the view, dropping a pending autocomplete query and any
    /// suggestions still in flight.
    pub(crate) fn deactivate(&mut self) {
        self.is_active = false;
        self.query.cancel();
        self.close_suggestions();
    }

    /// Requests suggestions for the debounced query once it settles.
    pub(crate) fn on_tick(&mut self, now: Instant, task_tx: &Sender<AppTask>) -> Result<()> {
        if let Some(query) = self.query.poll(now) {
            self.request_suggestions(&query, task_tx)?;
        }

        Ok(())
    }

    /// Runs a video search for `query`, replacing the current results.
    pub(crate) fn submit(&mut self, query: &str, task_tx: &Sender<AppTask>) -> Result<()> {
        let query = query.trim().to_string();
        if query.is_empty() {
            return Ok(());
        }

        self.input = Input::new(query.clone());
        self.query.set(query.clone());
        self.close_suggestions();

        let fetch = self.videos.reset();
        self.video_table.reset_cursor();
        self.focus = SearchFocus::Results;

        debug!(%query, "Searching videos");

        task_tx.send(AppTask::SearchVideos {
            request: PageRequest::new(query.as_str(), fetch.page, fetch.size),
            token: fetch.token,
        })?;

        self.submitted = Some(query);

        Ok(())
    }

    pub(crate) fn apply_suggestions(&mut self, token: &QueryToken, page: Page<Artist>) -> bool {
        let applied = self.suggestions.apply(token, page);
        if applied {
            self.suggestion_index = None;
        }
        applied
    }

    pub(crate) fn apply_videos(&mut self, token: &QueryToken, page: Page<Video>) -> bool {
        self.videos.apply(token, page)
    }

    pub(crate) fn fail_videos(&mut self, token: &QueryToken, message: String) -> bool {
        self.videos.fail(token, message)
    }

    pub(crate) fn add_to_selection(&mut self, video: Video) -> bool {
        self.video_table.add_to_selection(video)
    }

    pub(crate) fn clear_selection(&mut self) {
        self.video_table.clear_selection();
    }

    fn request_suggestions(&mut self, query: &str, task_tx: &Sender<AppTask>) -> Result<()> {
        if query.trim().is_empty() {
            self.close_suggestions();
            return Ok(());
        }

        let fetch = self.suggestions.reset();
        self.suggestion_index = None;

        task_tx.send(AppTask::FetchSuggestions {
            request: PageRequest::new(query, fetch.page, fetch.size),
            token: fetch.token,
        })?;

        Ok(())
    }

    fn close_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestion_index = None;
    }

    fn on_query_edited(&mut self, now: Instant) {
        self.query.input(self.input.value().trim().to_string(), now);
        self.suggestion_index = None;
    }

    fn next_suggestion(&mut self) {
        let len = self.suggestions.len();
        if len == 0 {
            return;
        }
        self.suggestion_index = Some(match self.suggestion_index {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        });
    }

    fn previous_suggestion(&mut self) {
        self.suggestion_index = match self.suggestion_index {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    fn highlighted_suggestion(&self) -> Option<&Artist> {
        self.suggestion_index
            .and_then(|index| self.suggestions.items().get(index))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::mpsc::{self, Receiver},
        time::Duration,
    };

    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    use crate::{events::AppEvent, model::paged::FetchState};

    struct Harness {
        view: SearchView,
        task_tx: Sender<AppTask>,
        task_rx: Receiver<AppTask>,
        event_tx: Sender<AppEvent>,
        _event_rx: Receiver<AppEvent>,
    }

    impl Harness {
        fn new() -> Self {
            let (task_tx, task_rx) = mpsc::channel();
            let (event_tx, event_rx) = mpsc::channel();
            let mut view = SearchView::new(&AppConfig::default());
            view.activate();
            Self {
                view,
                task_tx,
                task_rx,
                event_tx,
                _event_rx: event_rx,
            }
        }

        fn press(&mut self, code: KeyCode, at: Instant) {
            let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
            self.view
                .process_event(&event, at, &self.task_tx, &self.event_tx)
                .unwrap();
        }

        fn tick(&mut self, at: Instant) {
            self.view.on_tick(at, &self.task_tx).unwrap();
        }
    }

    fn artist(id: i64, name: &str) -> Artist {
        Artist {
            artist_id: id,
            name_en: name.to_string(),
            name_kr: String::new(),
            debut_date: None,
            img_url: None,
            follower_count: None,
        }
    }

    fn single_page<T>(items: Vec<T>) -> Page<T> {
        Page {
            items,
            page: 1,
            size: 5,
            total_pages: 1,
            total_elements: 0,
        }
    }

    #[test]
    fn rapid_typing_requests_suggestions_once() {
        let mut h = Harness::new();
        let start = Instant::now();

        for (i, c) in "abc".chars().enumerate() {
            let at = start + Duration::from_millis(50 * i as u64);
            h.press(KeyCode::Char(c), at);
            h.tick(at);
        }
        h.tick(start + Duration::from_millis(200));
        assert!(h.task_rx.try_recv().is_err());

        h.tick(start + Duration::from_millis(400));

        match h.task_rx.try_recv() {
            Ok(AppTask::FetchSuggestions { request, .. }) => {
                assert_eq!(request.keyword, "abc");
                assert_eq!(request.size, 5);
            }
            other => panic!("expected FetchSuggestions, got {other:?}"),
        }
        assert!(h.task_rx.try_recv().is_err());
    }

    #[test]
    fn clearing_the_query_clears_suggestions_without_a_request() {
        let mut h = Harness::new();
        let start = Instant::now();

        h.press(KeyCode::Char('x'), start);
        h.tick(start + Duration::from_millis(300));
        let token = match h.task_rx.try_recv() {
            Ok(AppTask::FetchSuggestions { token, .. }) => token,
            other => panic!("expected FetchSuggestions, got {other:?}"),
        };

        let later = start + Duration::from_millis(400);
        h.press(KeyCode::Backspace, later);
        h.tick(later + Duration::from_millis(300));

        assert!(h.task_rx.try_recv().is_err());
        assert!(!h.view.apply_suggestions(&token, single_page(vec![artist(1, "XG")])));
        assert!(h.view.suggestions().is_empty());
    }

    #[test]
    fn late_suggestions_for_an_old_query_are_discarded() {
        let mut h = Harness::new();
        let start = Instant::now();

        h.press(KeyCode::Char('x'), start);
        h.tick(start + Duration::from_millis(300));
        let Ok(AppTask::FetchSuggestions { token: for_x, .. }) = h.task_rx.try_recv() else {
            panic!("expected a request for x");
        };

        let later = start + Duration::from_millis(400);
        h.press(KeyCode::Backspace, later);
        h.press(KeyCode::Char('y'), later);
        h.tick(later + Duration::from_millis(300));
        let Ok(AppTask::FetchSuggestions { token: for_y, .. }) = h.task_rx.try_recv() else {
            panic!("expected a request for y");
        };

        assert!(!h.view.apply_suggestions(&for_x, single_page(vec![artist(1, "XG")])));
        assert!(h.view.apply_suggestions(&for_y, single_page(vec![artist(2, "YENA")])));
        assert_eq!(h.view.suggestions()[0].name_en, "YENA");
    }

    #[test]
    fn submitting_searches_videos_and_closes_suggestions() {
        let mut h = Harness::new();
        let start = Instant::now();

        for c in "ive".chars() {
            h.press(KeyCode::Char(c), start);
        }
        h.press(KeyCode::Enter, start);

        match h.task_rx.try_recv() {
            Ok(AppTask::SearchVideos { request, .. }) => {
                assert_eq!(request.keyword, "ive");
                assert_eq!(request.size, 50);
            }
            other => panic!("expected SearchVideos, got {other:?}"),
        }

        h.tick(start + Duration::from_secs(1));
        assert!(h.task_rx.try_recv().is_err());
        assert_eq!(h.view.focus(), SearchFocus::Results);
    }

    #[test]
    fn failed_video_search_shows_a_banner() {
        let mut h = Harness::new();
        h.view.submit("aespa", &h.task_tx.clone()).unwrap();
        let Ok(AppTask::SearchVideos { token, .. }) = h.task_rx.try_recv() else {
            panic!("expected a video search");
        };

        assert!(h.view.apply_videos(&token, Page::empty(1, 50)));
        assert!(h.view.fail_videos(&token, "Search failed".to_string()));

        assert_eq!(h.view.videos().error(), Some("Search failed"));
        assert!(matches!(h.view.videos().state(), FetchState::Error(_)));
    }

    #[test]
    fn enter_on_a_highlighted_suggestion_searches_its_name() {
        let mut h = Harness::new();
        let start = Instant::now();

        h.press(KeyCode::Char('n'), start);
        h.tick(start + Duration::from_millis(300));
        let Ok(AppTask::FetchSuggestions { token, .. }) = h.task_rx.try_recv() else {
            panic!("expected suggestions to be requested");
        };
        h.view.apply_suggestions(
            &token,
            single_page(vec![artist(1, "NewJeans"), artist(2, "NMIXX")]),
        );

        h.press(KeyCode::Down, start);
        h.press(KeyCode::Down, start);
        h.press(KeyCode::Enter, start);

        match h.task_rx.try_recv() {
            Ok(AppTask::SearchVideos { request, .. }) => assert_eq!(request.keyword, "NMIXX"),
            other => panic!("expected SearchVideos, got {other:?}"),
        }
    }
}

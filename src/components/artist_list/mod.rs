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

//! Infinite-scroll artist list view.
//!
//! The list is identified by its kind (minor or rising), sort option and
//! keyword filter. Changing any of them resets the underlying [`PagedList`]
//! and requests page 1 again; scrolling near the end of what has been loaded
//! lets the [`Sentinel`] request the next page.
//!
//! The keyword filter is debounced, so typing a name only queries the backend
//! once the user pauses.

mod event;
mod render;

use std::{sync::mpsc::Sender, time::Instant};

use anyhow::Result;
use ratatui::widgets::TableState;
use tracing::debug;
use tui_input::Input;

use crate::{
    api::PageRequest,
    components::{Sentinel, Viewport},
    config::AppConfig,
    model::{
        Artist, ArtistKind, Page, SORT_OPTIONS, SortKey, SortOption, SortOrder,
        paged::{FetchState, PageFetch, PagedList, QueryToken},
        sort_option_index,
    },
    tasks::AppTask,
    util::debounce::Debouncer,
};

pub(crate) struct ArtistListView {
    pub(crate) is_active: bool,
    kind: ArtistKind,
    sort_index: usize,
    keyword_input: Input,
    editing: bool,
    keyword: Debouncer<String>,
    artists: PagedList<Artist>,
    table_state: TableState,
    viewport: Viewport,
    sentinel: Sentinel,
}

impl ArtistListView {
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            is_active: false,
            kind: ArtistKind::default(),
            sort_index: 0,
            keyword_input: Input::default(),
            editing: false,
            keyword: Debouncer::new(String::new(), config.debounce()),
            artists: PagedList::new(config.artist_page_size),
            table_state: TableState::new(),
            viewport: Viewport::default(),
            sentinel: Sentinel::new(config.prefetch_rows),
        }
    }

    pub(crate) fn kind(&self) -> ArtistKind {
        self.kind
    }

    pub(crate) fn sort_option(&self) -> &SortOption {
        &SORT_OPTIONS[self.sort_index]
    }

    pub(crate) fn keyword(&self) -> &str {
        self.keyword.value()
    }

    pub(crate) fn artists(&self) -> &PagedList<Artist> {
        &self.artists
    }

    /// Shows the view, loading the first page if nothing has been loaded yet.
    pub(crate) fn activate(&mut self, task_tx: &Sender<AppTask>) -> Result<()> {
        self.is_active = true;
        self.sentinel.connect();

        if matches!(self.artists.state(), FetchState::Idle) {
            self.reload(task_tx)?;
        }

        Ok(())
    }

    /// Hides the view. A keyword still waiting out its debounce window is
    /// dropped and the input goes back to the keyword actually applied.
    pub(crate) fn deactivate(&mut self) {
        self.is_active = false;
        self.editing = false;
        self.sentinel.disconnect();
        self.keyword.cancel();
        self.keyword_input = Input::new(self.keyword.value().clone());
    }

    /// Requests page 1 of the current identity, discarding everything loaded
    /// for the previous one.
    pub(crate) fn reload(&mut self, task_tx: &Sender<AppTask>) -> Result<()> {
        let fetch = self.artists.reset();
        self.table_state = TableState::new();
        self.viewport = Viewport::default();

        debug!(
            kind = self.kind.label(),
            sort = self.sort_option().label,
            keyword = %self.keyword.value(),
            "Reloading artists"
        );

        self.send_fetch(fetch, task_tx)
    }

    pub(crate) fn set_kind(&mut self, kind: ArtistKind, task_tx: &Sender<AppTask>) -> Result<()> {
        if self.kind == kind {
            return Ok(());
        }
        self.kind = kind;
        self.reload(task_tx)
    }

    /// Selects a sort option, returning `false` when no option matches.
    pub(crate) fn set_sort(
        &mut self,
        key: SortKey,
        order: SortOrder,
        task_tx: &Sender<AppTask>,
    ) -> Result<bool> {
        let Some(index) = sort_option_index(key, order) else {
            return Ok(false);
        };

        if index != self.sort_index {
            self.sort_index = index;
            self.reload(task_tx)?;
        }

        Ok(true)
    }

    /// Applies a keyword immediately, bypassing the debounce window.
    pub(crate) fn set_keyword(&mut self, keyword: &str, task_tx: &Sender<AppTask>) -> Result<()> {
        let keyword = keyword.trim().to_string();
        self.keyword_input = Input::new(keyword.clone());
        self.editing = false;

        if self.keyword.set(keyword) {
            self.reload(task_tx)?;
        }

        Ok(())
    }

    /// Applies the debounced keyword once it settles.
    pub(crate) fn on_tick(&mut self, now: Instant, task_tx: &Sender<AppTask>) -> Result<()> {
        if self.keyword.poll(now).is_some() {
            self.reload(task_tx)?;
        }

        Ok(())
    }

    /// Requests the next page if the end of the list has scrolled into view.
    /// Called after every redraw, once the viewport is known.
    pub(crate) fn check_sentinel(&mut self, task_tx: &Sender<AppTask>) -> Result<()> {
        if !self.sentinel.should_fetch(&self.artists, self.viewport) {
            return Ok(());
        }

        if let Some(fetch) = self.artists.fetch_more() {
            debug!(page = fetch.page, "Fetching next artist page");
            self.send_fetch(fetch, task_tx)?;
        }

        Ok(())
    }

    pub(crate) fn apply_page(&mut self, token: &QueryToken, page: Page<Artist>) -> bool {
        let applied = self.artists.apply(token, page);
        if applied && self.table_state.selected().is_none() && !self.artists.is_empty() {
            self.table_state.select(Some(0));
        }
        applied
    }

    fn send_fetch(&self, fetch: PageFetch, task_tx: &Sender<AppTask>) -> Result<()> {
        let option = self.sort_option();
        let request = PageRequest::new(self.keyword.value().as_str(), fetch.page, fetch.size)
            .sorted(option.key, option.order);

        task_tx.send(AppTask::FetchArtists {
            kind: self.kind,
            request,
            token: fetch.token,
        })?;

        Ok(())
    }

    fn on_keyword_edited(&mut self, now: Instant) {
        self.keyword
            .input(self.keyword_input.value().trim().to_string(), now);
    }

    fn cycle_sort(&mut self, task_tx: &Sender<AppTask>) -> Result<()> {
        self.sort_index = (self.sort_index + 1) % SORT_OPTIONS.len();
        self.reload(task_tx)
    }

    fn goto_next(&mut self) {
        let len = self.artists.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        if self.artists.is_empty() {
            return;
        }
        let i = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.artists.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.artists.is_empty() {
            self.table_state.select(Some(self.artists.len() - 1));
        }
    }
}

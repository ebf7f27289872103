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

//! Incremental, page-at-a-time result lists.
//!
//! A [`PagedList`] accumulates the pages of one remote result set. Every
//! change to whatever identifies the result set (query text, sort, filters)
//! goes through [`PagedList::reset`], which clears the items and issues a new
//! [`QueryToken`]. Responses carry the token they were requested with, so a
//! response for an identity that has since been replaced is recognised and
//! dropped instead of being appended.
//!
//! At most one page request is outstanding at a time: [`PagedList::fetch_more`]
//! is a no-op while a page is loading or once the set is exhausted.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tracing::debug;

use crate::model::Page;

/// Cancellation token tying a request to the result set identity it was
/// issued for.
#[derive(Debug, Clone)]
pub(crate) struct QueryToken {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl QueryToken {
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the list that issued this token still shows the same identity.
    ///
    /// Safe to call from the task worker thread.
    pub(crate) fn is_current(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.generation
    }

    fn belongs_to(&self, current: &Arc<AtomicU64>) -> bool {
        Arc::ptr_eq(&self.current, current)
    }
}

/// The request a list wants issued next.
#[derive(Debug, Clone)]
pub(crate) struct PageFetch {
    pub(crate) token: QueryToken,
    pub(crate) page: u32,
    pub(crate) size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FetchState {
    Idle,
    Loading,
    Ready { has_more: bool },
    LoadingMore,
    Error(String),
}

pub(crate) struct PagedList<T> {
    items: Vec<T>,
    state: FetchState,
    next_page: u32,
    page_size: u32,
    generation: Arc<AtomicU64>,
}

impl<T> PagedList<T> {
    pub(crate) fn new(page_size: u32) -> Self {
        Self {
            items: vec![],
            state: FetchState::Idle,
            next_page: 1,
            page_size: page_size.max(1),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn state(&self) -> &FetchState {
        &self.state
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading | FetchState::LoadingMore)
    }

    pub(crate) fn has_more(&self) -> bool {
        matches!(self.state, FetchState::Ready { has_more: true })
    }

    pub(crate) fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Starts a new result set: drops the items, invalidates every outstanding
    /// token and returns the request for the first page.
    pub(crate) fn reset(&mut self) -> PageFetch {
        self.invalidate();
        self.state = FetchState::Loading;

        PageFetch {
            token: self.token(),
            page: self.next_page,
            size: self.page_size,
        }
    }

    /// Empties the list without requesting anything, invalidating outstanding
    /// tokens.
    pub(crate) fn clear(&mut self) {
        self.invalidate();
        self.state = FetchState::Idle;
    }

    /// Returns the request for the next page, or `None` while a page is
    /// already loading or when there is nothing more to fetch.
    pub(crate) fn fetch_more(&mut self) -> Option<PageFetch> {
        if !self.has_more() {
            return None;
        }

        self.state = FetchState::LoadingMore;

        Some(PageFetch {
            token: self.token(),
            page: self.next_page,
            size: self.page_size,
        })
    }

    /// Appends a fetched page.
    ///
    /// Returns `false`, leaving the list untouched, when the token is stale,
    /// no page is pending, or the page is not the one that was requested.
    pub(crate) fn apply(&mut self, token: &QueryToken, page: Page<T>) -> bool {
        if !self.accepts(token) {
            debug!(generation = token.generation(), "Discarding stale page");
            return false;
        }

        if !self.is_loading() || page.page != self.next_page {
            debug!(
                page = page.page,
                expected = self.next_page,
                "Discarding unexpected page"
            );
            return false;
        }

        let received = page.items.len();
        self.items.extend(page.items);
        self.next_page += 1;

        let has_more = if received == 0 {
            false
        } else if page.total_elements > 0 {
            (self.items.len() as u64) < page.total_elements
        } else {
            page.page < page.total_pages
        };

        self.state = FetchState::Ready { has_more };

        true
    }

    /// Records a failure that the call site wants surfaced. Items already
    /// accumulated are kept, but no further pages are fetched.
    pub(crate) fn fail(&mut self, token: &QueryToken, message: String) -> bool {
        if !self.accepts(token) {
            return false;
        }

        self.state = FetchState::Error(message);

        true
    }

    fn accepts(&self, token: &QueryToken) -> bool {
        token.belongs_to(&self.generation) && token.is_current()
    }

    fn invalidate(&mut self) {
        self.items.clear();
        self.next_page = 1;
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    fn token(&self) -> QueryToken {
        QueryToken {
            generation: self.generation.load(Ordering::Acquire),
            current: Arc::clone(&self.generation),
        }
    }
}

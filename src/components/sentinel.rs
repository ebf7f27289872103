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

//! Trailing-edge visibility detection for infinite scrolling.
//!
//! A scrolled list has an imaginary marker row just past its last item. When
//! that row comes within `look_ahead` rows of the visible window the next
//! page should be requested, so it arrives before the user actually reaches
//! the end.

use crate::model::paged::PagedList;

/// The visible window of a scrolled list, in rows.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub(crate) struct Viewport {
    pub(crate) offset: usize,
    pub(crate) height: usize,
}

#[derive(Debug)]
pub(crate) struct Sentinel {
    look_ahead: usize,
    connected: bool,
}

impl Sentinel {
    /// Creates a disconnected sentinel.
    pub(crate) fn new(look_ahead: usize) -> Self {
        Self {
            look_ahead,
            connected: false,
        }
    }

    pub(crate) fn connect(&mut self) {
        self.connected = true;
    }

    pub(crate) fn disconnect(&mut self) {
        self.connected = false;
    }

    pub(crate) fn is_connected(&self) -> bool {
        self.connected
    }

    /// Whether the marker row after `len` items is inside the viewport plus
    /// the look-ahead margin.
    pub(crate) fn is_visible(&self, len: usize, viewport: Viewport) -> bool {
        len < viewport.offset + viewport.height + self.look_ahead
    }

    /// Whether the list should fetch its next page now.
    pub(crate) fn should_fetch<T>(&self, list: &PagedList<T>, viewport: Viewport) -> bool {
        self.is_connected()
            && !list.is_loading()
            && list.has_more()
            && self.is_visible(list.len(), viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::Page;

    fn page(page: u32, count: u32, total_elements: u64) -> Page<u32> {
        Page {
            items: (0..count).collect(),
            page,
            size: 20,
            total_pages: 0,
            total_elements,
        }
    }

    fn loaded_list(count: u32, total: u64) -> PagedList<u32> {
        let mut list = PagedList::new(20);
        let fetch = list.reset();
        list.apply(&fetch.token, page(1, count, total));
        list
    }

    #[test]
    fn fires_when_marker_is_within_look_ahead() {
        let mut sentinel = Sentinel::new(10);
        sentinel.connect();
        let list = loaded_list(20, 45);

        let far = Viewport { offset: 0, height: 5 };
        let near = Viewport { offset: 0, height: 11 };

        assert!(!sentinel.should_fetch(&list, far));
        assert!(sentinel.should_fetch(&list, near));
    }

    #[test]
    fn short_list_fires_without_scrolling() {
        let mut sentinel = Sentinel::new(10);
        sentinel.connect();
        let list = loaded_list(20, 45);

        assert!(sentinel.should_fetch(&list, Viewport { offset: 0, height: 30 }));
    }

    #[test]
    fn single_page_never_fires() {
        let mut sentinel = Sentinel::new(10);
        sentinel.connect();
        let list = loaded_list(5, 5);

        assert!(!sentinel.should_fetch(&list, Viewport { offset: 0, height: 30 }));
    }

    #[test]
    fn loading_list_is_left_alone() {
        let mut sentinel = Sentinel::new(10);
        sentinel.connect();
        let mut list = loaded_list(20, 45);
        list.fetch_more();

        assert!(!sentinel.should_fetch(&list, Viewport { offset: 10, height: 30 }));
    }

    #[test]
    fn disconnected_sentinel_never_fires() {
        let mut sentinel = Sentinel::new(10);
        let list = loaded_list(20, 45);

        assert!(!sentinel.should_fetch(&list, Viewport { offset: 10, height: 30 }));

        sentinel.connect();
        sentinel.disconnect();
        assert!(!sentinel.is_connected());
        assert!(!sentinel.should_fetch(&list, Viewport { offset: 10, height: 30 }));
    }
}

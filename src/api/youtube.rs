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

//! YouTube link parsing.
//!
//! Accepts the link forms people paste when adding a video to a watch room:
//! short links, watch pages, embeds and shorts.

use std::sync::LazyLock;

use regex::Regex;

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|youtube\.com/(?:watch\?(?:[^#\s]*&)?v=|embed/|v/|shorts/))([\w-]{11})")
        .expect("video id pattern is valid")
});

/// Extracts the 11-character video id from a YouTube URL.
pub(crate) fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID
        .captures(url.trim())
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, artists and
//! videos, in the canonical shape the views consume, along with the sort and
//! filter vocabulary used to identify a result set.

pub(crate) mod paged;
pub(crate) mod session;

use crate::{
    api::{RawArtist, RawVideo},
    util::html::decode_entities,
};

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Artist {
    pub(crate) artist_id: i64,
    pub(crate) name_en: String,
    pub(crate) name_kr: String,
    pub(crate) debut_date: Option<String>,
    pub(crate) img_url: Option<String>,
    pub(crate) follower_count: Option<u64>,
}

impl Artist {
    /// The name shown in lists, Korean first as the web client does.
    pub(crate) fn display_name(&self) -> &str {
        if self.name_kr.is_empty() {
            &self.name_en
        } else {
            &self.name_kr
        }
    }
}

impl From<RawArtist> for Artist {
    fn from(raw: RawArtist) -> Self {
        Self {
            artist_id: raw.artist_id,
            name_en: raw.name_en.unwrap_or_default(),
            name_kr: raw.name_kr.unwrap_or_default(),
            debut_date: raw.debut_date,
            img_url: raw.img_url,
            follower_count: raw.follower_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Video {
    pub(crate) video_id: String,
    pub(crate) title: String,
    pub(crate) channel_title: String,
    pub(crate) thumbnail_url: Option<String>,
}

impl Video {
    /// A placeholder record for a video known only by its id, such as one
    /// pasted in as a URL.
    pub(crate) fn from_id(video_id: String) -> Self {
        Self {
            title: watch_url(&video_id),
            video_id,
            channel_title: String::new(),
            thumbnail_url: None,
        }
    }

    pub(crate) fn watch_url(&self) -> String {
        watch_url(&self.video_id)
    }
}

impl From<RawVideo> for Video {
    fn from(raw: RawVideo) -> Self {
        Self {
            video_id: raw.video_id,
            title: decode_entities(&raw.title.unwrap_or_default()),
            channel_title: decode_entities(&raw.channel_title.unwrap_or_default()),
            thumbnail_url: raw.thumbnail_url,
        }
    }
}

pub(crate) fn watch_url(video_id: &str) -> String {
    format!("{WATCH_URL_PREFIX}{video_id}")
}

/// One slice of a remote result set, in canonical form.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Page<T> {
    pub(crate) items: Vec<T>,
    pub(crate) page: u32,
    pub(crate) size: u32,
    pub(crate) total_pages: u32,
    pub(crate) total_elements: u64,
}

impl<T> Page<T> {
    pub(crate) fn empty(page: u32, size: u32) -> Self {
        Self {
            items: vec![],
            page,
            size,
            total_pages: 1,
            total_elements: 0,
        }
    }

    pub(crate) fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub(crate) enum ArtistKind {
    #[default]
    Minor,
    Rising,
}

impl ArtistKind {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ArtistKind::Minor => "Minor",
            ArtistKind::Rising => "Rising",
        }
    }

    pub(crate) fn toggled(self) -> Self {
        match self {
            ArtistKind::Minor => ArtistKind::Rising,
            ArtistKind::Rising => ArtistKind::Minor,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum SortKey {
    Followers,
    Name,
    Debut,
}

impl SortKey {
    pub(crate) fn as_param(self) -> &'static str {
        match self {
            SortKey::Followers => "followers",
            SortKey::Name => "name",
            SortKey::Debut => "debut",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub(crate) fn as_param(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct SortOption {
    pub(crate) label: &'static str,
    pub(crate) key: SortKey,
    pub(crate) order: SortOrder,
}

pub(crate) const SORT_OPTIONS: [SortOption; 5] = [
    SortOption { label: "Most followers", key: SortKey::Followers, order: SortOrder::Desc },
    SortOption { label: "Name A-Z", key: SortKey::Name, order: SortOrder::Asc },
    SortOption { label: "Name Z-A", key: SortKey::Name, order: SortOrder::Desc },
    SortOption { label: "Earliest debut", key: SortKey::Debut, order: SortOrder::Asc },
    SortOption { label: "Latest debut", key: SortKey::Debut, order: SortOrder::Desc },
];

/// Finds the index of the sort option for a key and order, if one is offered.
pub(crate) fn sort_option_index(key: SortKey, order: SortOrder) -> Option<usize> {
    SORT_OPTIONS
        .iter()
        .position(|option| option.key == key && option.order == order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rising_artist_ids_are_projected_onto_artist_id() {
        let raw: RawArtist = serde_json::from_str(
            r#"{"emergingArtistId": 7, "nameEn": "LUCY", "nameKr": "루시", "followerCount": 12}"#,
        )
        .unwrap();

        let artist = Artist::from(raw);

        assert_eq!(artist.artist_id, 7);
        assert_eq!(artist.display_name(), "루시");
        assert_eq!(artist.follower_count, Some(12));
    }

    #[test]
    fn display_name_falls_back_to_english() {
        let raw: RawArtist = serde_json::from_str(r#"{"artistId": 3, "nameEn": "QWER"}"#).unwrap();

        assert_eq!(Artist::from(raw).display_name(), "QWER");
    }

    #[test]
    fn video_titles_are_decoded() {
        let raw: RawVideo = serde_json::from_str(
            r#"{"videoId": "dQw4w9WgXcQ", "title": "Don&#39;t Stop &amp; Go", "channelTitle": "M2"}"#,
        )
        .unwrap();

        let video = Video::from(raw);

        assert_eq!(video.title, "Don't Stop & Go");
        assert_eq!(video.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }

    #[test]
    fn sort_options_cover_each_key() {
        assert_eq!(sort_option_index(SortKey::Followers, SortOrder::Desc), Some(0));
        assert_eq!(sort_option_index(SortKey::Debut, SortOrder::Desc), Some(4));
        assert_eq!(sort_option_index(SortKey::Followers, SortOrder::Asc), None);
    }
}

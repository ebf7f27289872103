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
//! Response envelope normalization.
//!
//! List endpoints answer in one of two shapes:
//!
//! ```text
//! { "status": 200, "message": "...", "data": { "items": [...], "page": 1, ... } }
//! { "artistList": [...], "page": 1, "size": 30, "totalPages": 4, "totalElements": 97 }
//! ```
//!
//! [`normalize`] is the only place that knows about either. A non-null `data`
//! key selects the nested shape, anything else is read as the flat one. Every
//! field is optional on the wire; anything missing falls back to the
//! requested page and size, a single page, and no reported total. Records
//! that do not match the item type fail the whole page.

use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{api::FetchError, model::Page};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Body<T> {
    #[serde(alias = "artistList")]
    items: Option<Vec<T>>,
    page: Option<u32>,
    size: Option<u32>,
    total_pages: Option<u32>,
    total_elements: Option<u64>,
}

/// Parses either envelope shape into a canonical page.
///
/// `page` and `size` are the values that were requested, used when the
/// response does not echo them back.
pub(crate) fn normalize<T: DeserializeOwned>(
    bytes: &[u8],
    page: u32,
    size: u32,
) -> Result<Page<T>, FetchError> {
    let body = match serde_json::from_slice::<Value>(bytes)? {
        Value::Object(mut fields) => match fields.remove("data") {
            Some(data) if !data.is_null() => data,
            _ => Value::Object(fields),
        },
        other => other,
    };

    let body: Body<T> = serde_json::from_value(body)?;

    Ok(Page {
        items: body.items.unwrap_or_default(),
        page: body.page.unwrap_or(page),
        size: body.size.unwrap_or(size),
        total_pages: body.total_pages.unwrap_or(1),
        total_elements: body.total_elements.unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::api::{RawArtist, RawVideo};

    #[test]
    fn nested_envelope_with_items() {
        let json = r#"{
            "status": 200,
            "message": "ok",
            "data": {
                "page": 2, "size": 20, "totalPages": 3, "totalElements": 45,
                "items": [
                    {"emergingArtistId": 11, "nameEn": "KISS OF LIFE", "nameKr": "키스오브라이프"}
                ]
            }
        }"#;

        let page = normalize::<RawArtist>(json.as_bytes(), 2, 20).unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.total_elements, 45);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].artist_id, 11);
        assert_eq!(page.items[0].name_kr.as_deref(), Some("키스오브라이프"));
    }

    #[test]
    fn flat_envelope_with_artist_list() {
        let json = br#"{
            "artistList": [
                {"artistId": 1, "nameEn": "tripleS"},
                {"artistId": 2, "nameEn": "Billlie"}
            ],
            "page": 1, "size": 30, "totalPages": 1, "totalElements": 2
        }"#;

        let page = normalize::<RawArtist>(json, 1, 30).unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let json = br#"{"items": [{"videoId": "abcdefghijk", "title": "Live"}]}"#;

        let page = normalize::<RawVideo>(json, 1, 50).unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.size, 50);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_elements, 0);
    }

    #[test]
    fn empty_object_is_an_empty_page() {
        let page = normalize::<RawArtist>(b"{}", 3, 30).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.page, 3);
    }

    #[test]
    fn null_data_falls_back_to_the_flat_shape() {
        let page = normalize::<RawArtist>(br#"{"status": 500, "data": null}"#, 1, 20).unwrap();

        assert!(page.items.is_empty());
    }

    #[test]
    fn bad_records_in_nested_data_are_malformed() {
        let artists = br#"{"data": {"totalElements": 45, "items": [{"nameEn": "no id"}]}}"#;
        let videos = br#"{"data": {"items": [{"title": "missing id"}]}}"#;

        assert!(matches!(
            normalize::<RawArtist>(artists, 1, 20),
            Err(FetchError::Malformed(_))
        ));
        assert!(matches!(
            normalize::<RawVideo>(videos, 1, 50),
            Err(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn bad_records_in_flat_lists_are_malformed() {
        let json = br#"{"artistList": [{"artistId": "eleven"}]}"#;

        assert!(matches!(
            normalize::<RawArtist>(json, 1, 30),
            Err(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn garbage_is_malformed() {
        let result = normalize::<RawArtist>(b"<html>502 Bad Gateway</html>", 1, 20);

        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[test]
    fn non_object_body_is_malformed() {
        let result = normalize::<RawArtist>(b"[1, 2, 3]", 1, 20);

        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }
}

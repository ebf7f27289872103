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

//! Remote queries against the community backend.
//!
//! The [`QueryExecutor`] issues exactly one `GET` per call and always hands
//! back a [`Page`]: transport errors, non-success statuses and unreadable
//! bodies are logged, reported to the caller's error callback and then
//! absorbed into an empty, exhausted page. Call sites decide whether a failure
//! is worth showing to the user.
//!
//! The executor is blocking and is only ever driven from the task worker
//! thread.

mod envelope;
mod error;
pub(crate) mod youtube;

pub(crate) use error::FetchError;

use reqwest::{
    blocking::Client,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    config::AppConfig,
    model::{SortKey, SortOrder, Page},
};

/// Whether a request carries the session credentials.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Auth {
    Attach,
    Skip,
}

/// The list resources the client reads.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Endpoint {
    MinorArtists,
    RisingArtists,
    ArtistSearch,
    YoutubeSearch,
    FollowedArtists,
}

impl Endpoint {
    pub(crate) fn path(self) -> &'static str {
        match self {
            Endpoint::MinorArtists => "/minor-artists",
            Endpoint::RisingArtists => "/emerging-artists",
            Endpoint::ArtistSearch => "/artists",
            Endpoint::YoutubeSearch => "/public/youtube/search",
            Endpoint::FollowedArtists => "/me/artists",
        }
    }

    /// Public browse and search endpoints are callable anonymously.
    pub(crate) fn auth(self) -> Auth {
        match self {
            Endpoint::MinorArtists | Endpoint::RisingArtists | Endpoint::ArtistSearch => Auth::Skip,
            Endpoint::YoutubeSearch | Endpoint::FollowedArtists => Auth::Attach,
        }
    }

    /// Autocomplete-style endpoints are not called at all for a blank query.
    pub(crate) fn requires_query(self) -> bool {
        matches!(self, Endpoint::ArtistSearch | Endpoint::YoutubeSearch)
    }

    fn default_sort(self) -> Option<(SortKey, SortOrder)> {
        match self {
            Endpoint::RisingArtists => Some((SortKey::Followers, SortOrder::Desc)),
            _ => None,
        }
    }

    /// Builds the query string parameters for a page request.
    pub(crate) fn params(self, request: &PageRequest) -> Vec<(&'static str, String)> {
        let keyword = request.keyword.trim();

        match self {
            Endpoint::YoutubeSearch => vec![
                ("query", keyword.to_string()),
                ("maxResults", request.size.to_string()),
            ],
            Endpoint::FollowedArtists => vec![],
            _ => {
                let mut params = vec![
                    ("page", request.page.to_string()),
                    ("size", request.size.to_string()),
                ];

                if let Some((key, order)) = request.sort.or(self.default_sort()) {
                    params.push(("sort", key.as_param().to_string()));
                    params.push(("order", order.as_param().to_string()));
                }

                if !keyword.is_empty() {
                    params.push(("keyword", keyword.to_string()));
                }

                params
            }
        }
    }
}

/// Identifies one page of one result set.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PageRequest {
    pub(crate) keyword: String,
    pub(crate) page: u32,
    pub(crate) size: u32,
    pub(crate) sort: Option<(SortKey, SortOrder)>,
}

impl PageRequest {
    pub(crate) fn new(keyword: impl Into<String>, page: u32, size: u32) -> Self {
        Self {
            keyword: keyword.into(),
            page,
            size,
            sort: None,
        }
    }

    pub(crate) fn sorted(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort = Some((key, order));
        self
    }
}

/// Artist record as any of the artist endpoints send it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawArtist {
    #[serde(alias = "emergingArtistId")]
    pub(crate) artist_id: i64,
    pub(crate) name_en: Option<String>,
    pub(crate) name_kr: Option<String>,
    pub(crate) debut_date: Option<String>,
    pub(crate) img_url: Option<String>,
    pub(crate) follower_count: Option<u64>,
}

/// Video record as the YouTube search proxy sends it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawVideo {
    pub(crate) video_id: String,
    pub(crate) title: Option<String>,
    pub(crate) channel_title: Option<String>,
    pub(crate) thumbnail_url: Option<String>,
}

pub(crate) struct QueryExecutor {
    http: Client,
    base_url: String,
    access_token: Option<String>,
}

impl QueryExecutor {
    /// Builds an executor for the configured backend. `access_token` comes
    /// from the session and is attached to authenticated endpoints only.
    pub(crate) fn new(config: &AppConfig, access_token: Option<&str>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            access_token: access_token.map(str::to_string),
        })
    }

    /// Fetches one page, absorbing any failure into an empty page after
    /// passing it to `on_error`.
    pub(crate) fn execute<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: &PageRequest,
        on_error: &mut dyn FnMut(&FetchError),
    ) -> Page<T> {
        if endpoint.requires_query() && request.keyword.trim().is_empty() {
            debug!(path = endpoint.path(), "Blank query, not sending request");
            return Page::empty(request.page, request.size);
        }

        match self.fetch(endpoint, request) {
            Ok(page) => page,
            Err(e) => {
                warn!(path = endpoint.path(), page = request.page, "Query failed: {e}");
                on_error(&e);
                Page::empty(request.page, request.size)
            }
        }
    }

    fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: &PageRequest,
    ) -> Result<Page<T>, FetchError> {
        let url = format!("{}{}", self.base_url, endpoint.path());

        let mut builder = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&endpoint.params(request));

        if endpoint.auth() == Auth::Attach {
            if let Some(token) = &self.access_token {
                builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
            }
        }

        debug!(%url, page = request.page, keyword = %request.keyword, "Sending query");

        let response = builder.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Server { status });
        }

        let bytes = response.bytes()?;
        envelope::normalize(&bytes, request.page, request.size)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{BufRead, BufReader, Write},
        net::TcpListener,
        thread::{self, JoinHandle},
    };

    use super::*;

    use crate::model::{paged::PagedList, session::Session};

    const EMPTY_LIST_RESPONSE: &str = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 12\r\nConnection: close\r\n\r\n{\"items\":[]}";

    /// Answers a single request with `response`, handing back the request
    /// head it received.
    fn serve_once(response: &'static str) -> (AppConfig, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let config = AppConfig {
            api_base_url: format!("http://{}", listener.local_addr().unwrap()),
            ..AppConfig::default()
        };

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            stream.write_all(response.as_bytes()).unwrap();
            head.to_ascii_lowercase()
        });

        (config, handle)
    }

    fn param<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn rising_artists_default_to_most_followed() {
        let request = PageRequest::new("", 2, 20);

        let params = Endpoint::RisingArtists.params(&request);

        assert_eq!(param(&params, "page"), Some("2"));
        assert_eq!(param(&params, "sort"), Some("followers"));
        assert_eq!(param(&params, "order"), Some("desc"));
        assert_eq!(param(&params, "keyword"), None);
    }

    #[test]
    fn explicit_sort_and_keyword_are_sent() {
        let request = PageRequest::new("  ive ", 1, 30).sorted(SortKey::Name, SortOrder::Asc);

        let params = Endpoint::MinorArtists.params(&request);

        assert_eq!(param(&params, "sort"), Some("name"));
        assert_eq!(param(&params, "order"), Some("asc"));
        assert_eq!(param(&params, "keyword"), Some("ive"));
    }

    #[test]
    fn minor_artists_send_no_sort_unless_asked() {
        let params = Endpoint::MinorArtists.params(&PageRequest::new("", 1, 30));

        assert_eq!(param(&params, "sort"), None);
    }

    #[test]
    fn youtube_search_uses_query_and_max_results() {
        let params = Endpoint::YoutubeSearch.params(&PageRequest::new("aespa live", 1, 50));

        assert_eq!(param(&params, "query"), Some("aespa live"));
        assert_eq!(param(&params, "maxResults"), Some("50"));
        assert_eq!(param(&params, "page"), None);
    }

    #[test]
    fn public_endpoints_skip_credentials() {
        assert_eq!(Endpoint::MinorArtists.auth(), Auth::Skip);
        assert_eq!(Endpoint::ArtistSearch.auth(), Auth::Skip);
        assert_eq!(Endpoint::FollowedArtists.auth(), Auth::Attach);
    }

    #[test]
    fn blank_autocomplete_query_never_reaches_the_network() {
        let config = AppConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..AppConfig::default()
        };
        let executor = QueryExecutor::new(&config, None).unwrap();

        let mut failures = 0;
        let page: Page<RawArtist> = executor.execute(
            Endpoint::ArtistSearch,
            &PageRequest::new("   ", 1, 5),
            &mut |_| failures += 1,
        );

        assert!(page.items.is_empty());
        assert_eq!(failures, 0);
    }

    #[test]
    fn unreachable_server_is_absorbed_and_reported() {
        let config = AppConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..AppConfig::default()
        };
        let executor = QueryExecutor::new(&config, None).unwrap();

        let mut reported = vec![];
        let page: Page<RawVideo> = executor.execute(
            Endpoint::YoutubeSearch,
            &PageRequest::new("newjeans", 1, 50),
            &mut |e| reported.push(matches!(e, FetchError::Network(_))),
        );

        assert!(page.items.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(reported, vec![true]);
    }

    #[test]
    fn server_error_is_absorbed_and_reported() {
        let (config, server) = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let executor = QueryExecutor::new(&config, None).unwrap();

        let mut reported = vec![];
        let page: Page<RawArtist> = executor.execute(
            Endpoint::MinorArtists,
            &PageRequest::new("", 1, 30),
            &mut |e| {
                reported.push(match e {
                    FetchError::Server { status } => Some(status.as_u16()),
                    _ => None,
                })
            },
        );
        server.join().unwrap();

        assert_eq!(reported, vec![Some(500)]);
        assert!(page.items.is_empty());

        let mut list = PagedList::new(30);
        let fetch = list.reset();
        assert!(list.apply(&fetch.token, page));
        assert!(!list.has_more());
    }

    #[test]
    fn session_token_is_sent_to_authenticated_endpoints() {
        let session = Session::new(Some("abc123".to_string()));
        let (config, server) = serve_once(EMPTY_LIST_RESPONSE);
        let executor = QueryExecutor::new(&config, session.access_token()).unwrap();

        let page: Page<RawArtist> = executor.execute(
            Endpoint::FollowedArtists,
            &PageRequest::new("", 1, 30),
            &mut |e| panic!("unexpected failure: {e}"),
        );
        let head = server.join().unwrap();

        assert!(page.items.is_empty());
        assert!(head.starts_with("get /me/artists"));
        assert!(head.contains("authorization: bearer abc123"));
    }

    #[test]
    fn session_token_is_not_sent_to_public_endpoints() {
        let session = Session::new(Some("abc123".to_string()));
        let (config, server) = serve_once(EMPTY_LIST_RESPONSE);
        let executor = QueryExecutor::new(&config, session.access_token()).unwrap();

        let _: Page<RawArtist> = executor.execute(
            Endpoint::MinorArtists,
            &PageRequest::new("", 1, 30),
            &mut |e| panic!("unexpected failure: {e}"),
        );
        let head = server.join().unwrap();

        assert!(head.starts_with("get /minor-artists?"));
        assert!(!head.contains("authorization"));
    }
}

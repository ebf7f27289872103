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

use reqwest::StatusCode;
use thiserror::Error;

/// Ways a remote query can fail.
///
/// None of these reach the list stores; the executor turns each into an
/// empty, exhausted page and hands the error to the caller's callback.
#[derive(Error, Debug)]
pub(crate) enum FetchError {
    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server responded with {status}")]
    Server { status: StatusCode },

    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// A short message suitable for an inline banner.
    pub(crate) fn user_message(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "Could not reach the server. Check your connection and try again.",
            FetchError::Server { .. } => "Search failed on the server. Please try again.",
            FetchError::Malformed(_) => "The server sent a response we could not read.",
        }
    }
}

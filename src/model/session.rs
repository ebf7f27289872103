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

//! Signed-in user context.
//!
//! The session is owned by the application state and handed to whatever
//! needs it. Views only read from it; the followed-artist set is replaced
//! wholesale when the backend reports it.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub(crate) struct Session {
    access_token: Option<String>,
    followed: HashSet<i64>,
}

impl Session {
    pub(crate) fn new(access_token: Option<String>) -> Self {
        Self {
            access_token: access_token.filter(|token| !token.trim().is_empty()),
            followed: HashSet::new(),
        }
    }

    pub(crate) fn is_signed_in(&self) -> bool {
        self.access_token().is_some()
    }

    pub(crate) fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub(crate) fn is_following(&self, artist_id: i64) -> bool {
        self.followed.contains(&artist_id)
    }

    pub(crate) fn followed_count(&self) -> usize {
        self.followed.len()
    }

    pub(crate) fn replace_followed(&mut self, artist_ids: impl IntoIterator<Item = i64>) {
        self.followed = artist_ids.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_tokens_mean_signed_out() {
        assert!(!Session::new(Some("  ".to_string())).is_signed_in());
        assert!(!Session::new(None).is_signed_in());
        assert!(Session::new(Some("abc".to_string())).is_signed_in());
    }

    #[test]
    fn followed_artists_are_replaced() {
        let mut session = Session::new(Some("abc".to_string()));

        session.replace_followed([1, 2]);
        session.replace_followed([3]);

        assert!(session.is_following(3));
        assert!(!session.is_following(1));
        assert_eq!(session.followed_count(), 1);
    }
}

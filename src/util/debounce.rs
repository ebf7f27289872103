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

//! Input debouncing.
//!
//! A [`Debouncer`] holds back a rapidly changing value until it has been left
//! alone for a quiet period. There is no timer thread: the caller passes the
//! current [`Instant`] in, and the application tick polls for a settled value.

use std::time::{Duration, Instant};

pub(crate) struct Debouncer<T> {
    delay: Duration,
    output: T,
    pending: Option<(T, Instant)>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub(crate) fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            output: initial,
            pending: None,
        }
    }

    /// The last settled value.
    pub(crate) fn value(&self) -> &T {
        &self.output
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a new input value, restarting the quiet period if the value
    /// changed.
    pub(crate) fn input(&mut self, value: T, now: Instant) {
        let latest = self.pending.as_ref().map_or(&self.output, |(v, _)| v);
        if *latest == value {
            return;
        }

        if value == self.output {
            // Back to where we started, nothing to publish
            self.pending = None;
        } else {
            self.pending = Some((value, now + self.delay));
        }
    }

    /// Publishes the pending value once its quiet period has elapsed.
    pub(crate) fn poll(&mut self, now: Instant) -> Option<T> {
        let settled = matches!(&self.pending, Some((_, deadline)) if *deadline <= now);
        if settled { self.flush() } else { None }
    }

    /// Publishes the pending value immediately, if there is one.
    pub(crate) fn flush(&mut self) -> Option<T> {
        let (value, _) = self.pending.take()?;
        self.output = value;
        Some(self.output.clone())
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    /// Settles on `value` immediately, dropping anything pending. Returns
    /// whether the settled value changed.
    pub(crate) fn set(&mut self, value: T) -> bool {
        self.pending = None;
        if self.output == value {
            return false;
        }
        self.output = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn rapid_changes_publish_once_with_the_final_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), DELAY);

        let mut published = vec![];
        for (i, text) in ["a", "ab", "abc"].into_iter().enumerate() {
            let now = start + Duration::from_millis(100 * i as u64);
            debouncer.input(text.to_string(), now);
            published.extend(debouncer.poll(now));
        }

        let last_input = start + Duration::from_millis(200);
        published.extend(debouncer.poll(last_input + Duration::from_millis(299)));
        assert!(published.is_empty());

        published.extend(debouncer.poll(last_input + DELAY));
        published.extend(debouncer.poll(last_input + DELAY * 2));

        assert_eq!(published, vec!["abc".to_string()]);
        assert_eq!(debouncer.value(), "abc");
    }

    #[test]
    fn returning_to_the_settled_value_publishes_nothing() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new("abc".to_string(), DELAY);

        debouncer.input("abcd".to_string(), start);
        debouncer.input("abc".to_string(), start + Duration::from_millis(50));

        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + DELAY * 2), None);
    }

    #[test]
    fn repeating_the_pending_value_keeps_the_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(0, DELAY);

        debouncer.input(1, start);
        debouncer.input(1, start + Duration::from_millis(250));

        assert_eq!(debouncer.poll(start + DELAY), Some(1));
    }

    #[test]
    fn flush_publishes_immediately() {
        let mut debouncer = Debouncer::new(0, DELAY);

        debouncer.input(5, Instant::now());

        assert_eq!(debouncer.flush(), Some(5));
        assert_eq!(debouncer.flush(), None);
    }

    #[test]
    fn cancel_drops_the_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(0, DELAY);

        debouncer.input(5, start);
        debouncer.cancel();

        assert_eq!(debouncer.poll(start + DELAY), None);
        assert_eq!(*debouncer.value(), 0);
    }

    #[test]
    fn set_replaces_pending_input() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), DELAY);

        debouncer.input("iv".to_string(), start);
        assert!(debouncer.set("ive".to_string()));
        assert!(!debouncer.set("ive".to_string()));

        assert_eq!(debouncer.poll(start + DELAY), None);
        assert_eq!(debouncer.value(), "ive");
    }
}

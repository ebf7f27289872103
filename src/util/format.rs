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

/// Formats a follower count into a compact human-readable string.
///
/// # Arguments
///
/// * `count` - The number of followers.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_count(950), "950");
/// assert_eq!(format_count(12_300), "12.3K");
/// assert_eq!(format_count(4_500_000), "4.5M");
/// ```
pub(crate) fn format_count(count: u64) -> String {
    match count {
        0..1_000 => count.to_string(),
        1_000..1_000_000 => format!("{:.1}K", count as f64 / 1_000.0),
        _ => format!("{:.1}M", count as f64 / 1_000_000.0),
    }
}

/// Shortens `text` to at most `max` characters, marking the cut with an
/// ellipsis.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('\u{2026}');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_compacted() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12_300), "12.3K");
        assert_eq!(format_count(4_500_000), "4.5M");
    }

    #[test]
    fn long_text_is_truncated_by_characters() {
        assert_eq!(truncate("에스파 aespa", 4), "에스파\u{2026}");
        assert_eq!(truncate("IVE", 4), "IVE");
    }
}

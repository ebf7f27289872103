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

/// Replaces HTML character references with the characters they stand for.
///
/// Video titles come back from the search endpoint HTML-escaped (for example
/// `Don&#39;t`). Named references other than the handful YouTube emits, and
/// malformed references, are left as they are.
pub(crate) fn decode_entities(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        decoded.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match candidate.find(';').and_then(|end| {
            decode_reference(&candidate[1..end]).map(|c| (c, end))
        }) {
            Some((c, end)) => {
                decoded.push(c);
                rest = &candidate[end + 1..];
            }
            None => {
                decoded.push('&');
                rest = &candidate[1..];
            }
        }
    }

    decoded.push_str(rest);
    decoded
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }

    if let Some(decimal) = name.strip_prefix('#') {
        return decimal.parse().ok().and_then(char::from_u32);
    }

    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{00A0}'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_and_named_references() {
        assert_eq!(decode_entities("Don&#39;t &amp; Won&#x27;t"), "Don't & Won't");
        assert_eq!(decode_entities("&quot;Hype Boy&quot;"), "\"Hype Boy\"");
    }

    #[test]
    fn leaves_unknown_and_unterminated_references() {
        assert_eq!(decode_entities("R&B &copy; 5 & 6"), "R&B &copy; 5 & 6");
        assert_eq!(decode_entities("fan&"), "fan&");
    }

    #[test]
    fn keeps_non_ascii_text() {
        assert_eq!(decode_entities("뉴진스 &lt;3"), "뉴진스 <3");
    }
}

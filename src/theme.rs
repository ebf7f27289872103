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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) input_bg_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) muted_colour: Color,
    pub(crate) error_colour: Color,
    pub(crate) following_colour: Color,

    pub(crate) table_name_fg: Color,
    pub(crate) table_secondary_fg: Color,
    pub(crate) table_date_fg: Color,
    pub(crate) table_count_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 22, 34),
            accent_colour: Color::Rgb(255, 196, 0),
            border_colour: Color::Rgb(102, 102, 102),
            input_bg_colour: Color::Rgb(38, 35, 52),
            commander_colour: Color::Rgb(255, 255, 255),
            highlight_bg: Color::Rgb(58, 52, 84),
            muted_colour: Color::Rgb(140, 138, 150),
            error_colour: Color::Rgb(239, 83, 80),
            following_colour: Color::Rgb(255, 105, 135),

            table_name_fg: Color::Rgb(255, 255, 255),
            table_secondary_fg: Color::Rgb(179, 157, 219),
            table_date_fg: Color::Rgb(162, 161, 166),
            table_count_fg: Color::Rgb(255, 215, 0),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is used to set the terminal emulator's background color via escape
    /// sequences. Only [`Color::Rgb`] has an exact hex form, any other variant
    /// gives `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{r:02x}{g:02x}{b:02x}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_hex_formats_rgb_colours() {
        assert_eq!(Theme::to_hex(Color::Rgb(24, 22, 255)), Some("#1816ff".to_string()));
        assert_eq!(Theme::to_hex(Color::Reset), None);
    }
}

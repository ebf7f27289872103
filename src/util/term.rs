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

//! Terminal emulator styling.
//!
//! Sets and restores the emulator background colour with OSC 11/111 escape
//! sequences so the whole window matches the theme, not just the cells
//! ratatui draws. Terminals that do not understand the sequences ignore them.

use std::io::{self, Write};

use tracing::warn;

/// Sets the terminal background colour, `hex_color` being e.g. `"#1e1e1e"`.
pub(crate) fn set_terminal_bg(hex_color: &str) {
    write_sequence(&format!("\x1b]11;{hex_color}\x07"));
}

/// Reverts the terminal background to the user's own configuration.
pub(crate) fn reset_terminal_bg() {
    write_sequence("\x1b]111\x07");
}

fn write_sequence(sequence: &str) {
    let mut stdout = io::stdout();
    if let Err(e) = stdout
        .write_all(sequence.as_bytes())
        .and_then(|()| stdout.flush())
    {
        warn!("Failed to write terminal control sequence: {e}");
    }
}

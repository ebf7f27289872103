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

//! Common utilities and helper functions.
//!
//! # Sub-modules
//!
//! * [`debounce`]: Holding back rapidly changing input until it settles.
//! * [`format`]: Converting raw data into human-readable strings for the UI.
//! * [`html`]: Decoding HTML-escaped text returned by the backend.
//! * [`term`]: Terminal emulator colour control.

pub(crate) mod debounce;
pub(crate) mod format;
pub(crate) mod html;
pub(crate) mod term;

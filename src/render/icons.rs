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

pub(crate) const ICON_FOLLOWING: &str = "\u{2764}";
pub(crate) const ICON_MORE: &str = "\u{2026}";
pub(crate) const ICON_ERROR: &str = "\u{26A0}\u{FE0E}";

pub(crate) const ICON_SORT_ASC: &str = "\u{25B2}";
pub(crate) const ICON_SORT_DESC: &str = "\u{25BC}";

pub(crate) const ICON_SIGNED_IN: &str = "\u{25CF}";
pub(crate) const ICON_GUEST: &str = "\u{25CB}";

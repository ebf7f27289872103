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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App, StatusMessage,
    render::icons::{ICON_ERROR, ICON_GUEST, ICON_SIGNED_IN},
};

/// Draws the last status message on the left and the session summary on the
/// right.
pub(super) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let session = if app.session.is_signed_in() {
        format!(
            "{ICON_SIGNED_IN} signed in, following {} ",
            app.session.followed_count()
        )
    } else {
        format!("{ICON_GUEST} guest ")
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(session.chars().count() as u16),
        ])
        .split(area);

    let message = match &app.status {
        Some(StatusMessage::Info(text)) => Line::from(Span::styled(
            format!(" {text}"),
            Style::default().fg(theme.accent_colour),
        )),
        Some(StatusMessage::Error(text)) => Line::from(Span::styled(
            format!(" {ICON_ERROR} {text}"),
            Style::default().fg(theme.error_colour),
        )),
        None => Line::default(),
    };

    f.render_widget(Paragraph::new(message), chunks[0]);
    f.render_widget(
        Paragraph::new(session).style(Style::default().fg(theme.muted_colour)),
        chunks[1],
    );
}

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

mod commander;
pub(crate) mod icons;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Tabs},
};

use crate::{
    App, MainView,
    render::{commander::draw_commander, status::draw_status},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: tabs, main, status, commander
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_tabs(f, outer[0], app);

    match app.main_view {
        MainView::Search => app.search_view.draw(f, outer[1], &app.theme),
        MainView::Artists => app.artist_view.draw(f, outer[1], &app.session, &app.theme),
    };

    draw_status(f, outer[2], app);

    draw_commander(f, outer[3], app);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let selected = match app.main_view {
        MainView::Search => 0,
        MainView::Artists => 1,
    };

    let tabs = Tabs::new(vec![Line::from(" 1 Search "), Line::from(" 2 Artists ")])
        .select(selected)
        .style(Style::default().fg(app.theme.muted_colour))
        .highlight_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    f.render_widget(tabs, area);
}

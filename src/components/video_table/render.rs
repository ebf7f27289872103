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

//! UI rendering logic for the video table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{components::VideoTable, model::Video, theme::Theme, util::format::truncate};

const TITLE_WIDTH: usize = 80;

impl VideoTable {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, videos: &[Video], theme: &Theme) {
        let rows = videos.iter().map(|video| {
            let selection_indicator = match self.selection_number(&video.video_id) {
                Some(number) => Line::from(number.to_string())
                    .style(Style::default().fg(Color::Black).bg(theme.accent_colour))
                    .alignment(Alignment::Right),
                None => Line::from(""),
            };

            Row::new(vec![
                Cell::from(selection_indicator),
                Cell::from(""),
                Cell::from(
                    Line::from(truncate(&video.title, TITLE_WIDTH))
                        .style(Style::default().fg(theme.table_name_fg)),
                ),
                Cell::from(
                    Line::from(video.channel_title.as_str())
                        .style(Style::default().fg(theme.table_secondary_fg)),
                ),
                Cell::from(
                    Line::from(video.video_id.as_str()).style(Style::default().fg(theme.muted_colour)),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Percentage(60),
                Constraint::Percentage(25),
                Constraint::Length(11),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("#").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Title"),
                Cell::from("Channel"),
                Cell::from("Id"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(Color::White))
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

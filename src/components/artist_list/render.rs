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

//! UI rendering logic for the artist list.
//!
//! Besides drawing, rendering records the visible window of the table so the
//! sentinel check that follows each redraw sees the current scroll position.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::{ArtistListView, Viewport},
    model::{SortOrder, paged::FetchState, session::Session},
    render::icons::{ICON_ERROR, ICON_FOLLOWING, ICON_MORE, ICON_SORT_ASC, ICON_SORT_DESC},
    theme::Theme,
    util::format::format_count,
};

// Header row plus its bottom margin
const TABLE_HEADER_ROWS: u16 = 2;

impl ArtistListView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_header(f, chunks[0], theme);
        self.draw_filter(f, chunks[1], theme);
        self.draw_table(f, chunks[2], session, theme);
        self.draw_footer(f, chunks[3], theme);
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let option = self.sort_option();
        let arrow = match option.order {
            SortOrder::Asc => ICON_SORT_ASC,
            SortOrder::Desc => ICON_SORT_DESC,
        };

        let mut header_text = format!(
            "{} artists | {} {} | {} loaded",
            self.kind().label(),
            option.label,
            arrow,
            self.artists().len()
        );

        if !self.keyword().is_empty() {
            let _ = write!(header_text, " | matching \"{}\"", self.keyword());
        }

        let header = Paragraph::new(header_text)
            .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
            .block(header_block);

        f.render_widget(header, area);
    }

    fn draw_filter(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let label = " Filter: ";
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(label.len() as u16), Constraint::Min(1)])
            .split(area);

        let label_style = if self.editing {
            Style::default().fg(theme.accent_colour).bold()
        } else {
            Style::default().fg(theme.muted_colour)
        };

        f.render_widget(Paragraph::new(label).style(label_style), chunks[0]);
        // Trailing marker while the typed keyword waits out the debounce
        let mut spans = vec![Span::raw(self.keyword_input.value())];
        if self.keyword.is_pending() {
            spans.push(Span::styled(
                format!(" {ICON_MORE}"),
                Style::default().fg(theme.muted_colour),
            ));
        }

        f.render_widget(
            Paragraph::new(Line::from(spans))
                .style(Style::default().fg(Color::White).bg(theme.input_bg_colour)),
            chunks[1],
        );

        if self.editing {
            let cursor_x = chunks[1].x + self.keyword_input.visual_cursor() as u16;
            f.set_cursor_position((cursor_x, chunks[1].y));
        }
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
        if self.artists.is_empty() {
            self.viewport = Viewport {
                offset: 0,
                height: area.height as usize,
            };

            let placeholder = match self.artists.state() {
                FetchState::Idle | FetchState::Loading | FetchState::LoadingMore => {
                    "Loading artists...".to_string()
                }
                FetchState::Error(message) => format!("{ICON_ERROR} {message}"),
                FetchState::Ready { .. } if self.keyword().is_empty() => {
                    "No artists to show.".to_string()
                }
                FetchState::Ready { .. } => format!("No artists match \"{}\".", self.keyword()),
            };

            f.render_widget(
                Paragraph::new(placeholder)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.muted_colour))
                    .block(Block::default().padding(Padding::top(1))),
                area,
            );
            return;
        }

        let mut rows: Vec<Row> = self
            .artists
            .items()
            .iter()
            .map(|artist| {
                let marker = if session.is_following(artist.artist_id) {
                    Line::from(ICON_FOLLOWING).style(Style::default().fg(theme.following_colour))
                } else {
                    Line::from("")
                };

                let secondary = if artist.name_kr.is_empty() {
                    ""
                } else {
                    artist.name_en.as_str()
                };

                let followers = artist.follower_count.map(format_count).unwrap_or_default();

                Row::new(vec![
                    Cell::from(marker),
                    Cell::from(
                        Line::from(artist.display_name()).style(Style::default().fg(theme.table_name_fg)),
                    ),
                    Cell::from(Line::from(secondary).style(Style::default().fg(theme.table_secondary_fg))),
                    Cell::from(
                        Line::from(artist.debut_date.as_deref().unwrap_or(""))
                            .style(Style::default().fg(theme.table_date_fg)),
                    ),
                    Cell::from(
                        Line::from(followers)
                            .style(Style::default().fg(theme.table_count_fg))
                            .alignment(Alignment::Right),
                    ),
                ])
            })
            .collect();

        if matches!(self.artists.state(), FetchState::LoadingMore) {
            rows.push(Row::new(vec![
                Cell::from(""),
                Cell::from(Line::from(vec![
                    Span::raw(ICON_MORE),
                    Span::raw(" loading more"),
                ]))
                .style(Style::default().fg(theme.muted_colour)),
            ]));
        }

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Percentage(35),
                Constraint::Percentage(30),
                Constraint::Length(12),
                Constraint::Length(9),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Artist"),
                Cell::from(""),
                Cell::from("Debut"),
                Cell::from(Line::from("Followers").alignment(Alignment::Right)),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(Color::White))
        .block(Block::default().padding(Padding::horizontal(1)));

        f.render_stateful_widget(table, area, &mut self.table_state);

        self.viewport = Viewport {
            offset: self.table_state.offset(),
            height: area.height.saturating_sub(TABLE_HEADER_ROWS) as usize,
        };
    }

    fn draw_footer(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let hints = if self.editing {
            " enter apply | esc done"
        } else {
            " / filter | t minor/rising | s sort | r reload | j/k move"
        };

        f.render_widget(
            Paragraph::new(hints).style(Style::default().fg(theme.muted_colour)),
            area,
        );
    }
}

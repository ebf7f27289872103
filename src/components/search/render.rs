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

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph},
};

use crate::{
    components::{SearchFocus, SearchView},
    model::paged::FetchState,
    render::{Render, icons::ICON_ERROR},
    theme::Theme,
    util::format::truncate,
};

const SELECTION_TITLE_WIDTH: usize = 40;

impl Render for SearchView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_input(f, chunks[0], theme);
        self.draw_results_header(f, chunks[1], theme);

        let body = if self.selection().is_empty() {
            Layout::default()
                .constraints([Constraint::Min(0)])
                .split(chunks[2])
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
                .split(chunks[2])
        };

        self.draw_results(f, body[0], theme);
        if body.len() > 1 {
            self.draw_selection(f, body[1], theme);
        }

        self.draw_footer(f, chunks[3], theme);

        // Drawn last so it overlays the results
        if self.focus() == SearchFocus::Input && !self.suggestions().is_empty() {
            self.draw_suggestions(f, chunks[0], area, theme);
        }
    }
}

impl SearchView {
    fn draw_input(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus() == SearchFocus::Input;
        let border_colour = if focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(
            Paragraph::new(self.input.value())
                .style(Style::default().fg(Color::White))
                .block(block),
            area,
        );

        if focused {
            let cursor_x = inner.x + self.input.visual_cursor() as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }

    fn draw_results_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header = match (self.videos().error(), &self.submitted) {
            (Some(message), _) => Paragraph::new(format!("{ICON_ERROR} {message}"))
                .style(Style::default().fg(theme.error_colour).add_modifier(Modifier::BOLD)),

            (None, Some(query)) => {
                let mut text = format!("Videos for \"{}\" | {} found", query, self.videos().len());
                let selected = self.selection().len();
                if selected > 0 {
                    let _ = write!(text, " | {selected} selected");
                }
                Paragraph::new(text).style(Style::default().fg(theme.accent_colour))
            }

            (None, None) => Paragraph::new("Videos").style(Style::default().fg(theme.accent_colour)),
        };

        f.render_widget(header.block(block), area);
    }

    fn draw_results(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let placeholder = match (self.videos.state(), &self.submitted) {
            (_, None) => Some("Type to find artists, press enter to search videos.".to_string()),
            (FetchState::Loading, Some(_)) => Some("Searching...".to_string()),
            (FetchState::Ready { .. }, Some(query)) if self.videos.is_empty() => {
                Some(format!("No videos found for \"{query}\"."))
            }
            _ => None,
        };

        if let Some(text) = placeholder {
            f.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.muted_colour))
                    .block(Block::default().padding(Padding::top(1))),
                area,
            );
            return;
        }

        let videos = self.videos.items();
        self.video_table.draw(f, area, videos, theme);
    }

    fn draw_selection(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .selection()
            .iter()
            .enumerate()
            .map(|(index, video)| {
                ListItem::new(Line::from(format!(
                    "{:>2}. {}",
                    index + 1,
                    truncate(&video.title, SELECTION_TITLE_WIDTH)
                )))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::LEFT)
                .title(" Selection ")
                .border_style(Style::default().fg(theme.border_colour))
                .padding(Padding::horizontal(1)),
        );

        f.render_widget(list, area);
    }

    fn draw_suggestions(&self, f: &mut Frame, anchor: Rect, bounds: Rect, theme: &Theme) {
        let suggestions = self.suggestions();
        let height = (suggestions.len() as u16 + 2).min(bounds.bottom().saturating_sub(anchor.bottom()));
        if height <= 2 {
            return;
        }

        let area = Rect {
            x: anchor.x + 1,
            y: anchor.bottom(),
            width: anchor.width.saturating_sub(2).min(48),
            height,
        };

        let items: Vec<ListItem> = suggestions
            .iter()
            .map(|artist| {
                let mut text = artist.display_name().to_string();
                if !artist.name_kr.is_empty() && !artist.name_en.is_empty() {
                    let _ = write!(text, " ({})", artist.name_en);
                }
                ListItem::new(text)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border_colour))
                    .style(Style::default().bg(theme.background_colour)),
            )
            .highlight_style(Style::default().bg(theme.highlight_bg).fg(Color::White));

        let mut state = ListState::default().with_selected(self.suggestion_index);

        f.render_widget(Clear, area);
        f.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let hints = match self.focus() {
            SearchFocus::Input => " enter search | up/down suggestions | tab results | esc close",
            SearchFocus::Results => " space select | enter open | tab search box | : command",
        };

        f.render_widget(
            Paragraph::new(hints).style(Style::default().fg(theme.muted_colour)),
            area,
        );
    }
}

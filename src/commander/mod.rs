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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and dispatching a corresponding
//! application command event when typing is finished and a command is
//! submitted.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    api::youtube::extract_video_id,
    events::AppEvent,
    model::{ArtistKind, SortKey, SortOrder},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    Quit,
    ShowSearch,
    ShowArtists,
    Find(String),
    Filter(String),
    Kind(ArtistKind),
    Sort(SortKey, SortOrder),
    AddVideo(String),
    ClearSelection,
}

#[derive(Error, Debug, PartialEq)]
pub(crate) enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Not a YouTube link: {0}")]
    InvalidLink(String),
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning whether the command line consumed
    /// it. Parsed commands and parse errors are sent as application events.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if !buffer.is_empty() {
                    match parse_command(&buffer) {
                        Ok(command) => event_tx.send(AppEvent::Command(command))?,
                        Err(e) => event_tx.send(AppEvent::Error(e.to_string()))?,
                    }
                }
            }

            _ => {
                // Delegate all other key events to the managed input component
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

pub(crate) fn parse_command(buffer: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] | ["quit"] => Ok(Command::Quit),

        ["search"] => Ok(Command::ShowSearch),
        ["artists"] => Ok(Command::ShowArtists),

        ["find"] => Err(CommandError::Usage("find <text>")),
        ["find", words @ ..] => Ok(Command::Find(words.join(" "))),

        ["filter", words @ ..] => Ok(Command::Filter(words.join(" "))),

        ["kind", "minor"] => Ok(Command::Kind(ArtistKind::Minor)),
        ["kind", "rising"] => Ok(Command::Kind(ArtistKind::Rising)),
        ["kind", ..] => Err(CommandError::Usage("kind minor|rising")),

        ["sort", key] => parse_sort(key, None),
        ["sort", key, order] => parse_sort(key, Some(*order)),
        ["sort", ..] => Err(CommandError::Usage("sort followers|name|debut [asc|desc]")),

        ["yt", url] => extract_video_id(url)
            .map(Command::AddVideo)
            .ok_or_else(|| CommandError::InvalidLink(url.to_string())),
        ["yt", ..] => Err(CommandError::Usage("yt <url>")),

        ["clear"] => Ok(Command::ClearSelection),

        [cmd, ..] => Err(CommandError::Unknown(cmd.to_string())),

        [] => Err(CommandError::Unknown(String::new())),
    }
}

fn parse_sort(key: &str, order: Option<&str>) -> Result<Command, CommandError> {
    const USAGE: &str = "sort followers|name|debut [asc|desc]";

    let (key, default_order) = match key {
        "followers" => (SortKey::Followers, SortOrder::Desc),
        "name" => (SortKey::Name, SortOrder::Asc),
        "debut" => (SortKey::Debut, SortOrder::Desc),
        _ => return Err(CommandError::Usage(USAGE)),
    };

    let order = match order {
        None => default_order,
        Some("asc") => SortOrder::Asc,
        Some("desc") => SortOrder::Desc,
        Some(_) => return Err(CommandError::Usage(USAGE)),
    };

    Ok(Command::Sort(key, order))
}

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

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    App, MainView, StatusMessage,
    commander::Command,
    events::AppEvent,
    model::{Artist, Page, Video, paged::QueryToken},
};

pub(super) fn handle_tick(app: &mut App) -> Result<()> {
    let now = Instant::now();
    app.search_view.on_tick(now, &app.task_tx)?;
    app.artist_view.on_tick(now, &app.task_tx)?;

    Ok(())
}

pub(super) fn handle_after_draw(app: &mut App) -> Result<()> {
    if app.artist_view.is_active {
        app.artist_view.check_sentinel(&app.task_tx)?;
    }

    Ok(())
}

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) -> Result<()> {
    match main_view {
        MainView::Search => {
            app.artist_view.deactivate();
            app.search_view.activate();
        }
        MainView::Artists => {
            app.search_view.deactivate();
            app.artist_view.activate(&app.task_tx)?;
        }
    }
    app.main_view = main_view;

    Ok(())
}

pub(super) fn handle_artists_loaded(app: &mut App, token: QueryToken, page: Page<Artist>) {
    let count = page.items.len();
    if app.artist_view.apply_page(&token, page) {
        debug!(count, total = app.artist_view.artists().len(), "Artists appended");
    }
}

pub(super) fn handle_suggestions_loaded(app: &mut App, token: QueryToken, page: Page<Artist>) {
    app.search_view.apply_suggestions(&token, page);
}

pub(super) fn handle_videos_loaded(app: &mut App, token: QueryToken, page: Page<Video>) {
    app.search_view.apply_videos(&token, page);
}

pub(super) fn handle_video_search_failed(app: &mut App, token: QueryToken, message: String) {
    app.search_view.fail_videos(&token, message);
}

pub(super) fn handle_followed_artists_loaded(app: &mut App, ids: Vec<i64>) {
    app.session.replace_followed(ids);
    info!(count = app.session.followed_count(), "Followed artists loaded");
}

pub(super) fn handle_command(app: &mut App, command: Command) -> Result<()> {
    debug!(?command, "Running command");

    match command {
        Command::Quit => app.event_tx.send(AppEvent::ExitApplication)?,

        Command::ShowSearch => handle_set_main_view(app, MainView::Search)?,
        Command::ShowArtists => handle_set_main_view(app, MainView::Artists)?,

        Command::Find(query) => {
            handle_set_main_view(app, MainView::Search)?;
            app.search_view.submit(&query, &app.task_tx)?;
        }

        Command::Filter(keyword) => {
            handle_set_main_view(app, MainView::Artists)?;
            app.artist_view.set_keyword(&keyword, &app.task_tx)?;
        }

        Command::Kind(kind) => {
            handle_set_main_view(app, MainView::Artists)?;
            app.artist_view.set_kind(kind, &app.task_tx)?;
        }

        Command::Sort(key, order) => {
            handle_set_main_view(app, MainView::Artists)?;
            if !app.artist_view.set_sort(key, order, &app.task_tx)? {
                handle_error(
                    app,
                    format!("No sort option for {} {}", key.as_param(), order.as_param()),
                );
            }
        }

        Command::AddVideo(video_id) => {
            let video = Video::from_id(video_id);
            let message = format!("Added {}", video.watch_url());
            if app.search_view.add_to_selection(video) {
                handle_status(app, message);
            } else {
                handle_status(app, "Video is already selected".to_string());
            }
        }

        Command::ClearSelection => {
            app.search_view.clear_selection();
            handle_status(app, "Selection cleared".to_string());
        }
    }

    Ok(())
}

pub(super) fn handle_status(app: &mut App, message: String) {
    app.status = Some(StatusMessage::Info(message));
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!("{message}");
    app.status = Some(StatusMessage::Error(message));
}

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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking
//! network queries from the main UI thread. It provides a dedicated worker
//! loop that translates [`AppTask`] requests into backend queries and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! There is exactly one worker, so queries run one at a time and their
//! results arrive on the event channel in the order the tasks were sent.
//! Every paged task carries the [`QueryToken`] of the list that asked for it;
//! a task whose token went stale while it sat in the queue is dropped without
//! touching the network.

mod handlers;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::{error, info};

use crate::{
    api::{PageRequest, QueryExecutor},
    config::AppConfig,
    events::AppEvent,
    model::{ArtistKind, paged::QueryToken},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    FetchArtists {
        kind: ArtistKind,
        request: PageRequest,
        token: QueryToken,
    },

    FetchSuggestions {
        request: PageRequest,
        token: QueryToken,
    },

    SearchVideos {
        request: PageRequest,
        token: QueryToken,
    },

    FetchFollowedArtists,
}

/// Spawns a background thread to process application tasks.
///
/// The worker builds its own HTTP client and enters a blocking loop,
/// listening for incoming [`AppTask`]s until the task channel closes.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `access_token` - The session's credentials, if signed in.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    access_token: Option<&str>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();
    let access_token = access_token.map(str::to_string);

    thread::spawn(move || {
        let executor = match QueryExecutor::new(&config, access_token.as_deref()) {
            Ok(executor) => executor,
            Err(e) => {
                error!("Failed to create HTTP client: {e}");
                let _ = event_tx.send(AppEvent::Error(format!("Failed to create HTTP client: {e}")));
                return;
            }
        };

        info!(base_url = %config.api_base_url, "Task worker started");

        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                executor: &executor,
            };

            if let Err(e) = handle_task(task, &ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }

        info!("Task worker stopped");
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    executor: &'a QueryExecutor,
}

/// Dispatches a single task to its handler.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::FetchArtists {
            kind,
            request,
            token,
        } => handlers::fetch_artists(ctx, kind, request, token),
        AppTask::FetchSuggestions { request, token } => {
            handlers::fetch_suggestions(ctx, request, token)
        }
        AppTask::SearchVideos { request, token } => handlers::search_videos(ctx, request, token),
        AppTask::FetchFollowedArtists => handlers::fetch_followed_artists(ctx),
    }
}

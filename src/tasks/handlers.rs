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

use anyhow::Result;
use tracing::{debug, info};

use crate::{
    api::{Endpoint, PageRequest, RawArtist, RawVideo},
    events::AppEvent,
    model::{Artist, ArtistKind, Video, paged::QueryToken},
    tasks::TaskContext,
};

pub(super) fn fetch_artists(
    ctx: &TaskContext,
    kind: ArtistKind,
    request: PageRequest,
    token: QueryToken,
) -> Result<()> {
    if is_stale(&token) {
        return Ok(());
    }

    let endpoint = match kind {
        ArtistKind::Minor => Endpoint::MinorArtists,
        ArtistKind::Rising => Endpoint::RisingArtists,
    };

    // The list keeps what it already has and simply stops paging
    let page = ctx
        .executor
        .execute::<RawArtist>(endpoint, &request, &mut |_| {})
        .map(Artist::from);

    ctx.event_tx.send(AppEvent::ArtistsLoaded(token, page))?;

    Ok(())
}

pub(super) fn fetch_suggestions(
    ctx: &TaskContext,
    request: PageRequest,
    token: QueryToken,
) -> Result<()> {
    if is_stale(&token) {
        return Ok(());
    }

    let mut page = ctx
        .executor
        .execute::<RawArtist>(Endpoint::ArtistSearch, &request, &mut |_| {})
        .map(Artist::from);

    page.items.truncate(ctx.config.suggestion_limit as usize);

    ctx.event_tx.send(AppEvent::SuggestionsLoaded(token, page))?;

    Ok(())
}

pub(super) fn search_videos(
    ctx: &TaskContext,
    request: PageRequest,
    token: QueryToken,
) -> Result<()> {
    if is_stale(&token) {
        return Ok(());
    }

    let mut failure = None;
    let page = ctx
        .executor
        .execute::<RawVideo>(Endpoint::YoutubeSearch, &request, &mut |e| {
            failure = Some(e.user_message().to_string())
        })
        .map(Video::from);

    info!(query = %request.keyword, results = page.items.len(), "Video search finished");

    // The empty page settles the list first, the failure then marks it
    ctx.event_tx.send(AppEvent::VideosLoaded(token.clone(), page))?;

    if let Some(message) = failure {
        ctx.event_tx.send(AppEvent::VideoSearchFailed(token, message))?;
    }

    Ok(())
}

pub(super) fn fetch_followed_artists(ctx: &TaskContext) -> Result<()> {
    let request = PageRequest::new("", 1, ctx.config.artist_page_size);

    let page = ctx
        .executor
        .execute::<RawArtist>(Endpoint::FollowedArtists, &request, &mut |_| {});

    let ids = page.items.iter().map(|artist| artist.artist_id).collect();

    ctx.event_tx.send(AppEvent::FollowedArtistsLoaded(ids))?;

    Ok(())
}

fn is_stale(token: &QueryToken) -> bool {
    let stale = !token.is_current();
    if stale {
        debug!(generation = token.generation(), "Skipping superseded query");
    }
    stale
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    use crate::{
        api::QueryExecutor,
        config::AppConfig,
        model::paged::PagedList,
    };

    fn offline_config() -> AppConfig {
        AppConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn superseded_tasks_send_nothing() {
        let config = offline_config();
        let executor = QueryExecutor::new(&config, None).unwrap();
        let (event_tx, event_rx) = mpsc::channel();
        let ctx = TaskContext {
            config: &config,
            event_tx: &event_tx,
            executor: &executor,
        };

        let mut list = PagedList::<Artist>::new(30);
        let stale = list.reset().token;
        list.reset();

        fetch_artists(&ctx, ArtistKind::Minor, PageRequest::new("", 1, 30), stale).unwrap();

        assert!(event_rx.try_recv().is_err());
    }

    #[test]
    fn failed_video_search_sends_page_then_failure() {
        let config = offline_config();
        let executor = QueryExecutor::new(&config, None).unwrap();
        let (event_tx, event_rx) = mpsc::channel();
        let ctx = TaskContext {
            config: &config,
            event_tx: &event_tx,
            executor: &executor,
        };

        let mut list = PagedList::<Video>::new(50);
        let token = list.reset().token;

        search_videos(&ctx, PageRequest::new("ive", 1, 50), token).unwrap();

        match event_rx.try_recv() {
            Ok(AppEvent::VideosLoaded(_, page)) => assert!(page.items.is_empty()),
            other => panic!("expected VideosLoaded, got {other:?}"),
        }
        match event_rx.try_recv() {
            Ok(AppEvent::VideoSearchFailed(_, message)) => assert!(!message.is_empty()),
            other => panic!("expected VideoSearchFailed, got {other:?}"),
        }
    }

    #[test]
    fn failed_suggestions_are_silent() {
        let config = offline_config();
        let executor = QueryExecutor::new(&config, None).unwrap();
        let (event_tx, event_rx) = mpsc::channel();
        let ctx = TaskContext {
            config: &config,
            event_tx: &event_tx,
            executor: &executor,
        };

        let mut list = PagedList::<Artist>::new(5);
        let token = list.reset().token;

        fetch_suggestions(&ctx, PageRequest::new("new", 1, 5), token).unwrap();

        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::SuggestionsLoaded(_, page)) if page.items.is_empty()));
        assert!(event_rx.try_recv().is_err());
    }
}

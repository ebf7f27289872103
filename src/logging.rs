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

//! File logging.
//!
//! The terminal belongs to the UI, so log records go to `duckterm.log` next
//! to the configuration file. `RUST_LOG` overrides the default filter.

use std::{env, fs};

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config;

const LOG_FILE: &str = "duckterm.log";
const DEFAULT_FILTER: &str = "duckterm=info";

/// Installs the global subscriber. The returned guard must be held until
/// exit so buffered records are flushed.
pub(crate) fn init_logging() -> Result<WorkerGuard> {
    let log_dir = config::config_dir().unwrap_or_else(env::temp_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("Failed to install log subscriber")?;

    Ok(guard)
}

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

//! Application configuration.
//!
//! This module manages the application configuration file. Keys missing from
//! the file take their default values, and a file that cannot be read at all
//! is replaced by the defaults.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::warn;

pub(crate) const CONFIG_NAME: &str = "duckterm";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) api_base_url: String,
    pub(crate) access_token: Option<String>,
    pub(crate) debounce_ms: u64,
    pub(crate) artist_page_size: u32,
    pub(crate) suggestion_limit: u32,
    pub(crate) video_max_results: u32,
    pub(crate) prefetch_rows: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_base_url: "http://localhost:8080/api".to_string(),
            access_token: None,
            debounce_ms: 300,
            artist_page_size: 30,
            suggestion_limit: 5,
            video_max_results: 50,
            prefetch_rows: 10,
        }
    }
}

impl AppConfig {
    pub(crate) fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        warn!("Using default configuration: {e}");
        AppConfig::default()
    })
}

/// The directory holding the configuration file, also used for the log file.
pub(crate) fn config_dir() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"api_base_url": "https://duckon.example/api", "debounce_ms": 150}"#,
        )
        .unwrap();

        assert_eq!(config.api_base_url, "https://duckon.example/api");
        assert_eq!(config.debounce(), Duration::from_millis(150));
        assert_eq!(config.artist_page_size, 30);
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.access_token, None);
    }
}

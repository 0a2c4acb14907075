use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use windowing::{DEFAULT_OVERSCAN, WindowOptions};

use crate::{DEFAULT_REQUEST_TIMEOUT_MS, Result};

/// Application configuration.
///
/// Every field has a default, so a config file only needs the keys it overrides. `overscan` is
/// unsigned: a negative value fails at parse time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub list_height: u32,
    pub item_height: u32,
    pub overscan: usize,
    pub class_name: Option<String>,
    pub photo_limit: usize,
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    /// Where the session token is persisted. `None` keeps it in memory only.
    pub session_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            list_height: 600,
            item_height: 100,
            overscan: DEFAULT_OVERSCAN,
            class_name: Some("bg-gray-100".to_owned()),
            photo_limit: 2000,
            api_base_url: "https://jsonplaceholder.typicode.com".to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            session_path: None,
            log_filter: "info".to_owned(),
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded config");
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.window_options()?;
        Ok(config)
    }

    /// Validated options for the listing screen.
    pub fn window_options(&self) -> Result<WindowOptions> {
        let mut options =
            WindowOptions::new(self.list_height, self.item_height).with_overscan(self.overscan);
        options.class_name = self.class_name.clone();
        options.validate()?;
        Ok(options)
    }
}

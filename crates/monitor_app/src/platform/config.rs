use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use monitor_engine::{ClientSettings, ResultParameters};
use serde::Deserialize;

/// Injected configuration, read once at startup and passed to every
/// component. Nothing in the monitor mutates it afterwards.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MonitorConfig {
    /// Base URL of the backend serving the progress and reset endpoints.
    pub base_url: String,
    /// Request parameters replayed to the results-finalization endpoint.
    pub params: ResultParameters,
    /// Forces the theme preference at startup when set.
    #[serde(default)]
    pub dark_mode: Option<bool>,
    /// Directory holding the theme-preference store. Defaults to the
    /// working directory.
    #[serde(default)]
    pub preference_dir: Option<PathBuf>,
    /// Overrides the default request timeout, in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl MonitorConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading monitor config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing monitor config {}", path.display()))?;
        Ok(config)
    }

    pub fn client_settings(&self) -> ClientSettings {
        let mut settings = ClientSettings::default();
        if let Some(secs) = self.request_timeout_secs {
            settings.request_timeout = Duration::from_secs(secs);
        }
        settings
    }

    pub fn preference_dir(&self) -> PathBuf {
        self.preference_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

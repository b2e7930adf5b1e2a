//! Theme-preference store for the monitor page.
//!
//! A single boolean, read once at startup and written only when the
//! configuration carries an override. Storage failures degrade to the
//! default preference; they never abort the monitor.

use std::fs;
use std::path::Path;

use monitor_engine::AtomicFileWriter;
use monitor_logging::{monitor_error, monitor_info, monitor_warn};
use serde::{Deserialize, Serialize};

use super::config::MonitorConfig;

const THEME_FILENAME: &str = ".monitor_theme.ron";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
struct ThemePreference {
    dark_mode: bool,
}

/// Applies the configured override (the "toggle") or falls back to the
/// stored preference.
pub(crate) fn resolve_preference(config: &MonitorConfig) -> bool {
    let dir = config.preference_dir();
    match config.dark_mode {
        Some(dark_mode) => {
            save_preference(&dir, dark_mode);
            dark_mode
        }
        None => load_preference(&dir),
    }
}

fn load_preference(dir: &Path) -> bool {
    let path = dir.join(THEME_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return false;
        }
        Err(err) => {
            monitor_warn!("Failed to read theme preference from {:?}: {}", path, err);
            return false;
        }
    };

    match ron::from_str::<ThemePreference>(&content) {
        Ok(preference) => preference.dark_mode,
        Err(err) => {
            monitor_warn!("Failed to parse theme preference from {:?}: {}", path, err);
            false
        }
    }
}

fn save_preference(dir: &Path, dark_mode: bool) {
    let preference = ThemePreference { dark_mode };
    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&preference, pretty) {
        Ok(text) => text,
        Err(err) => {
            monitor_error!("Failed to serialize theme preference: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(dir.to_path_buf());
    match writer.write(THEME_FILENAME, &content) {
        Ok(path) => monitor_info!("Saved theme preference to {:?}", path),
        Err(err) => monitor_error!("Failed to write theme preference: {}", err),
    }
}

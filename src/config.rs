use serde::Deserialize;
use std::path::PathBuf;

// =============================================================================
// URLs
// =============================================================================

/// Root of the published documentation
pub const DOCS_BASE_URL: &str = "https://storybook.js.org/docs/";

/// Remote document listing the latest and next published versions
pub const DEFAULT_MANIFEST_URL: &str = "https://storybook.js.org/versions.json";

// =============================================================================
// Time-related constants
// =============================================================================

/// Default refresh interval in milliseconds (24 hours)
pub const DEFAULT_REFRESH_INTERVAL_MS: i64 = 24 * 60 * 60 * 1000;

/// Timeout for manifest fetches in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Version check configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionsConfig {
    /// Documentation root used for docs links
    pub docs_url: String,
    /// URL of the remote versions document
    pub manifest_url: String,
    /// Manifest refresh interval in milliseconds
    pub refresh_interval: i64,
}

impl Default for VersionsConfig {
    fn default() -> Self {
        Self {
            docs_url: DOCS_BASE_URL.to_string(),
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}

/// Returns the path to the data directory for storybook-versions.
/// Uses $XDG_DATA_HOME/storybook-versions if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/storybook-versions,
/// or ./storybook-versions if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("storybook-versions.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("storybook-versions")
}

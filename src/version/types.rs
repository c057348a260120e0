//! Common types for version state and manifests

use serde::{Deserialize, Serialize};

/// A single published or installed version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
}

impl VersionInfo {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

/// The versions slice of the manager state
///
/// `current` is known locally from startup; `latest` and `next` stay `None`
/// until a manifest has been merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionState {
    pub current: VersionInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<VersionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<VersionInfo>,
}

impl VersionState {
    pub fn new(current: VersionInfo) -> Self {
        Self {
            current,
            latest: None,
            next: None,
        }
    }
}

/// Published versions carried by a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestData {
    #[serde(default)]
    pub latest: Option<VersionInfo>,
    #[serde(default)]
    pub next: Option<VersionInfo>,
}

/// Result of a version check, as embedded in the manager (`VERSIONCHECK`)
///
/// ```json
/// { "success": true, "data": { "latest": { "version": "5.2.3" } }, "time": 1571565216284 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionManifest {
    pub success: bool,
    #[serde(default)]
    pub data: ManifestData,
    /// Unix time of the check in milliseconds
    #[serde(default)]
    pub time: i64,
}

/// Options for building a documentation URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocsUrlOptions {
    /// Link to the docs of the installed MAJOR.MINOR when it differs from latest
    pub versioned: bool,
    /// Append the renderer identifier as a query parameter
    pub renderer: bool,
    /// Page below the docs root, optionally with a `#fragment`
    pub subpath: Option<String>,
}

//! Manifest embedded as a JSON string (the `VERSIONCHECK` payload)

use crate::version::error::ManifestError;
use crate::version::source::ManifestSource;
use crate::version::types::VersionManifest;

/// Source that decodes a version check payload handed over at startup
pub struct EmbeddedManifestSource {
    payload: String,
}

impl EmbeddedManifestSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Decode the payload synchronously
    pub fn parse(&self) -> Result<VersionManifest, ManifestError> {
        Ok(serde_json::from_str(&self.payload)?)
    }
}

#[async_trait::async_trait]
impl ManifestSource for EmbeddedManifestSource {
    async fn fetch_manifest(&self) -> Result<VersionManifest, ManifestError> {
        self.parse()
    }
}

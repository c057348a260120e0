//! Source trait for obtaining the published version manifest

#[cfg(test)]
use mockall::automock;

use crate::version::error::ManifestError;
use crate::version::types::VersionManifest;

/// Trait for fetching the version manifest
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetches the latest and next published versions
    ///
    /// # Returns
    /// * `Ok(VersionManifest)` - The manifest; `success` may still be false
    /// * `Err(ManifestError)` - If the fetch or decoding fails
    async fn fetch_manifest(&self) -> Result<VersionManifest, ManifestError>;
}

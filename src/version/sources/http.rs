//! Remote versions document fetched over HTTP

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::config::FETCH_TIMEOUT_MS;
use crate::version::error::ManifestError;
use crate::version::source::ManifestSource;
use crate::version::types::{ManifestData, VersionInfo, VersionManifest};

/// Response from the versions document
#[derive(Debug, Deserialize)]
struct VersionsResponse {
    latest: Option<VersionInfo>,
    next: Option<VersionInfo>,
}

/// Source that downloads the published versions document
pub struct HttpManifestSource {
    client: reqwest::Client,
    url: String,
}

impl HttpManifestSource {
    /// Creates a new HttpManifestSource for a custom URL
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("storybook-versions")
                .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
                .build()
                .expect("Failed to create HTTP client"),
            url: url.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ManifestSource for HttpManifestSource {
    async fn fetch_manifest(&self) -> Result<VersionManifest, ManifestError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();

        if !status.is_success() {
            warn!("versions endpoint returned status {}: {}", status, self.url);
            return Err(ManifestError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body: VersionsResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse versions response: {}", e);
            ManifestError::InvalidResponse(e.to_string())
        })?;

        Ok(VersionManifest {
            success: true,
            data: ManifestData {
                latest: body.latest,
                next: body.next,
            },
            time: chrono::Utc::now().timestamp_millis(),
        })
    }
}

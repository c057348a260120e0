use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Invalid version: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

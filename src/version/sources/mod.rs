//! Manifest source implementations

pub mod embedded;
pub mod http;

pub use embedded::EmbeddedManifestSource;
pub use http::HttpManifestSource;

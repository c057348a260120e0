//! Version tracking layer for update checks and documentation links
//!
//! This module holds the installed version, merges the remotely published
//! versions into it, and answers whether an update should be surfaced and
//! which documentation URL matches the installed release.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐     ┌──────────────┐     ┌────────────────┐
//! │ ManifestSource │────▶│ VersionStore │────▶│ VersionResolver│
//! │    (fetch)     │     │   (state)    │     │    (rules)     │
//! └────────────────┘     └──────────────┘     └────────────────┘
//!         │                                           │
//!         ▼                                           ▼
//! ┌────────────────┐                          ┌────────────────┐
//! │    Sources     │                          │     Semver     │
//! │(http, embedded)│                          │   (parsing)    │
//! └────────────────┘                          └────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`resolver`]: Update availability and docs URL rules
//! - [`store`]: Version state with in-place manifest merging
//! - [`source`]: Trait for obtaining a version manifest
//! - [`sources`]: Concrete manifest sources (HTTP, embedded JSON)
//! - [`error`]: Error types for parsing and fetching
//! - [`semver`]: Shared semver utilities
//! - [`types`]: Manifest and state types like `VersionInfo`

pub mod error;
pub mod resolver;
pub mod semver;
pub mod source;
pub mod sources;
pub mod store;
pub mod types;

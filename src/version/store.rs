//! Version state with in-place manifest merging

use tracing::{debug, info, warn};

use crate::version::resolver::VersionResolver;
use crate::version::semver::{is_prerelease, parse_version};
use crate::version::source::ManifestSource;
use crate::version::sources::EmbeddedManifestSource;
use crate::version::types::{DocsUrlOptions, VersionInfo, VersionManifest, VersionState};

/// Holds the versions slice and answers update/docs questions against it
#[derive(Debug, Clone)]
pub struct VersionStore {
    state: VersionState,
    /// Unix milliseconds of the last merged manifest
    checked_at: Option<i64>,
    resolver: VersionResolver,
}

impl VersionStore {
    pub fn new(current: VersionInfo) -> Self {
        Self::with_resolver(current, VersionResolver::default())
    }

    pub fn with_resolver(current: VersionInfo, resolver: VersionResolver) -> Self {
        Self {
            state: VersionState::new(current),
            checked_at: None,
            resolver,
        }
    }

    /// Build the initial state from the version check payload handed over at
    /// startup. A malformed payload leaves `latest`/`next` unknown.
    pub fn from_embedded(current: VersionInfo, payload: &str) -> Self {
        let mut store = Self::new(current);
        store.apply_embedded(payload);
        store
    }

    /// Merge a version check payload, ignoring it when malformed
    pub fn apply_embedded(&mut self, payload: &str) {
        match EmbeddedManifestSource::new(payload).parse() {
            Ok(manifest) => self.apply_manifest(&manifest),
            Err(e) => warn!("Ignoring embedded version check: {}", e),
        }
    }

    pub fn state(&self) -> &VersionState {
        &self.state
    }

    pub fn checked_at(&self) -> Option<i64> {
        self.checked_at
    }

    /// Merge the published versions of a successful manifest into the state
    ///
    /// Only fields the manifest carries are overwritten.
    pub fn apply_manifest(&mut self, manifest: &VersionManifest) {
        if !manifest.success {
            warn!("Ignoring unsuccessful version check");
            return;
        }

        if let Some(latest) = &manifest.data.latest {
            self.state.latest = Some(latest.clone());
        }
        if let Some(next) = &manifest.data.next {
            self.state.next = Some(next.clone());
        }
        self.checked_at = Some(manifest.time);

        debug!(
            "Merged version check: latest={:?}, next={:?}",
            self.state.latest, self.state.next
        );
    }

    /// Fetch a manifest from `source` and merge it
    ///
    /// Fetch failures are logged and leave the state untouched.
    pub async fn refresh<M: ManifestSource + ?Sized>(&mut self, source: &M) {
        match source.fetch_manifest().await {
            Ok(manifest) => {
                self.apply_manifest(&manifest);
                info!("Refreshed versions: latest={:?}", self.state.latest);
            }
            Err(e) => warn!("Failed to fetch version manifest: {}", e),
        }
    }

    /// Whether the published versions are unknown or older than `interval_ms`
    ///
    /// A check time in the future is treated as stale.
    pub fn needs_refresh(&self, now_ms: i64, interval_ms: i64) -> bool {
        match (&self.state.latest, self.checked_at) {
            (Some(_), Some(checked_at)) if checked_at <= now_ms => {
                now_ms.saturating_sub(checked_at) >= interval_ms
            }
            _ => true,
        }
    }

    pub fn current_version(&self) -> &VersionInfo {
        &self.state.current
    }

    /// The version an update would move to
    ///
    /// On a prerelease the `next` channel is preferred unless `latest` is
    /// strictly newer than it.
    pub fn latest_version(&self) -> Option<&VersionInfo> {
        let VersionState {
            current,
            latest,
            next,
        } = &self.state;

        let on_prerelease = parse_version(&current.version)
            .map(|v| is_prerelease(&v))
            .unwrap_or(false);

        match (on_prerelease, latest, next) {
            (true, Some(latest), Some(next)) => {
                match (parse_version(&latest.version), parse_version(&next.version)) {
                    (Ok(l), Ok(n)) if l > n => Some(latest),
                    _ => Some(next),
                }
            }
            (true, None, Some(next)) => Some(next),
            _ => latest.as_ref(),
        }
    }

    pub fn update_available(&self) -> bool {
        self.latest_version()
            .is_some_and(|latest| self.resolver.is_update_available(&self.state.current, latest))
    }

    /// Documentation URL for the installed version
    ///
    /// Links are unversioned while the latest release is unknown.
    pub fn docs_url(&self, options: &DocsUrlOptions, renderer: Option<&str>) -> String {
        let current = &self.state.current;
        let latest = self.state.latest.as_ref().unwrap_or(current);
        self.resolver.resolve_docs_url(current, latest, options, renderer)
    }
}

//! Update availability and documentation URL rules
//!
//! Both operations are pure functions of their inputs. The renderer identifier
//! used to personalize docs links is passed in by the caller.

use tracing::debug;
use url::form_urlencoded::byte_serialize;

use crate::config::DOCS_BASE_URL;
use crate::version::semver::{is_prerelease, parse_version, release_of, same_minor_line};
use crate::version::types::{DocsUrlOptions, VersionInfo};

/// Resolves update availability and documentation links for a version pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionResolver {
    docs_base_url: String,
}

impl VersionResolver {
    /// Creates a resolver rooted at a custom documentation URL
    pub fn new(docs_base_url: &str) -> Self {
        let trimmed = docs_base_url.trim_end_matches('/');
        Self {
            docs_base_url: format!("{}/", trimmed),
        }
    }

    pub fn docs_base_url(&self) -> &str {
        &self.docs_base_url
    }

    /// Whether `latest` should be surfaced as an available update over `current`
    ///
    /// Only a release (non-prerelease) `latest` with a higher MAJOR.MINOR
    /// counts. Patch-only bumps are not surfaced. A prerelease `current` is
    /// compared by its MAJOR.MINOR.PATCH.
    pub fn is_update_available(&self, current: &VersionInfo, latest: &VersionInfo) -> bool {
        let (current, latest) = match (
            parse_version(&current.version),
            parse_version(&latest.version),
        ) {
            (Ok(current), Ok(latest)) => (current, latest),
            (Err(e), _) | (_, Err(e)) => {
                debug!("Skipping update check: {}", e);
                return false;
            }
        };

        if is_prerelease(&latest) {
            return false;
        }

        let current = release_of(&current);
        (latest.major, latest.minor) > (current.major, current.minor)
    }

    /// Build the documentation URL for the installed version
    ///
    /// Layout: `{root}{major.minor/}{subpath/}{?renderer=id}{#fragment}`,
    /// where the version segment is only present for a versioned link whose
    /// `current` is on a different MAJOR.MINOR than `latest`.
    pub fn resolve_docs_url(
        &self,
        current: &VersionInfo,
        latest: &VersionInfo,
        options: &DocsUrlOptions,
        renderer: Option<&str>,
    ) -> String {
        let mut url = self.docs_base_url.clone();

        if options.versioned {
            match (
                parse_version(&current.version),
                parse_version(&latest.version),
            ) {
                (Ok(current), Ok(latest)) if !same_minor_line(&current, &latest) => {
                    url.push_str(&format!("{}.{}/", current.major, current.minor));
                }
                (Ok(_), Ok(_)) => {}
                (Err(e), _) | (_, Err(e)) => {
                    debug!("Falling back to unversioned docs URL: {}", e);
                }
            }
        }

        let (path, fragment) = match options.subpath.as_deref() {
            Some(subpath) => match subpath.split_once('#') {
                Some((path, fragment)) => (path, Some(fragment)),
                None => (subpath, None),
            },
            None => ("", None),
        };

        let path = path.trim_matches('/');
        if !path.is_empty() {
            url.push_str(path);
            url.push('/');
        }

        if options.renderer
            && let Some(renderer) = renderer.map(str::trim).filter(|r| !r.is_empty())
        {
            let encoded: String = byte_serialize(renderer.as_bytes()).collect();
            url.push_str(&format!("?renderer={}", encoded));
        }

        if let Some(fragment) = fragment.filter(|f| !f.is_empty()) {
            url.push('#');
            url.push_str(fragment);
        }

        url
    }
}

impl Default for VersionResolver {
    fn default() -> Self {
        Self::new(DOCS_BASE_URL)
    }
}

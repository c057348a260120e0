use semver::Version;

use crate::version::error::VersionError;

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros, keeping
/// any prerelease or build suffix. A leading 'v' is stripped.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "5.2-beta.1" -> Version(5, 2, 0, pre: "beta.1")
/// - "8.0.0-beta" -> Version(8, 0, 0, pre: "beta")
pub fn parse_version(version: &str) -> Result<Version, VersionError> {
    let version = version.trim().trim_start_matches('v');
    let (core, suffix) = match version.find(['-', '+']) {
        Some(index) => version.split_at(index),
        None => (version, ""),
    };
    let parts: Vec<&str> = core.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0{}", parts[0], suffix),
        2 => format!("{}.{}.0{}", parts[0], parts[1], suffix),
        _ => version.to_string(),
    };
    Version::parse(&normalized).map_err(|_| VersionError::Invalid(version.to_string()))
}

/// Returns true when the version carries a prerelease tag
pub fn is_prerelease(version: &Version) -> bool {
    !version.pre.is_empty()
}

/// Strip prerelease and build metadata, keeping MAJOR.MINOR.PATCH
pub fn release_of(version: &Version) -> Version {
    Version::new(version.major, version.minor, version.patch)
}

/// Returns true when both versions belong to the same MAJOR.MINOR line
pub fn same_minor_line(a: &Version, b: &Version) -> bool {
    a.major == b.major && a.minor == b.minor
}

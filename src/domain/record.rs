/// The resolved version and its semantic components.
///
/// Numeric components are kept as decimal strings. `major`, `minor` and
/// `patch` are only present when the version decomposed as semver;
/// `prerelease` and `build` are only present when non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    /// Selected tag (or the fallback), prefix included
    pub version: String,
    /// `version` with the configured prefix stripped when it leads
    pub version_without_prefix: String,
    pub major: Option<String>,
    pub minor: Option<String>,
    /// Patch after the optional commit-count increment
    pub patch: Option<String>,
    pub is_prerelease: bool,
    pub prerelease: Option<String>,
    pub build: Option<String>,
}

impl VersionRecord {
    /// True when major, minor and patch are all present
    pub fn is_semver(&self) -> bool {
        self.major.is_some() && self.minor.is_some() && self.patch.is_some()
    }
}

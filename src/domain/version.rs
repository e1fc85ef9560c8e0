use regex::Regex;
use semver::Version;
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

/// Longest digit run accepted for a single coerced component.
const MAX_COERCED_COMPONENT_LEN: usize = 16;

fn coercion_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let n = MAX_COERCED_COMPONENT_LEN;
        let pattern = format!(
            r"(?:^|\D)(\d{{1,{n}}})(?:\.(\d{{1,{n}}}))?(?:\.(\d{{1,{n}}}))?(?:$|\D)"
        );
        Regex::new(&pattern).expect("coercion pattern is a valid regex")
    })
}

/// Parse a string strictly as `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// No prefix, whitespace or leading zeros are tolerated.
pub fn parse_strict(input: &str) -> Option<Version> {
    Version::parse(input).ok()
}

/// Leniently extract the first `x[.y[.z]]` digit run from an arbitrary string.
///
/// Missing minor/patch components default to 0. Prerelease and build metadata
/// are never carried over.
///
/// # Example
/// ```
/// # use git_tag_version::domain::version::coerce;
/// assert_eq!(coerce("release-1.4").unwrap().to_string(), "1.4.0");
/// assert!(coerce("not-a-version").is_none());
/// ```
pub fn coerce(input: &str) -> Option<Version> {
    let caps = coercion_regex().captures(input)?;
    let component = |i: usize| -> Option<u64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    Some(Version::new(component(1)?, component(2)?, component(3)?))
}

/// Compare two versions by semantic-version precedence.
///
/// Build metadata does not take part in the comparison, unlike `Version`'s
/// own `Ord` implementation.
pub fn cmp_precedence(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}

/// A version string broken into its decimal-string components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionParts {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub prerelease: Option<String>,
    pub build: Option<String>,
}

impl VersionParts {
    /// Decompose a strict semver string.
    ///
    /// Prerelease and build identifiers are re-joined with the given
    /// separators. Returns `None` when `input` is not strict semver.
    pub fn decompose(input: &str, prerelease_separator: &str, build_separator: &str) -> Option<Self> {
        let version = parse_strict(input)?;

        let prerelease = (!version.pre.is_empty()).then(|| {
            version
                .pre
                .as_str()
                .split('.')
                .collect::<Vec<_>>()
                .join(prerelease_separator)
        });
        let build = (!version.build.is_empty()).then(|| {
            version
                .build
                .as_str()
                .split('.')
                .collect::<Vec<_>>()
                .join(build_separator)
        });

        Some(VersionParts {
            major: version.major.to_string(),
            minor: version.minor.to_string(),
            patch: version.patch.to_string(),
            prerelease,
            build,
        })
    }
}

impl fmt::Display for VersionParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Add `count` to a decimal patch string.
///
/// Returns `None` when `patch` is not a plain non-negative integer, in which
/// case the caller leaves the field untouched. Saturates instead of wrapping.
pub fn increment_patch(patch: &str, count: u64) -> Option<String> {
    let base: u64 = patch.parse().ok()?;
    Some(base.saturating_add(count).to_string())
}

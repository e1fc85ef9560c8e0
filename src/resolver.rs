//! Version resolution from git tag history
//!
//! [VersionResolver] turns a raw tag listing into a [VersionRecord]:
//!
//! 1. list tags for the prefix and rank them by semver precedence
//! 2. take the highest candidate, or fall back to [DEFAULT_VERSION]
//! 3. unless disabled, count commits since that tag
//! 4. decompose the selected version and add the commit count to its patch
//!
//! Collaborator failures never abort a resolution. They degrade to "no tags"
//! or "zero commits" and are reported as [BoundaryWarning]s on the returned
//! [Resolution].

use crate::boundary::BoundaryWarning;
use crate::domain::version::increment_patch;
use crate::domain::{rank_tags, split_tag_list, VersionParts, VersionRecord};
use crate::git::{CommitCounter, TagLister};
use tracing::{debug, info};

/// Prefix used when none is configured
pub const DEFAULT_PREFIX: &str = "v";

/// Version reported when no tag qualifies. Never prefix-substituted.
pub const DEFAULT_VERSION: &str = "v0.0.0";

pub const PRERELEASE_SEPARATOR: &str = ".";
pub const BUILD_SEPARATOR: &str = ".";

/// Immutable resolver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Tags must start with this literal string
    pub prefix: String,
    /// Skip commit counting entirely
    pub disable_auto_patch_count: bool,
    pub default_version: String,
    pub prerelease_separator: String,
    pub build_separator: String,
}

impl ResolverOptions {
    /// Create options for a prefix; an empty prefix means [DEFAULT_PREFIX]
    pub fn new(prefix: impl Into<String>, disable_auto_patch_count: bool) -> Self {
        let prefix = prefix.into();
        ResolverOptions {
            prefix: if prefix.is_empty() {
                DEFAULT_PREFIX.to_string()
            } else {
                prefix
            },
            disable_auto_patch_count,
            ..Self::default()
        }
    }
}

impl Default for ResolverOptions {
    fn default() -> Self {
        ResolverOptions {
            prefix: DEFAULT_PREFIX.to_string(),
            disable_auto_patch_count: false,
            default_version: DEFAULT_VERSION.to_string(),
            prerelease_separator: PRERELEASE_SEPARATOR.to_string(),
            build_separator: BUILD_SEPARATOR.to_string(),
        }
    }
}

/// Outcome of a resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub record: VersionRecord,
    /// No tag qualified and the default version was used
    pub used_fallback: bool,
    /// Commit count applied to the patch; `None` when counting is disabled
    pub commits_since_tag: Option<u64>,
    pub warnings: Vec<BoundaryWarning>,
}

/// Resolves the current version from tag history
pub struct VersionResolver {
    options: ResolverOptions,
}

impl VersionResolver {
    pub fn new(options: ResolverOptions) -> Self {
        VersionResolver { options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolve the version against a repository.
    ///
    /// Calls `list_tags` exactly once, and `count_commits` at most once (never
    /// when auto patch counting is disabled). Always returns a record.
    pub fn resolve<R>(&self, repo: &R) -> Resolution
    where
        R: TagLister + CommitCounter + ?Sized,
    {
        let mut warnings = Vec::new();

        let (version, used_fallback) = self.select_version(repo, &mut warnings);

        let commits_since_tag = if self.options.disable_auto_patch_count {
            None
        } else {
            let since = (!used_fallback).then_some(version.as_str());
            Some(self.count_commits(repo, since, &mut warnings))
        };

        let record = self.build_record(version, used_fallback, commits_since_tag, &mut warnings);

        Resolution {
            record,
            used_fallback,
            commits_since_tag,
            warnings,
        }
    }

    fn select_version<R>(&self, repo: &R, warnings: &mut Vec<BoundaryWarning>) -> (String, bool)
    where
        R: TagLister + ?Sized,
    {
        let prefix = &self.options.prefix;

        let raw = match repo.list_tags(prefix) {
            Ok(raw) => raw,
            Err(e) => {
                warnings.push(BoundaryWarning::TagListingFailed {
                    prefix: prefix.clone(),
                    reason: e.to_string(),
                });
                String::new()
            }
        };

        let ranked = rank_tags(split_tag_list(&raw), prefix);
        debug!(
            "Ranked {} candidate tag(s): {:?}",
            ranked.len(),
            ranked.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
        );

        match ranked.into_iter().next() {
            Some(winner) => {
                info!("Found latest tag: {}", winner.name);
                (winner.name, false)
            }
            None => {
                warnings.push(BoundaryWarning::NoValidTag {
                    prefix: prefix.clone(),
                    fallback: self.options.default_version.clone(),
                });
                (self.options.default_version.clone(), true)
            }
        }
    }

    fn count_commits<R>(
        &self,
        repo: &R,
        since: Option<&str>,
        warnings: &mut Vec<BoundaryWarning>,
    ) -> u64
    where
        R: CommitCounter + ?Sized,
    {
        let label = since.unwrap_or("HEAD").to_string();

        let count = repo.count_commits(since).and_then(|raw| {
            raw.trim().parse::<u64>().map_err(|_| {
                crate::error::GitTagVersionError::command(format!(
                    "unexpected commit count output '{}'",
                    raw.trim()
                ))
            })
        });

        match count {
            Ok(count) => {
                info!("Commits since {}: {}", label, count);
                count
            }
            Err(e) => {
                warnings.push(BoundaryWarning::CommitCountFailed {
                    since: label,
                    reason: e.to_string(),
                });
                0
            }
        }
    }

    fn build_record(
        &self,
        version: String,
        used_fallback: bool,
        commits_since_tag: Option<u64>,
        warnings: &mut Vec<BoundaryWarning>,
    ) -> VersionRecord {
        let version_without_prefix = version
            .strip_prefix(self.options.prefix.as_str())
            .unwrap_or(&version)
            .to_string();

        // The fallback decomposes from its own numeric core, whatever the prefix.
        let semver_input = if used_fallback {
            version.strip_prefix('v').unwrap_or(&version)
        } else {
            version_without_prefix.as_str()
        };

        let parts = VersionParts::decompose(
            semver_input,
            &self.options.prerelease_separator,
            &self.options.build_separator,
        );

        let mut record = match parts {
            Some(parts) => VersionRecord {
                is_prerelease: parts.prerelease.is_some(),
                major: Some(parts.major),
                minor: Some(parts.minor),
                patch: Some(parts.patch),
                prerelease: parts.prerelease,
                build: parts.build,
                version,
                version_without_prefix,
            },
            None => {
                if !used_fallback {
                    warnings.push(BoundaryWarning::UnparsableTag {
                        tag: version.clone(),
                    });
                }
                VersionRecord {
                    version,
                    version_without_prefix,
                    major: None,
                    minor: None,
                    patch: None,
                    is_prerelease: false,
                    prerelease: None,
                    build: None,
                }
            }
        };

        if used_fallback && record.patch.is_none() {
            record.patch = Some("0".to_string());
        }

        if let (Some(count), Some(patch)) = (commits_since_tag, record.patch.as_mut()) {
            if let Some(next) = increment_patch(patch, count) {
                *patch = next;
            }
        }

        record
    }
}

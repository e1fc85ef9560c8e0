use std::fmt;

/// Non-fatal conditions met while resolving a version.
/// These never stop the run but should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Listing tags failed; resolution continued with no candidates
    TagListingFailed { prefix: String, reason: String },
    /// No tag was accepted as a version candidate
    NoValidTag { prefix: String, fallback: String },
    /// Counting commits failed; a count of zero was used
    CommitCountFailed { since: String, reason: String },
    /// The selected tag was accepted by coercion but is not strict semver
    UnparsableTag { tag: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::TagListingFailed { prefix, reason } => {
                write!(
                    f,
                    "Failed to retrieve git tags with prefix \"{}\": {}",
                    prefix, reason
                )
            }
            BoundaryWarning::NoValidTag { prefix, fallback } => {
                write!(
                    f,
                    "No valid semver tags found with prefix \"{}\", falling back to {}",
                    prefix, fallback
                )
            }
            BoundaryWarning::CommitCountFailed { since, reason } => {
                write!(f, "Failed to count commits since \"{}\": {}", since, reason)
            }
            BoundaryWarning::UnparsableTag { tag } => {
                write!(
                    f,
                    "Tag '{}' is not a full semantic version; version parts are left empty",
                    tag
                )
            }
        }
    }
}

//! Main workflow orchestration logic
//!
//! Resolves the version, reports warnings and publishes the outputs. Kept
//! apart from main.rs so the workflow can be driven programmatically without
//! depending on clap or on a particular git backend.

use anyhow::{Context, Result};
use tracing::info;

use crate::boundary::BoundaryWarning;
use crate::git::{CommitCounter, TagLister};
use crate::output::{self, OutputSink};
use crate::resolver::{Resolution, ResolverOptions, VersionResolver};

/// Prefix of the terminal failure message
pub const FAILURE_PREFIX: &str = "Failed to extract version";

/// Run the extraction workflow:
/// 1. Resolve the version from tag history
/// 2. Hand every warning to `report`
/// 3. Publish all outputs to `sink`
///
/// # Returns
/// The resolution on success; an error only if publishing fails
pub fn run_extract_workflow<R, S, F>(
    repo: &R,
    options: ResolverOptions,
    sink: &mut S,
    mut report: F,
) -> Result<Resolution>
where
    R: TagLister + CommitCounter + ?Sized,
    S: OutputSink + ?Sized,
    F: FnMut(&BoundaryWarning),
{
    let resolver = VersionResolver::new(options);
    let resolution = resolver.resolve(repo);

    for warning in &resolution.warnings {
        report(warning);
    }

    info!(
        "Resolved {} (patch {})",
        resolution.record.version,
        resolution.record.patch.as_deref().unwrap_or("-")
    );

    output::publish(&resolution.record, sink).context("Failed to publish outputs")?;

    Ok(resolution)
}

/// Terminal failure message for an error escaping the workflow
pub fn failure_message(error: &anyhow::Error) -> String {
    format!("{}: {:#}", FAILURE_PREFIX, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GitTagVersionError;
    use crate::git::MockRepository;
    use crate::output::MemoryOutput;

    #[test]
    fn test_workflow_publishes_outputs() {
        let repo = MockRepository::new()
            .with_tags("v1.2.3\nv1.2.0")
            .with_commit_count("1");
        let mut sink = MemoryOutput::new();

        let resolution =
            run_extract_workflow(&repo, ResolverOptions::default(), &mut sink, |_| {}).unwrap();

        assert_eq!(resolution.record.patch.as_deref(), Some("4"));
        assert_eq!(sink.get("version"), Some("v1.2.3"));
        assert_eq!(sink.get("patch"), Some("4"));
        assert_eq!(sink.get("is-semver"), Some("true"));
    }

    #[test]
    fn test_workflow_reports_warnings() {
        let repo = MockRepository::new().failing_tags("no repo");
        let mut sink = MemoryOutput::new();
        let mut reported = Vec::new();

        run_extract_workflow(&repo, ResolverOptions::default(), &mut sink, |w| {
            reported.push(w.clone())
        })
        .unwrap();

        assert_eq!(reported.len(), 2);
        assert_eq!(sink.get("version"), Some("v0.0.0"));
    }

    struct BrokenSink;

    impl OutputSink for BrokenSink {
        fn set_output(&mut self, _key: &str, _value: &str) -> crate::error::Result<()> {
            Err(GitTagVersionError::output("Git failure"))
        }
    }

    #[test]
    fn test_failure_message_carries_cause() {
        let repo = MockRepository::new().with_tags("v1.0.0");
        let err =
            run_extract_workflow(&repo, ResolverOptions::default(), &mut BrokenSink, |_| {})
                .unwrap_err();

        let message = failure_message(&err);
        assert!(message.starts_with("Failed to extract version: "));
        assert!(message.contains("Git failure"));
    }
}

use git_tag_version::boundary::BoundaryWarning;
use git_tag_version::cli::orchestration::{failure_message, run_extract_workflow, FAILURE_PREFIX};
use git_tag_version::git::MockRepository;
use git_tag_version::output::MemoryOutput;
use git_tag_version::ResolverOptions;

fn run(repo: &MockRepository, options: ResolverOptions) -> (MemoryOutput, Vec<BoundaryWarning>) {
    let mut sink = MemoryOutput::new();
    let mut warnings = Vec::new();
    run_extract_workflow(repo, options, &mut sink, |w| warnings.push(w.clone()))
        .expect("workflow should succeed with an in-memory sink");
    (sink, warnings)
}

#[test]
fn test_full_semver_outputs() {
    let repo = MockRepository::new()
        .with_tags("v1.0.0-beta.1+build.789\nv0.9.0")
        .with_commit_count("0");

    let (sink, warnings) = run(&repo, ResolverOptions::default());

    assert!(warnings.is_empty());
    assert_eq!(sink.get("version"), Some("v1.0.0-beta.1+build.789"));
    assert_eq!(sink.get("version-without-v"), Some("1.0.0-beta.1+build.789"));
    assert_eq!(sink.get("major"), Some("1"));
    assert_eq!(sink.get("minor"), Some("0"));
    assert_eq!(sink.get("patch"), Some("0"));
    assert_eq!(sink.get("prerelease"), Some("beta.1"));
    assert_eq!(sink.get("build"), Some("build.789"));
    assert_eq!(sink.get("is-prerelease"), Some("true"));
    assert_eq!(sink.get("is-semver"), Some("true"));
}

#[test]
fn test_outputs_published_once_in_declared_order() {
    let repo = MockRepository::new().with_tags("v3.0.0");

    let (sink, _) = run(&repo, ResolverOptions::default());

    let keys: Vec<&str> = sink.entries.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "version",
            "version-without-v",
            "major",
            "minor",
            "patch",
            "prerelease",
            "build",
            "is-prerelease",
            "is-semver",
        ]
    );
}

#[test]
fn test_fallback_is_not_a_failure() {
    let repo = MockRepository::new().with_commit_count("3");

    let (sink, warnings) = run(&repo, ResolverOptions::default());

    assert_eq!(sink.get("version"), Some("v0.0.0"));
    assert_eq!(sink.get("patch"), Some("3"));
    assert_eq!(sink.get("is-semver"), Some("true"));
    assert_eq!(
        warnings,
        vec![BoundaryWarning::NoValidTag {
            prefix: "v".to_string(),
            fallback: "v0.0.0".to_string(),
        }]
    );
}

#[test]
fn test_coerced_tag_is_not_semver() {
    let repo = MockRepository::new().with_tags("v1.1");

    let (sink, _) = run(&repo, ResolverOptions::new("v", true));

    assert_eq!(sink.get("version"), Some("v1.1"));
    assert_eq!(sink.get("version-without-v"), Some("1.1"));
    assert_eq!(sink.get("major"), Some(""));
    assert_eq!(sink.get("is-prerelease"), Some("false"));
    assert_eq!(sink.get("is-semver"), Some("false"));
}

#[test]
fn test_disabled_auto_patch_count_makes_one_collaborator_call() {
    let repo = MockRepository::new()
        .with_tags("v2.1.4")
        .with_commit_count("9");

    let (sink, _) = run(&repo, ResolverOptions::new("v", true));

    assert_eq!(sink.get("patch"), Some("4"));
    assert_eq!(repo.tag_calls(), 1);
    assert!(repo.count_calls().is_empty());
}

#[test]
fn test_failure_message_format() {
    let err = anyhow::anyhow!("Git failure");
    assert_eq!(failure_message(&err), "Failed to extract version: Git failure");
    assert!(failure_message(&err).starts_with(FAILURE_PREFIX));
}

//! Publishing a [VersionRecord] as named key/value outputs
//!
//! Every record produces the same nine outputs in a fixed order (see
//! [OutputField::ALL]). Absent fields are published as empty strings.

pub mod github;
pub mod stdout;

pub use github::GithubOutput;
pub use stdout::StdoutOutput;

use crate::domain::VersionRecord;
use crate::error::Result;
use tracing::debug;

/// Accepts key/value outputs for downstream consumption.
pub trait OutputSink {
    fn set_output(&mut self, key: &str, value: &str) -> Result<()>;

    /// Whether outputs share the process stdout with workflow commands
    fn uses_stdout(&self) -> bool {
        false
    }
}

/// The declared outputs, in publication order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputField {
    Version,
    VersionWithoutPrefix,
    Major,
    Minor,
    Patch,
    Prerelease,
    Build,
    IsPrerelease,
    IsSemver,
}

impl OutputField {
    pub const ALL: [OutputField; 9] = [
        OutputField::Version,
        OutputField::VersionWithoutPrefix,
        OutputField::Major,
        OutputField::Minor,
        OutputField::Patch,
        OutputField::Prerelease,
        OutputField::Build,
        OutputField::IsPrerelease,
        OutputField::IsSemver,
    ];

    /// Output name as seen by the CI step
    pub fn key(self) -> &'static str {
        match self {
            OutputField::Version => "version",
            OutputField::VersionWithoutPrefix => "version-without-v",
            OutputField::Major => "major",
            OutputField::Minor => "minor",
            OutputField::Patch => "patch",
            OutputField::Prerelease => "prerelease",
            OutputField::Build => "build",
            OutputField::IsPrerelease => "is-prerelease",
            OutputField::IsSemver => "is-semver",
        }
    }

    /// Output value for a record; absent fields become ""
    pub fn value(self, record: &VersionRecord) -> String {
        let optional = |field: &Option<String>| field.clone().unwrap_or_default();

        match self {
            OutputField::Version => record.version.clone(),
            OutputField::VersionWithoutPrefix => record.version_without_prefix.clone(),
            OutputField::Major => optional(&record.major),
            OutputField::Minor => optional(&record.minor),
            OutputField::Patch => optional(&record.patch),
            OutputField::Prerelease => optional(&record.prerelease),
            OutputField::Build => optional(&record.build),
            OutputField::IsPrerelease => record.is_prerelease.to_string(),
            OutputField::IsSemver => record.is_semver().to_string(),
        }
    }
}

/// All outputs of a record as `(key, value)` pairs, in publication order
pub fn outputs(record: &VersionRecord) -> Vec<(&'static str, String)> {
    OutputField::ALL
        .iter()
        .map(|field| (field.key(), field.value(record)))
        .collect()
}

/// Publish every output of `record` to `sink`, stopping at the first failure.
pub fn publish<S>(record: &VersionRecord, sink: &mut S) -> Result<()>
where
    S: OutputSink + ?Sized,
{
    for (key, value) in outputs(record) {
        sink.set_output(key, &value)?;
        debug!("Set output '{}' = '{}'", key, value);
    }
    Ok(())
}

/// Output target selection
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    /// GitHub output file when `$GITHUB_OUTPUT` is set, stdout otherwise
    #[default]
    Auto,
    /// The file named by `$GITHUB_OUTPUT`
    Github,
    /// `key=value` lines on stdout
    Stdout,
}

/// In-memory sink keeping outputs in publication order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryOutput {
    pub entries: Vec<(String, String)>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the last output published under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl OutputSink for MemoryOutput {
    fn set_output(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

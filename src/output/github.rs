//! GitHub Actions output file and workflow commands

use crate::error::Result;
use crate::output::OutputSink;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable naming the step's output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

const HEREDOC_DELIMITER: &str = "ghadelimiter_git_tag_version";

/// Appends outputs to the GitHub Actions output file
#[derive(Debug, Clone)]
pub struct GithubOutput {
    path: PathBuf,
}

impl GithubOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        GithubOutput { path: path.into() }
    }

    /// Sink for `$GITHUB_OUTPUT`, if set and non-empty
    pub fn from_env() -> Option<Self> {
        std::env::var_os(GITHUB_OUTPUT_ENV)
            .filter(|path| !path.is_empty())
            .map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Format one output entry for the output file.
///
/// Multi-line values use the `key<<DELIMITER` form.
pub fn format_entry(key: &str, value: &str) -> String {
    if value.contains('\n') || value.contains('\r') {
        let mut delimiter = HEREDOC_DELIMITER.to_string();
        while value.contains(&delimiter) {
            delimiter.push('_');
        }
        format!("{key}<<{delimiter}\n{value}\n{delimiter}\n")
    } else {
        format!("{key}={value}\n")
    }
}

impl OutputSink for GithubOutput {
    fn set_output(&mut self, key: &str, value: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format_entry(key, value).as_bytes())?;
        Ok(())
    }
}

/// True when running inside a GitHub Actions job
pub fn in_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").map_or(false, |v| v == "true")
}

fn escape_command_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// `::warning::` workflow command for a message
pub fn warning_command(message: &str) -> String {
    format!("::warning::{}", escape_command_data(message))
}

/// `::error::` workflow command for a message
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_command_data(message))
}

use crate::error::{GitTagVersionError, Result};
use crate::git::{CommitCounter, TagLister};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs the `git` executable inside a working directory
pub struct GitCommand {
    workdir: PathBuf,
}

impl GitCommand {
    /// Create a runner rooted at `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        GitCommand {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run `git <args>` and return its trimmed stdout.
    ///
    /// # Returns
    /// * `Ok(String)` if git exits with code 0
    /// * `Err` if git cannot be spawned or exits non-zero
    pub fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                GitTagVersionError::command(format!("Failed to execute git {}: {}", args.join(" "), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitTagVersionError::command(format!(
                "git {} failed with exit code {}: {}",
                args.join(" "),
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl TagLister for GitCommand {
    fn list_tags(&self, prefix: &str) -> Result<String> {
        let pattern = format!("{}*", prefix);
        self.run(&["tag", "--list", &pattern, "--sort=-v:refname"])
    }
}

impl CommitCounter for GitCommand {
    fn count_commits(&self, since: Option<&str>) -> Result<String> {
        match since {
            Some(tag) => {
                let range = format!("{}..HEAD", tag);
                self.run(&["rev-list", "--count", &range])
            }
            None => self.run(&["rev-list", "--count", "HEAD"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_outside_repository_fails() {
        let dir = TempDir::new().unwrap();
        let git = GitCommand::new(dir.path());

        // Either git is missing or it refuses to list tags outside a repo.
        assert!(git.list_tags("v").is_err());
    }

    #[test]
    fn test_workdir() {
        let git = GitCommand::new("/tmp/some-repo");
        assert_eq!(git.workdir(), Path::new("/tmp/some-repo"));
    }
}

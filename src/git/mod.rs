//! Git collaborators abstraction layer
//!
//! Version resolution needs two things from git: the names of tags matching a
//! prefix, and the number of commits since a reference. Both are expressed as
//! traits so the resolver can be driven by any backend:
//!
//! - [repository::Git2Repository]: reads the repository through the `git2` crate
//! - [command::GitCommand]: shells out to the `git` executable
//! - [mock::MockRepository]: scripted responses for tests
//!
//! Both traits hand back raw text, mirroring what `git tag --list` and
//! `git rev-list --count` print. Interpreting that text is the resolver's job.
//!
//! ```rust
//! # use git_tag_version::git::{CommitCounter, TagLister};
//! # fn example<R: TagLister + CommitCounter>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let raw_tags = repo.list_tags("v")?;
//! let since_tag = repo.count_commits(Some("v1.2.3"))?;
//! let total = repo.count_commits(None)?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::GitCommand;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Lists tag names matching a prefix.
pub trait TagLister {
    /// Return the names of tags starting with `prefix`, one per line.
    ///
    /// An empty string means no tags. Ordering is unspecified and the prefix
    /// filter is advisory; callers re-validate every line.
    fn list_tags(&self, prefix: &str) -> Result<String>;
}

/// Counts commits reachable from HEAD.
pub trait CommitCounter {
    /// Return the commit count as decimal text.
    ///
    /// # Arguments
    /// * `since` - `None` counts every commit reachable from HEAD; `Some(tag)`
    ///   counts commits reachable from HEAD but not from `tag`
    fn count_commits(&self, since: Option<&str>) -> Result<String>;
}

/// Git backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// libgit2 through the `git2` crate
    #[default]
    Git2,
    /// The `git` executable on PATH
    Cli,
}

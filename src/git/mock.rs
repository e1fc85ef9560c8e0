use crate::error::{GitTagVersionError, Result};
use crate::git::{CommitCounter, TagLister};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock repository returning scripted collaborator output
///
/// Records every call so tests can assert which collaborators were consulted.
pub struct MockRepository {
    tags: std::result::Result<String, String>,
    commit_count: std::result::Result<String, String>,
    tag_calls: AtomicUsize,
    count_calls: Mutex<Vec<Option<String>>>,
}

impl MockRepository {
    /// Create a mock with no tags and zero commits
    pub fn new() -> Self {
        MockRepository {
            tags: Ok(String::new()),
            commit_count: Ok("0".to_string()),
            tag_calls: AtomicUsize::new(0),
            count_calls: Mutex::new(Vec::new()),
        }
    }

    /// Set the raw tag listing returned by `list_tags`
    pub fn with_tags(mut self, raw: impl Into<String>) -> Self {
        self.tags = Ok(raw.into());
        self
    }

    /// Set the raw count returned by `count_commits`
    pub fn with_commit_count(mut self, raw: impl Into<String>) -> Self {
        self.commit_count = Ok(raw.into());
        self
    }

    /// Make `list_tags` fail with the given message
    pub fn failing_tags(mut self, message: impl Into<String>) -> Self {
        self.tags = Err(message.into());
        self
    }

    /// Make `count_commits` fail with the given message
    pub fn failing_count(mut self, message: impl Into<String>) -> Self {
        self.commit_count = Err(message.into());
        self
    }

    /// Number of `list_tags` calls so far
    pub fn tag_calls(&self) -> usize {
        self.tag_calls.load(Ordering::SeqCst)
    }

    /// Arguments of every `count_commits` call so far
    pub fn count_calls(&self) -> Vec<Option<String>> {
        self.count_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TagLister for MockRepository {
    fn list_tags(&self, _prefix: &str) -> Result<String> {
        self.tag_calls.fetch_add(1, Ordering::SeqCst);
        self.tags.clone().map_err(GitTagVersionError::command)
    }
}

impl CommitCounter for MockRepository {
    fn count_commits(&self, since: Option<&str>) -> Result<String> {
        if let Ok(mut calls) = self.count_calls.lock() {
            calls.push(since.map(str::to_string));
        }
        self.commit_count.clone().map_err(GitTagVersionError::command)
    }
}

use thiserror::Error;

/// Unified error type for git-tag-version operations
#[derive(Error, Debug)]
pub enum GitTagVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Git command failed: {0}")]
    Command(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-tag-version
pub type Result<T> = std::result::Result<T, GitTagVersionError>;

impl GitTagVersionError {
    /// Create a git command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        GitTagVersionError::Command(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitTagVersionError::Config(msg.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        GitTagVersionError::Output(msg.into())
    }
}

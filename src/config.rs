use crate::error::{GitTagVersionError, Result};
use crate::git::Backend;
use crate::output::OutputTarget;
use crate::resolver::{ResolverOptions, DEFAULT_PREFIX};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local configuration file name
pub const LOCAL_CONFIG_FILE: &str = "gittagversion.toml";

/// Configuration file name under the user config directory
pub const USER_CONFIG_FILE: &str = "git-tag-version.toml";

/// Represents the complete configuration for git-tag-version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// How tags are selected and the patch number derived.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResolverConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub disable_auto_patch_count: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            prefix: default_prefix(),
            disable_auto_patch_count: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct GitConfig {
    #[serde(default)]
    pub backend: Backend,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub target: OutputTarget,
}

/// Values given on the command line, applied on top of a loaded [Config]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub prefix: Option<String>,
    pub disable_auto_patch_count: Option<bool>,
    pub backend: Option<Backend>,
    pub target: Option<OutputTarget>,
}

impl Config {
    /// Replace file values with any command-line overrides
    pub fn merge(mut self, overrides: &Overrides) -> Self {
        if let Some(prefix) = &overrides.prefix {
            self.resolver.prefix = prefix.clone();
        }
        if let Some(disable) = overrides.disable_auto_patch_count {
            self.resolver.disable_auto_patch_count = disable;
        }
        if let Some(backend) = overrides.backend {
            self.git.backend = backend;
        }
        if let Some(target) = overrides.target {
            self.output.target = target;
        }
        self
    }

    /// Resolver options described by this configuration
    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions::new(
            self.resolver.prefix.clone(),
            self.resolver.disable_auto_patch_count,
        )
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| GitTagVersionError::config(e.to_string()))
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_FILE))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gittagversion.toml` in `base_dir` (the repository directory)
/// 3. `git-tag-version.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or if the custom
///   path does not exist
pub fn load_config(config_path: Option<&str>, base_dir: &Path) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => {
            let local = base_dir.join(LOCAL_CONFIG_FILE);
            if local.exists() {
                local
            } else if let Some(user) = user_config_path().filter(|p| p.exists()) {
                user
            } else {
                return Ok(Config::default());
            }
        }
    };

    let content = fs::read_to_string(&path).map_err(|e| {
        GitTagVersionError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&content)
}

pub mod resolve;
pub mod schema;

use std::path::PathBuf;

/// Where a configuration value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Default,
    UserConfig(PathBuf),
    ProjectConfig(PathBuf),
    EnvVar(String),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Default => write!(f, "default"),
            Source::UserConfig(path) => write!(f, "user config ({})", path.display()),
            Source::ProjectConfig(path) => write!(f, "project config ({})", path.display()),
            Source::EnvVar(name) => write!(f, "env var ({})", name),
        }
    }
}

/// Fully resolved toolchain configuration — no Option fields.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Binary asked for the host runtime version.
    pub runtime_binary: PathBuf,
    pub runtime_binary_source: Source,
    /// Prefix of the plugin executables that implement each command.
    pub plugin_prefix: String,
    pub plugin_prefix_source: Source,
    pub loaded_files: Vec<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            runtime_binary: PathBuf::from("node"),
            runtime_binary_source: Source::Default,
            plugin_prefix: "runway".to_string(),
            plugin_prefix_source: Source::Default,
            loaded_files: Vec::new(),
        }
    }
}

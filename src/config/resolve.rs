use crate::config::schema::FileConfig;
use crate::config::{ResolvedConfig, Source};
use crate::errors::{Result, RunwayError};
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG_FILENAME: &str = ".runway.toml";
pub const RUNTIME_BINARY_VAR: &str = "RUNWAY_NODE";
pub const PLUGIN_PREFIX_VAR: &str = "RUNWAY_PLUGIN_PREFIX";

/// Resolve configuration by applying layers bottom-up:
/// 1. Built-in defaults
/// 2. User config (~/.config/runway/config.toml)
/// 3. Project config (nearest .runway.toml walking up from working_dir)
/// 4. Environment variables
pub fn resolve_config(working_dir: &Path) -> Result<ResolvedConfig> {
    resolve_layers(working_dir, find_user_config(), |name| {
        std::env::var(name).ok()
    })
}

/// Layered resolution with the user config path and environment lookup
/// supplied by the caller.
pub fn resolve_layers<F>(
    working_dir: &Path,
    user_config: Option<PathBuf>,
    env: F,
) -> Result<ResolvedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ResolvedConfig::default();

    if let Some(path) = user_config.filter(|p| p.exists()) {
        let file = load_file(&path, "user")?;
        apply_file_config(&mut config, &file, Source::UserConfig(path.clone()));
        config.loaded_files.push(path);
    }

    if let Some(path) = find_project_config(working_dir) {
        let file = load_file(&path, "project")?;
        apply_file_config(&mut config, &file, Source::ProjectConfig(path.clone()));
        config.loaded_files.push(path);
    }

    apply_env_vars(&mut config, env);

    tracing::debug!(
        runtime_binary = %config.runtime_binary.display(),
        runtime_binary_source = %config.runtime_binary_source,
        plugin_prefix = %config.plugin_prefix,
        plugin_prefix_source = %config.plugin_prefix_source,
        "resolved configuration"
    );
    Ok(config)
}

fn find_user_config() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("runway").join("config.toml"))
}

fn find_project_config(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(PROJECT_CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

fn load_file(path: &Path, layer: &str) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path).map_err(|_| {
        RunwayError::Config(format!("Could not read {layer} config: {}", path.display()))
    })?;
    FileConfig::from_toml(&content)
        .map_err(|e| RunwayError::Config(format!("Invalid {layer} config: {e}")))
}

fn apply_file_config(config: &mut ResolvedConfig, file: &FileConfig, source: Source) {
    if let Some(ref binary) = file.runtime.binary {
        config.runtime_binary = binary.clone();
        config.runtime_binary_source = source.clone();
    }
    if let Some(ref prefix) = file.toolchain.plugin_prefix {
        config.plugin_prefix = prefix.clone();
        config.plugin_prefix_source = source;
    }
}

fn apply_env_vars<F>(config: &mut ResolvedConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = env(RUNTIME_BINARY_VAR).filter(|v| !v.is_empty()) {
        config.runtime_binary = PathBuf::from(val);
        config.runtime_binary_source = Source::EnvVar(RUNTIME_BINARY_VAR.into());
    }
    if let Some(val) = env(PLUGIN_PREFIX_VAR).filter(|v| !v.is_empty()) {
        config.plugin_prefix = val;
        config.plugin_prefix_source = Source::EnvVar(PLUGIN_PREFIX_VAR.into());
    }
}

use crate::errors::Result;
use std::path::PathBuf;

/// Variable naming the initial project root used by `init`.
pub const ROOT_VAR: &str = "RUNWAY_ROOT";

/// Variable naming the build/runtime mode.
pub const MODE_VAR: &str = "NODE_ENV";

/// Snapshot of the process environment the dispatcher reads.
///
/// `build` and `watch` fill in `mode` when it is missing; the plugin
/// toolchain exports it to the processes it starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub root: Option<PathBuf>,
    pub mode: Option<String>,
    pub cwd: PathBuf,
}

impl Environment {
    pub fn from_process() -> Result<Self> {
        Ok(Self {
            root: non_empty_var(ROOT_VAR).map(PathBuf::from),
            mode: non_empty_var(MODE_VAR),
            cwd: std::env::current_dir()?,
        })
    }

    /// Return the mode, setting it to `default` first if none is known.
    pub fn mode_or_default(&mut self, default: &str) -> &str {
        self.mode.get_or_insert_with(|| {
            tracing::debug!(mode = default, "no {MODE_VAR} set, using default");
            default.to_string()
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

use crate::args::normalize::FlagRecord;
use crate::environment::{Environment, MODE_VAR};
use crate::errors::{Result, RunwayError};
use crate::toolchain::{BuildOptions, InitOptions, RevealOptions, RoutesOptions, Toolchain};
use serde::Serialize;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Variable carrying the operation's options, as JSON, to the plugin.
pub const OPTIONS_VAR: &str = "RUNWAY_OPTIONS";

/// Runs each operation as an external `<prefix>-<operation>` executable.
#[derive(Debug, Clone)]
pub struct PluginToolchain {
    prefix: String,
}

impl PluginToolchain {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Executable name for an operation, e.g. `runway-vite-build`.
    pub fn program(&self, operation: &str) -> String {
        format!("{}-{}", self.prefix, operation)
    }

    fn run<T: Serialize + ?Sized>(
        &self,
        operation: &str,
        env: &Environment,
        args: &[&OsStr],
        options: &T,
    ) -> Result<()> {
        let program = self.program(operation);
        let options = serde_json::to_string(options)?;
        tracing::info!(%program, ?args, %options, "starting plugin");

        let mut command = Command::new(&program);
        command
            .args(args)
            .env(OPTIONS_VAR, &options)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(mode) = &env.mode {
            command.env(MODE_VAR, mode);
        }

        let status = command.status().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RunwayError::MissingPlugin {
                    program: program.clone(),
                }
            } else {
                RunwayError::Io(e)
            }
        })?;

        if !status.success() {
            return Err(RunwayError::Collaborator {
                command: program,
                code: status.code(),
            });
        }
        Ok(())
    }
}

fn dir_args(dir: Option<&Path>) -> Vec<&OsStr> {
    dir.map(Path::as_os_str).into_iter().collect()
}

impl Toolchain for PluginToolchain {
    fn init(&mut self, env: &Environment, dir: &Path, options: InitOptions) -> Result<()> {
        self.run("init", env, &[dir.as_os_str()], &options)
    }

    fn routes(
        &mut self,
        env: &Environment,
        dir: Option<&Path>,
        options: RoutesOptions,
    ) -> Result<()> {
        self.run("routes", env, &dir_args(dir), &options)
    }

    fn build(
        &mut self,
        env: &Environment,
        dir: Option<&Path>,
        options: BuildOptions,
    ) -> Result<()> {
        self.run("build", env, &dir_args(dir), &options)
    }

    fn vite_build(
        &mut self,
        env: &Environment,
        dir: Option<&Path>,
        flags: &FlagRecord,
    ) -> Result<()> {
        self.run("vite-build", env, &dir_args(dir), flags)
    }

    fn watch(&mut self, env: &Environment, dir: Option<&Path>) -> Result<()> {
        self.run("watch", env, &dir_args(dir), &serde_json::json!({}))
    }

    fn setup(&mut self, env: &Environment) -> Result<()> {
        self.run("setup", env, &[], &serde_json::json!({}))
    }

    fn generate_entry(
        &mut self,
        env: &Environment,
        entry: Option<&str>,
        variant: Option<&str>,
        options: RevealOptions,
    ) -> Result<()> {
        let args: Vec<&OsStr> = entry.into_iter().chain(variant).map(OsStr::new).collect();
        self.run("reveal", env, &args, &options)
    }

    fn dev(&mut self, env: &Environment, dir: Option<&Path>, flags: &FlagRecord) -> Result<()> {
        self.run("dev", env, &dir_args(dir), flags)
    }

    fn vite_dev(
        &mut self,
        env: &Environment,
        dir: Option<&Path>,
        flags: &FlagRecord,
    ) -> Result<()> {
        self.run("vite-dev", env, &dir_args(dir), flags)
    }
}

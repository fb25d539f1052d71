pub mod plugin;

use crate::args::normalize::FlagRecord;
use crate::environment::Environment;
use crate::errors::Result;
use serde::Serialize;
use std::path::Path;

/// Output mode for `routes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutesFormat {
    Json,
    Jsx,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InitOptions {
    /// `None` leaves the choice to the collaborator, which deletes by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoutesOptions {
    pub format: RoutesFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildOptions {
    pub sourcemap: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RevealOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typescript: Option<bool>,
}

/// The subcommand implementations the dispatcher delegates to.
///
/// Errors are returned to the caller of the dispatcher untouched.
pub trait Toolchain {
    fn init(&mut self, env: &Environment, dir: &Path, options: InitOptions) -> Result<()>;

    fn routes(&mut self, env: &Environment, dir: Option<&Path>, options: RoutesOptions)
        -> Result<()>;

    fn build(&mut self, env: &Environment, dir: Option<&Path>, options: BuildOptions) -> Result<()>;

    fn vite_build(&mut self, env: &Environment, dir: Option<&Path>, flags: &FlagRecord)
        -> Result<()>;

    fn watch(&mut self, env: &Environment, dir: Option<&Path>) -> Result<()>;

    fn setup(&mut self, env: &Environment) -> Result<()>;

    fn generate_entry(
        &mut self,
        env: &Environment,
        entry: Option<&str>,
        variant: Option<&str>,
        options: RevealOptions,
    ) -> Result<()>;

    fn dev(&mut self, env: &Environment, dir: Option<&Path>, flags: &FlagRecord) -> Result<()>;

    fn vite_dev(&mut self, env: &Environment, dir: Option<&Path>, flags: &FlagRecord)
        -> Result<()>;
}

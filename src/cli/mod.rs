pub mod help;

use crate::args::normalize::{normalize, FlagRecord};
use crate::args::parse::parse;
use crate::args::schema::FlagSchema;
use crate::environment::Environment;
use crate::errors::{Result, RunwayError};
use crate::runtime;
use crate::toolchain::{
    BuildOptions, InitOptions, RevealOptions, RoutesFormat, RoutesOptions, Toolchain,
};
use std::io::Write;
use std::path::Path;

/// Subcommand named by the first positional token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Init,
    Routes,
    Build,
    ViteBuild,
    Watch,
    Setup,
    Reveal,
    Dev,
    ViteDev,
    /// Any other token: a project directory to run `dev` in.
    Unknown(String),
}

impl Command {
    pub fn from_token(token: &str) -> Self {
        match token {
            "init" => Command::Init,
            "routes" => Command::Routes,
            "build" => Command::Build,
            "vite:build" => Command::ViteBuild,
            "watch" => Command::Watch,
            "setup" => Command::Setup,
            "reveal" => Command::Reveal,
            "dev" => Command::Dev,
            "vite:dev" => Command::ViteDev,
            other => Command::Unknown(other.to_string()),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Init => write!(f, "init"),
            Command::Routes => write!(f, "routes"),
            Command::Build => write!(f, "build"),
            Command::ViteBuild => write!(f, "vite:build"),
            Command::Watch => write!(f, "watch"),
            Command::Setup => write!(f, "setup"),
            Command::Reveal => write!(f, "reveal"),
            Command::Dev => write!(f, "dev"),
            Command::ViteDev => write!(f, "vite:dev"),
            Command::Unknown(dir) => write!(f, "dev ({dir})"),
        }
    }
}

/// Everything a single run needs besides its tokens.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub env: Environment,
    /// Version string reported by the host runtime, e.g. `v20.11.0`.
    pub runtime_version: String,
    /// Whether the caller is the top-level program rather than an embedding.
    pub top_level: bool,
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Help,
    Version,
    Dispatched(Command),
}

/// Check the runtime, parse `tokens`, and dispatch exactly one command.
pub fn run<T, W>(
    tokens: &[String],
    invocation: &mut Invocation,
    toolchain: &mut T,
    out: &mut W,
) -> Result<Outcome>
where
    T: Toolchain + ?Sized,
    W: Write,
{
    runtime::check(&invocation.runtime_version)?;

    let schema = FlagSchema::resolve(tokens);
    let parsed = parse(tokens, &schema)?;
    let flags = normalize(&parsed.flag_values, invocation.top_level);
    tracing::debug!(positionals = ?parsed.positionals, ?flags, "normalized arguments");

    if flags.is_set("help") {
        help::render_help(out)?;
        return Ok(Outcome::Help);
    }
    if flags.is_set("version") {
        help::render_version(out)?;
        return Ok(Outcome::Version);
    }

    let command = dispatch(&parsed.positionals, &flags, &mut invocation.env, toolchain)?;
    Ok(Outcome::Dispatched(command))
}

/// Route the positionals and flags to the matching toolchain operation.
pub fn dispatch<T>(
    positionals: &[String],
    flags: &FlagRecord,
    env: &mut Environment,
    toolchain: &mut T,
) -> Result<Command>
where
    T: Toolchain + ?Sized,
{
    let (first, rest) = positionals.split_first().ok_or(RunwayError::NoCommand)?;
    let command = Command::from_token(first);
    let arg = move |i: usize| rest.get(i).map(String::as_str);
    let dir = arg(0).map(Path::new);
    tracing::info!(%command, ?dir, "dispatching");

    match &command {
        Command::Init => {
            let dir = match dir {
                Some(dir) => dir.to_path_buf(),
                None => env.root.clone().unwrap_or_else(|| env.cwd.clone()),
            };
            let options = InitOptions {
                delete: flags.delete(),
            };
            toolchain.init(env, &dir, options)
        }
        Command::Routes => {
            let format = if flags.is_set("json") {
                RoutesFormat::Json
            } else {
                RoutesFormat::Jsx
            };
            toolchain.routes(env, dir, RoutesOptions { format })
        }
        Command::Build => {
            env.mode_or_default("production");
            let options = BuildOptions {
                sourcemap: flags.is_set("sourcemap"),
            };
            toolchain.build(env, dir, options)
        }
        Command::ViteBuild => toolchain.vite_build(env, dir, flags),
        Command::Watch => {
            env.mode_or_default("development");
            toolchain.watch(env, dir)
        }
        Command::Setup => toolchain.setup(env),
        Command::Reveal => {
            let options = RevealOptions {
                typescript: flags.typescript(),
            };
            toolchain.generate_entry(env, arg(0), arg(1), options)
        }
        Command::Dev => toolchain.dev(env, dir, flags),
        Command::ViteDev => toolchain.vite_dev(env, dir, flags),
        Command::Unknown(project) => toolchain.dev(env, Some(Path::new(project)), flags),
    }?;

    Ok(command)
}

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum RunwayError {
    #[error("runway requires runtime version {required} or newer, found {found}")]
    #[diagnostic(
        code(runway::runtime_too_old),
        help("upgrade the runtime binary or point RUNWAY_NODE at a newer one")
    )]
    RuntimeTooOld { found: String, required: u32 },

    #[error("Could not read a major version from runtime version string: {raw:?}")]
    #[diagnostic(code(runway::runtime_version))]
    RuntimeVersion { raw: String },

    #[error("Could not run runtime binary {}", .binary.display())]
    #[diagnostic(code(runway::runtime_probe))]
    RuntimeProbe {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Runtime binary {} exited with {status}: {stderr}",
        .binary.display()
    )]
    #[diagnostic(code(runway::runtime_exit))]
    RuntimeExit {
        binary: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("Unknown or unexpected option: {flag}")]
    #[diagnostic(code(runway::unknown_flag), help("run `runway --help` for usage"))]
    UnknownFlag { flag: String },

    #[error("Invalid value for {flag}: {reason}")]
    #[diagnostic(code(runway::malformed_flag_value))]
    MalformedFlagValue { flag: String, reason: String },

    #[error("No command or project directory given")]
    #[diagnostic(code(runway::no_command), help("run `runway --help` for usage"))]
    NoCommand,

    #[error("Could not find `{program}` on PATH")]
    #[diagnostic(code(runway::missing_plugin))]
    MissingPlugin { program: String },

    #[error(
        "`{command}` failed with exit code {}",
        .code.map_or("(signal)".to_string(), |c| c.to_string())
    )]
    #[diagnostic(code(runway::collaborator))]
    Collaborator { command: String, code: Option<i32> },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(runway::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(runway::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(runway::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RunwayError>;

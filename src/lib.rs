//! Command-line front end for the project-tooling suite.
//!
//! A run checks the host runtime version, picks the native or `vite:`
//! flag schema from the first token, parses and normalizes the flags, and
//! hands exactly one command to a [`toolchain::Toolchain`].

pub mod args;
pub mod cli;
pub mod config;
pub mod environment;
pub mod errors;
pub mod runtime;
pub mod toolchain;

pub use cli::{dispatch, run, Command, Invocation, Outcome};
pub use errors::{Result, RunwayError};

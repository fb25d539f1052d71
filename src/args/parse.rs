use crate::args::schema::{FlagKind, FlagSchema, FlagSpec};
use crate::args::{FlagValue, ParsedArguments};
use crate::errors::{Result, RunwayError};
use clap::error::{ContextKind, ErrorKind};
use clap::parser::ValueSource;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

const POSITIONALS: &str = "positionals";

/// Parse `tokens` (without the program name) against `schema`.
pub fn parse(tokens: &[String], schema: &FlagSchema) -> Result<ParsedArguments> {
    let matches = build_command(schema)
        .try_get_matches_from(tokens)
        .map_err(classify)?;

    let positionals = matches
        .get_many::<String>(POSITIONALS)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let mut parsed = ParsedArguments {
        positionals,
        ..Default::default()
    };
    for spec in schema.flags() {
        if let Some(value) = supplied_value(&matches, spec) {
            parsed.flag_values.insert(format!("--{}", spec.name), value);
        }
    }
    Ok(parsed)
}

/// Build a clap command mirroring the schema. Help and version are ordinary
/// flags here; rendering them is the dispatcher's job.
fn build_command(schema: &FlagSchema) -> Command {
    let positionals = Arg::new(POSITIONALS)
        .num_args(1..)
        .action(ArgAction::Append)
        .value_parser(value_parser!(String));

    schema.flags().iter().fold(
        Command::new("runway")
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .disable_help_subcommand(true)
            .args_override_self(true)
            .arg(positionals),
        |cmd, spec| cmd.arg(flag_arg(spec)),
    )
}

fn flag_arg(spec: &FlagSpec) -> Arg {
    let arg = Arg::new(spec.name).long(spec.name);
    let arg = match spec.short {
        Some(short) => arg.short(short),
        None => arg,
    };
    match spec.kind {
        FlagKind::Boolean => arg.action(ArgAction::SetTrue),
        FlagKind::String => arg
            .action(ArgAction::Set)
            .num_args(1)
            .allow_hyphen_values(true)
            .value_parser(parse_string),
        FlagKind::Number => arg
            .action(ArgAction::Set)
            .num_args(1)
            .allow_hyphen_values(true)
            .value_parser(parse_number),
    }
}

/// Values may start with a single dash (`-abc`) but another long flag
/// means the value was left out.
fn parse_string(raw: &str) -> std::result::Result<String, String> {
    if raw.starts_with("--") {
        return Err(format!("expected a value, found `{raw}`"));
    }
    Ok(raw.to_string())
}

fn parse_number(raw: &str) -> std::result::Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("`{raw}` is not a number")),
    }
}

fn supplied_value(matches: &ArgMatches, spec: &FlagSpec) -> Option<FlagValue> {
    if matches.value_source(spec.name) != Some(ValueSource::CommandLine) {
        return None;
    }
    match spec.kind {
        FlagKind::Boolean => Some(FlagValue::Bool(matches.get_flag(spec.name))),
        FlagKind::String => matches
            .get_one::<String>(spec.name)
            .cloned()
            .map(FlagValue::String),
        FlagKind::Number => matches
            .get_one::<f64>(spec.name)
            .copied()
            .map(FlagValue::Number),
    }
}

/// Map a clap failure onto the usage errors the dispatcher reports.
fn classify(err: clap::Error) -> RunwayError {
    let flag = err
        .get(ContextKind::InvalidArg)
        .map(|arg| {
            let arg = arg.to_string();
            arg.split_whitespace().next().unwrap_or_default().to_string()
        })
        .unwrap_or_default();

    if err.kind() == ErrorKind::UnknownArgument {
        return RunwayError::UnknownFlag { flag };
    }

    let value = err
        .get(ContextKind::InvalidValue)
        .map(|v| v.to_string())
        .filter(|v| !v.is_empty());
    let cause = std::error::Error::source(&err).map(|source| source.to_string());
    let reason = match (err.kind(), value) {
        (ErrorKind::ValueValidation, value) => cause
            .or_else(|| value.map(|v| format!("`{v}` is invalid")))
            .unwrap_or_else(|| "invalid value".to_string()),
        (ErrorKind::InvalidValue, None) => "a value is required".to_string(),
        (kind, _) => kind.as_str().unwrap_or("invalid usage").to_string(),
    };
    RunwayError::MalformedFlagValue { flag, reason }
}

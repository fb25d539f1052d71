pub mod normalize;
pub mod parse;
pub mod schema;

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// A parsed flag value.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    Bool(bool),
    String(String),
    Number(f64),
}

impl FlagValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FlagValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Serializes as a bare JSON value; whole numbers are written without a
/// fractional part (`3000`, not `3000.0`).
impl Serialize for FlagValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FlagValue::Bool(b) => serializer.serialize_bool(*b),
            FlagValue::String(s) => serializer.serialize_str(s),
            FlagValue::Number(n) if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 => {
                serializer.serialize_i64(*n as i64)
            }
            FlagValue::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

/// Output of applying a flag schema to the invocation tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedArguments {
    /// Non-flag tokens in order; the first is the command name.
    pub positionals: Vec<String>,
    /// Supplied flags keyed by canonical long form, dashes included (`--tls-key`).
    pub flag_values: BTreeMap<String, FlagValue>,
}

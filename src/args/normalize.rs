use crate::args::FlagValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// Keys renamed from kebab-case on their way into the record.
const RENAMED_KEYS: &[(&str, &str)] = &[("tls-key", "tlsKey"), ("tls-cert", "tlsCert")];

/// Dispatch-ready flags: no leading dashes, negations applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FlagRecord {
    values: BTreeMap<String, FlagValue>,
}

impl FlagRecord {
    pub fn get(&self, key: &str) -> Option<&FlagValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// True only when `key` holds boolean `true`.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).and_then(FlagValue::as_bool).unwrap_or(false)
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FlagValue::as_str)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FlagValue::as_number)
    }

    /// `Some(false)` after `--no-delete`; unset means the collaborator default.
    pub fn delete(&self) -> Option<bool> {
        self.get("delete").and_then(FlagValue::as_bool)
    }

    pub fn typescript(&self) -> Option<bool> {
        self.get("typescript").and_then(FlagValue::as_bool)
    }

    pub fn interactive(&self) -> bool {
        self.is_set("interactive")
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Turn parser output into a [`FlagRecord`].
///
/// `top_level` is whether the caller runs as the top-level program; it
/// becomes `interactive` unless that key was already supplied.
pub fn normalize(flag_values: &BTreeMap<String, FlagValue>, top_level: bool) -> FlagRecord {
    let mut values: BTreeMap<String, FlagValue> = flag_values
        .iter()
        .map(|(key, value)| (key.trim_start_matches('-').to_string(), value.clone()))
        .collect();

    for (from, to) in RENAMED_KEYS {
        if let Some(value) = values.remove(*from) {
            values.insert((*to).to_string(), value);
        }
    }

    if values.contains_key("no-delete") {
        values.insert("delete".to_string(), FlagValue::Bool(false));
    }
    if values.contains_key("no-typescript") {
        values.insert("typescript".to_string(), FlagValue::Bool(false));
    }
    values
        .entry("interactive".to_string())
        .or_insert(FlagValue::Bool(top_level));

    FlagRecord { values }
}

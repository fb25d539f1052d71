/// Prefix marking a command that is passed through to the vite toolchain.
pub const DELEGATED_PREFIX: &str = "vite:";

/// Value type a flag accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Boolean,
    String,
    Number,
}

/// One recognized flag: its canonical long name and optional short alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub short: Option<char>,
    pub kind: FlagKind,
}

const fn flag(name: &'static str, kind: FlagKind) -> FlagSpec {
    FlagSpec {
        name,
        short: None,
        kind,
    }
}

const fn aliased(name: &'static str, short: char, kind: FlagKind) -> FlagSpec {
    FlagSpec {
        name,
        short: Some(short),
        kind,
    }
}

/// Flags understood by both schemas.
pub const SHARED_FLAGS: &[FlagSpec] = &[
    aliased("help", 'h', FlagKind::Boolean),
    aliased("version", 'v', FlagKind::Boolean),
    flag("json", FlagKind::Boolean),
    flag("token", FlagKind::String),
    flag("typescript", FlagKind::Boolean),
    flag("no-typescript", FlagKind::Boolean),
    flag("manual", FlagKind::Boolean),
    aliased("port", 'p', FlagKind::Number),
    flag("tls-key", FlagKind::String),
    flag("tls-cert", FlagKind::String),
    flag("no-delete", FlagKind::Boolean),
    flag("dry", FlagKind::Boolean),
    flag("force", FlagKind::Boolean),
];

/// Flags only the native commands accept. `-c` belongs to `--command` here.
pub const NATIVE_FLAGS: &[FlagSpec] = &[
    aliased("command", 'c', FlagKind::String),
    flag("sourcemap", FlagKind::Boolean),
];

/// Passthrough flags for `vite:` commands. `--host` and `--open` are absent:
/// their kind depends on the invocation, see [`value_arity`].
pub const DELEGATED_FLAGS: &[FlagSpec] = &[
    flag("command", FlagKind::String),
    flag("assetsInlineLimit", FlagKind::Number),
    flag("clearScreen", FlagKind::Boolean),
    aliased("config", 'c', FlagKind::String),
    flag("cors", FlagKind::Boolean),
    flag("emptyOutDir", FlagKind::Boolean),
    aliased("logLevel", 'l', FlagKind::String),
    flag("minify", FlagKind::String),
    aliased("mode", 'm', FlagKind::String),
    flag("strictPort", FlagKind::Boolean),
    flag("profile", FlagKind::Boolean),
];

/// Flags that may appear either bare or carrying a value.
pub const OPTIONAL_VALUE_FLAGS: &[&str] = &["host", "open"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    Native,
    Delegated,
}

impl SchemaVariant {
    /// Pick the variant from the first invocation token.
    pub fn for_first_token(first: Option<&str>) -> Self {
        match first {
            Some(token) if token.starts_with(DELEGATED_PREFIX) => SchemaVariant::Delegated,
            _ => SchemaVariant::Native,
        }
    }
}

impl std::fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaVariant::Native => write!(f, "native"),
            SchemaVariant::Delegated => write!(f, "delegated"),
        }
    }
}

/// The flag vocabulary active for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSchema {
    variant: SchemaVariant,
    flags: Vec<FlagSpec>,
}

impl FlagSchema {
    /// Resolve the schema for a whole token sequence.
    pub fn resolve(tokens: &[String]) -> Self {
        let variant = SchemaVariant::for_first_token(tokens.first().map(String::as_str));
        let mut flags: Vec<FlagSpec> = SHARED_FLAGS.to_vec();
        match variant {
            SchemaVariant::Native => flags.extend_from_slice(NATIVE_FLAGS),
            SchemaVariant::Delegated => {
                flags.extend_from_slice(DELEGATED_FLAGS);
                flags.extend(
                    OPTIONAL_VALUE_FLAGS
                        .iter()
                        .copied()
                        .map(|name| flag(name, value_arity(tokens, name))),
                );
            }
        }
        tracing::debug!(%variant, flags = flags.len(), "resolved flag schema");
        Self { variant, flags }
    }

    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }

    /// Look up a flag token (`--name` or `-x`), following short aliases to
    /// their canonical flag.
    pub fn lookup(&self, token: &str) -> Option<&FlagSpec> {
        if let Some(long) = token.strip_prefix("--") {
            return self.flags.iter().find(|f| f.name == long);
        }
        let short = token.strip_prefix('-')?;
        let mut chars = short.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.flags.iter().find(|f| f.short == Some(c)),
            _ => None,
        }
    }
}

/// Decide whether a flag that may carry a value takes one in this invocation.
///
/// The first bare occurrence of `--name` decides: followed by a non-flag
/// token it is a string flag, followed by another flag or nothing it is a
/// boolean switch. `--name=value` always carries a value.
pub fn value_arity(tokens: &[String], name: &str) -> FlagKind {
    let long = format!("--{name}");
    let attached = format!("{long}=");
    if tokens.iter().any(|t| t.starts_with(&attached)) {
        return FlagKind::String;
    }
    match tokens.iter().position(|t| *t == long) {
        Some(pos) => match tokens.get(pos + 1) {
            Some(next) if !next.starts_with('-') => FlagKind::String,
            _ => FlagKind::Boolean,
        },
        None => FlagKind::Boolean,
    }
}

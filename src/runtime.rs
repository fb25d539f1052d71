use crate::errors::{Result, RunwayError};
use std::path::Path;
use std::process::Command;

/// Lowest host runtime major version the toolchain supports.
pub const MIN_RUNTIME_MAJOR: u32 = 18;

/// Extract the major version from a runtime version string such as `v20.11.0`.
pub fn parse_major(version: &str) -> Option<u32> {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Fail unless `version` reports at least [`MIN_RUNTIME_MAJOR`].
pub fn check(version: &str) -> Result<()> {
    let major = parse_major(version).ok_or_else(|| RunwayError::RuntimeVersion {
        raw: version.to_string(),
    })?;
    if major < MIN_RUNTIME_MAJOR {
        return Err(RunwayError::RuntimeTooOld {
            found: version.trim().to_string(),
            required: MIN_RUNTIME_MAJOR,
        });
    }
    tracing::debug!(version = version.trim(), "runtime version accepted");
    Ok(())
}

/// Ask the runtime binary for its version (`<binary> --version`).
pub fn probe_version(binary: &Path) -> Result<String> {
    let output = Command::new(binary)
        .arg("--version")
        .output()
        .map_err(|source| RunwayError::RuntimeProbe {
            binary: binary.to_path_buf(),
            source,
        })?;
    if !output.status.success() {
        return Err(RunwayError::RuntimeExit {
            binary: binary.to_path_buf(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    tracing::debug!(binary = %binary.display(), %version, "probed runtime");
    Ok(version)
}

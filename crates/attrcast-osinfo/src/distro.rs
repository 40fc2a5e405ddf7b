//! Distribution detection via os-release and uname

use std::collections::HashMap;

use attrcast_exec::traits::CommandRunner;
use tracing::{debug, instrument, warn};

use crate::error::OsInfoError;
use crate::types::DistroInfo;

/// Resolve the local hostname
///
/// # Errors
/// Returns an error if the hostname probe cannot be run or reports failure.
#[instrument(skip(runner))]
pub async fn hostname(runner: &dyn CommandRunner) -> Result<String, OsInfoError> {
    let result = runner
        .run("uname -n")
        .await
        .map_err(|e| OsInfoError::ExecutionError(e.to_string()))?;

    if !result.success() {
        return Err(OsInfoError::ProbeFailed(result.stderr));
    }

    Ok(result.stdout.trim().to_string())
}

/// Detect distribution identity facts
///
/// Reads `/etc/os-release` for the distribution name and version and queries
/// `uname` for the kernel release and machine architecture.
///
/// # Errors
/// Returns an error if os-release cannot be read or a uname probe fails.
#[instrument(skip(runner))]
pub async fn detect(runner: &dyn CommandRunner) -> Result<DistroInfo, OsInfoError> {
    debug!("detecting distribution");

    let result = runner
        .run("cat /etc/os-release")
        .await
        .map_err(|e| OsInfoError::ExecutionError(e.to_string()))?;

    if !result.success() {
        return Err(OsInfoError::OsReleaseUnavailable(result.stderr));
    }

    let fields = parse_os_release(&result.stdout);

    let short_name = fields.get("ID").cloned().unwrap_or_default();
    // PRETTY_NAME carries the version suffix; NAME is the fallback
    let long_name = fields
        .get("PRETTY_NAME")
        .or_else(|| fields.get("NAME"))
        .cloned()
        .unwrap_or_default();
    let version = fields.get("VERSION_ID").cloned().unwrap_or_default();

    if short_name.is_empty() {
        warn!("os-release has no ID field");
    }

    let kernel = uname(runner, "-r").await?;
    let architecture = uname(runner, "-m").await?;

    let info = DistroInfo {
        long_name,
        short_name,
        version,
        kernel,
        architecture,
    };

    debug!(distro = %info.short_name, version = %info.version, "distribution detected");

    Ok(info)
}

async fn uname(runner: &dyn CommandRunner, flag: &str) -> Result<String, OsInfoError> {
    let result = runner
        .run(&format!("uname {flag}"))
        .await
        .map_err(|e| OsInfoError::ExecutionError(e.to_string()))?;

    if !result.success() {
        return Err(OsInfoError::ProbeFailed(result.stderr));
    }

    Ok(result.stdout.trim().to_string())
}

/// Parse os-release `KEY=VALUE` lines into a map, stripping quotes
fn parse_os_release(content: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            fields.insert(key.trim().to_string(), value.to_string());
        }
    }

    fields
}

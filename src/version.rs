use std::fmt::{Display, Formatter};

use crate::error::{RegressionError, Result};
use crate::report::Reporter;
use crate::verification::klayout::version_command;
use crate::verification::ProcessRunner;

/// Oldest supported KLayout release is 0.28.0.
pub const MIN_MINOR_VERSION: u32 = 28;

/// A dotted version number such as `0.28.6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolVersion {
    pub components: Vec<u32>,
}

impl ToolVersion {
    pub fn minor(&self) -> u32 {
        self.components.get(1).copied().unwrap_or_default()
    }
}

impl Display for ToolVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u32::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Parses the last whitespace-separated token of a version banner.
///
/// Exactly two or three numeric components are accepted.
pub fn parse_version(banner: &str) -> Result<ToolVersion> {
    let unknown = || RegressionError::UnknownVersion {
        banner: banner.to_string(),
    };

    let token = banner.split_whitespace().last().ok_or_else(unknown)?;
    let components = token
        .split('.')
        .map(str::parse::<u32>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| unknown())?;

    if !(2..=3).contains(&components.len()) {
        return Err(unknown());
    }

    Ok(ToolVersion { components })
}

/// Validates a version banner against the minimum supported minor version.
///
/// An empty banner means the tool could not be run at all.
pub fn verify_banner(
    reporter: &dyn Reporter,
    tool: &str,
    banner: &str,
    min_minor: u32,
) -> Result<ToolVersion> {
    if banner.is_empty() {
        return Err(RegressionError::ToolNotFound {
            tool: tool.to_string(),
        });
    }

    reporter.info(&format!("Your Klayout version is: {banner}"));

    let version = parse_version(banner)?;
    if version.minor() < min_minor {
        reporter.error(&format!(
            "Prerequisites at a minimum: KLayout 0.{min_minor}.0"
        ));
        reporter.error(
            "Using this klayout version has not been assessed in this development. Limits are unknown",
        );
        return Err(RegressionError::VersionTooOld {
            found: version.to_string(),
            minimum: min_minor,
        });
    }

    Ok(version)
}

/// Runs `<tool> -b -v` and checks the reported version.
///
/// A tool that cannot be launched at all counts as not found.
pub fn check_tool_version(
    runner: &dyn ProcessRunner,
    reporter: &dyn Reporter,
    tool: &str,
    min_minor: u32,
) -> Result<ToolVersion> {
    let banner = match runner.run(&version_command(tool)) {
        Ok(output) => output.stdout.lines().next().unwrap_or("").trim().to_string(),
        Err(e) => {
            log::debug!("failed to launch {tool}: {e}");
            String::new()
        }
    };

    verify_banner(reporter, tool, &banner, min_minor)
}

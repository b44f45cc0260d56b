//! External tool detection and management.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
}

/// Check if a tool is available using a custom version argument.
///
/// # Example
///
/// ```no_run
/// use clipsplit_av::check_tool_with_arg;
///
/// let info = check_tool_with_arg("ffprobe", "-version");
/// if info.available {
///     println!("ffprobe version: {:?}", info.version);
/// }
/// ```
pub fn check_tool_with_arg(name: &str, version_arg: &str) -> ToolInfo {
    let result = Command::new(name).arg(version_arg).output();

    match result {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.to_string());

            ToolInfo {
                name: name.to_string(),
                available: true,
                version,
            }
        }
        _ => ToolInfo {
            name: name.to_string(),
            available: false,
            version: None,
        },
    }
}

/// Require that a tool is available, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        #[cfg(feature = "tracing")]
        tracing::warn!("configured {} path {:?} does not exist, searching PATH", name, path);
    }

    require_tool(name)
}

/// Resolved locations of ffmpeg and ffprobe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    /// Path to the ffmpeg executable.
    pub ffmpeg: PathBuf,
    /// Path to the ffprobe executable.
    pub ffprobe: PathBuf,
}

impl ToolPaths {
    /// Resolve both tools, honoring optional configured overrides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] naming the first tool that could not be
    /// located.
    pub fn discover(ffmpeg: Option<&Path>, ffprobe: Option<&Path>) -> Result<Self> {
        let paths = Self {
            ffmpeg: get_tool_path("ffmpeg", ffmpeg)?,
            ffprobe: get_tool_path("ffprobe", ffprobe)?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("using ffmpeg at {:?}, ffprobe at {:?}", paths.ffmpeg, paths.ffprobe);

        Ok(paths)
    }
}

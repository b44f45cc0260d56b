//! FFprobe-based duration probing.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: FfprobeFormat,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}

/// Probe the total duration of a media file, in seconds.
///
/// # Errors
///
/// - [`Error::FileNotFound`] when `path` is not a regular file.
/// - [`Error::ToolFailed`] when ffprobe cannot read the file.
/// - [`Error::ParseError`] when ffprobe reports no usable duration.
pub fn probe_duration(ffprobe: &Path, path: &Path) -> Result<f64> {
    if !path.is_file() {
        return Err(Error::file_not_found(path));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("probing duration of {:?}", path);

    let output = Command::new(ffprobe)
        .args(["-v", "error", "-print_format", "json", "-show_format"])
        .arg(path)
        .output()
        .map_err(|e| Error::spawn("ffprobe", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed("ffprobe", output.status, stderr.trim()));
    }

    let json_str = String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error("ffprobe", format!("Invalid UTF-8: {}", e)))?;

    parse_duration_json(&json_str)
}

fn parse_duration_json(json_str: &str) -> Result<f64> {
    let ff_output: FfprobeOutput = serde_json::from_str(json_str)?;

    let raw = ff_output
        .format
        .duration
        .ok_or_else(|| Error::parse_error("ffprobe", "no duration in format section"))?;

    let seconds = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| Error::parse_error("ffprobe", format!("bad duration {:?}: {}", raw, e)))?;

    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(Error::parse_error(
            "ffprobe",
            format!("duration must be positive, got {}", seconds),
        ));
    }

    Ok(seconds)
}

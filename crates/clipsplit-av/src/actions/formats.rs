//! Listing the containers ffmpeg knows about.

use crate::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Return ffmpeg's raw `-formats` table.
///
/// The text is meant for display only and is returned unparsed.
pub fn list_formats(ffmpeg: &Path) -> Result<String> {
    let output = Command::new(ffmpeg)
        .args(["-hide_banner", "-loglevel", "error", "-formats"])
        .output()
        .map_err(|e| Error::spawn("ffmpeg", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed("ffmpeg", output.status, stderr.trim()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

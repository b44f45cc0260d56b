//! Segment extraction with ffmpeg.
//!
//! Both modes write one output file per call and overwrite it if present.
//! Argument order matters: copy mode seeks *after* opening the input so the
//! cut lands on what the stream copy can actually produce, while encode mode
//! seeks *before* the input for speed and lets the re-encode restore frame
//! alignment.

use crate::{Error, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// Render a seconds value the way ffmpeg's time options accept it.
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.6}", seconds)
}

/// A relative output starting with `-` would be read as an option.
fn output_arg(output: &Path) -> OsString {
    if output.is_relative() && output.as_os_str().to_string_lossy().starts_with('-') {
        Path::new(".").join(output).into_os_string()
    } else {
        output.as_os_str().to_owned()
    }
}

/// Arguments for a stream-copy extraction.
pub fn fast_args(input: &Path, start: f64, length: f64, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "error", "-y", "-i"]
        .iter()
        .map(OsString::from)
        .collect();
    args.push(input.as_os_str().to_owned());
    args.push("-ss".into());
    args.push(format_seconds(start).into());
    args.push("-t".into());
    args.push(format_seconds(length).into());
    args.push("-c".into());
    args.push("copy".into());
    args.push(output_arg(output));
    args
}

/// Arguments for a re-encoding extraction.
///
/// The output container is chosen by ffmpeg from the output extension.
pub fn encode_args(input: &Path, start: f64, length: f64, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "error", "-y", "-ss"]
        .iter()
        .map(OsString::from)
        .collect();
    args.push(format_seconds(start).into());
    args.push("-t".into());
    args.push(format_seconds(length).into());
    args.push("-i".into());
    args.push(input.as_os_str().to_owned());
    args.push(output_arg(output));
    args
}

/// Extract `[start, start + length)` of `input` into `output` without re-encoding.
pub fn split_fast(ffmpeg: &Path, input: &Path, start: f64, length: f64, output: &Path) -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing::info!("fast split {:?} [{} +{}] -> {:?}", input, start, length, output);

    run_ffmpeg(ffmpeg, fast_args(input, start, length, output))
}

/// Extract `[start, start + length)` of `input` into `output`, re-encoding.
pub fn split_encode(ffmpeg: &Path, input: &Path, start: f64, length: f64, output: &Path) -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing::info!("encode split {:?} [{} +{}] -> {:?}", input, start, length, output);

    run_ffmpeg(ffmpeg, encode_args(input, start, length, output))
}

fn run_ffmpeg(ffmpeg: &Path, args: Vec<OsString>) -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing::debug!("running {:?} {:?}", ffmpeg, args);

    let result = Command::new(ffmpeg)
        .args(&args)
        .output()
        .map_err(|e| Error::spawn("ffmpeg", e))?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(Error::tool_failed("ffmpeg", result.status, stderr.trim()));
    }

    Ok(())
}

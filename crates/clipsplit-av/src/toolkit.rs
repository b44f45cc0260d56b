//! The [`MediaToolkit`] trait and its ffmpeg-backed implementation.

use crate::tools::ToolPaths;
use crate::{actions, probe, Result};
use std::path::Path;

/// The external operations a split session relies on.
///
/// Everything that touches a media file goes through this trait, so planning
/// and session logic can be exercised against a recording fake.
pub trait MediaToolkit {
    /// Total duration of the media file at `path`, in seconds.
    fn probe_duration(&self, path: &Path) -> Result<f64>;

    /// Copy `[start, start + length)` of `input` into `output` without re-encoding.
    fn split_fast(&self, input: &Path, start: f64, length: f64, output: &Path) -> Result<()>;

    /// Re-encode `[start, start + length)` of `input` into `output`.
    ///
    /// The output container follows the extension of `output`.
    fn split_encode(&self, input: &Path, start: f64, length: f64, output: &Path) -> Result<()>;

    /// Human-readable list of supported container formats.
    fn list_formats(&self) -> Result<String>;
}

/// [`MediaToolkit`] backed by the ffmpeg and ffprobe executables.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    paths: ToolPaths,
}

impl Ffmpeg {
    /// Create a toolkit using already-resolved executable paths.
    pub fn new(paths: ToolPaths) -> Self {
        Self { paths }
    }
}

impl MediaToolkit for Ffmpeg {
    fn probe_duration(&self, path: &Path) -> Result<f64> {
        probe::probe_duration(&self.paths.ffprobe, path)
    }

    fn split_fast(&self, input: &Path, start: f64, length: f64, output: &Path) -> Result<()> {
        actions::split_fast(&self.paths.ffmpeg, input, start, length, output)
    }

    fn split_encode(&self, input: &Path, start: f64, length: f64, output: &Path) -> Result<()> {
        actions::split_encode(&self.paths.ffmpeg, input, start, length, output)
    }

    fn list_formats(&self) -> Result<String> {
        actions::list_formats(&self.paths.ffmpeg)
    }
}

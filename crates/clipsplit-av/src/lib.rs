//! # clipsplit-av
//!
//! The ffmpeg/ffprobe invocation layer for clipsplit.
//!
//! This crate provides functionality for:
//! - Locating the `ffmpeg` and `ffprobe` executables
//! - Probing the total duration of a media file
//! - Extracting a time range, either by stream copy or by re-encoding
//! - Listing the container formats ffmpeg supports
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use clipsplit_av::{Ffmpeg, MediaToolkit, ToolPaths};
//! use std::path::Path;
//!
//! let toolkit = Ffmpeg::new(ToolPaths::discover(None, None)?);
//! let seconds = toolkit.probe_duration(Path::new("/path/to/video.mkv"))?;
//! toolkit.split_fast(
//!     Path::new("/path/to/video.mkv"),
//!     0.0,
//!     seconds / 2.0,
//!     Path::new("video_1.mkv"),
//! )?;
//! # Ok::<(), clipsplit_av::Error>(())
//! ```

mod error;
pub mod actions;
pub mod probe;
pub mod toolkit;
pub mod tools;

// Re-exports
pub use error::{Error, Result};
pub use toolkit::{Ffmpeg, MediaToolkit};
pub use tools::{check_tool_with_arg, get_tool_path, require_tool, ToolInfo, ToolPaths};

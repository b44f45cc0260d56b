//! Media processing actions.
//!
//! This module provides the ffmpeg operations a split needs:
//! - Stream-copy extraction of a time range
//! - Re-encoding extraction of a time range
//! - Listing supported container formats

mod formats;
mod split;

pub use formats::list_formats;
pub use split::{encode_args, fast_args, format_seconds, split_encode, split_fast};

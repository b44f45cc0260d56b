//! Media duration probing.
//!
//! Only the container duration is needed to plan a split, so this module asks
//! ffprobe for the format section and nothing else.

mod ffprobe;

pub use ffprobe::probe_duration;

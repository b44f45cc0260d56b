//! clipsplit - split a video into equal parts or fixed-length clips with ffmpeg
//!
//! This library crate exposes the planning and session logic for integration testing.

pub mod config;
mod error;
pub mod executor;
pub mod negotiate;
pub mod plan;
pub mod session;
pub mod terminal;
pub mod timecode;

pub use error::{Error, Result};

//! Shared test harness for integration tests.
//!
//! Provides [`FakeToolkit`], a [`MediaToolkit`] that records every call
//! instead of running ffmpeg, and [`run_session`] which drives a whole
//! interactive session from a scripted stdin.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use clipsplit::config::SessionConfig;
use clipsplit::session::Session;
use clipsplit::terminal::{Palette, Terminal};
use clipsplit_av::MediaToolkit;

/// One recorded toolkit call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Probe(PathBuf),
    Fast {
        start: f64,
        length: f64,
        output: String,
    },
    Encode {
        start: f64,
        length: f64,
        output: String,
    },
    ListFormats,
}

/// Recording stand-in for ffmpeg/ffprobe.
pub struct FakeToolkit {
    /// Duration reported by the probe; `None` reports a missing file.
    pub duration: Option<f64>,
    /// 1-based split call that exits with a failure status.
    pub fail_on: Option<usize>,
    calls: RefCell<Vec<Call>>,
}

impl FakeToolkit {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            fail_on: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn missing_file() -> Self {
        Self {
            duration: None,
            fail_on: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on = Some(call);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Only the extraction calls, in order.
    pub fn splits(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Fast { .. } | Call::Encode { .. }))
            .collect()
    }

    /// Output names of every extraction call, in order.
    pub fn outputs(&self) -> Vec<String> {
        self.splits()
            .into_iter()
            .filter_map(|c| match c {
                Call::Fast { output, .. } | Call::Encode { output, .. } => Some(output),
                _ => None,
            })
            .collect()
    }

    fn record_split(&self, call: Call) -> clipsplit_av::Result<()> {
        self.calls.borrow_mut().push(call);
        let n = self.splits().len();
        if self.fail_on == Some(n) {
            return Err(clipsplit_av::Error::ToolFailed {
                tool: "ffmpeg".to_string(),
                status: Some(1),
                message: "Invalid data found when processing input".to_string(),
            });
        }
        Ok(())
    }
}

impl MediaToolkit for FakeToolkit {
    fn probe_duration(&self, path: &Path) -> clipsplit_av::Result<f64> {
        self.calls.borrow_mut().push(Call::Probe(path.to_path_buf()));
        self.duration
            .ok_or_else(|| clipsplit_av::Error::file_not_found(path))
    }

    fn split_fast(&self, _input: &Path, start: f64, length: f64, output: &Path) -> clipsplit_av::Result<()> {
        self.record_split(Call::Fast {
            start,
            length,
            output: output.to_string_lossy().into_owned(),
        })
    }

    fn split_encode(&self, _input: &Path, start: f64, length: f64, output: &Path) -> clipsplit_av::Result<()> {
        self.record_split(Call::Encode {
            start,
            length,
            output: output.to_string_lossy().into_owned(),
        })
    }

    fn list_formats(&self) -> clipsplit_av::Result<String> {
        self.calls.borrow_mut().push(Call::ListFormats);
        Ok(" E mp4             MP4 (MPEG-4 Part 14)\n DE matroska,webm  Matroska / WebM\n".to_string())
    }
}

/// Run a full session over `script` and return everything it printed.
pub fn run_session(toolkit: &FakeToolkit, script: &str) -> String {
    let terminal = Terminal::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        Palette::plain(),
    );
    let mut session = Session::new(terminal, toolkit, SessionConfig::default());
    session.run().expect("session should end cleanly");
    String::from_utf8(session.into_terminal().into_output()).unwrap()
}

/// Lengths of every extraction call, in order.
pub fn lengths(calls: &[Call]) -> Vec<f64> {
    calls
        .iter()
        .filter_map(|c| match c {
            Call::Fast { length, .. } | Call::Encode { length, .. } => Some(*length),
            _ => None,
        })
        .collect()
}

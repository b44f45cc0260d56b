//! Error taxonomy for a split session.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while planning or running a split.
///
/// `InvalidFormat` and `InvalidParameter` are recovered by re-asking the same
/// question. `FileNotFound` and `DurationUnavailable` send the user back to the
/// main menu. `ExternalToolFailure` ends the current batch.
/// `MissingDependency` is fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A duration string did not match `[<h>h][<m>m][<s>s]` or a bare number.
    #[error("invalid time format: {0:?}")]
    InvalidFormat(String),

    /// A part count or clip length that is not strictly positive.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The source file does not exist.
    #[error("file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The source exists but its duration could not be read.
    #[error("could not determine duration: {0}")]
    DurationUnavailable(String),

    /// ffmpeg or ffprobe exited with a failure status.
    #[error("{tool} failed ({}): {message}", describe_status(*status))]
    ExternalToolFailure {
        tool: String,
        status: Option<i32>,
        message: String,
    },

    /// A required external executable is missing.
    #[error("required tool not found: {0}")]
    MissingDependency(String),

    /// Re-encoding was requested without any target container.
    #[error("cannot determine an output format for {}: the file has no extension", .0.display())]
    UnknownFormat(PathBuf),

    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_status(status: Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {code}"),
        None => "no exit status".to_string(),
    }
}

impl From<clipsplit_av::Error> for Error {
    fn from(err: clipsplit_av::Error) -> Self {
        use clipsplit_av::Error as Av;

        match err {
            Av::ToolNotFound { tool } => Error::MissingDependency(tool),
            Av::ToolFailed {
                tool,
                status,
                message,
            } => Error::ExternalToolFailure {
                tool,
                status,
                message,
            },
            Av::FileNotFound { path } => Error::FileNotFound(path),
            Av::Io(e) => Error::Io(e),
            other @ (Av::ParseError { .. } | Av::Json(_)) => {
                Error::DurationUnavailable(other.to_string())
            }
        }
    }
}

impl Error {
    /// Whether the user can simply be asked the same question again.
    pub fn is_reprompt(&self) -> bool {
        matches!(self, Error::InvalidFormat(_) | Error::InvalidParameter(_))
    }
}

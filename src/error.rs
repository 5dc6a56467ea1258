//! Error types for ensure-lines operations.
//!
//! Only hard failures surface as `Err`:
//! a broken render service or an unreadable/unwritable file. Expected check
//! failures (empty source list, a template the service cannot load) are
//! reported through the [`crate::outcome::CheckOutcome`] record instead.

use std::fmt;
use std::path::PathBuf;

/// Main error type for ensure-lines operations.
//
// `Display` and `Error` are implemented by hand rather than derived:
// thiserror unconditionally treats a field named `source` as the error
// source, but `RenderService::source` is a source *identifier* string,
// not a nested error.
#[derive(Debug)]
pub enum EnsureError {
    /// The external render service itself failed (as opposed to returning
    /// no output, which is reported as a failed outcome).
    RenderService {
        /// Source identifier that was being rendered.
        source: String,
        /// Service-provided failure description.
        message: String,
    },

    /// Reading a rendered template file from scratch storage failed.
    RenderedRead {
        /// Path the render service returned.
        path: PathBuf,
        /// The underlying I/O error.
        io: std::io::Error,
    },

    /// An operation on the target file failed.
    TargetIo {
        /// What was being attempted ("read", "append to", "re-read").
        action: &'static str,
        /// The target file path.
        path: PathBuf,
        /// The underlying I/O error.
        io: std::io::Error,
    },
}

impl fmt::Display for EnsureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnsureError::RenderService { source, message } => {
                write!(f, "render service failed for source '{source}': {message}")
            }
            EnsureError::RenderedRead { path, io } => {
                write!(
                    f,
                    "failed to read rendered template file '{}': {io}",
                    path.display()
                )
            }
            EnsureError::TargetIo { action, path, io } => {
                write!(f, "failed to {action} target file '{}': {io}", path.display())
            }
        }
    }
}

impl std::error::Error for EnsureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnsureError::RenderService { .. } => None,
            EnsureError::RenderedRead { io, .. } | EnsureError::TargetIo { io, .. } => Some(io),
        }
    }
}

/// Result type alias for ensure-lines operations.
pub type Result<T> = std::result::Result<T, EnsureError>;

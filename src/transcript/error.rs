//! Transcript error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting a transcript
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Writing the transcript file failed
    #[error("Cannot write transcript to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

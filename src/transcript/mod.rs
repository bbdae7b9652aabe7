//! Session transcript export.
//!
//! A transcript is a serializable copy of the history log, tagged with a
//! session id. It is written for debugging and never read back; sessions
//! always start fresh.

use crate::core::History;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use uuid::Uuid;

pub mod error;

pub use error::TranscriptError;

/// Version identifier for transcript format
pub const TRANSCRIPT_VERSION: u32 = 1;

/// One recorded transition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TranscriptEntry {
    /// Command typed by the user, empty for hops and repeats
    pub command: String,
    /// Name of the resulting state
    pub state: String,
    /// Whether the resulting state fires without input
    pub instant: bool,
    /// Carry at recording time
    pub carry: String,
    /// Stack after the transition, bottom first
    pub stack: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Serializable record of a whole session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Transcript {
    /// Transcript format version
    pub version: u32,
    /// Unique session identifier
    pub session: Uuid,
    /// When the session started
    pub started_at: DateTime<Utc>,
    pub entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Copy a history log.
    pub fn capture(session: Uuid, started_at: DateTime<Utc>, history: &History) -> Self {
        let entries = history
            .items()
            .iter()
            .map(|item| TranscriptEntry {
                command: item.command.clone(),
                state: item.state_name().to_string(),
                instant: item.state().is_some_and(|s| s.is_instant()),
                carry: item.carry.clone(),
                stack: item.stack.clone(),
                timestamp: item.timestamp,
            })
            .collect();

        Self {
            version: TRANSCRIPT_VERSION,
            session,
            started_at,
            entries,
        }
    }

    /// Commands the user typed, in order.
    ///
    /// The first entry is the initial state and entries following an
    /// instant state are automatic hops; everything else came from input.
    pub fn commands(&self) -> Vec<&str> {
        self.entries
            .windows(2)
            .filter(|pair| !pair[0].instant)
            .map(|pair| pair[1].command.as_str())
            .collect()
    }

    pub fn state_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.state.as_str()).collect()
    }

    /// Time elapsed between the first and the last entry.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn to_json(&self) -> Result<String, TranscriptError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TranscriptError::SerializationFailed(e.to_string()))
    }

    pub fn write_to(&self, path: &Path) -> Result<(), TranscriptError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| TranscriptError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }
}

//! Engine error types.

use crate::engine::preflight::Violation;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the automaton.
///
/// Business conditions such as unknown commands never show up here: states
/// answer them with another state carrying a message.
#[derive(Debug, Error)]
pub enum AutomatError {
    #[error("Pre-flight check failed with {} violation(s): {}", .0.len(), describe(.0))]
    Preflight(Vec<Violation>),

    #[error("Instant transitions did not settle after {hops} hops (last state '{last}')")]
    InstantChainTooLong { hops: usize, last: String },

    #[error("State '{name}' is instant and cannot take a command")]
    NotDeferred { name: String },

    #[error("Automaton already terminated")]
    Terminated,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

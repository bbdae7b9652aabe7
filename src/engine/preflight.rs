//! Pre-flight validation run before the transition loop.
//!
//! Every check runs and every violation is reported together, using
//! Stillwater's `Validation` to accumulate failures instead of stopping at
//! the first one.

use crate::builder::BuildError;
use crate::core::Memory;
use crate::engine::config::Config;
use crate::states::{Command, RESERVED_TOKENS};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Result of a group of checks.
pub type Checked = Validation<(), NonEmptyVec<Violation>>;

/// Configuration problems found before the session starts.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Violation {
    #[error("Command '{token}' does not build: {error}")]
    BrokenCommand { token: String, error: BuildError },

    #[error("A command has an empty token")]
    EmptyToken,

    #[error("Token '{token}' is used by more than one command")]
    DuplicateToken { token: String },

    #[error("Token '{token}' is reserved by the menu")]
    ReservedToken { token: String },

    #[error("Config field '{field}' must be positive")]
    NonPositive { field: &'static str },
}

/// Check the registry: tokens are usable and every entry builds.
pub fn check_registry(commands: &[Command], memory: &Memory) -> Checked {
    let mut checks: Vec<Checked> = Vec::new();
    let mut seen = HashSet::new();

    for command in commands {
        for token in command.tokens {
            let check = if token.is_empty() {
                Validation::fail(Violation::EmptyToken)
            } else if RESERVED_TOKENS.contains(token) {
                Validation::fail(Violation::ReservedToken {
                    token: token.to_string(),
                })
            } else if !seen.insert(*token) {
                Validation::fail(Violation::DuplicateToken {
                    token: token.to_string(),
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        let check = match (command.make)(memory) {
            Ok(_) => Validation::success(()),
            Err(error) => Validation::fail(Violation::BrokenCommand {
                token: command.tokens.first().copied().unwrap_or_default().to_string(),
                error,
            }),
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Check that limits and widths are usable.
pub fn check_config(config: &Config) -> Checked {
    let fields = [
        ("max_info_width", config.max_info_width),
        ("max_stack_height", config.max_stack_height),
        ("max_instant_hops", config.max_instant_hops),
    ];

    let checks: Vec<Checked> = fields
        .into_iter()
        .map(|(field, value)| {
            if value > 0 {
                Validation::success(())
            } else {
                Validation::fail(Violation::NonPositive { field })
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Run every check, returning all violations at once.
pub fn preflight(commands: &[Command], memory: &Memory, config: &Config) -> Result<(), Vec<Violation>> {
    match Validation::all_vec(vec![check_registry(commands, memory), check_config(config)]) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

//! Build errors for states and the automaton.

use thiserror::Error;

/// Configuration errors detected while building states or the automaton.
///
/// These are raised before the transition loop ever runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("State name is empty")]
    EmptyName,

    #[error("State '{name}' has no render function. Call .render(f)")]
    MissingRender { name: String },

    #[error("State '{name}' must define an update or an instant transition")]
    NoTransition { name: String },

    #[error("State '{name}' can define an update or an instant transition, but not both")]
    AmbiguousTransition { name: String },

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state '{name}' is instant; the automaton must start in a state that waits for input")]
    InstantInitialState { name: String },
}

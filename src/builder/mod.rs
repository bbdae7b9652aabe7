//! Builder API for states and the automaton.
//!
//! Built-in states use the typed constructors on [`State`](crate::core::State)
//! directly. Extension states go through [`StateBuilder`], which reports a
//! [`BuildError`] for missing or conflicting capabilities.

pub mod error;
pub mod machine;
pub mod state;

pub use error::BuildError;
pub use machine::AutomatBuilder;
pub use state::StateBuilder;

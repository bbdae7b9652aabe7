//! Assist: a terminal assistant driven by a stack automaton.
//!
//! The user types one word at a time. Each word moves a small automaton
//! from state to state; states read and write a shared stack of strings
//! and answer with a text box shown on the next screen.
//!
//! # Core Concepts
//!
//! - **State**: a named screen with exactly one transition, either waiting
//!   for a command or firing instantly
//! - **Memory**: the content stack, a one-shot carry message, the history
//!   log and an environment map
//! - **Automat**: the loop that draws, reads, transitions and records
//!
//! # Example
//!
//! ```rust
//! use assist::engine::{Automat, Recorder, Script};
//! use assist::states::{menu, MENU, WAITING};
//!
//! let mut automat = Automat::new(menu(WAITING)).unwrap();
//! let mut surface = Recorder::default();
//! let mut input = Script::new(["push", "hello", "push", "world", "join", "exit"]);
//!
//! automat.run(&mut surface, &mut input).unwrap();
//!
//! assert!(automat.is_terminated());
//! assert_eq!(automat.memory().stack.head(), "helloworld");
//! assert_eq!(surface.frames.last().unwrap().state_name, format!("[{MENU}]"));
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod states;
pub mod transcript;
pub mod ui;

// Re-export commonly used types
pub use builder::{AutomatBuilder, BuildError, StateBuilder};
pub use core::{Memory, State, Transition};
pub use engine::{Automat, AutomatError, Config};

//! Terminal user interface.
//!
//! `text` and `layout` compute what goes where, `input` turns keystrokes
//! into commands, and `terminal` is the only module touching crossterm.

pub mod input;
pub mod layout;
pub mod terminal;
pub mod text;

pub use terminal::{Display, Keyboard, Terminal};

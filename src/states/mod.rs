//! Built-in states and the menu's command registry.
//!
//! The registry is an explicit ordered table: each entry lists the tokens
//! that select it, a one-line summary used by the help screen, and the
//! constructor producing the transition.

mod dir;
mod menu;
mod meta;
mod stack_ops;

pub use dir::{dir, dir_here, DIR};
pub use menu::{help_text, menu, EXIT, INTRO_MESSAGE, MENU, UNKNOWN_COMMAND, WAITING};
pub use meta::{repeat_last_action, show_history, NOTHING_TO_REPEAT, REPEAT, SHOW_HISTORY};
pub use stack_ops::{join, pop, pop_join, push, JOIN, POP, POP_JOIN, PUSH};

use crate::builder::BuildError;
use crate::core::{Memory, Transition};

/// Constructor of a registry entry.
pub type CommandFn = fn(&Memory) -> Result<Transition, BuildError>;

/// Tokens reserved by the menu itself.
pub const RESERVED_TOKENS: &[&str] = &["help", "?", "exit"];

/// One entry of the menu registry.
#[derive(Clone, Copy, Debug)]
pub struct Command {
    pub tokens: &'static [&'static str],
    pub summary: &'static str,
    pub make: CommandFn,
}

impl Command {
    pub fn matches(&self, token: &str) -> bool {
        self.tokens.contains(&token)
    }
}

/// The ordered command table offered by the menu.
pub fn registry() -> Vec<Command> {
    vec![
        Command {
            tokens: &["push", ":"],
            summary: "push the next word onto the stack",
            make: |_| Ok(push().into()),
        },
        Command {
            tokens: &["pop", "x"],
            summary: "remove the top of the stack",
            make: |_| Ok(pop().into()),
        },
        Command {
            tokens: &["join", ","],
            summary: "join the two top values of the stack",
            make: |_| Ok(pop_join().into()),
        },
        Command {
            tokens: &["history"],
            summary: "show every transition of this session",
            make: |_| Ok(show_history().into()),
        },
        Command {
            tokens: &["dir"],
            summary: "browse the current directory",
            make: dir_here,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_tokens_are_unique() {
        let mut tokens: Vec<&str> = registry().iter().flat_map(|c| c.tokens.iter().copied()).collect();
        let total = tokens.len();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), total);
    }

    #[test]
    fn registry_does_not_shadow_reserved_tokens() {
        for command in registry() {
            for token in command.tokens {
                assert!(!RESERVED_TOKENS.contains(token), "{token} is reserved");
            }
        }
    }

    #[test]
    fn matches_any_alias() {
        let pop_entry = registry().into_iter().find(|c| c.matches("x")).unwrap();
        assert!(pop_entry.matches("pop"));
        assert!(!pop_entry.matches("push"));
    }
}

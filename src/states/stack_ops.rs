//! States that edit the content stack.

use super::menu::{menu, EXIT, WAITING};
use crate::core::{State, Transition};

pub const PUSH: &str = "PushState";
pub const POP: &str = "PopState";
pub const POP_JOIN: &str = "PopJoinState";
pub const JOIN: &str = "JoinState";

/// Push the next typed word onto the stack.
pub fn push() -> State {
    State::deferred(
        PUSH,
        |_| vec!["type a word, it will be added to the stack".to_string()],
        |command, _, mem| {
            if command == EXIT {
                return Transition::Terminate;
            }
            mem.stack.push(command);
            menu(WAITING).into()
        },
    )
}

/// Remove the top of the stack.
pub fn pop() -> State {
    State::instant(
        POP,
        |_| vec!["removing the top of the stack".to_string()],
        |_, mem| {
            mem.stack.pop();
            menu(WAITING).into()
        },
    )
}

/// First half of a join: move the top of the stack into the carry.
///
/// The join keeps the top after the value below it, which reads like
/// removing the line break between the two.
pub fn pop_join() -> State {
    State::instant(
        POP_JOIN,
        |_| vec!["joining the two top values of the stack".to_string()],
        |_, mem| {
            let top = mem.stack.pop();
            mem.set_carry(top);
            Transition::To(join())
        },
    )
}

/// Second half of a join: append the carry to the top of the stack.
pub fn join() -> State {
    State::instant(
        JOIN,
        |_| vec!["joining the two top values of the stack".to_string()],
        |_, mem| {
            let right = mem.take_carry();
            let left = mem.stack.pop();
            mem.stack.push(left + &right);
            menu(WAITING).into()
        },
    )
}

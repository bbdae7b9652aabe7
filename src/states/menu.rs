//! The menu: default and initial state.

use super::registry;
use crate::core::{Memory, State, Transition};
use tracing::{debug, error};

pub const MENU: &str = "MenuState";

/// Ends the session from any state waiting for a command.
pub const EXIT: &str = "exit";

pub const WAITING: &str = "waiting for command";
pub const UNKNOWN_COMMAND: &str = "unknown command";

/// Greeting shown when a session starts.
pub const INTRO_MESSAGE: &str = "Hi, I'm your assistant !

I will read every word you type,
And respond as well as I can.

Type help for help
Hit space to repeat last command";

/// Menu state showing `message`, one line per newline.
pub fn menu(message: impl Into<String>) -> State {
    let lines: Vec<String> = message.into().split('\n').map(str::to_string).collect();
    State::deferred(MENU, move |_| lines.clone(), |command, _, mem| select(command, mem))
}

fn select(command: &str, memory: &Memory) -> Transition {
    match command {
        EXIT => Transition::Terminate,
        "help" | "?" => menu(help_text()).into(),
        _ => match registry().into_iter().find(|entry| entry.matches(command)) {
            Some(entry) => (entry.make)(memory).unwrap_or_else(|err| {
                // unreachable once the pre-flight check passed
                error!(command, %err, "registry entry failed to build");
                menu(err.to_string()).into()
            }),
            None => {
                debug!(command, "unknown command");
                menu(UNKNOWN_COMMAND).into()
            }
        },
    }
}

/// Help screen generated from the registry.
pub fn help_text() -> String {
    let mut lines = vec![
        "- help / ?: display this message".to_string(),
        "- exit: exit".to_string(),
    ];
    lines.extend(
        registry()
            .iter()
            .map(|entry| format!("- {}: {}", entry.tokens.join(" / "), entry.summary)),
    );
    lines.push(String::new());
    lines.push("hit space or enter on an empty word to repeat".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::{JOIN, POP, POP_JOIN, PUSH, SHOW_HISTORY};

    fn run(command: &str) -> (Transition, Memory) {
        let state = menu(WAITING);
        let mut memory = Memory::new(state.clone());
        let next = state.update(command, "", &mut memory).unwrap();
        (next, memory)
    }

    fn name_of(transition: &Transition) -> &str {
        transition.state().map(State::name).unwrap_or("<terminate>")
    }

    #[test]
    fn menu_renders_message_lines() {
        let state = menu("one\ntwo");
        let memory = Memory::new(state.clone());
        assert_eq!(state.render(&memory), vec!["one", "two"]);
    }

    #[test]
    fn exit_terminates() {
        let (next, _) = run("exit");
        assert!(next.is_terminate());
    }

    #[test]
    fn registry_tokens_select_states() {
        assert_eq!(name_of(&run("push").0), PUSH);
        assert_eq!(name_of(&run(":").0), PUSH);
        assert_eq!(name_of(&run("pop").0), POP);
        assert_eq!(name_of(&run("x").0), POP);
        assert_eq!(name_of(&run("join").0), POP_JOIN);
        assert_eq!(name_of(&run(",").0), POP_JOIN);
        assert_eq!(name_of(&run("history").0), SHOW_HISTORY);
        assert_ne!(name_of(&run("join").0), JOIN);
    }

    #[test]
    fn unknown_command_stays_in_menu_with_message() {
        let (next, memory) = run("dance");
        let state = next.state().unwrap();

        assert_eq!(state.name(), MENU);
        assert_eq!(state.render(&memory), vec![UNKNOWN_COMMAND]);
    }

    #[test]
    fn help_lists_every_command() {
        for token in ["help", "?"] {
            let (next, memory) = run(token);
            let lines = next.state().unwrap().render(&memory).join("\n");
            assert!(lines.contains("- exit: exit"));
            assert!(lines.contains("- push / :"));
            assert!(lines.contains("- dir:"));
        }
    }
}

//! States that look at the session history.

use super::menu::menu;
use crate::core::State;
use tracing::debug;

pub const SHOW_HISTORY: &str = "ShowHistoryState";
pub const REPEAT: &str = "RepeatLastActionState";

pub const NOTHING_TO_REPEAT: &str = "nothing to repeat";

/// List every recorded transition as `command -> state`.
pub fn show_history() -> State {
    State::instant(
        SHOW_HISTORY,
        |_| vec!["collecting history".to_string()],
        |_, mem| {
            let lines: Vec<String> = mem
                .history()
                .items()
                .iter()
                .map(|item| format!("{} -> {}", item.command, item.state_name()))
                .collect();
            menu(lines.join("\n")).into()
        },
    )
}

/// Replay what happened the last time the user was in the current state.
///
/// Synthesized by the engine on empty input, after it has been recorded.
pub fn repeat_last_action() -> State {
    State::instant(
        REPEAT,
        |_| vec!["repeating last action".to_string()],
        |_, mem| match mem.history().replay_target() {
            Some(target) => {
                debug!(?target, "repeating");
                target.clone()
            }
            None => menu(NOTHING_TO_REPEAT).into(),
        },
    )
}

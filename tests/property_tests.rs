//! Property-based tests for the stack, the history and the engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use assist::core::{ContentStack, MemoryFilesystem};
use assist::engine::Automat;
use assist::states::{menu, MENU, WAITING};
use assist::AutomatBuilder;
use proptest::prelude::*;

fn automat() -> Automat {
    AutomatBuilder::new()
        .initial(menu(WAITING))
        .filesystem(
            MemoryFilesystem::new("/home")
                .with_dir("/home/docs")
                .with_file("/home/notes.txt"),
        )
        .build()
        .unwrap()
}

prop_compose! {
    fn arbitrary_command()(variant in 0..12u8, word in "[a-z]{1,6}") -> String {
        match variant {
            0 => "push".to_string(),
            1 => ":".to_string(),
            2 => "x".to_string(),
            3 => "join".to_string(),
            4 => ",".to_string(),
            5 => "history".to_string(),
            6 => "help".to_string(),
            7 => "dir".to_string(),
            8 => String::new(),
            9 => "0".to_string(),
            10 => ".".to_string(),
            _ => word,
        }
    }
}

/// Feed commands until the session ends; every step must succeed.
fn feed(automat: &mut Automat, commands: &[String]) -> Result<(), TestCaseError> {
    for command in commands {
        if automat.is_terminated() {
            break;
        }
        let result = automat.step(command);
        prop_assert!(result.is_ok(), "step {:?} failed: {:?}", command, result);
    }
    Ok(())
}

/// Entries recorded after an instant state are automatic hops.
fn hops_between(automat: &Automat, from: usize, to: usize) -> usize {
    let items = automat.history().items();
    (from..to)
        .filter(|&i| items[i - 1].state().is_some_and(|s| s.is_instant()))
        .count()
}

proptest! {
    #[test]
    fn push_then_pop_round_trips(
        existing in prop::collection::vec("[a-z]{1,5}", 0..5),
        value in ".{1,10}",
    ) {
        let mut stack: ContentStack = existing.iter().cloned().collect();
        let before = stack.copy();

        stack.push(value.clone());
        prop_assert_eq!(stack.head(), value.as_str());
        prop_assert_eq!(stack.pop(), value);
        prop_assert_eq!(stack.copy(), before);
    }

    #[test]
    fn pushing_empty_is_a_no_op(existing in prop::collection::vec("[a-z]{1,5}", 0..5)) {
        let mut stack: ContentStack = existing.iter().cloned().collect();
        stack.push("");
        prop_assert_eq!(stack.copy(), existing);
    }

    #[test]
    fn popping_empty_stack_is_idempotent(times in 1..10usize) {
        let mut stack = ContentStack::new();
        for _ in 0..times {
            prop_assert_eq!(stack.pop(), "");
        }
        prop_assert!(stack.is_empty());
    }

    #[test]
    fn history_grows_by_one_per_command_plus_hops(commands in prop::collection::vec(arbitrary_command(), 0..30)) {
        let mut automat = automat();
        let mut len = automat.history().len();

        for command in &commands {
            if automat.is_terminated() {
                break;
            }
            let result = automat.step(command);
            prop_assert!(result.is_ok(), "step {:?} failed: {:?}", command, result);

            let now = automat.history().len();
            prop_assert!(now > len);
            prop_assert_eq!(now, len + 1 + hops_between(&automat, len, now));
            len = now;
        }
    }

    #[test]
    fn replaying_commands_reproduces_states(commands in prop::collection::vec(arbitrary_command(), 0..30)) {
        let mut original = automat();
        feed(&mut original, &commands)?;
        let transcript = original.transcript();
        let typed: Vec<String> = transcript.commands().into_iter().map(str::to_string).collect();

        let mut replay = automat();
        feed(&mut replay, &typed)?;

        prop_assert_eq!(replay.history().state_names(), original.history().state_names());
        prop_assert_eq!(replay.memory().stack.copy(), original.memory().stack.copy());
    }

    #[test]
    fn join_concatenates_two_pushed_words(left in "[a-z]{1,8}", right in "[a-z]{1,8}") {
        let mut automat = automat();
        for command in ["push", left.as_str(), "push", right.as_str(), "join"] {
            automat.step(command).unwrap();
        }

        prop_assert_eq!(automat.memory().stack.copy(), vec![format!("{left}{right}")]);
        prop_assert_eq!(automat.current_state().name(), MENU);
    }
}

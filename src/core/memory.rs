//! Shared memory threaded through every transition.

use super::fs::{Filesystem, OsFilesystem};
use super::history::{History, HistoryItem};
use super::stack::ContentStack;
use super::state::{State, Transition};
use chrono::Utc;
use std::collections::HashMap;

/// Main memory of a session.
///
/// Owns the content stack, the one-shot carry slot, the history log and
/// an environment map. States receive it by `&mut` on every transition.
pub struct Memory {
    /// The user's content stack
    pub stack: ContentStack,
    carry: String,
    history: History,
    env: HashMap<String, String>,
    fs: Box<dyn Filesystem>,
}

impl Memory {
    /// Create memory for a session starting in `initial`.
    ///
    /// The history is seeded with the initial state under an empty command.
    pub fn new(initial: State) -> Self {
        let mut memory = Self {
            stack: ContentStack::new(),
            carry: String::new(),
            history: History::new(),
            env: HashMap::new(),
            fs: Box::new(OsFilesystem),
        };
        memory.record("", initial);
        memory
    }

    /// Replace the filesystem collaborator.
    pub fn with_filesystem(mut self, fs: impl Filesystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    /// Seed the environment map.
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Put a message into the carry slot, replacing any previous one.
    pub fn set_carry(&mut self, value: impl Into<String>) {
        self.carry = value.into();
    }

    /// Read and clear the carry slot.
    pub fn take_carry(&mut self) -> String {
        std::mem::take(&mut self.carry)
    }

    pub fn peek_carry(&self) -> &str {
        &self.carry
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Append a history item snapshotting the current carry and stack.
    pub fn record(&mut self, command: &str, outcome: impl Into<Transition>) {
        self.history.record(HistoryItem {
            command: command.to_string(),
            outcome: outcome.into(),
            carry: self.carry.clone(),
            stack: self.stack.copy(),
            timestamp: Utc::now(),
        });
    }

    pub fn setenv(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.env.insert(name.into(), value.into());
    }

    /// Environment value, or "" when unset.
    pub fn getenv(&self, name: &str) -> &str {
        self.env.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn fs(&self) -> &dyn Filesystem {
        self.fs.as_ref()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("stack", &self.stack)
            .field("carry", &self.carry)
            .field("history_len", &self.history.len())
            .field("env_len", &self.env.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> State {
        State::deferred("Idle", |_| Vec::new(), |_, _, _| Transition::Terminate)
    }

    #[test]
    fn new_memory_seeds_history() {
        let memory = Memory::new(idle());

        assert_eq!(memory.history().len(), 1);
        let first = &memory.history().items()[0];
        assert_eq!(first.command, "");
        assert_eq!(first.state_name(), "Idle");
        assert!(memory.stack.is_empty());
    }

    #[test]
    fn carry_is_read_and_clear() {
        let mut memory = Memory::new(idle());
        memory.set_carry("note");

        assert_eq!(memory.peek_carry(), "note");
        assert_eq!(memory.take_carry(), "note");
        assert_eq!(memory.take_carry(), "");
    }

    #[test]
    fn record_snapshots_stack_and_carry() {
        let mut memory = Memory::new(idle());
        memory.stack.push("a");
        memory.set_carry("c");
        memory.record("cmd", idle());
        memory.stack.push("b");

        let item = memory.history().last().unwrap();
        assert_eq!(item.command, "cmd");
        assert_eq!(item.carry, "c");
        assert_eq!(item.stack, vec!["a".to_string()]);
    }

    #[test]
    fn env_defaults_to_empty() {
        let mut memory = Memory::new(idle()).with_env([("HOME", "/home/me")]);

        assert_eq!(memory.getenv("HOME"), "/home/me");
        assert_eq!(memory.getenv("MISSING"), "");

        memory.setenv("MISSING", "now set");
        assert_eq!(memory.getenv("MISSING"), "now set");
    }
}

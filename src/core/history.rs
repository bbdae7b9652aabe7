//! Session history.
//!
//! Every transition taken during a session, visible or instant, is appended
//! here in causal order. The log is never truncated and drives the
//! "repeat last action" resolver.

use super::state::{State, Transition};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Record of a single transition.
#[derive(Clone, Debug)]
pub struct HistoryItem {
    /// Command that caused the transition; empty for instant hops and repeats
    pub command: String,
    /// Where the transition led: a state, or the end of the session
    pub outcome: Transition,
    /// Carry content at the time of recording
    pub carry: String,
    /// Copy of the stack after the transition
    pub stack: Vec<String>,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl HistoryItem {
    /// The resulting state, unless the transition ended the session.
    pub fn state(&self) -> Option<&State> {
        self.outcome.state()
    }

    /// Display name of the outcome.
    pub fn state_name(&self) -> &str {
        self.outcome.name()
    }
}

/// Ordered, append-only transition log.
#[derive(Clone, Debug, Default)]
pub struct History {
    items: Vec<HistoryItem>,
}

impl History {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item.
    pub fn record(&mut self, item: HistoryItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryItem> {
        self.items.last()
    }

    /// Names of the states visited, in order.
    pub fn state_names(&self) -> Vec<&str> {
        self.items.iter().map(HistoryItem::state_name).collect()
    }

    /// Time elapsed between the first and the last item.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.items.first(), self.items.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// Find the state to replay for a repeat request.
    ///
    /// The last item is the repeat request itself and the one before it is
    /// the state the user was in. The most recent earlier visit to that
    /// state tells what happened next last time, and its successor is
    /// returned. `None` when there is nothing to repeat.
    ///
    /// States compare by name, so two menus showing different messages
    /// count as the same state here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use assist::core::{History, HistoryItem, State, Transition};
    /// use chrono::Utc;
    ///
    /// let state = |name: &'static str| {
    ///     State::deferred(name, |_| Vec::new(), |_, _, _| Transition::Terminate)
    /// };
    /// let mut history = History::new();
    /// for (command, name) in [("", "Menu"), ("push", "Push"), ("hello", "Menu"), ("", "Repeat")] {
    ///     history.record(HistoryItem {
    ///         command: command.to_string(),
    ///         outcome: Transition::To(state(name)),
    ///         carry: String::new(),
    ///         stack: Vec::new(),
    ///         timestamp: Utc::now(),
    ///     });
    /// }
    ///
    /// let target = history.replay_target().and_then(Transition::state);
    /// assert_eq!(target.map(State::name), Some("Push"));
    /// ```
    pub fn replay_target(&self) -> Option<&Transition> {
        let len = self.items.len();
        if len <= 2 {
            return None;
        }
        let current = &self.items[len - 2].outcome;
        (0..len - 2)
            .rev()
            .find(|&i| self.items[i].outcome == *current)
            .map(|i| &self.items[i + 1].outcome)
    }
}

//! Content stack manipulated by the user.
//!
//! The stack never fails: reading or popping an empty stack yields the
//! empty-string sentinel, and the sentinel itself can never be pushed.

use serde::{Deserialize, Serialize};

/// Value returned by `head` and `pop` when the stack is empty.
pub const BOTTOM: &str = "";

/// Ordered LIFO of strings with sentinel-empty semantics.
///
/// # Example
///
/// ```rust
/// use assist::core::ContentStack;
///
/// let mut stack = ContentStack::new();
/// stack.push("hello");
/// stack.push("");
///
/// assert_eq!(stack.len(), 1);
/// assert_eq!(stack.pop(), "hello");
/// assert_eq!(stack.pop(), "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentStack {
    items: Vec<String>,
}

impl ContentStack {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push a value on top of the stack. The empty string is ignored.
    pub fn push(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value != BOTTOM {
            self.items.push(value);
        }
    }

    /// Remove and return the top of the stack, or the sentinel if empty.
    pub fn pop(&mut self) -> String {
        self.items.pop().unwrap_or_default()
    }

    /// Top of the stack, or the sentinel if empty.
    pub fn head(&self) -> &str {
        self.items.last().map(String::as_str).unwrap_or(BOTTOM)
    }

    /// Snapshot of the contents, bottom first.
    pub fn copy(&self) -> Vec<String> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Render the stack as a text box.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.items.len() + 2);
        lines.push(" ┏".to_string());
        lines.extend(self.items.iter().map(|item| format!(" ┃  {item}")));
        lines.push(" ┗".to_string());
        lines
    }
}

impl<S: Into<String>> FromIterator<S> for ContentStack {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut stack = ContentStack::new();
        for value in iter {
            stack.push(value);
        }
        stack
    }
}

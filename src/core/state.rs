//! The state abstraction driven by the automaton.
//!
//! A state owns exactly one transition capability, tagged by [`Mode`]:
//! a deferred `update` that consumes a user command, or an `instant`
//! transition that fires without input. The tag is fixed when the state is
//! built, so the engine never has to probe which capability exists.

use super::memory::Memory;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Renders a state as an ordered list of lines.
pub type RenderFn = Arc<dyn Fn(&Memory) -> Vec<String>>;

/// Deferred transition: `(command, stack_top, memory) -> next`.
pub type UpdateFn = Arc<dyn Fn(&str, &str, &mut Memory) -> Transition>;

/// Instant transition: `(stack_top, memory) -> next`.
pub type InstantFn = Arc<dyn Fn(&str, &mut Memory) -> Transition>;

/// Name reported for the transition that ends a session.
pub const TERMINATED: &str = "Terminate";

/// Outcome of a transition: the next state, or the end of the session.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    To(State),
    Terminate,
}

impl Transition {
    pub fn is_terminate(&self) -> bool {
        matches!(self, Self::Terminate)
    }

    /// The target state, if any.
    pub fn state(&self) -> Option<&State> {
        match self {
            Self::To(state) => Some(state),
            Self::Terminate => None,
        }
    }

    /// Name of the target state, or [`TERMINATED`].
    pub fn name(&self) -> &str {
        self.state().map_or(TERMINATED, State::name)
    }
}

impl From<State> for Transition {
    fn from(state: State) -> Self {
        Self::To(state)
    }
}

/// The single transition capability of a state.
#[derive(Clone)]
pub enum Mode {
    /// Waits for a command before transitioning.
    Deferred(UpdateFn),
    /// Transitions immediately, without prompting.
    Instant(InstantFn),
}

impl Mode {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Deferred(_) => "deferred",
            Self::Instant(_) => "instant",
        }
    }
}

/// A display state of the automaton.
///
/// States are immutable values; all mutation goes through [`Memory`].
/// Two states compare equal when their names match, whatever data they
/// carry. History search relies on this coarse equality.
///
/// # Example
///
/// ```rust
/// use assist::core::{Memory, State, Transition};
///
/// let echo = State::deferred(
///     "EchoState",
///     |_mem| vec!["type anything".to_string()],
///     |command, _top, mem| {
///         mem.stack.push(command);
///         Transition::Terminate
///     },
/// );
///
/// let mut memory = Memory::new(echo.clone());
/// let next = echo.update("hi", "", &mut memory);
///
/// assert_eq!(next, Some(Transition::Terminate));
/// assert_eq!(memory.stack.head(), "hi");
/// ```
#[derive(Clone)]
pub struct State {
    name: Cow<'static, str>,
    render: RenderFn,
    mode: Mode,
}

impl State {
    /// Build a state that consumes a command.
    pub fn deferred<R, U>(name: impl Into<Cow<'static, str>>, render: R, update: U) -> Self
    where
        R: Fn(&Memory) -> Vec<String> + 'static,
        U: Fn(&str, &str, &mut Memory) -> Transition + 'static,
    {
        Self::from_parts(name.into(), Arc::new(render), Mode::Deferred(Arc::new(update)))
    }

    /// Build a state that transitions without input.
    pub fn instant<R, I>(name: impl Into<Cow<'static, str>>, render: R, instant: I) -> Self
    where
        R: Fn(&Memory) -> Vec<String> + 'static,
        I: Fn(&str, &mut Memory) -> Transition + 'static,
    {
        Self::from_parts(name.into(), Arc::new(render), Mode::Instant(Arc::new(instant)))
    }

    pub(crate) fn from_parts(name: Cow<'static, str>, render: RenderFn, mode: Mode) -> Self {
        Self { name, render, mode }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_instant(&self) -> bool {
        matches!(self.mode, Mode::Instant(_))
    }

    pub fn render(&self, memory: &Memory) -> Vec<String> {
        (self.render)(memory)
    }

    /// Run the deferred transition. Returns `None` for instant states.
    pub fn update(&self, command: &str, stack_top: &str, memory: &mut Memory) -> Option<Transition> {
        match &self.mode {
            Mode::Deferred(update) => Some(update(command, stack_top, memory)),
            Mode::Instant(_) => None,
        }
    }

    /// Run the instant transition. Returns `None` for deferred states.
    pub fn instant_step(&self, stack_top: &str, memory: &mut Memory) -> Option<Transition> {
        match &self.mode {
            Mode::Instant(instant) => Some(instant(stack_top, memory)),
            Mode::Deferred(_) => None,
        }
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for State {}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("mode", &self.mode.kind())
            .finish()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle(name: &'static str) -> State {
        State::deferred(name, |_| Vec::new(), |_, _, _| Transition::Terminate)
    }

    fn bounce(name: &'static str) -> State {
        State::instant(name, |_| Vec::new(), |_, _| Transition::Terminate)
    }

    #[test]
    fn deferred_state_only_updates() {
        let state = idle("Idle");
        let mut memory = Memory::new(state.clone());

        assert!(!state.is_instant());
        assert!(state.update("x", "", &mut memory).is_some());
        assert!(state.instant_step("", &mut memory).is_none());
    }

    #[test]
    fn instant_state_only_fires_instantly() {
        let state = bounce("Bounce");
        let mut memory = Memory::new(idle("Idle"));

        assert!(state.is_instant());
        assert!(state.instant_step("", &mut memory).is_some());
        assert!(state.update("x", "", &mut memory).is_none());
    }

    #[test]
    fn equality_is_by_name_only() {
        let a = State::deferred("Menu", |_| vec!["one".into()], |_, _, _| Transition::Terminate);
        let b = State::deferred("Menu", |_| vec!["two".into()], |_, _, _| Transition::Terminate);

        assert_eq!(a, b);
        assert_ne!(a, idle("Other"));
    }

    #[test]
    fn display_wraps_name_in_brackets() {
        assert_eq!(idle("MenuState").to_string(), "[MenuState]");
    }

    #[test]
    fn update_receives_stack_top_and_memory() {
        let state = State::deferred(
            "Copy",
            |_| Vec::new(),
            |command, top, mem| {
                mem.stack.push(format!("{top}{command}"));
                Transition::Terminate
            },
        );
        let mut memory = Memory::new(state.clone());
        memory.stack.push("a");

        state.update("b", "a", &mut memory);

        assert_eq!(memory.stack.head(), "ab");
    }
}

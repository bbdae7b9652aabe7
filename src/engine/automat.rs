//! The automaton driving a session.

use crate::builder::{AutomatBuilder, BuildError};
use crate::core::{History, Memory, State, Transition};
use crate::engine::config::Config;
use crate::engine::error::AutomatError;
use crate::engine::io::{CommandSource, Frame, Surface};
use crate::engine::preflight::preflight;
use crate::states::{registry, repeat_last_action};
use crate::transcript::Transcript;
use chrono::{DateTime, Utc};
use tracing::{debug, error, info, trace};
use uuid::Uuid;

/// Lifecycle of an automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the next command
    Running,
    /// A transition ended the session; no further steps are accepted
    Terminated,
}

/// Automaton owning the current state and the session memory.
///
/// One command moves the automaton through one deferred transition followed
/// by any number of instant ones, until it rests on a deferred state again
/// or terminates. Every transition lands in the history.
///
/// # Example
///
/// ```rust
/// use assist::engine::{Automat, Phase};
/// use assist::states::{menu, MENU, WAITING};
///
/// let mut automat = Automat::new(menu(WAITING)).unwrap();
///
/// automat.step("push").unwrap();
/// automat.step("hello").unwrap();
///
/// assert_eq!(automat.current_state().name(), MENU);
/// assert_eq!(automat.memory().stack.head(), "hello");
/// assert_eq!(automat.step("exit").unwrap(), Phase::Terminated);
/// ```
pub struct Automat {
    current: State,
    memory: Memory,
    config: Config,
    phase: Phase,
    session: Uuid,
    started_at: DateTime<Utc>,
}

impl Automat {
    /// Create an automaton with default config and the real filesystem.
    pub fn new(initial: State) -> Result<Self, BuildError> {
        AutomatBuilder::new().initial(initial).build()
    }

    pub(crate) fn from_parts(initial: State, memory: Memory, config: Config) -> Self {
        Self {
            current: initial,
            memory,
            config,
            phase: Phase::Running,
            session: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }

    pub fn current_state(&self) -> &State {
        &self.current
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn history(&self) -> &History {
        self.memory.history()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    pub fn session_id(&self) -> Uuid {
        self.session
    }

    /// Validate the command registry and the config, reporting every
    /// violation at once.
    pub fn check(&self) -> Result<(), AutomatError> {
        preflight(&registry(), &self.memory, &self.config).map_err(AutomatError::Preflight)
    }

    /// Build the next screen.
    ///
    /// Any pending carry is consumed and shown under the state's own lines.
    pub fn frame(&mut self) -> Frame {
        let mut state_box = self.current.render(&self.memory);
        let carry = self.memory.take_carry();
        if !carry.is_empty() {
            state_box.push(String::new());
            state_box.extend(carry.split('\n').map(str::to_string));
        }
        Frame {
            state_name: self.current.to_string(),
            state_box,
            stack_box: self.memory.stack.render(),
        }
    }

    /// Feed one command.
    ///
    /// An empty command asks to repeat the last action. Instant states reached
    /// afterwards fire until a deferred state is current or the session ends.
    pub fn step(&mut self, command: &str) -> Result<Phase, AutomatError> {
        if self.is_terminated() {
            return Err(AutomatError::Terminated);
        }

        let outcome = if command.is_empty() {
            Transition::To(repeat_last_action())
        } else {
            let top = self.memory.stack.head().to_string();
            self.current
                .update(command, &top, &mut self.memory)
                .ok_or_else(|| AutomatError::NotDeferred {
                    name: self.current.name().to_string(),
                })?
        };

        debug!(command, from = self.current.name(), to = outcome.name(), "transition");
        self.memory.record(command, outcome.clone());
        self.settle(outcome)
    }

    fn settle(&mut self, mut outcome: Transition) -> Result<Phase, AutomatError> {
        let mut hops = 0;
        loop {
            let state = match outcome {
                Transition::Terminate => {
                    self.phase = Phase::Terminated;
                    info!(session = %self.session, "session terminated");
                    return Ok(Phase::Terminated);
                }
                Transition::To(state) => state,
            };

            if !state.is_instant() {
                self.current = state;
                return Ok(Phase::Running);
            }

            if hops == self.config.max_instant_hops {
                error!(hops, last = state.name(), "instant chain did not settle");
                return Err(AutomatError::InstantChainTooLong {
                    hops,
                    last: state.name().to_string(),
                });
            }
            hops += 1;

            let top = self.memory.stack.head().to_string();
            outcome = state
                .instant_step(&top, &mut self.memory)
                .ok_or_else(|| AutomatError::NotDeferred {
                    name: state.name().to_string(),
                })?;
            trace!(from = state.name(), to = outcome.name(), hops, "instant transition");
            self.memory.record("", outcome.clone());
        }
    }

    /// Run the draw, read, step loop until the session ends.
    ///
    /// Interrupted or exhausted input ends the session like `exit` does,
    /// without a history entry.
    pub fn run<S, C>(&mut self, surface: &mut S, input: &mut C) -> Result<(), AutomatError>
    where
        S: Surface + ?Sized,
        C: CommandSource + ?Sized,
    {
        self.check()?;
        info!(session = %self.session, "session started");

        while !self.is_terminated() {
            let frame = self.frame();
            surface.draw(&frame)?;

            match input.next_command()? {
                Some(command) => {
                    self.step(&command)?;
                }
                None => {
                    info!(session = %self.session, "input ended");
                    self.phase = Phase::Terminated;
                }
            }
        }
        Ok(())
    }

    /// Serializable copy of the session so far.
    pub fn transcript(&self) -> Transcript {
        Transcript::capture(self.session, self.started_at, self.memory.history())
    }
}

impl std::fmt::Debug for Automat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automat")
            .field("current", &self.current)
            .field("phase", &self.phase)
            .field("session", &self.session)
            .field("memory", &self.memory)
            .finish()
    }
}

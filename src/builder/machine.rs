//! Builder for constructing the automaton.

use crate::builder::error::BuildError;
use crate::core::{Filesystem, Memory, OsFilesystem, State};
use crate::engine::{Automat, Config};
use std::collections::HashMap;
use std::ffi::OsString;
use tracing::debug;

/// Builder for an [`Automat`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use assist::builder::AutomatBuilder;
/// use assist::core::MemoryFilesystem;
/// use assist::engine::Config;
/// use assist::states::{menu, WAITING};
///
/// let automat = AutomatBuilder::new()
///     .initial(menu(WAITING))
///     .config(Config::default().max_info_width(40))
///     .filesystem(MemoryFilesystem::new("/home"))
///     .env([("HOME", "/home")])
///     .build()
///     .unwrap();
///
/// assert_eq!(automat.memory().getenv("HOME"), "/home");
/// assert_eq!(automat.config().max_info_width, 40);
/// ```
pub struct AutomatBuilder {
    initial: Option<State>,
    config: Config,
    filesystem: Box<dyn Filesystem>,
    env: HashMap<String, String>,
}

impl AutomatBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            config: Config::default(),
            filesystem: Box::new(OsFilesystem),
            env: HashMap::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: State) -> Self {
        self.initial = Some(state);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replace the real filesystem.
    pub fn filesystem(mut self, fs: impl Filesystem + 'static) -> Self {
        self.filesystem = Box::new(fs);
        self
    }

    /// Add environment variables to the session memory.
    pub fn env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add process environment variables, as yielded by
    /// [`std::env::vars_os`].
    ///
    /// Pairs that are not valid UTF-8 are skipped.
    pub fn os_env<I>(self, vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let vars = vars.into_iter().filter_map(|(key, value)| {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (key, _) => {
                    debug!(key = ?key, "skipping non UTF-8 environment variable");
                    None
                }
            }
        });
        self.env(vars)
    }

    /// Build the automaton.
    /// Returns an error if the initial state is missing or does not wait
    /// for input.
    pub fn build(self) -> Result<Automat, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if initial.is_instant() {
            return Err(BuildError::InstantInitialState {
                name: initial.name().to_string(),
            });
        }

        let memory = Memory::new(initial.clone())
            .with_filesystem(self.filesystem)
            .with_env(self.env);

        Ok(Automat::from_parts(initial, memory, self.config))
    }
}

impl Default for AutomatBuilder {
    fn default() -> Self {
        Self::new()
    }
}

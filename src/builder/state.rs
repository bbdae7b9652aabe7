//! Builder for states defined outside the built-in catalogue.

use crate::builder::error::BuildError;
use crate::core::{InstantFn, Memory, Mode, RenderFn, State, Transition, UpdateFn};
use std::borrow::Cow;
use std::sync::Arc;

/// Fluent builder for a [`State`].
///
/// Extension states declare their capabilities one by one; `build` checks
/// that exactly one of `update` and `instant` was given.
///
/// # Example
///
/// ```rust
/// use assist::builder::{BuildError, StateBuilder};
/// use assist::core::Transition;
///
/// let ok = StateBuilder::new("ClearState")
///     .render(|_mem| vec!["clearing".to_string()])
///     .instant(|_top, mem| {
///         while !mem.stack.is_empty() {
///             mem.stack.pop();
///         }
///         Transition::Terminate
///     })
///     .build();
/// assert!(ok.is_ok());
///
/// let missing = StateBuilder::new("LostState")
///     .render(|_mem| Vec::new())
///     .build();
/// assert!(matches!(missing, Err(BuildError::NoTransition { .. })));
/// ```
pub struct StateBuilder {
    name: Cow<'static, str>,
    render: Option<RenderFn>,
    update: Option<UpdateFn>,
    instant: Option<InstantFn>,
}

impl StateBuilder {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            render: None,
            update: None,
            instant: None,
        }
    }

    /// Set the render function (required).
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Memory) -> Vec<String> + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Set a deferred transition.
    pub fn update<F>(mut self, update: F) -> Self
    where
        F: Fn(&str, &str, &mut Memory) -> Transition + 'static,
    {
        self.update = Some(Arc::new(update));
        self
    }

    /// Set an instant transition.
    pub fn instant<F>(mut self, instant: F) -> Self
    where
        F: Fn(&str, &mut Memory) -> Transition + 'static,
    {
        self.instant = Some(Arc::new(instant));
        self
    }

    /// Build the state, tagging it with its single transition mode.
    pub fn build(self) -> Result<State, BuildError> {
        if self.name.trim().is_empty() {
            return Err(BuildError::EmptyName);
        }
        let name = self.name.to_string();
        let render = self
            .render
            .ok_or_else(|| BuildError::MissingRender { name: name.clone() })?;

        let mode = match (self.update, self.instant) {
            (Some(update), None) => Mode::Deferred(update),
            (None, Some(instant)) => Mode::Instant(instant),
            (None, None) => return Err(BuildError::NoTransition { name }),
            (Some(_), Some(_)) => return Err(BuildError::AmbiguousTransition { name }),
        };

        Ok(State::from_parts(self.name, render, mode))
    }
}

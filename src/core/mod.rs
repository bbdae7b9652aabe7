//! Core automaton types.
//!
//! This module contains the data the engine threads through transitions:
//! - The content stack with sentinel-empty semantics
//! - States tagged with exactly one transition mode
//! - The append-only history log and its repeat resolver
//! - Shared memory and the filesystem collaborator

mod fs;
mod history;
mod memory;
mod stack;
mod state;

pub use fs::{Filesystem, MemoryFilesystem, OsFilesystem};
pub use history::{History, HistoryItem};
pub use memory::Memory;
pub use stack::{ContentStack, BOTTOM};
pub use state::{InstantFn, Mode, RenderFn, State, Transition, UpdateFn, TERMINATED};

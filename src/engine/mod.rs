//! The transition engine and its collaborators.

pub mod automat;
pub mod config;
pub mod error;
pub mod io;
pub mod preflight;

pub use automat::{Automat, Phase};
pub use config::Config;
pub use error::{AutomatError, ConfigError};
pub use io::{CommandSource, Frame, Recorder, Script, Surface};
pub use preflight::{preflight, Violation};

//! Runtime configuration.

use crate::engine::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Layout and engine limits.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
///
/// # Example
///
/// ```rust
/// use assist::engine::Config;
///
/// let config = Config::from_json(r#"{ "max_info_width": 40 }"#).unwrap();
/// assert_eq!(config.max_info_width, 40);
/// assert_eq!(config.max_stack_height, 10);
///
/// let config = Config::default().max_instant_hops(8);
/// assert_eq!(config.max_instant_hops, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width of the state text box; longer lines wrap
    pub max_info_width: usize,
    /// Number of stack lines shown
    pub max_stack_height: usize,
    /// Free columns required right of the stack to draw it beside the state
    pub stack_margin_right: usize,
    /// Bound on chained instant transitions after one command
    pub max_instant_hops: usize,
    /// Where to write the session transcript on shutdown
    pub transcript_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_info_width: 55,
            max_stack_height: 10,
            stack_margin_right: 5,
            max_instant_hops: 64,
            transcript_path: None,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn max_info_width(mut self, width: usize) -> Self {
        self.max_info_width = width;
        self
    }

    pub fn max_stack_height(mut self, height: usize) -> Self {
        self.max_stack_height = height;
        self
    }

    pub fn stack_margin_right(mut self, margin: usize) -> Self {
        self.stack_margin_right = margin;
        self
    }

    pub fn max_instant_hops(mut self, hops: usize) -> Self {
        self.max_instant_hops = hops;
        self
    }

    pub fn transcript_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.transcript_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let config =
            Config::from_json(r#"{ "max_instant_hops": 3, "transcript_path": "/tmp/t.json" }"#)
                .unwrap();

        assert_eq!(config.max_instant_hops, 3);
        assert_eq!(config.transcript_path, Some(PathBuf::from("/tmp/t.json")));
        assert_eq!(config.max_info_width, 55);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            Config::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assist.json");
        std::fs::write(&path, r#"{ "max_stack_height": 4 }"#).unwrap();

        assert_eq!(Config::load(&path).unwrap().max_stack_height, 4);
    }

    #[test]
    fn builder_setters_chain() {
        let config = Config::default()
            .max_info_width(30)
            .max_stack_height(3)
            .stack_margin_right(1)
            .transcript_path("out.json");

        assert_eq!(config.max_info_width, 30);
        assert_eq!(config.max_stack_height, 3);
        assert_eq!(config.stack_margin_right, 1);
        assert_eq!(config.transcript_path, Some(PathBuf::from("out.json")));
    }
}

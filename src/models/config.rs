//! Configuration model for lintent

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::position::RangeBoundary;

/// lintent configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LintentConfig {
    #[serde(default)]
    pub intentions: IntentionsConfig,

    #[serde(default)]
    pub messages: MessagesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Intention gathering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentionsConfig {
    /// Whether the cursor at a message's end position still hits it
    #[serde(default)]
    pub range_boundary: RangeBoundary,

    /// Sort listed intentions by descending priority
    #[serde(default = "defaults::sort_by_priority")]
    pub sort_by_priority: bool,
}

impl Default for IntentionsConfig {
    fn default() -> Self {
        Self {
            range_boundary: RangeBoundary::default(),
            sort_by_priority: defaults::sort_by_priority(),
        }
    }
}

/// Where linter messages are read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "defaults::messages_path")]
    pub path: PathBuf,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            path: defaults::messages_path(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "defaults::pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: defaults::pretty(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn sort_by_priority() -> bool {
        false
    }

    pub fn messages_path() -> PathBuf {
        PathBuf::from(".lintent").join("messages.json")
    }

    pub fn pretty() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LintentConfig::default();
        assert_eq!(config.intentions.range_boundary, RangeBoundary::Inclusive);
        assert!(!config.intentions.sort_by_priority);
        assert_eq!(
            config.messages.path,
            PathBuf::from(".lintent/messages.json")
        );
        assert!(config.output.pretty);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: LintentConfig = toml::from_str(
            r#"
            [intentions]
            range_boundary = "exclusive"
            "#,
        )
        .unwrap();
        assert_eq!(config.intentions.range_boundary, RangeBoundary::Exclusive);
        assert!(!config.intentions.sort_by_priority);
        assert_eq!(config.messages, MessagesConfig::default());
    }
}

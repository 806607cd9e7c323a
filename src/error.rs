// SPDX-License-Identifier: MIT

//! Typed error handling for aeaconf-rs

use crate::condition::ConditionError;
use thiserror::Error;

/// Top-level error type for aeaconf-rs
#[derive(Debug, Error)]
pub enum AeaconfError {
    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// A check's rule failed to parse
    #[error("Invalid condition for check '{check}'")]
    Rule {
        check: String,
        source: ConditionError,
    },

    /// A custom condition's template failed to parse
    #[error("Invalid custom condition '${name}'")]
    Macro {
        name: String,
        source: ConditionError,
    },

    /// Configuration file not found
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl AeaconfError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a rule error for the named check
    pub fn rule(check: impl Into<String>, source: ConditionError) -> Self {
        Self::Rule {
            check: check.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AeaconfError>;

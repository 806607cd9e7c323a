// SPDX-License-Identifier: MIT

//! YAML schema types for scoring configuration files

use crate::condition::{Condition, MacroTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level scoring configuration as written on disk
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ConfigDefinition {
    #[serde(default)]
    pub round: Round,
    #[serde(default)]
    pub remote: Remote,
    /// Custom condition templates keyed by name (referenced as `$name`)
    #[serde(default)]
    pub custom_conditions: HashMap<String, String>,
    #[serde(default)]
    pub checks: Vec<CheckDefinition>,
}

/// Round metadata
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Round {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub user: String,
    /// Score locally instead of reporting to a remote server
    #[serde(default)]
    pub local: bool,
}

/// Remote scoring server settings
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Remote {
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub password: String,
}

/// A check as written in the configuration file
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CheckDefinition {
    pub message: String,
    /// Negative for penalties
    pub points: i32,
    pub condition: String,
}

/// A check with its parsed condition
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Check {
    pub message: String,
    pub points: i32,
    pub condition: Condition,
}

/// A check dropped under [`ErrorPolicy::Skip`]
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SkippedCheck {
    pub message: String,
    pub reason: String,
}

/// What to do when one check's rule does not parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Fail the whole load (default)
    #[default]
    Abort,
    /// Log a warning and leave the check out
    Skip,
}

/// A loaded configuration: metadata plus every check ready for evaluation
#[derive(Debug, Serialize, Clone)]
pub struct Scorecard {
    pub round: Round,
    pub remote: Remote,
    #[serde(skip)]
    pub macros: MacroTable,
    pub checks: Vec<Check>,
    pub skipped: Vec<SkippedCheck>,
}

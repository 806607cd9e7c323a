// SPDX-License-Identifier: MIT

//! Configuration loader - YAML file loading and rule parsing
//!
//! Custom conditions are validated first, then every check's rule is parsed
//! against them. One bad rule either aborts the load or is skipped, depending
//! on the loader's [`ErrorPolicy`].

use super::types::{Check, ConfigDefinition, ErrorPolicy, Scorecard, SkippedCheck};
use crate::condition::{parse_rule, MacroTable};
use crate::error::{AeaconfError, Result};
use std::fs;
use std::path::Path;

/// Loads scoring configurations from YAML files
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: ErrorPolicy,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ErrorPolicy) -> Self {
        Self { policy }
    }

    /// Load and parse a configuration file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Scorecard> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AeaconfError::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        self.load_str(&content)
    }

    /// Parse a configuration from a YAML string
    pub fn load_str(&self, content: &str) -> Result<Scorecard> {
        let def = Self::parse_yaml(content)?;
        self.build(def)
    }

    /// Deserialize the YAML without parsing any rules
    pub fn parse_yaml(content: &str) -> Result<ConfigDefinition> {
        let def: ConfigDefinition = serde_yaml::from_str(content)?;
        Ok(def)
    }

    /// Validate custom conditions and parse every check
    pub fn build(&self, def: ConfigDefinition) -> Result<Scorecard> {
        let macros = MacroTable::from(def.custom_conditions);
        macros
            .validate()
            .map_err(|(name, source)| AeaconfError::Macro { name, source })?;
        log::debug!("Loaded {} custom conditions", macros.len());

        let mut checks = Vec::with_capacity(def.checks.len());
        let mut skipped = Vec::new();

        for check in def.checks {
            if check.message.trim().is_empty() {
                return Err(AeaconfError::config("check with an empty message"));
            }

            match parse_rule(&check.condition, &macros) {
                Ok(condition) => checks.push(Check {
                    message: check.message,
                    points: check.points,
                    condition,
                }),
                Err(e) => match self.policy {
                    ErrorPolicy::Abort => return Err(AeaconfError::rule(check.message, e)),
                    ErrorPolicy::Skip => {
                        log::warn!("Skipping check '{}': {}", check.message, e);
                        skipped.push(SkippedCheck {
                            message: check.message,
                            reason: e.to_string(),
                        });
                    }
                },
            }
        }

        log::info!(
            "Parsed {} checks ({} skipped) for round '{}'",
            checks.len(),
            skipped.len(),
            def.round.title
        );

        Ok(Scorecard {
            round: def.round,
            remote: def.remote,
            macros,
            checks,
            skipped,
        })
    }
}

// SPDX-License-Identifier: MIT

//! Scoring configuration
//!
//! A configuration file holds round metadata, custom condition templates and
//! the list of scored checks. Loading it yields a [`Scorecard`] whose checks
//! carry parsed [`crate::condition::Condition`] trees.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    Check, CheckDefinition, ConfigDefinition, ErrorPolicy, Remote, Round, Scorecard, SkippedCheck,
};

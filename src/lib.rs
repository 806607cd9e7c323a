// SPDX-License-Identifier: MIT

//! Rule language for hardening-exercise scoring.
//!
//! A check's rule is a short boolean expression over named predicates such as
//! `PathExists` and `FileContains`, combined with `&&`, `||`, grouping, the
//! `Not` name suffix and operator-defined custom conditions (`$name arg ...`).
//!
//! - [`condition`] turns rule strings into [`condition::Condition`] trees and
//!   evaluates them against an [`condition::Environment`].
//! - [`config`] loads a scoring configuration file and parses every check.

pub mod condition;
pub mod config;
pub mod error;

pub use condition::{parse_macro_body, parse_rule, Condition, ConditionError, MacroTable};
pub use error::AeaconfError;

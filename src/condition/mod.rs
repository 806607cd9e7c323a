// SPDX-License-Identifier: MIT

//! Check conditions
//!
//! This module turns a check's rule string into a [`Condition`] tree and
//! evaluates it. Rules look like:
//! - `PathExists("/etc/passwd")`
//! - `FileContainsNot('/etc/ssh/sshd_config', "PermitRootLogin yes")`
//! - `PathExists /a && (PathExists /b || $custom /c "d")`
//!
//! `$custom` refers to a custom condition from a [`MacroTable`]; its template
//! is substituted once and parsed with custom conditions disabled.

mod ast;
mod error;
mod evaluator;
mod lexer;
mod macros;
mod parser;
mod registry;
mod token;

pub use ast::Condition;
pub use error::{ConditionError, LexError, ParseError};
pub use evaluator::{evaluate, Environment, LocalFilesystem};
pub use lexer::Lexer;
pub use macros::{substitute, MacroTable};
pub use parser::{parse_macro_body, parse_rule, Parser, MAX_NESTING};
pub use registry::{resolve, Predicate, NEGATION_SUFFIX};
pub use token::{Token, TokenKind};

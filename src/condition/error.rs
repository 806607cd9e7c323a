// SPDX-License-Identifier: MIT

//! Lexing and parsing errors for rule strings

use super::registry::Predicate;
use super::token::{join_kinds, TokenKind};
use thiserror::Error;

/// Character-level errors raised by the lexer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A lone `&` or `|`
    #[error("[lex] unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    /// Quote opened at `offset` never closed
    #[error("[lex] unterminated {quote}-quoted string starting at offset {offset}")]
    UnterminatedString { quote: char, offset: usize },
}

impl LexError {
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnexpectedChar { offset, .. } => *offset,
            LexError::UnterminatedString { offset, .. } => *offset,
        }
    }
}

/// Grammar-level errors raised by the parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(
        "unexpected token `{text}` ({found}) at offset {offset}, expected one of: [{}]",
        join_kinds(.expected)
    )]
    UnexpectedToken {
        found: TokenKind,
        text: String,
        offset: usize,
        expected: Vec<TokenKind>,
    },

    #[error("unexpected end of stream at offset {offset}, expected {}", describe_expected(.expected))]
    UnexpectedEnd {
        offset: usize,
        expected: Vec<TokenKind>,
    },

    /// Argument list closed before the predicate's arity was reached
    #[error("{predicate} is missing argument `{param}` at offset {offset}")]
    MissingArgument {
        predicate: Predicate,
        param: &'static str,
        offset: usize,
    },

    #[error("unrecognized check type `{name}` at offset {offset}")]
    UnknownCheck { name: String, offset: usize },

    #[error("unknown custom condition `${name}` at offset {offset}")]
    UnknownMacro { name: String, offset: usize },

    #[error("parentheses nested deeper than {limit} levels at offset {offset}")]
    TooDeep { limit: usize, offset: usize },

    /// Failure inside the expanded body of a custom condition.
    ///
    /// The inner error is rendered as part of this message and is not
    /// exposed again through [`std::error::Error::source`].
    #[error("in custom condition `${name}` at offset {offset}: {error}")]
    InMacro {
        name: String,
        offset: usize,
        error: Box<ConditionError>,
    },
}

impl ParseError {
    /// Byte offset in the source the parser was looking at
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { offset, .. }
            | ParseError::UnexpectedEnd { offset, .. }
            | ParseError::MissingArgument { offset, .. }
            | ParseError::UnknownCheck { offset, .. }
            | ParseError::UnknownMacro { offset, .. }
            | ParseError::TooDeep { offset, .. }
            | ParseError::InMacro { offset, .. } => *offset,
        }
    }

    /// Token kinds that would have been accepted, where applicable
    pub fn expected(&self) -> &[TokenKind] {
        match self {
            ParseError::UnexpectedToken { expected, .. }
            | ParseError::UnexpectedEnd { expected, .. } => expected,
            _ => &[],
        }
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    if !expected.is_empty() && expected.iter().all(|kind| kind.is_literal()) {
        "argument".to_string()
    } else {
        format!("one of: [{}]", join_kinds(expected))
    }
}

/// Any error produced while turning a rule string into a condition tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ConditionError {
    pub fn offset(&self) -> usize {
        match self {
            ConditionError::Lex(e) => e.offset(),
            ConditionError::Parse(e) => e.offset(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConditionError>;

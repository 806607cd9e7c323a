// SPDX-License-Identifier: MIT

//! Tokens produced by the rule lexer

use std::fmt;

/// Kind of a lexed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// (
    LParen,
    /// )
    RParen,
    /// ,
    Comma,
    /// &&
    And,
    /// ||
    Or,
    /// Bare word: predicate names, macro references, unquoted values
    Identifier,
    /// Quoted text, quotes excluded
    StringLiteral,
    EndOfStream,
}

impl TokenKind {
    /// Identifiers and string literals can stand as predicate arguments
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::StringLiteral)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::And => write!(f, "'&&'"),
            TokenKind::Or => write!(f, "'||'"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::StringLiteral => write!(f, "string"),
            TokenKind::EndOfStream => write!(f, "end of stream"),
        }
    }
}

/// A single token with the byte offset where it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }
}

/// Render a set of accepted kinds for diagnostics, e.g. `'(', identifier`
pub(crate) fn join_kinds(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_kinds() {
        assert!(TokenKind::Identifier.is_literal());
        assert!(TokenKind::StringLiteral.is_literal());
        assert!(!TokenKind::LParen.is_literal());
        assert!(!TokenKind::EndOfStream.is_literal());
    }

    #[test]
    fn test_join_kinds() {
        assert_eq!(
            join_kinds(&[TokenKind::And, TokenKind::Or, TokenKind::EndOfStream]),
            "'&&', '||', end of stream"
        );
    }
}

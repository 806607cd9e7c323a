// SPDX-License-Identifier: MIT

//! Recursive-descent parser for rule strings
//!
//! ```text
//! Expression := And ( "||" And )*
//! And        := Factor ( "&&" Factor )*
//! Factor     := "(" Expression ")"
//!             | MacroCall                 only when custom conditions are enabled
//!             | LeafCall
//! MacroCall  := "$name" Arg*
//! LeafCall   := Name "(" Arg ( "," Arg )* ")"
//!             | Name Arg*                 exactly arity arguments
//! Arg        := Identifier | StringLiteral
//! ```
//!
//! Both binary operators fold to the left, so `a || b || c` is `(a || b) || c`.

use super::ast::Condition;
use super::error::{ConditionError, ParseError, Result};
use super::lexer::Lexer;
use super::macros::{substitute, MacroTable};
use super::registry::{self, Predicate};
use super::token::{Token, TokenKind};

const ARG_KINDS: [TokenKind; 2] = [TokenKind::StringLiteral, TokenKind::Identifier];

/// Deepest run of nested parentheses a single rule may open
pub const MAX_NESTING: usize = 256;

/// Parse a check's rule, expanding `$name` custom condition references.
pub fn parse_rule(source: &str, macros: &MacroTable) -> Result<Condition> {
    Parser::with_macros(source, macros).parse()
}

/// Parse a custom condition body. `$name` references are not expanded here,
/// which bounds expansion to a single level.
pub fn parse_macro_body(source: &str) -> Result<Condition> {
    Parser::new(source).parse()
}

fn unexpected(token: Token, expected: &[TokenKind]) -> ConditionError {
    let expected = expected.to_vec();
    if token.kind == TokenKind::EndOfStream {
        ParseError::UnexpectedEnd {
            offset: token.offset,
            expected,
        }
        .into()
    } else {
        ParseError::UnexpectedToken {
            found: token.kind,
            text: token.text,
            offset: token.offset,
            expected,
        }
        .into()
    }
}

/// Single-use parser over one rule string
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    lookahead: Option<Token>,
    macros: Option<&'a MacroTable>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Parser with custom conditions disabled
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
            lookahead: None,
            macros: None,
            depth: 0,
        }
    }

    /// Parser that expands `$name` references from `macros`
    pub fn with_macros(source: &'a str, macros: &'a MacroTable) -> Self {
        Self {
            macros: Some(macros),
            ..Self::new(source)
        }
    }

    /// Parse the whole source into a single condition
    pub fn parse(mut self) -> Result<Condition> {
        let condition = self.parse_expression()?;
        let token = self.advance()?;
        if token.kind != TokenKind::EndOfStream {
            return Err(unexpected(
                token,
                &[TokenKind::And, TokenKind::Or, TokenKind::EndOfStream],
            ));
        }
        Ok(condition)
    }

    fn peek(&mut self) -> Result<&Token> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(&*self.lookahead.insert(token))
    }

    fn advance(&mut self) -> Result<Token> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => Ok(self.lexer.next_token()?),
        }
    }

    fn expect_any(&mut self, expected: &[TokenKind]) -> Result<Token> {
        let token = self.advance()?;
        if expected.contains(&token.kind) {
            Ok(token)
        } else {
            Err(unexpected(token, expected))
        }
    }

    fn parse_expression(&mut self) -> Result<Condition> {
        let mut lhs = self.parse_and()?;
        while self.peek()?.kind == TokenKind::Or {
            self.advance()?;
            let rhs = self.parse_and()?;
            lhs = Condition::or(lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Condition> {
        let mut lhs = self.parse_factor()?;
        while self.peek()?.kind == TokenKind::And {
            self.advance()?;
            let rhs = self.parse_factor()?;
            lhs = Condition::and(lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_factor(&mut self) -> Result<Condition> {
        let token = self.advance()?;
        match token.kind {
            TokenKind::LParen => {
                if self.depth == MAX_NESTING {
                    return Err(ParseError::TooDeep {
                        limit: MAX_NESTING,
                        offset: token.offset,
                    }
                    .into());
                }
                self.depth += 1;
                let inner = self.parse_expression()?;
                self.depth -= 1;
                self.expect_any(&[TokenKind::RParen])?;
                Ok(inner)
            }
            TokenKind::Identifier => {
                match self.macros.filter(|_| token.text.starts_with('$')) {
                    Some(macros) => self.parse_macro_call(token, macros),
                    None => self.parse_call(token),
                }
            }
            _ => Err(unexpected(token, &[TokenKind::LParen, TokenKind::Identifier])),
        }
    }

    fn parse_call(&mut self, name: Token) -> Result<Condition> {
        let (predicate, negated) =
            registry::resolve(&name.text).ok_or_else(|| ParseError::UnknownCheck {
                name: name.text.clone(),
                offset: name.offset,
            })?;

        let args = if self.peek()?.kind == TokenKind::LParen {
            self.advance()?;
            self.parenthesized_args(predicate)?
        } else {
            self.bare_args(predicate)?
        };

        let call = Condition::Call { predicate, args };
        Ok(if negated {
            Condition::negate(call)
        } else {
            call
        })
    }

    fn parenthesized_args(&mut self, predicate: Predicate) -> Result<Vec<String>> {
        let mut args = Vec::with_capacity(predicate.arity());
        for (i, &param) in predicate.params().iter().enumerate() {
            if i > 0 {
                let token = self.advance()?;
                match token.kind {
                    TokenKind::Comma => {}
                    TokenKind::RParen => {
                        return Err(ParseError::MissingArgument {
                            predicate,
                            param,
                            offset: token.offset,
                        }
                        .into())
                    }
                    _ => return Err(unexpected(token, &[TokenKind::Comma])),
                }
            }
            args.push(self.expect_any(&ARG_KINDS)?.text);
        }
        self.expect_any(&[TokenKind::RParen])?;
        Ok(args)
    }

    fn bare_args(&mut self, predicate: Predicate) -> Result<Vec<String>> {
        (0..predicate.arity())
            .map(|_| self.expect_any(&ARG_KINDS).map(|token| token.text))
            .collect()
    }

    fn parse_macro_call(&mut self, reference: Token, macros: &MacroTable) -> Result<Condition> {
        let name = &reference.text[1..];
        let template = macros.get(name).ok_or_else(|| ParseError::UnknownMacro {
            name: name.to_string(),
            offset: reference.offset,
        })?;

        let mut args = Vec::new();
        while self.peek()?.is_literal() {
            args.push(self.advance()?.text);
        }

        let body = substitute(template, &args);
        log::debug!("expanded ${} {:?} -> {}", name, args, body);

        parse_macro_body(&body).map_err(|e| {
            ParseError::InMacro {
                name: name.to_string(),
                offset: reference.offset,
                error: Box::new(e),
            }
            .into()
        })
    }
}

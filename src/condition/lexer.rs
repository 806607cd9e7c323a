// SPDX-License-Identifier: MIT

//! Rule lexer
//!
//! Produces tokens lazily, one per call to [`Lexer::next_token`], until
//! [`TokenKind::EndOfStream`] is returned. Offsets are byte offsets into the
//! source string.

use super::error::LexError;
use super::token::{Token, TokenKind};

/// Characters that end a bare identifier in addition to whitespace.
///
/// Quotes only open a string at the start of a token, so `can't` stays one word.
fn is_delimiter(ch: char) -> bool {
    matches!(ch, '(' | ')' | ',' | '&' | '|')
}

/// Tokenizer over a single rule string
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Current byte offset into the source
    pub fn position(&self) -> usize {
        self.pos
    }

    fn current_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Character right after the current one, used for `&&` and `||`
    fn peek_next_char(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next()?;
        chars.next()
    }

    /// Lex a two-character operator whose characters are both `ch`
    fn double(&mut self, ch: char, kind: TokenKind) -> Result<Token, LexError> {
        let start = self.pos;
        if self.peek_next_char() == Some(ch) {
            self.pos += 2 * ch.len_utf8();
            Ok(Token::new(kind, &self.source[start..self.pos], start))
        } else {
            Err(LexError::UnexpectedChar { ch, offset: start })
        }
    }

    fn quoted(&mut self, quote: char) -> Result<Token, LexError> {
        let start = self.pos;
        let body_start = start + quote.len_utf8();
        match self.source[body_start..].find(quote) {
            Some(len) => {
                let body_end = body_start + len;
                self.pos = body_end + quote.len_utf8();
                Ok(Token::new(
                    TokenKind::StringLiteral,
                    &self.source[body_start..body_end],
                    start,
                ))
            }
            None => Err(LexError::UnterminatedString {
                quote,
                offset: start,
            }),
        }
    }

    fn identifier(&mut self) -> Token {
        let start = self.pos;
        let rest = &self.source[start..];
        let len = rest
            .find(|c: char| c.is_whitespace() || is_delimiter(c))
            .unwrap_or(rest.len());
        self.pos += len;
        Token::new(TokenKind::Identifier, &self.source[start..self.pos], start)
    }

    /// Produce the next token
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let token = self.scan()?;
        log::trace!("lexed {} {:?} at {}", token.kind, token.text, token.offset);
        Ok(token)
    }

    fn scan(&mut self) -> Result<Token, LexError> {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.pos += ch.len_utf8();
                continue;
            }

            let start = self.pos;
            return match ch {
                '(' => {
                    self.pos += 1;
                    Ok(Token::new(TokenKind::LParen, "(", start))
                }
                ')' => {
                    self.pos += 1;
                    Ok(Token::new(TokenKind::RParen, ")", start))
                }
                ',' => {
                    self.pos += 1;
                    Ok(Token::new(TokenKind::Comma, ",", start))
                }
                '&' => self.double('&', TokenKind::And),
                '|' => self.double('|', TokenKind::Or),
                '"' | '\'' => self.quoted(ch),
                _ => Ok(self.identifier()),
            };
        }

        Ok(Token::new(TokenKind::EndOfStream, "", self.source.len()))
    }

    /// Lex the whole source, `EndOfStream` included
    pub fn tokenize_all(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::EndOfStream;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize_all()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_punctuation_and_operators() {
        assert_eq!(
            kinds("( ) , && ||"),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Comma,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::EndOfStream,
            ]
        );
    }

    #[test]
    fn test_call_form_splits_at_delimiters() {
        let tokens = Lexer::new(r#"FileContains('/etc/hosts', "localhost")"#)
            .tokenize_all()
            .unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["FileContains", "(", "/etc/hosts", ",", "localhost", ")", ""]
        );
        assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[4].kind, TokenKind::StringLiteral);
    }

    #[test]
    fn test_identifier_runs_to_whitespace() {
        let tokens = Lexer::new("$greet /tmp/a.b").tokenize_all().unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "$greet", 0));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "/tmp/a.b", 7));
    }

    #[test]
    fn test_quote_inside_bare_word() {
        let tokens = Lexer::new(r#"FileContains /etc/motd can't key="v""#)
            .tokenize_all()
            .unwrap();
        assert_eq!(tokens[2], Token::new(TokenKind::Identifier, "can't", 23));
        assert_eq!(tokens[3], Token::new(TokenKind::Identifier, r#"key="v""#, 29));
        assert_eq!(tokens[4].kind, TokenKind::EndOfStream);
    }

    #[test]
    fn test_quotes_do_not_nest() {
        let tokens = Lexer::new(r#"'say "hi"' "it's""#).tokenize_all().unwrap();
        assert_eq!(tokens[0].text, r#"say "hi""#);
        assert_eq!(tokens[1].text, "it's");
    }

    #[test]
    fn test_no_escape_processing() {
        let tokens = Lexer::new(r#""a\nb""#).tokenize_all().unwrap();
        assert_eq!(tokens[0].text, r"a\nb");
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(kinds("   \t\n"), vec![TokenKind::EndOfStream]);
    }

    #[test]
    fn test_unicode_whitespace_and_offsets() {
        let tokens = Lexer::new("\u{00a0}é && x").tokenize_all().unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "é", 2));
        assert_eq!(tokens[1].offset, 5);
        assert_eq!(tokens[2].offset, 8);
    }

    #[test]
    fn test_lone_ampersand() {
        let err = Lexer::new("A & B").tokenize_all().unwrap_err();
        assert_eq!(err, LexError::UnexpectedChar { ch: '&', offset: 2 });
    }

    #[test]
    fn test_lone_pipe_at_end() {
        let err = Lexer::new("A |").tokenize_all().unwrap_err();
        assert_eq!(err, LexError::UnexpectedChar { ch: '|', offset: 2 });
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new(r#"PathExists "/etc"#).tokenize_all().unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedString {
                quote: '"',
                offset: 11
            }
        );
    }
}

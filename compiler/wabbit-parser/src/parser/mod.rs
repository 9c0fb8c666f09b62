// Copyright (C) 2019-2026 The Wabbit Team.
// This file is part of the Wabbit library.

// The Wabbit library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Wabbit library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Wabbit library. If not, see <https://www.gnu.org/licenses/>.

mod expr;
mod stmt;

use crate::token::{Token, TokenKind};
use tracing::debug;
use wabbit_ast::Program;
use wabbit_errors::{SyntaxError, WabbitError, WabbitResult};
use wabbit_span::Span;

/// Recursive-descent parser over a token list. Fails fast: the first
/// unexpected token aborts parsing with a [`SyntaxError`] and no recovery is
/// attempted.
pub struct Parser {
    /// Remaining tokens, stored reversed so `pop()` is O(1) and cheap, the
    /// way a compiler-team parser buffers its lookahead token stream.
    tokens: Vec<Token>,
    token: Token,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        tokens.reverse();
        let first = tokens.pop().unwrap_or_else(|| Token::new(TokenKind::Eof, "", Span::dummy()));
        Self { tokens, token: first }
    }

    /// Parses the whole token stream into a root [`Program`] (a [`Block`] of
    /// top-level statements).
    pub fn parse_program(&mut self) -> WabbitResult<Program> {
        let mut statements = Vec::new();
        while !self.at_eof() {
            statements.push(self.parse_statement()?);
        }
        debug!(statements = statements.len(), "parsed top-level program");
        Ok(statements)
    }

    fn bump(&mut self) -> Token {
        let next = self.tokens.pop().unwrap_or_else(|| Token::new(TokenKind::Eof, "", self.token.span));
        std::mem::replace(&mut self.token, next)
    }

    fn at_eof(&self) -> bool {
        self.token.kind == TokenKind::Eof
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    /// Two-token lookahead, needed exactly once: distinguishing `NAME "("`
    /// (a call) from a bare `NAME`.
    fn check_next(&self, kind: TokenKind) -> bool {
        self.tokens.last().map(|t| t.kind == kind).unwrap_or(false)
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        self.check(kind).then(|| self.bump())
    }

    fn expect(&mut self, kind: TokenKind) -> WabbitResult<Token> {
        self.eat(kind).ok_or_else(|| self.unexpected(kind.to_string()))
    }

    fn unexpected(&self, expected: impl Into<String>) -> WabbitError {
        let expected = expected.into();
        let found = if self.at_eof() {
            return WabbitError::syntax(SyntaxError::UnexpectedEof { expected }, self.token.span);
        } else {
            format!("{} ({:?})", self.token.kind, self.token.lexeme)
        };
        WabbitError::syntax(SyntaxError::UnexpectedToken { expected, found }, self.token.span)
    }

    fn parse_type(&mut self) -> WabbitResult<wabbit_ast::Type> {
        let name_tok = self.expect(TokenKind::Name)?;
        wabbit_ast::Type::from_name(&name_tok.lexeme).ok_or_else(|| {
            WabbitError::syntax(
                SyntaxError::UnexpectedToken {
                    expected: "a type name (int, float, bool, char)".into(),
                    found: format!("{:?}", name_tok.lexeme),
                },
                name_tok.span,
            )
        })
    }
}

/// Tokenizes and parses `source` into a root [`Program`].
pub fn parse(source: &str) -> WabbitResult<Program> {
    let tokens = crate::lexer::tokenize(source)?;
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_is_empty_program() {
        assert_eq!(parse("").unwrap(), Vec::new());
    }
}

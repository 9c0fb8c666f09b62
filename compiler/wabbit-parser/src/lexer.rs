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

//! A single left-to-right scan over the source string. At each step the
//! first matching rule consumes input: block comments, line comments,
//! identifiers/keywords, float/integer literals, character literals,
//! two-character symbols ahead of one-character ones, then whitespace.
//! Whitespace and comments produce no tokens. The first unrecognized
//! character aborts with a [`SyntaxError`].

use crate::token::{Token, TokenKind, KEYWORDS};
use tracing::debug;
use wabbit_errors::{SyntaxError, WabbitError, WabbitResult};
use wabbit_span::Span;

/// Two-character symbols, checked before their one-character prefixes.
const TWO_CHAR_SYMBOLS: &[(&str, TokenKind)] = &[
    ("<=", TokenKind::LessEq),
    (">=", TokenKind::MoreEq),
    ("==", TokenKind::DoubleEq),
    ("!=", TokenKind::NotEq),
    ("&&", TokenKind::LogicalAnd),
    ("||", TokenKind::LogicalOr),
];

/// One-character symbols.
const ONE_CHAR_SYMBOLS: &[(char, TokenKind)] = &[
    ('+', TokenKind::Add),
    ('-', TokenKind::Sub),
    ('*', TokenKind::Multiply),
    ('/', TokenKind::Divide),
    ('<', TokenKind::Less),
    ('>', TokenKind::More),
    ('=', TokenKind::Equal),
    ('!', TokenKind::LogicalNot),
    ('(', TokenKind::OpenParens),
    (')', TokenKind::CloseParens),
    ('{', TokenKind::OpenCurlyBrace),
    ('}', TokenKind::CloseCurlyBrace),
    (';', TokenKind::Semicolon),
    (',', TokenKind::Comma),
];

/// Scans `source` into an ordered token list, ending with a synthetic `Eof`
/// token positioned at `source.len()`.
pub fn tokenize(source: &str) -> WabbitResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut pos = 0usize;

    while pos < source.len() {
        let rest = &source[pos..];
        let mut chars = rest.chars();
        let c = chars.next().expect("pos < source.len() implies a next char");

        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }

        if rest.starts_with("/*") {
            pos += eat_block_comment(rest, pos)?;
            continue;
        }

        if rest.starts_with("//") {
            pos += eat_line_comment(rest, pos)?;
            continue;
        }

        let (len, kind, lexeme) = eat_token(rest, pos)?;
        tokens.push(Token::new(kind, lexeme, Span::new(pos, pos + len)));
        pos += len;
    }

    tokens.push(Token::new(TokenKind::Eof, "", Span::at(source.len())));
    debug!(tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Counts the UTF-8 byte length of the longest prefix of `s` all of whose
/// characters satisfy `pred`.
fn take_while_len(s: &str, mut pred: impl FnMut(char) -> bool) -> usize {
    let mut len = 0;
    for c in s.chars() {
        if pred(c) {
            len += c.len_utf8();
        } else {
            break;
        }
    }
    len
}

/// Non-nesting block comment `/* ... */`. Unterminated is a [`SyntaxError`].
fn eat_block_comment(rest: &str, pos: usize) -> WabbitResult<usize> {
    match rest[2..].find("*/") {
        Some(idx) => Ok(2 + idx + 2),
        None => Err(WabbitError::syntax(SyntaxError::UnterminatedBlockComment, Span::at(pos))),
    }
}

/// Line comment `// ...\n`. Requires the terminating newline; EOF-terminated
/// is a [`SyntaxError`] (spec.md §4.B deviates from permissive scanners here).
fn eat_line_comment(rest: &str, pos: usize) -> WabbitResult<usize> {
    match rest.find('\n') {
        Some(idx) => Ok(idx + 1),
        None => Err(WabbitError::syntax(SyntaxError::UnterminatedLineComment, Span::at(pos))),
    }
}

/// Tries to match a float literal at the start of `rest`: `digits . digits`,
/// `. digits`, or `digits .` (but never a bare `.`). Returns `None` if `rest`
/// does not start with a float.
fn try_float_len(rest: &str) -> Option<usize> {
    let digits_len = take_while_len(rest, |c| c.is_ascii_digit());
    if digits_len > 0 {
        if rest[digits_len..].starts_with('.') {
            let more = take_while_len(&rest[digits_len + 1..], |c| c.is_ascii_digit());
            return Some(digits_len + 1 + more);
        }
        return None;
    }
    if let Some(after_dot) = rest.strip_prefix('.') {
        let more = take_while_len(after_dot, |c| c.is_ascii_digit());
        if more > 0 {
            return Some(1 + more);
        }
    }
    None
}

/// Matches a single non-whitespace, non-comment token at the start of `rest`.
fn eat_token(rest: &str, pos: usize) -> WabbitResult<(usize, TokenKind, String)> {
    let c = rest.chars().next().expect("rest is non-empty");

    if c.is_ascii_alphabetic() || c == '_' {
        let mut len = take_while_len(rest, |c| c.is_ascii_alphabetic() || c == '_');
        len += take_while_len(&rest[len..], |c| c.is_ascii_digit());
        let lexeme = rest[..len].to_string();
        let kind = KEYWORDS
            .iter()
            .find(|(kw, _)| *kw == lexeme)
            .map(|(_, kind)| *kind)
            .unwrap_or(TokenKind::Name);
        return Ok((len, kind, lexeme));
    }

    if let Some(len) = try_float_len(rest) {
        return Ok((len, TokenKind::Float, rest[..len].to_string()));
    }

    if c.is_ascii_digit() {
        let len = take_while_len(rest, |c| c.is_ascii_digit());
        return Ok((len, TokenKind::Integer, rest[..len].to_string()));
    }

    if c == '\'' {
        return eat_char_literal(rest, pos);
    }

    for (symbol, kind) in TWO_CHAR_SYMBOLS {
        if rest.starts_with(symbol) {
            return Ok((2, *kind, (*symbol).to_string()));
        }
    }

    for (symbol, kind) in ONE_CHAR_SYMBOLS {
        if c == *symbol {
            return Ok((c.len_utf8(), *kind, c.to_string()));
        }
    }

    Err(WabbitError::syntax(SyntaxError::UnrecognizedCharacter(c), Span::at(pos)))
}

/// A character literal: `'` then either a single printable (7-bit ASCII)
/// character or the escape `\n`, then `'`.
fn eat_char_literal(rest: &str, pos: usize) -> WabbitResult<(usize, TokenKind, String)> {
    let mut chars = rest.char_indices();
    let (_, quote) = chars.next().expect("caller checked rest starts with '\\''");
    debug_assert_eq!(quote, '\'');

    let (_, body) = chars.next().ok_or_else(|| WabbitError::syntax(SyntaxError::UnterminatedCharLiteral, Span::at(pos)))?;

    let (consumed_body, _value) = if body == '\\' {
        let (_, escaped) = chars
            .next()
            .ok_or_else(|| WabbitError::syntax(SyntaxError::UnterminatedCharLiteral, Span::at(pos)))?;
        match escaped {
            'n' => (1 + body.len_utf8() + escaped.len_utf8(), b'\n'),
            other => return Err(WabbitError::syntax(SyntaxError::InvalidEscape(other), Span::at(pos))),
        }
    } else if body.is_ascii() {
        (body.len_utf8(), body as u8)
    } else {
        return Err(WabbitError::syntax(SyntaxError::UnrecognizedCharacter(body), Span::at(pos)));
    };

    let quote_len = quote.len_utf8();
    match chars.next() {
        Some((_, '\'')) => {
            let total = quote_len + consumed_body + quote_len;
            Ok((total, TokenKind::Char, rest[..total].to_string()))
        }
        _ => Err(WabbitError::syntax(SyntaxError::UnterminatedCharLiteral, Span::at(pos))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_program_yields_only_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn matches_print_statement() {
        let tokens = tokenize("print 123 + 1.2;").unwrap();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["print", "123", "+", "1.2", ";", ""]);
        assert_eq!(tokens[0].span, Span::new(0, 5));
        assert_eq!(tokens[1].span, Span::new(6, 9));
    }

    #[test]
    fn two_char_symbols_win_over_one_char_prefix() {
        assert_eq!(kinds("<="), vec![TokenKind::LessEq, TokenKind::Eof]);
        assert_eq!(kinds("<"), vec![TokenKind::Less, TokenKind::Eof]);
    }

    #[test]
    fn float_forms() {
        assert_eq!(kinds("3.14"), vec![TokenKind::Float, TokenKind::Eof]);
        assert_eq!(kinds(".25"), vec![TokenKind::Float, TokenKind::Eof]);
        assert_eq!(kinds("1."), vec![TokenKind::Float, TokenKind::Eof]);
    }

    #[test]
    fn bare_dot_is_not_a_float() {
        let err = tokenize(".").unwrap_err();
        assert!(matches!(err, WabbitError::Syntax { kind: SyntaxError::UnrecognizedCharacter('.'), .. }));
    }

    #[test]
    fn char_literal_with_newline_escape() {
        let tokens = tokenize("'\\n'").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Char);
        assert_eq!(tokens[0].lexeme, "'\\n'");
    }

    #[test]
    fn char_literal_plain() {
        let tokens = tokenize("'x'").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Char);
    }

    #[test]
    fn unterminated_block_comment_is_syntax_error() {
        let err = tokenize("/* never closed").unwrap_err();
        assert!(matches!(err, WabbitError::Syntax { kind: SyntaxError::UnterminatedBlockComment, .. }));
    }

    #[test]
    fn line_comment_without_trailing_newline_is_syntax_error() {
        let err = tokenize("// no newline at eof").unwrap_err();
        assert!(matches!(err, WabbitError::Syntax { kind: SyntaxError::UnterminatedLineComment, .. }));
    }

    #[test]
    fn line_comment_is_skipped_when_newline_terminated() {
        assert_eq!(kinds("// comment\nprint 1;"), vec![
            TokenKind::Print,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Eof
        ]);
    }

    #[test]
    fn keyword_vs_identifier() {
        assert_eq!(kinds("print printer"), vec![TokenKind::Print, TokenKind::Name, TokenKind::Eof]);
    }

    #[test]
    fn identifier_may_trail_digits() {
        let tokens = tokenize("abc123").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Name);
        assert_eq!(tokens[0].lexeme, "abc123");
    }
}

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

//! Precedence-climbing expression parsing, low to high:
//! `assignment -> or -> and -> cmp -> addsub -> muldiv -> factor`.
//! Every binary level but assignment is left-associative, built by iterating
//! rather than recursing; assignment is right-associative but supports only
//! one chain level, per the grammar in spec.md §4.C.

use super::Parser;
use crate::token::TokenKind;
use wabbit_ast::{ArithOp, Expr, LogicalOp, Name, UnaryOp};
use wabbit_errors::{SyntaxError, WabbitError, WabbitResult};

impl Parser {
    pub(super) fn parse_expression(&mut self) -> WabbitResult<Expr> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> WabbitResult<Expr> {
        let left = self.parse_or()?;
        if !self.check(TokenKind::Equal) {
            return Ok(left);
        }
        let target = match left {
            Expr::Name(name) => name,
            other => {
                return Err(WabbitError::syntax(
                    SyntaxError::UnexpectedToken {
                        expected: "an assignment target (a name)".into(),
                        found: format!("{other:?}"),
                    },
                    other.span(),
                ));
            }
        };
        self.bump(); // '='
        let value = self.parse_or()?;
        let span = target.span.to(value.span());
        Ok(Expr::Assignment { target, value: Box::new(value), span })
    }

    fn parse_or(&mut self) -> WabbitResult<Expr> {
        let mut expr = self.parse_and()?;
        while self.check(TokenKind::LogicalOr) {
            self.bump();
            let right = self.parse_and()?;
            expr = logical(LogicalOp::Or, expr, right);
        }
        Ok(expr)
    }

    fn parse_and(&mut self) -> WabbitResult<Expr> {
        let mut expr = self.parse_comparison()?;
        while self.check(TokenKind::LogicalAnd) {
            self.bump();
            let right = self.parse_comparison()?;
            expr = logical(LogicalOp::And, expr, right);
        }
        Ok(expr)
    }

    fn parse_comparison(&mut self) -> WabbitResult<Expr> {
        let mut expr = self.parse_addsub()?;
        loop {
            let op = match self.token.kind {
                TokenKind::Less => LogicalOp::Lt,
                TokenKind::More => LogicalOp::Gt,
                TokenKind::LessEq => LogicalOp::LtEq,
                TokenKind::MoreEq => LogicalOp::GtEq,
                TokenKind::DoubleEq => LogicalOp::Eq,
                TokenKind::NotEq => LogicalOp::NotEq,
                _ => break,
            };
            self.bump();
            let right = self.parse_addsub()?;
            expr = logical(op, expr, right);
        }
        Ok(expr)
    }

    fn parse_addsub(&mut self) -> WabbitResult<Expr> {
        let mut expr = self.parse_muldiv()?;
        loop {
            let op = match self.token.kind {
                TokenKind::Add => ArithOp::Add,
                TokenKind::Sub => ArithOp::Sub,
                _ => break,
            };
            self.bump();
            let right = self.parse_muldiv()?;
            expr = arith(op, expr, right);
        }
        Ok(expr)
    }

    fn parse_muldiv(&mut self) -> WabbitResult<Expr> {
        let mut expr = self.parse_factor()?;
        loop {
            let op = match self.token.kind {
                TokenKind::Multiply => ArithOp::Mul,
                TokenKind::Divide => ArithOp::Div,
                _ => break,
            };
            self.bump();
            let right = self.parse_factor()?;
            expr = arith(op, expr, right);
        }
        Ok(expr)
    }

    fn parse_factor(&mut self) -> WabbitResult<Expr> {
        match self.token.kind {
            TokenKind::Integer => {
                let t = self.bump();
                Ok(Expr::Integer { lexeme: t.lexeme, span: t.span })
            }
            TokenKind::Float => {
                let t = self.bump();
                Ok(Expr::Float { lexeme: t.lexeme, span: t.span })
            }
            TokenKind::True => {
                let t = self.bump();
                Ok(Expr::Boolean { value: true, span: t.span })
            }
            TokenKind::False => {
                let t = self.bump();
                Ok(Expr::Boolean { value: false, span: t.span })
            }
            TokenKind::Char => {
                let t = self.bump();
                Ok(Expr::Character { value: char_literal_value(&t.lexeme), span: t.span })
            }
            TokenKind::Name if self.check_next(TokenKind::OpenParens) => self.parse_func_call(),
            TokenKind::Name => {
                let t = self.bump();
                Ok(Expr::Name(Name::new(t.lexeme, t.span)))
            }
            TokenKind::Sub => self.parse_unary(UnaryOp::Neg),
            TokenKind::Add => self.parse_unary(UnaryOp::Pos),
            TokenKind::LogicalNot => self.parse_unary(UnaryOp::Not),
            TokenKind::OpenParens => {
                let open = self.bump();
                let inner = self.parse_expression()?;
                let close = self.expect(TokenKind::CloseParens)?;
                Ok(Expr::ParenExpr { inner: Box::new(inner), span: open.span.to(close.span) })
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    fn parse_unary(&mut self, op: UnaryOp) -> WabbitResult<Expr> {
        let t = self.bump();
        let operand = self.parse_factor()?;
        let span = t.span.to(operand.span());
        Ok(Expr::UnaryOp { op, operand: Box::new(operand), span })
    }

    fn parse_func_call(&mut self) -> WabbitResult<Expr> {
        let name_tok = self.bump();
        let name = Name::new(name_tok.lexeme, name_tok.span);
        self.expect(TokenKind::OpenParens)?;

        let mut args = Vec::new();
        if !self.check(TokenKind::CloseParens) {
            args.push(self.parse_expression()?);
            while self.eat(TokenKind::Comma).is_some() {
                args.push(self.parse_expression()?);
            }
        }
        let close = self.expect(TokenKind::CloseParens)?;
        let span = name.span.to(close.span);
        Ok(Expr::FuncCall { name, args, span })
    }
}

fn logical(op: LogicalOp, left: Expr, right: Expr) -> Expr {
    let span = left.span().to(right.span());
    Expr::LogicalOp { op, left: Box::new(left), right: Box::new(right), span }
}

fn arith(op: ArithOp, left: Expr, right: Expr) -> Expr {
    let span = left.span().to(right.span());
    Expr::BinOp { op, left: Box::new(left), right: Box::new(right), span }
}

/// Recovers the `u8` value of an already-validated character-literal lexeme
/// (e.g. `'x'` or `'\n'`); the lexer guarantees the escape is `\n` or the
/// body is a single 7-bit ASCII character.
fn char_literal_value(lexeme: &str) -> u8 {
    let inner = &lexeme[1..lexeme.len() - 1];
    if inner == "\\n" { b'\n' } else { inner.as_bytes()[0] }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_expr(source: &str) -> Expr {
        let tokens = lexer::tokenize(source).unwrap();
        let mut parser = Parser::new(tokens);
        parser.parse_expression().unwrap()
    }

    #[test]
    fn precedence_mul_binds_tighter_than_add() {
        let expr = parse_expr("2 + 3 * -4");
        match expr {
            Expr::BinOp { op: ArithOp::Add, left, right, .. } => {
                assert!(matches!(*left, Expr::Integer { .. }));
                assert!(matches!(*right, Expr::BinOp { op: ArithOp::Mul, .. }));
            }
            other => panic!("expected top-level Add, got {other:?}"),
        }
    }

    #[test]
    fn left_associative_same_precedence() {
        // (1 - 2) - 3
        let expr = parse_expr("1 - 2 - 3");
        match expr {
            Expr::BinOp { op: ArithOp::Sub, left, .. } => {
                assert!(matches!(*left, Expr::BinOp { op: ArithOp::Sub, .. }));
            }
            other => panic!("expected outer Sub, got {other:?}"),
        }
    }

    #[test]
    fn assignment_requires_name_target() {
        let tokens = lexer::tokenize("1 = 2").unwrap();
        let mut parser = Parser::new(tokens);
        assert!(parser.parse_expression().is_err());
    }

    #[test]
    fn char_literal_value_newline() {
        let expr = parse_expr("'\\n'");
        assert!(matches!(expr, Expr::Character { value: b'\n', .. }));
    }
}

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

//! Statement parsing per the grammar in spec.md §4.C. `if`/`while` bodies and
//! `func` bodies are all the same [`Block`] production: `"{" statement* "}"`.

use super::Parser;
use crate::token::TokenKind;
use wabbit_ast::{Block, FuncArg, Name, Stmt};
use wabbit_errors::{SyntaxError, WabbitError, WabbitResult};
use wabbit_span::Span;

impl Parser {
    pub(super) fn parse_statement(&mut self) -> WabbitResult<Stmt> {
        match self.token.kind {
            TokenKind::Break => {
                let t = self.bump();
                let semi = self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Break { span: t.span.to(semi.span) })
            }
            TokenKind::Continue => {
                let t = self.bump();
                let semi = self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Continue { span: t.span.to(semi.span) })
            }
            TokenKind::Print => {
                let t = self.bump();
                let expr = self.parse_expression()?;
                let semi = self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Print { expr, span: t.span.to(semi.span) })
            }
            TokenKind::Const => self.parse_const_decl(),
            TokenKind::Var => self.parse_var_decl(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Func => self.parse_func_def(),
            TokenKind::Return => {
                let t = self.bump();
                let value = self.parse_expression()?;
                let semi = self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Return { value, span: t.span.to(semi.span) })
            }
            _ => {
                let expr = self.parse_expression()?;
                let semi = self.expect(TokenKind::Semicolon)?;
                let span = expr.span().to(semi.span);
                Ok(Stmt::ExprStmt { expr, span })
            }
        }
    }

    fn parse_const_decl(&mut self) -> WabbitResult<Stmt> {
        let kw = self.bump(); // 'const'
        let name = self.parse_name()?;
        let ty = self.parse_optional_type()?;
        self.expect(TokenKind::Equal)?;
        let value = self.parse_expression()?;
        let semi = self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::ConstDecl { name, ty, value, span: kw.span.to(semi.span) })
    }

    fn parse_var_decl(&mut self) -> WabbitResult<Stmt> {
        let kw = self.bump(); // 'var'
        let name = self.parse_name()?;
        let ty = self.parse_optional_type()?;
        let value = if self.eat(TokenKind::Equal).is_some() { Some(self.parse_expression()?) } else { None };
        let semi = self.expect(TokenKind::Semicolon)?;
        if ty.is_none() && value.is_none() {
            return Err(WabbitError::syntax(
                SyntaxError::UnexpectedToken {
                    expected: "a type or an initializer for 'var'".into(),
                    found: "neither".into(),
                },
                kw.span,
            ));
        }
        Ok(Stmt::VarDecl { name, ty, value, span: kw.span.to(semi.span) })
    }

    fn parse_if(&mut self) -> WabbitResult<Stmt> {
        let kw = self.bump(); // 'if'
        let test = self.parse_expression()?;
        let (body, body_span) = self.parse_block()?;
        let mut span = kw.span.to(body_span);
        let else_body = if self.eat(TokenKind::Else).is_some() {
            let (else_body, else_span) = self.parse_block()?;
            span = span.to(else_span);
            Some(else_body)
        } else {
            None
        };
        Ok(Stmt::If { test, body, else_body, span })
    }

    fn parse_while(&mut self) -> WabbitResult<Stmt> {
        let kw = self.bump(); // 'while'
        let test = self.parse_expression()?;
        let (body, body_span) = self.parse_block()?;
        Ok(Stmt::While { test, body, span: kw.span.to(body_span) })
    }

    fn parse_func_def(&mut self) -> WabbitResult<Stmt> {
        let kw = self.bump(); // 'func'
        let name = self.parse_name()?;
        self.expect(TokenKind::OpenParens)?;
        let mut args = Vec::new();
        if !self.check(TokenKind::CloseParens) {
            args.push(self.parse_func_arg()?);
            while self.eat(TokenKind::Comma).is_some() {
                args.push(self.parse_func_arg()?);
            }
        }
        self.expect(TokenKind::CloseParens)?;
        let return_type = self.parse_type()?;
        let (body, body_span) = self.parse_block()?;
        Ok(Stmt::FuncDef { name, args, return_type, body, span: kw.span.to(body_span) })
    }

    fn parse_func_arg(&mut self) -> WabbitResult<FuncArg> {
        let name = self.parse_name()?;
        let ty = self.parse_type()?;
        Ok(FuncArg { name, ty })
    }

    fn parse_block(&mut self) -> WabbitResult<(Block, Span)> {
        let open = self.expect(TokenKind::OpenCurlyBrace)?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::CloseCurlyBrace) && !self.at_eof() {
            statements.push(self.parse_statement()?);
        }
        let close = self.expect(TokenKind::CloseCurlyBrace)?;
        Ok((statements, open.span.to(close.span)))
    }

    fn parse_name(&mut self) -> WabbitResult<Name> {
        let t = self.expect(TokenKind::Name)?;
        Ok(Name::new(t.lexeme, t.span))
    }

    /// A type annotation is present exactly when the next token is a `NAME`
    /// (the only token that could start one); anything else — `=`, `;` —
    /// means it was omitted.
    fn parse_optional_type(&mut self) -> WabbitResult<Option<wabbit_ast::Type>> {
        if self.check(TokenKind::Name) { Ok(Some(self.parse_type()?)) } else { Ok(None) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_one(source: &str) -> Stmt {
        let tokens = lexer::tokenize(source).unwrap();
        Parser::new(tokens).parse_statement().unwrap()
    }

    #[test]
    fn var_decl_with_type_only() {
        assert!(matches!(parse_one("var x int;"), Stmt::VarDecl { ty: Some(wabbit_ast::Type::Int), value: None, .. }));
    }

    #[test]
    fn var_decl_with_value_only() {
        assert!(matches!(parse_one("var x = 1;"), Stmt::VarDecl { ty: None, value: Some(_), .. }));
    }

    #[test]
    fn var_decl_without_type_or_value_is_error() {
        let tokens = lexer::tokenize("var x;").unwrap();
        assert!(Parser::new(tokens).parse_statement().is_err());
    }

    #[test]
    fn if_else_parses_both_blocks() {
        let stmt = parse_one("if true { print 1; } else { print 2; }");
        assert!(matches!(stmt, Stmt::If { else_body: Some(_), .. }));
    }

    #[test]
    fn func_def_with_args_and_return_type() {
        let stmt = parse_one("func add(x int, y int) int { return x + y; }");
        match stmt {
            Stmt::FuncDef { args, return_type, .. } => {
                assert_eq!(args.len(), 2);
                assert_eq!(return_type, wabbit_ast::Type::Int);
            }
            other => panic!("expected FuncDef, got {other:?}"),
        }
    }
}

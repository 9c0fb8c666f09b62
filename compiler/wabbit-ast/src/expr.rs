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

use serde::{Deserialize, Serialize};
use std::fmt;
use wabbit_span::Span;

/// A bare name, used both as an expression (`Expr::Name`) and wherever the
/// grammar requires one directly: an assignment target, a function-call
/// callee, a declaration or parameter name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub text: String,
    pub span: Span,
}

impl Name {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self { text: text.into(), span }
    }
}

/// Arithmetic operators: `BinOp` partitions off from comparison/logical ops
/// so the parser and emitter can route to dedicated, narrower lowering code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{s}")
    }
}

/// Unary prefix operators. `!` applies to booleans; `-`/`+` to numerics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Neg,
    Pos,
    Not,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Neg => "-",
            Self::Pos => "+",
            Self::Not => "!",
        };
        write!(f, "{s}")
    }
}

/// Comparison and boolean-logical operators, always producing a `bool`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{s}")
    }
}

/// An expression node. Every variant carries the [`Span`] of the source text
/// it was parsed from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Integer { lexeme: String, span: Span },
    Float { lexeme: String, span: Span },
    Boolean { value: bool, span: Span },
    Character { value: u8, span: Span },
    Name(Name),
    BinOp { op: ArithOp, left: Box<Expr>, right: Box<Expr>, span: Span },
    UnaryOp { op: UnaryOp, operand: Box<Expr>, span: Span },
    LogicalOp { op: LogicalOp, left: Box<Expr>, right: Box<Expr>, span: Span },
    ParenExpr { inner: Box<Expr>, span: Span },
    Assignment { target: Name, value: Box<Expr>, span: Span },
    FuncCall { name: Name, args: Vec<Expr>, span: Span },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Self::Integer { span, .. }
            | Self::Float { span, .. }
            | Self::Boolean { span, .. }
            | Self::Character { span, .. }
            | Self::BinOp { span, .. }
            | Self::UnaryOp { span, .. }
            | Self::LogicalOp { span, .. }
            | Self::ParenExpr { span, .. }
            | Self::Assignment { span, .. }
            | Self::FuncCall { span, .. } => *span,
            Self::Name(name) => name.span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_reaches_through_paren() {
        let inner = Expr::Integer { lexeme: "1".into(), span: Span::new(1, 2) };
        let wrapped = Expr::ParenExpr { inner: Box::new(inner), span: Span::new(0, 3) };
        assert_eq!(wrapped.span(), Span::new(0, 3));
    }
}

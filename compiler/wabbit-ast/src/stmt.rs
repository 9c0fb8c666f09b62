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

use crate::{Expr, Name, Type};
use serde::{Deserialize, Serialize};
use wabbit_span::Span;

/// An ordered sequence of statements delimited by `{` `}` in source (or, for
/// the root, the whole program).
pub type Block = Vec<Stmt>;

/// A single formal parameter of a `FuncDef`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuncArg {
    pub name: Name,
    pub ty: Type,
}

/// A statement node, per spec.md's statement/expression split.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Print { expr: Expr, span: Span },
    VarDecl { name: Name, ty: Option<Type>, value: Option<Expr>, span: Span },
    ConstDecl { name: Name, ty: Option<Type>, value: Expr, span: Span },
    ExprStmt { expr: Expr, span: Span },
    If { test: Expr, body: Block, else_body: Option<Block>, span: Span },
    While { test: Expr, body: Block, span: Span },
    Break { span: Span },
    Continue { span: Span },
    Return { value: Expr, span: Span },
    FuncDef { name: Name, args: Vec<FuncArg>, return_type: Type, body: Block, span: Span },
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Self::Print { span, .. }
            | Self::VarDecl { span, .. }
            | Self::ConstDecl { span, .. }
            | Self::ExprStmt { span, .. }
            | Self::If { span, .. }
            | Self::While { span, .. }
            | Self::Break { span }
            | Self::Continue { span }
            | Self::Return { span, .. }
            | Self::FuncDef { span, .. } => *span,
        }
    }
}

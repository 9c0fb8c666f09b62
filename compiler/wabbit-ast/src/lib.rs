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

//! The tagged AST Wabbit's parser produces and every downstream consumer
//! (interpreter, emitter, pretty-printer) walks.
//!
//! The source material this crate is modeled on represents the tree with a
//! visitor and one class per node, dispatched dynamically. Rust has no need
//! for that indirection: [`Expr`] and [`Stmt`] are exhaustive tagged unions,
//! and every consumer is a single `match` over the tag.

mod expr;
mod stmt;
mod ty;
mod value;

pub use expr::{ArithOp, Expr, LogicalOp, Name, UnaryOp};
pub use stmt::{Block, FuncArg, Stmt};
pub use ty::Type;
pub use value::Value;

/// The root of a parsed Wabbit program: a [`Block`] of top-level statements.
pub type Program = Block;

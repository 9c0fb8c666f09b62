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

//! One execution context per spec.md §4.E: a `variables` map, a `constants`
//! map, and a `functions` map. `if`/`while` bodies run in the enclosing
//! [`Environment`]; only a function call pushes a fresh one.

use indexmap::IndexMap;
use wabbit_ast::{Block, FuncArg, Type, Value};

/// A registered function, borrowing straight into the AST it was parsed
/// from rather than cloning the body.
#[derive(Clone, Copy)]
pub struct FuncInfo<'ast> {
    pub args: &'ast [FuncArg],
    pub return_type: Type,
    pub body: &'ast Block,
}

#[derive(Default)]
pub struct Environment<'ast> {
    pub variables: IndexMap<String, Value>,
    pub constants: IndexMap<String, Value>,
    pub functions: IndexMap<String, FuncInfo<'ast>>,
}

impl<'ast> Environment<'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `name` among variables first, then constants, per spec.md
    /// §4.E's `Name` lookup order.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.variables.get(name).or_else(|| self.constants.get(name)).copied()
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.variables.contains_key(name) || self.constants.contains_key(name)
    }

    /// A fresh call frame that sees every function visible to `self` — the
    /// function map is copied forward, not the variables or constants.
    pub fn child_frame(&self) -> Self {
        Self { variables: IndexMap::new(), constants: IndexMap::new(), functions: self.functions.clone() }
    }
}

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

//! The control-flow signal statements propagate upward, per spec.md §4.E's
//! loop-control state machine: `RUNNING -> BREAKING/CONTINUING/RETURNING(v)`,
//! caught by the nearest `While` (break/continue) or function call (return).

use wabbit_ast::Value;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    Normal,
    Break,
    Continue,
    Return(Value),
}

impl Flow {
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

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

//! AST to textual LLVM IR lowering, per spec.md §4.F. The LLVM IR *builder*
//! itself is an external collaborator: this crate emits a `String`, never
//! links against or shells out to LLVM.

mod emitter;
mod types;

pub use emitter::emit;
pub use types::{llvm_literal, llvm_type, llvm_value, llvm_zero, print_function};

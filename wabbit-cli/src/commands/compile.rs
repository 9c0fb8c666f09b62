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

//! `wabbit compile <file> [-o <path>]`: prints LLVM textual IR to standard
//! output, or writes it to `-o`/`--output` when given (spec.md §6).

use wabbit_compiler::emit;
use wabbit_errors::{WabbitError, WabbitResult};

use crate::commands::read_source;
use crate::CompileArgs;

pub fn run(args: CompileArgs) -> WabbitResult<()> {
    args.config.init_tracing();
    let source = read_source(&args.file)?;
    let program = wabbit_parser::parser::parse(&source)?;
    let ir = emit(&program)?;
    match args.output {
        Some(path) => std::fs::write(&path, &ir)
            .map_err(|e| WabbitError::internal(format!("could not write {}: {e}", path.display())))?,
        None => print!("{ir}"),
    }
    Ok(())
}

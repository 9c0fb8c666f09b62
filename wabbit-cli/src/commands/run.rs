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

//! `wabbit run <file> [--debug]`: interprets the program and prints its
//! output (spec.md §6). The `--debug` re-raise behavior spec.md §7 asks for
//! is handled by `main`'s top-level error boundary, which prints the error's
//! `Debug` form instead of just its message when this flag is set.

use std::io::{self, Write};
use wabbit_errors::WabbitResult;
use wabbit_interpreter::interpret;

use crate::commands::read_source;
use crate::RunArgs;

pub fn run(args: RunArgs) -> WabbitResult<()> {
    args.config.init_tracing();
    let source = read_source(&args.file)?;
    let program = wabbit_parser::parser::parse(&source)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    interpret(&program, &mut out)?;
    out.flush().ok();
    Ok(())
}

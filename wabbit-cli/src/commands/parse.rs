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

//! `wabbit parse <file> [--ast]`: pretty-printed source by default, the raw
//! `#[derive(Debug)]` AST with `--ast` (spec.md §6, SPEC_FULL.md §4).

use wabbit_errors::WabbitResult;
use wabbit_fmt::print_program;

use crate::commands::read_source;
use crate::ParseArgs;

pub fn run(args: ParseArgs) -> WabbitResult<()> {
    args.config.init_tracing();
    let source = read_source(&args.file)?;
    let program = wabbit_parser::parser::parse(&source)?;
    if args.json {
        let json = serde_json::to_string_pretty(&program)
            .map_err(|e| wabbit_errors::WabbitError::internal(format!("AST did not serialize to JSON: {e}")))?;
        println!("{json}");
    } else if args.ast {
        println!("{program:#?}");
    } else {
        print!("{}", print_program(&program));
    }
    Ok(())
}

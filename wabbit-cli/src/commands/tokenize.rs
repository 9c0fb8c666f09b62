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

//! `wabbit tokenize <file>`: one token per line, `Token(KIND, 'lexeme', offset)`
//! (SPEC_FULL.md §4, following the teaching originals' `tokenize` output).

use wabbit_errors::WabbitResult;
use wabbit_parser::lexer;

use crate::commands::read_source;
use crate::TokenizeArgs;

pub fn run(args: TokenizeArgs) -> WabbitResult<()> {
    args.config.init_tracing();
    let source = read_source(&args.file)?;
    let tokens = lexer::tokenize(&source)?;
    for token in &tokens {
        println!("{token}");
    }
    Ok(())
}

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

//! Canonical source pretty-printer for Wabbit, per spec.md §4.D.

mod printer;

#[cfg(feature = "validate")]
mod validate;

use wabbit_errors::WabbitResult;

pub use printer::print_program;

#[cfg(feature = "validate")]
pub use validate::validate_round_trip;

/// Parses `source` and renders it back out in canonical form.
pub fn format_source(source: &str) -> WabbitResult<String> {
    let program = wabbit_parser::parser::parse(source)?;
    Ok(print_program(&program))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_source_is_idempotent() {
        let once = format_source("var x=1;\nprint x;\n").unwrap();
        let twice = format_source(&once).unwrap();
        assert_eq!(once, twice);
    }
}

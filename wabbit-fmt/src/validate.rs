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

//! Round-trip validation: `parse(print(ast)) == ast` up to source positions,
//! per spec.md §8. Positions are dropped by serializing through `serde_json`
//! and stripping every `span` field before comparing.

use wabbit_errors::WabbitResult;

use crate::printer::print_program;

/// Formats `source`, reparses the result, and checks that the two ASTs agree
/// once span information is discarded. Returns `Ok(true)` when the formatter
/// is round-trip safe for this input.
pub fn validate_round_trip(source: &str) -> WabbitResult<bool> {
    let original = wabbit_parser::parser::parse(source)?;
    let printed = print_program(&original);
    let reparsed = wabbit_parser::parser::parse(&printed)?;

    let original = strip_spans(serde_json::to_value(&original).expect("AST serializes"));
    let reparsed = strip_spans(serde_json::to_value(&reparsed).expect("AST serializes"));
    Ok(original == reparsed)
}

fn strip_spans(mut value: serde_json::Value) -> serde_json::Value {
    match &mut value {
        serde_json::Value::Object(map) => {
            map.remove("span");
            for entry in map.values_mut() {
                *entry = strip_spans(entry.take());
            }
        }
        serde_json::Value::Array(items) => {
            for entry in items.iter_mut() {
                *entry = strip_spans(entry.take());
            }
        }
        _ => {}
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_output_reparses_to_an_equivalent_ast() {
        let source = "func add(a int, b int) int {\n    return a+b;\n}\nvar x=add(1,2);\nprint x;\n";
        assert!(validate_round_trip(source).unwrap());
    }

    #[test]
    fn parenthesized_grouping_survives_the_round_trip() {
        assert!(validate_round_trip("print 2 * (3 + 4);").unwrap());
    }
}

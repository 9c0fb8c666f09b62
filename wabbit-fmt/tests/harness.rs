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

//! Test harness for the Wabbit formatter.
//!
//! Uses source/target file pairs (rustfmt-style) to test formatting:
//! - `tests/source/*.wb` — unformatted input files
//! - `tests/target/*.wb` — expected formatted output files
//!
//! Tests verify:
//! 1. Source files format to match target files
//! 2. Target files are idempotent (format to themselves)
//! 3. (feature = "validate") formatting never changes a program's AST

use std::path::PathBuf;
use wabbit_fmt::format_source;
use wabbit_test_support::{load_fixtures, matches_golden};

fn tests_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests")
}

/// For each file in `tests/source/`, formats it and compares the result to
/// the corresponding file in `tests/target/`.
#[test]
fn test_source_to_target() {
    let source_dir = tests_dir().join("source");
    let target_dir = tests_dir().join("target");

    let mut failures = Vec::new();
    for fixture in load_fixtures(&source_dir, "wb") {
        let target_path = target_dir.join(fixture.path.strip_prefix(&source_dir).unwrap());
        let expected = std::fs::read_to_string(&target_path)
            .unwrap_or_else(|_| panic!("Missing target file: {}", target_path.display()));

        let actual = format_source(&fixture.source)
            .unwrap_or_else(|e| panic!("Failed to format {}: {e}", fixture.path.display()));
        if !matches_golden(&actual, &expected, &fixture.path) {
            failures.push(fixture.path);
        }
    }

    assert!(failures.is_empty(), "{} test(s) failed: {failures:?}", failures.len());
}

/// Formatting a target file should reproduce it exactly.
#[test]
fn test_idempotency() {
    let target_dir = tests_dir().join("target");

    let mut failures = Vec::new();
    for fixture in load_fixtures(&target_dir, "wb") {
        let output = format_source(&fixture.source)
            .unwrap_or_else(|e| panic!("Failed to format {}: {e}", fixture.path.display()));
        if !matches_golden(&output, &fixture.source, &fixture.path) {
            failures.push(fixture.path);
        }
    }

    assert!(failures.is_empty(), "{} file(s) not idempotent: {failures:?}", failures.len());
}

/// Validate that formatting never changes a program's AST, across every
/// source fixture.
///
/// Run with: `cargo test -p wabbit-fmt --features validate -- validate_ast_equivalence`
#[cfg(feature = "validate")]
#[test]
fn validate_ast_equivalence() {
    let source_dir = tests_dir().join("source");
    let mut failures = Vec::new();

    for fixture in load_fixtures(&source_dir, "wb") {
        match wabbit_fmt::validate_round_trip(&fixture.source) {
            Ok(true) => {}
            Ok(false) => {
                println!("\n=== AST MISMATCH: {} ===", fixture.path.display());
                failures.push(fixture.path);
            }
            Err(e) => panic!("{} failed to parse: {e}", fixture.path.display()),
        }
    }

    assert!(failures.is_empty(), "{} file(s) have AST mismatches: {failures:?}", failures.len());
}

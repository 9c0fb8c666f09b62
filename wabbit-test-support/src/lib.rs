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

//! Shared golden-file test helpers: fixture discovery and unified diffs,
//! used by every crate's `tests/` harness so each one doesn't reinvent it.

use similar::{ChangeTag, TextDiff};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A single named source fixture loaded from disk.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// File stem, used to key a corresponding expected-output file.
    pub name: String,
    pub path: PathBuf,
    pub source: String,
}

/// Recursively collects every file under `dir` with extension `ext` (no
/// leading dot), sorted by path for deterministic test ordering. Returns an
/// empty list if `dir` doesn't exist, so a missing fixture directory is
/// silently zero tests rather than a panic.
pub fn collect_files_with_ext(dir: &Path, ext: &str) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|e| e == ext))
        .map(|entry| entry.path().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Loads every `*.{ext}` fixture under `dir`.
pub fn load_fixtures(dir: &Path, ext: &str) -> Vec<Fixture> {
    collect_files_with_ext(dir, ext)
        .into_iter()
        .map(|path| {
            let source = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
            let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default().to_string();
            Fixture { name, path, source }
        })
        .collect()
}

/// Prints a unified diff between `expected` and `actual`, labeled with
/// `file`, to stdout (captured by the test harness on failure).
pub fn print_diff(expected: &str, actual: &str, file: &Path) {
    let diff = TextDiff::from_lines(expected, actual);
    println!("\n=== MISMATCH: {} ===", file.display());
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        print!("{sign}{change}");
    }
    println!("=== END ===\n");
}

/// Asserts `actual` matches the golden file at `path`, printing a diff and
/// failing (without panicking immediately) when it doesn't. Returns `true`
/// on match, so callers can accumulate failures across a whole fixture set
/// before asserting at the end.
pub fn matches_golden(actual: &str, expected: &str, path: &Path) -> bool {
    if actual == expected {
        true
    } else {
        print_diff(expected, actual, path);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_yields_no_fixtures() {
        assert!(collect_files_with_ext(Path::new("/nonexistent/path"), "wb").is_empty());
    }

    #[test]
    fn matches_golden_reports_mismatch() {
        assert!(!matches_golden("a", "b", Path::new("fixture.wb")));
        assert!(matches_golden("a", "a", Path::new("fixture.wb")));
    }
}

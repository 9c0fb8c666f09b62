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

//! One module per subcommand, each exposing a `run(args) -> WabbitResult<()>`.

pub mod compile;
pub mod parse;
pub mod run;
pub mod tokenize;

use std::path::Path;
use wabbit_errors::{WabbitError, WabbitResult};

/// Reads `path` as UTF-8 source text, per spec.md §6 ("UTF-8 text, but only
/// 7-bit ASCII is semantically significant").
pub(crate) fn read_source(path: &Path) -> WabbitResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| WabbitError::internal(format!("could not read {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::read_source;
    use std::path::Path;

    #[test]
    fn missing_file_is_an_internal_error() {
        let err = read_source(Path::new("/nonexistent/path/program.wb")).unwrap_err();
        assert!(err.to_string().contains("could not read"));
    }

    #[test]
    fn reads_existing_file_verbatim() {
        let path = std::env::temp_dir().join(format!("wabbit-cli-test-{}.wb", std::process::id()));
        std::fs::write(&path, "print 1;").unwrap();
        let source = read_source(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(source, "print 1;");
    }
}

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

//! Binary entry point. Parses arguments, dispatches to the matching
//! subcommand, and renders any error per spec.md §7: `Error: <message>` to
//! standard output, a nonzero exit code, and — with `--debug` — the error's
//! full `Debug` form (including its span) instead of just the message.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use wabbit_cli::{dispatch, Cli};
use wabbit_errors::WabbitError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let debug = cli.command.config().debug;

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", render_error(&err, debug).red());
            ExitCode::FAILURE
        }
    }
}

/// Renders a top-level error per spec.md §7: `Error: <message>`, with a
/// `--> offset:N` annotation when the error carries a span, or — in
/// `--debug` mode — the error's full `Debug` form instead.
fn render_error(err: &WabbitError, debug: bool) -> String {
    if debug {
        format!("Error: {err:?}")
    } else if let Some(span) = err.span() {
        format!("Error: {err} (--> offset:{})", span.lo)
    } else {
        format!("Error: {err}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wabbit_errors::{RuntimeError, SyntaxError};
    use wabbit_span::Span;

    #[test]
    fn renders_plain_message_without_span() {
        let err = WabbitError::from(RuntimeError::DivisionByZero);
        assert_eq!(render_error(&err, false), "Error: division by zero");
    }

    #[test]
    fn renders_offset_annotation_with_span() {
        let err = WabbitError::syntax(SyntaxError::UnterminatedBlockComment, Span::at(7));
        assert_eq!(render_error(&err, false), "Error: unterminated block comment (--> offset:7)");
    }

    #[test]
    fn debug_mode_prints_debug_form() {
        let err = WabbitError::from(RuntimeError::DivisionByZero);
        assert!(render_error(&err, true).starts_with("Error: Runtime"));
    }
}

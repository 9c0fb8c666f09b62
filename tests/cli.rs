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

//! Argument-parsing coverage for the `wabbit` binary's subcommands
//! (spec.md §6): each subcommand's flags parse into the expected fields,
//! and `Command::config` reaches the flattened `--debug` flag regardless of
//! which subcommand carries it.

use clap::Parser;
use wabbit_cli::{Cli, Command};

#[test]
fn tokenize_parses_file_argument() {
    let cli = Cli::try_parse_from(["wabbit", "tokenize", "program.wb"]).unwrap();
    match cli.command {
        Command::Tokenize(args) => assert_eq!(args.file.to_str(), Some("program.wb")),
        other => panic!("expected Tokenize, got {other:?}"),
    }
}

#[test]
fn parse_ast_and_json_are_mutually_exclusive() {
    let err = Cli::try_parse_from(["wabbit", "parse", "program.wb", "--ast", "--json"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn parse_defaults_to_pretty_print() {
    let cli = Cli::try_parse_from(["wabbit", "parse", "program.wb"]).unwrap();
    match cli.command {
        Command::Parse(args) => {
            assert!(!args.ast);
            assert!(!args.json);
        }
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn run_debug_flag_is_visible_through_command_config() {
    let cli = Cli::try_parse_from(["wabbit", "run", "program.wb", "--debug"]).unwrap();
    assert!(cli.command.config().debug);
}

#[test]
fn compile_accepts_output_path() {
    let cli = Cli::try_parse_from(["wabbit", "compile", "program.wb", "-o", "out.ll"]).unwrap();
    match cli.command {
        Command::Compile(args) => assert_eq!(args.output.as_deref().and_then(|p| p.to_str()), Some("out.ll")),
        other => panic!("expected Compile, got {other:?}"),
    }
}

#[test]
fn compile_output_defaults_to_none() {
    let cli = Cli::try_parse_from(["wabbit", "compile", "program.wb"]).unwrap();
    match cli.command {
        Command::Compile(args) => assert!(args.output.is_none()),
        other => panic!("expected Compile, got {other:?}"),
    }
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["wabbit"]).is_err());
}

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

//! The `wabbit` command-line entry points (spec.md §6): `tokenize`, `parse`,
//! `run`, `compile`. Argument parsing lives here via `clap`; the pipeline
//! itself is entirely in the `wabbit-*` library crates this binary wires
//! together.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wabbit_errors::WabbitResult;

pub use commands::{compile, parse as parse_cmd, run, tokenize};
pub use config::Config;

/// Compiler front-end and execution toolchain for the Wabbit programming
/// language.
#[derive(Parser, Debug)]
#[command(name = "wabbit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiler front-end and execution toolchain for Wabbit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one token per line (`tokenit <file>`, spec.md §6).
    Tokenize(TokenizeArgs),

    /// Print the AST and/or the canonical pretty-printed form
    /// (`parsit <file>`, spec.md §6).
    Parse(ParseArgs),

    /// Interpret a program and print its output (`runit <file>`,
    /// spec.md §6).
    Run(RunArgs),

    /// Print LLVM textual IR to standard output, or to `--output` if given
    /// (`compile <file>`, spec.md §6).
    Compile(CompileArgs),
}

#[derive(Parser, Debug)]
pub struct TokenizeArgs {
    /// Wabbit source file to tokenize.
    pub file: PathBuf,

    #[command(flatten)]
    pub config: Config,
}

#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Wabbit source file to parse.
    pub file: PathBuf,

    /// Print the raw AST (`#[derive(Debug)]`) instead of the pretty-printed
    /// source form.
    #[arg(long, conflicts_with = "json")]
    pub ast: bool,

    /// Print the AST as JSON instead of the pretty-printed source form.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub config: Config,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Wabbit source file to interpret.
    pub file: PathBuf,

    #[command(flatten)]
    pub config: Config,
}

#[derive(Parser, Debug)]
pub struct CompileArgs {
    /// Wabbit source file to compile to LLVM IR.
    pub file: PathBuf,

    /// Where to write the emitted IR; defaults to standard output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub config: Config,
}

impl Command {
    /// The shared flags for whichever subcommand this is, used by `main` to
    /// decide how to render a top-level error before dispatch even runs.
    pub fn config(&self) -> Config {
        match self {
            Self::Tokenize(args) => args.config,
            Self::Parse(args) => args.config,
            Self::Run(args) => args.config,
            Self::Compile(args) => args.config,
        }
    }
}

/// Dispatches a parsed [`Cli`] invocation to its command handler.
pub fn dispatch(cli: Cli) -> WabbitResult<()> {
    match cli.command {
        Command::Tokenize(args) => tokenize::run(args),
        Command::Parse(args) => parse_cmd::run(args),
        Command::Run(args) => run::run(args),
        Command::Compile(args) => compile::run(args),
    }
}

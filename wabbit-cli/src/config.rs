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

//! The flags shared by every subcommand (spec.md §6 names no environment
//! variables, so `--debug` is the only cross-cutting switch).

use clap::Args;

/// Flags every subcommand flattens in: `--debug` gates both the
/// `tracing_subscriber` verbosity and, for `run`, whether the interpreter's
/// top-level error boundary re-raises with a full `Debug` trace (spec.md §7).
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct Config {
    /// Enable verbose diagnostics and, for `run`, re-raise interpreter
    /// errors with their full debug representation.
    #[arg(short, long)]
    pub debug: bool,
}

impl Config {
    /// Installs a `tracing_subscriber::fmt` subscriber at `debug`/`info`
    /// level depending on this flag. Safe to call once per process; a
    /// second call (e.g. across `cfg(test)` invocations) is a no-op.
    pub fn init_tracing(&self) {
        let filter = if self.debug { "debug" } else { "warn" };
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
    }
}

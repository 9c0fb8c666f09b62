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

//! Byte-offset source positions shared by every stage of the Wabbit pipeline.
//!
//! Wabbit has no multi-file compilation unit, so unlike a "span map" crate
//! for a larger language, a [`Span`] here is nothing more than a half-open
//! `[lo, hi)` byte range into the single source string that produced it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open byte range `[lo, hi)` into the source text.
///
/// `lo == hi` is used for zero-width positions (e.g. end-of-file).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub lo: usize,
    pub hi: usize,
}

impl Span {
    pub const fn new(lo: usize, hi: usize) -> Self {
        Self { lo, hi }
    }

    /// A zero-width span at byte offset `at`.
    pub const fn at(at: usize) -> Self {
        Self { lo: at, hi: at }
    }

    /// A span with no useful position information, used for synthesized nodes.
    pub const fn dummy() -> Self {
        Self { lo: 0, hi: 0 }
    }

    /// Combines `self` and `other` into the smallest span covering both.
    pub fn to(self, other: Span) -> Span {
        Span { lo: self.lo.min(other.lo), hi: self.hi.max(other.hi) }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}", self.lo)
    }
}

/// A value paired with the span of source text it was parsed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub const fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_covers_both_spans() {
        let a = Span::new(4, 8);
        let b = Span::new(2, 6);
        assert_eq!(a.to(b), Span::new(2, 8));
    }

    #[test]
    fn dummy_is_zero_width() {
        assert_eq!(Span::dummy(), Span::at(0));
    }
}

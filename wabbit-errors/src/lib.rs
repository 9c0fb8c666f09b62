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

//! The error taxonomy shared by every stage of the Wabbit pipeline.
//!
//! Four kinds, matching the phase that can raise them: a lexical/grammatical
//! [`WabbitError::Syntax`], a static-or-dynamic [`WabbitError::Type`], a
//! dynamic-use [`WabbitError::Runtime`], and an [`WabbitError::Internal`] for
//! invariants the pipeline itself is supposed to guarantee. Propagation is
//! fail-fast throughout: the first error produced by any phase aborts that
//! phase's operation and is handed back to the caller unchanged.

use std::fmt;
use thiserror::Error;
use wabbit_span::Span;

/// The result type threaded through the lexer, parser, interpreter and emitter.
pub type WabbitResult<T> = Result<T, WabbitError>;

/// A uniform failure kind, shared across the lexer, parser, interpreter and
/// IR emitter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WabbitError {
    /// A lexical or grammatical error: an unrecognized character, an
    /// unterminated comment or character literal, or an unexpected token.
    #[error("{kind}")]
    Syntax { kind: SyntaxError, span: Option<Span> },

    /// A runtime or IR-emission type mismatch (e.g. `1 + true`).
    #[error("{kind}")]
    Type { kind: TypeError, span: Option<Span> },

    /// An undefined name or other bad dynamic use caught only at evaluation
    /// time.
    #[error("{kind}")]
    Runtime { kind: RuntimeError, span: Option<Span> },

    /// A pipeline invariant was violated; this indicates a bug in the
    /// toolchain itself rather than a malformed Wabbit program.
    #[error("internal error: {0}")]
    Internal(String),
}

impl WabbitError {
    pub fn syntax(kind: impl Into<SyntaxError>, span: Span) -> Self {
        Self::Syntax { kind: kind.into(), span: Some(span) }
    }

    pub fn ty(kind: impl Into<TypeError>, span: Option<Span>) -> Self {
        Self::Type { kind: kind.into(), span }
    }

    pub fn runtime(kind: impl Into<RuntimeError>, span: Option<Span>) -> Self {
        Self::Runtime { kind: kind.into(), span }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The span the error carries, if any. Used by callers that want to
    /// render a `--> offset:N` annotation.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Syntax { span, .. } | Self::Type { span, .. } | Self::Runtime { span, .. } => *span,
            Self::Internal(_) => None,
        }
    }
}

/// The lexical/grammatical error kinds, per `Lexer`/`Parser` contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    UnrecognizedCharacter(char),
    UnterminatedBlockComment,
    UnterminatedLineComment,
    UnterminatedCharLiteral,
    InvalidEscape(char),
    UnexpectedToken { expected: String, found: String },
    UnexpectedEof { expected: String },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedCharacter(c) => write!(f, "unrecognized character '{c}'"),
            Self::UnterminatedBlockComment => write!(f, "unterminated block comment"),
            Self::UnterminatedLineComment => write!(f, "line comment at end of file with no trailing newline"),
            Self::UnterminatedCharLiteral => write!(f, "unterminated character literal"),
            Self::InvalidEscape(c) => write!(f, "invalid escape sequence '\\{c}'"),
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::UnexpectedEof { expected } => write!(f, "expected {expected}, found end of input"),
        }
    }
}

impl From<SyntaxError> for WabbitError {
    fn from(kind: SyntaxError) -> Self {
        Self::Syntax { kind, span: None }
    }
}

/// Type mismatches the interpreter or emitter can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    BinaryOperandMismatch { op: String, left: String, right: String },
    UnaryOperandMismatch { op: String, operand: String },
    NonBooleanCondition { found: String },
    NonBooleanLogicalOperand { found: String },
    DeclaredTypeMismatch { name: String, declared: String, found: String },
    ArgumentTypeMismatch { function: String, index: usize, expected: String, found: String },
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BinaryOperandMismatch { op, left, right } => {
                write!(f, "cannot apply '{op}' to '{left}' and '{right}'")
            }
            Self::UnaryOperandMismatch { op, operand } => {
                write!(f, "cannot apply unary '{op}' to '{operand}'")
            }
            Self::NonBooleanCondition { found } => write!(f, "condition must be bool, found '{found}'"),
            Self::NonBooleanLogicalOperand { found } => {
                write!(f, "logical operator operand must be bool, found '{found}'")
            }
            Self::DeclaredTypeMismatch { name, declared, found } => {
                write!(f, "'{name}' was declared as '{declared}' but initialized with '{found}'")
            }
            Self::ArgumentTypeMismatch { function, index, expected, found } => {
                write!(f, "argument {index} of '{function}' expects '{expected}', found '{found}'")
            }
        }
    }
}

impl From<TypeError> for WabbitError {
    fn from(kind: TypeError) -> Self {
        Self::Type { kind, span: None }
    }
}

/// Dynamic-use errors raised only at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    UndefinedName(String),
    UndefinedFunction(String),
    NameAlreadyDefined(String),
    ArityMismatch { function: String, expected: usize, found: usize },
    AssignToUndefined(String),
    AssignToConstant(String),
    DivisionByZero,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedName(name) => write!(f, "undefined name '{name}'"),
            Self::UndefinedFunction(name) => write!(f, "undefined function '{name}'"),
            Self::NameAlreadyDefined(name) => write!(f, "'{name}' is already defined in this scope"),
            Self::ArityMismatch { function, expected, found } => {
                write!(f, "'{function}' expects {expected} argument(s), found {found}")
            }
            Self::AssignToUndefined(name) => write!(f, "cannot assign to undefined name '{name}'"),
            Self::AssignToConstant(name) => write!(f, "cannot assign to constant '{name}'"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl From<RuntimeError> for WabbitError {
    fn from(kind: RuntimeError) -> Self {
        Self::Runtime { kind, span: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_displays_message() {
        let err = WabbitError::syntax(SyntaxError::UnterminatedBlockComment, Span::at(3));
        assert_eq!(err.to_string(), "unterminated block comment");
        assert_eq!(err.span(), Some(Span::at(3)));
    }

    #[test]
    fn internal_error_has_no_span() {
        let err = WabbitError::internal("unreachable arm");
        assert_eq!(err.span(), None);
    }
}

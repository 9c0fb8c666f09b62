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

//! Typed runtime operations over [`Value`], per spec.md §4.E: every
//! arithmetic or comparison operation requires both operands to share a
//! runtime type tag, otherwise it fails with `TypeError`.

use wabbit_ast::{ArithOp, LogicalOp, UnaryOp, Value};
use wabbit_errors::{RuntimeError, TypeError, WabbitError, WabbitResult};
use wabbit_span::Span;

pub fn arith(op: ArithOp, left: Value, right: Value, span: Option<Span>) -> WabbitResult<Value> {
    use Value::*;
    match (op, left, right) {
        (ArithOp::Add, Int(a), Int(b)) => Ok(Int(a.wrapping_add(b))),
        (ArithOp::Add, Float(a), Float(b)) => Ok(Float(a + b)),
        (ArithOp::Sub, Int(a), Int(b)) => Ok(Int(a.wrapping_sub(b))),
        (ArithOp::Sub, Float(a), Float(b)) => Ok(Float(a - b)),
        (ArithOp::Mul, Int(a), Int(b)) => Ok(Int(a.wrapping_mul(b))),
        (ArithOp::Mul, Float(a), Float(b)) => Ok(Float(a * b)),
        (ArithOp::Div, Int(a), Int(b)) => {
            if b == 0 {
                Err(WabbitError::runtime(RuntimeError::DivisionByZero, span))
            } else {
                Ok(Int(a / b)) // truncates toward zero, per spec.md §4.E
            }
        }
        (ArithOp::Div, Float(a), Float(b)) => Ok(Float(a / b)),
        (op, l, r) => Err(mismatch(op.to_string(), l, r, span)),
    }
}

pub fn unary(op: UnaryOp, operand: Value, span: Option<Span>) -> WabbitResult<Value> {
    use Value::*;
    match (op, operand) {
        (UnaryOp::Neg, Int(v)) => Ok(Int(-v)),
        (UnaryOp::Neg, Float(v)) => Ok(Float(-v)),
        (UnaryOp::Pos, v @ (Int(_) | Float(_))) => Ok(v),
        (UnaryOp::Not, Bool(v)) => Ok(Bool(!v)),
        (op, operand) => Err(WabbitError::ty(
            TypeError::UnaryOperandMismatch { op: op.to_string(), operand: operand.type_of().to_string() },
            span,
        )),
    }
}

pub fn logical(op: LogicalOp, left: Value, right: Value, span: Option<Span>) -> WabbitResult<Value> {
    use Value::*;
    match op {
        LogicalOp::Eq | LogicalOp::NotEq => {
            if left.type_of() != right.type_of() {
                return Err(mismatch(op.to_string(), left, right, span));
            }
            let eq = left == right;
            Ok(Bool(if op == LogicalOp::Eq { eq } else { !eq }))
        }
        LogicalOp::And | LogicalOp::Or => match (left, right) {
            (Bool(a), Bool(b)) => Ok(Bool(if op == LogicalOp::And { a && b } else { a || b })),
            (a, b) => Err(WabbitError::ty(
                TypeError::NonBooleanLogicalOperand {
                    found: if a.type_of() != wabbit_ast::Type::Bool { a.type_of() } else { b.type_of() }.to_string(),
                },
                span,
            )),
        },
        LogicalOp::Lt | LogicalOp::LtEq | LogicalOp::Gt | LogicalOp::GtEq => {
            let ordering = match (left, right) {
                (Int(a), Int(b)) => a.cmp(&b),
                (Float(a), Float(b)) => a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal),
                (Char(a), Char(b)) => a.cmp(&b),
                (Bool(a), Bool(b)) => a.cmp(&b),
                (a, b) => return Err(mismatch(op.to_string(), a, b, span)),
            };
            use std::cmp::Ordering::*;
            let result = match (op, ordering) {
                (LogicalOp::Lt, Less) => true,
                (LogicalOp::LtEq, Less | Equal) => true,
                (LogicalOp::Gt, Greater) => true,
                (LogicalOp::GtEq, Greater | Equal) => true,
                _ => false,
            };
            Ok(Bool(result))
        }
    }
}

fn mismatch(op: String, left: Value, right: Value, span: Option<Span>) -> WabbitError {
    WabbitError::ty(
        TypeError::BinaryOperandMismatch { op, left: left.type_of().to_string(), right: right.type_of().to_string() },
        span,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_division_truncates_toward_zero() {
        assert_eq!(arith(ArithOp::Div, Value::Int(-7), Value::Int(2), None).unwrap(), Value::Int(-3));
    }

    #[test]
    fn integer_division_by_zero_is_runtime_error() {
        assert!(arith(ArithOp::Div, Value::Int(1), Value::Int(0), None).is_err());
    }

    #[test]
    fn mismatched_types_are_type_errors() {
        assert!(arith(ArithOp::Add, Value::Int(1), Value::Float(1.0), None).is_err());
    }

    #[test]
    fn and_or_reject_non_bool_operands() {
        assert!(logical(LogicalOp::And, Value::Int(1), Value::Int(0), None).is_err());
    }

    #[test]
    fn ordering_matches_host_semantics() {
        assert_eq!(logical(LogicalOp::Lt, Value::Float(1.0), Value::Float(2.0), None).unwrap(), Value::Bool(true));
    }
}

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

//! The type map and literal rendering spec.md §4.F fixes: `int -> i32`,
//! `float -> double`, `bool -> i1`, `char -> i8`.

use wabbit_ast::{Type, Value};

/// The LLVM type spelling for a Wabbit [`Type`].
pub fn llvm_type(ty: Type) -> &'static str {
    match ty {
        Type::Int => "i32",
        Type::Float => "double",
        Type::Bool => "i1",
        Type::Char => "i8",
    }
}

/// The bare literal text for `value` (no type prefix), e.g. `3` or
/// `0x3FF8000000000000`.
pub fn llvm_value(value: Value) -> String {
    match value {
        Value::Int(v) => v.to_string(),
        Value::Float(v) => llvm_float_literal(v),
        Value::Bool(v) => (v as u8).to_string(),
        Value::Char(v) => v.to_string(),
    }
}

/// Renders a `double` constant in LLVM's hexadecimal float form: `0x` plus
/// the 16 hex digits of the value's IEEE-754 bit pattern. Decimal notation
/// (`format!("{v:e}")`) drops the fractional part for whole numbers (`1.0`
/// becomes `1e0`), which LLVM's FP-constant grammar rejects; the hex form
/// is unambiguous and exact for every `f64`.
fn llvm_float_literal(v: f64) -> String {
    format!("0x{:016X}", v.to_bits())
}

/// An LLVM constant literal for `value`, in the syntax an instruction operand
/// accepts directly (e.g. `i32 3`, `double 0x3FF8000000000000`).
pub fn llvm_literal(value: Value) -> String {
    format!("{} {}", llvm_type(value.type_of()), llvm_value(value))
}

/// The zero value for `ty`, rendered as a literal operand (with type prefix).
pub fn llvm_zero(ty: Type) -> String {
    llvm_literal(Value::default_for(ty))
}

/// The name of the external print function for `ty`, per spec.md §4.F.
pub fn print_function(ty: Type) -> &'static str {
    match ty {
        Type::Int => "__wabbit_print_int",
        Type::Float => "__wabbit_print_float",
        Type::Bool => "__wabbit_print_bool",
        Type::Char => "__wabbit_print_char",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_primitive() {
        assert_eq!(llvm_type(Type::Int), "i32");
        assert_eq!(llvm_type(Type::Float), "double");
        assert_eq!(llvm_type(Type::Bool), "i1");
        assert_eq!(llvm_type(Type::Char), "i8");
    }

    #[test]
    fn bool_literal_is_0_or_1() {
        assert_eq!(llvm_literal(Value::Bool(true)), "i1 1");
        assert_eq!(llvm_literal(Value::Bool(false)), "i1 0");
    }

    #[test]
    fn whole_number_float_literal_keeps_its_fraction() {
        // Decimal notation would render 1.0 as "1e0", which LLVM's
        // FP-constant grammar rejects for lacking a fractional digit.
        assert_eq!(llvm_value(Value::Float(1.0)), "0x3FF0000000000000");
    }

    #[test]
    fn float_literal_round_trips_through_its_bit_pattern() {
        let rendered = llvm_value(Value::Float(3.14));
        let hex = rendered.strip_prefix("0x").unwrap();
        let bits = u64::from_str_radix(hex, 16).unwrap();
        assert_eq!(f64::from_bits(bits), 3.14);
    }
}

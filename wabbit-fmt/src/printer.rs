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

//! AST to canonical source text, per spec.md §4.D. Stateful only in its
//! current indentation level.

use wabbit_ast::{Block, Expr, Program, Stmt};

const INDENT_WIDTH: usize = 4;

/// Pretty-prints `program` into canonical Wabbit source.
pub fn print_program(program: &Program) -> String {
    let mut printer = Printer::new();
    printer.print_block(program);
    printer.out
}

struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    fn new() -> Self {
        Self { out: String::new(), indent: 0 }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent * INDENT_WIDTH {
            self.out.push(' ');
        }
    }

    fn print_block(&mut self, block: &Block) {
        for stmt in block {
            self.print_stmt(stmt);
        }
    }

    fn print_braced_block(&mut self, block: &Block) {
        self.out.push_str("{\n");
        self.indent += 1;
        self.print_block(block);
        self.indent -= 1;
        self.write_indent();
        self.out.push('}');
    }

    fn print_stmt(&mut self, stmt: &Stmt) {
        self.write_indent();
        match stmt {
            Stmt::Print { expr, .. } => {
                self.out.push_str("print ");
                self.print_expr(expr);
                self.out.push_str(";\n");
            }
            Stmt::VarDecl { name, ty, value, .. } => {
                self.out.push_str("var ");
                self.out.push_str(&name.text);
                if let Some(ty) = ty {
                    self.out.push(' ');
                    self.out.push_str(&ty.to_string());
                }
                if let Some(value) = value {
                    self.out.push_str(" = ");
                    self.print_expr(value);
                }
                self.out.push_str(";\n");
            }
            Stmt::ConstDecl { name, ty, value, .. } => {
                self.out.push_str("const ");
                self.out.push_str(&name.text);
                if let Some(ty) = ty {
                    self.out.push(' ');
                    self.out.push_str(&ty.to_string());
                }
                self.out.push_str(" = ");
                self.print_expr(value);
                self.out.push_str(";\n");
            }
            Stmt::ExprStmt { expr, .. } => {
                self.print_expr(expr);
                self.out.push_str(";\n");
            }
            Stmt::If { test, body, else_body, .. } => {
                self.out.push_str("if ");
                self.print_expr(test);
                self.out.push(' ');
                self.print_braced_block(body);
                if let Some(else_body) = else_body {
                    self.out.push_str(" else ");
                    self.print_braced_block(else_body);
                }
                self.out.push('\n');
            }
            Stmt::While { test, body, .. } => {
                self.out.push_str("while ");
                self.print_expr(test);
                self.out.push(' ');
                self.print_braced_block(body);
                self.out.push('\n');
            }
            Stmt::Break { .. } => self.out.push_str("break;\n"),
            Stmt::Continue { .. } => self.out.push_str("continue;\n"),
            Stmt::Return { value, .. } => {
                self.out.push_str("return ");
                self.print_expr(value);
                self.out.push_str(";\n");
            }
            Stmt::FuncDef { name, args, return_type, body, .. } => {
                self.out.push_str("func ");
                self.out.push_str(&name.text);
                self.out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.out.push_str(&arg.name.text);
                    self.out.push(' ');
                    self.out.push_str(&arg.ty.to_string());
                }
                self.out.push_str(") ");
                self.out.push_str(&return_type.to_string());
                self.out.push(' ');
                self.print_braced_block(body);
                self.out.push('\n');
            }
        }
    }

    fn print_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Integer { lexeme, .. } | Expr::Float { lexeme, .. } => self.out.push_str(lexeme),
            Expr::Boolean { value, .. } => self.out.push_str(if *value { "true" } else { "false" }),
            Expr::Character { value, .. } => {
                self.out.push('\'');
                if *value == b'\n' {
                    self.out.push_str("\\n");
                } else {
                    self.out.push(*value as char);
                }
                self.out.push('\'');
            }
            Expr::Name(name) => self.out.push_str(&name.text),
            Expr::BinOp { op, left, right, .. } => {
                self.print_expr(left);
                self.out.push(' ');
                self.out.push_str(&op.to_string());
                self.out.push(' ');
                self.print_expr(right);
            }
            Expr::LogicalOp { op, left, right, .. } => {
                self.print_expr(left);
                self.out.push(' ');
                self.out.push_str(&op.to_string());
                self.out.push(' ');
                self.print_expr(right);
            }
            Expr::UnaryOp { op, operand, .. } => {
                self.out.push_str(&op.to_string());
                self.print_expr(operand);
            }
            Expr::ParenExpr { inner, .. } => {
                self.out.push('(');
                self.print_expr(inner);
                self.out.push(')');
            }
            Expr::Assignment { target, value, .. } => {
                self.out.push_str(&target.text);
                self.out.push_str(" = ");
                self.print_expr(value);
            }
            Expr::FuncCall { name, args, .. } => {
                self.out.push_str(&name.text);
                self.out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.print_expr(arg);
                }
                self.out.push(')');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wabbit_parser::parser;

    fn roundtrip(source: &str) -> String {
        print_program(&parser::parse(source).unwrap())
    }

    #[test]
    fn var_decl_with_type_and_value() {
        assert_eq!(roundtrip("var x int = 1;"), "var x int = 1;\n");
    }

    #[test]
    fn char_newline_prints_as_escape() {
        assert_eq!(roundtrip("var c = '\\n';"), "var c = '\\n';\n");
    }

    #[test]
    fn if_else_puts_else_on_closing_brace_line() {
        let out = roundtrip("if true { print 1; } else { print 2; }");
        assert_eq!(out, "if true {\n    print 1;\n} else {\n    print 2;\n}\n");
    }

    #[test]
    fn nested_blocks_indent_four_spaces_per_level() {
        let out = roundtrip("while true { if true { print 1; } }");
        assert!(out.contains("        print 1;\n"));
    }

    #[test]
    fn func_call_args_comma_separated_without_trailing_comma() {
        assert_eq!(roundtrip("print add(1, 2);"), "print add(1, 2);\n");
    }
}

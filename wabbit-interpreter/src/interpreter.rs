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

//! The tree walker itself. Expressions return a [`Value`]; statements return
//! a [`Flow`] signal that bubbles up until a `While` (break/continue) or a
//! function call (return) catches it.

use std::io::Write;

use crate::env::{Environment, FuncInfo};
use crate::flow::Flow;
use crate::ops;
use tracing::debug;
use wabbit_ast::{Expr, Name, Program, Stmt, Type, Value};
use wabbit_errors::{RuntimeError, TypeError, WabbitError, WabbitResult};

/// Interprets `program`, writing `print` output to `out`.
///
/// Borrows the AST for its own lifetime (`'ast`): function bodies are stored
/// in the environment stack as references, never cloned.
pub fn interpret(program: &Program, out: &mut impl Write) -> WabbitResult<()> {
    Interpreter::new(out).run(program)
}

pub struct Interpreter<'ast, 'out, W: Write> {
    stack: Vec<Environment<'ast>>,
    out: &'out mut W,
}

impl<'ast, 'out, W: Write> Interpreter<'ast, 'out, W> {
    pub fn new(out: &'out mut W) -> Self {
        Self { stack: vec![Environment::new()], out }
    }

    pub fn run(&mut self, program: &'ast Program) -> WabbitResult<()> {
        debug!(statements = program.len(), "interpreting top-level program");
        match self.exec_block(program)? {
            Flow::Normal => Ok(()),
            Flow::Break | Flow::Continue => Err(WabbitError::internal("break/continue outside a loop")),
            Flow::Return(_) => Err(WabbitError::internal("return outside a function")),
        }
    }

    fn env(&self) -> &Environment<'ast> {
        self.stack.last().expect("the environment stack is never empty")
    }

    fn env_mut(&mut self) -> &mut Environment<'ast> {
        self.stack.last_mut().expect("the environment stack is never empty")
    }

    fn exec_block(&mut self, block: &'ast [Stmt]) -> WabbitResult<Flow> {
        for stmt in block {
            let flow = self.exec_stmt(stmt)?;
            if !flow.is_normal() {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    fn exec_stmt(&mut self, stmt: &'ast Stmt) -> WabbitResult<Flow> {
        match stmt {
            Stmt::Print { expr, .. } => {
                let value = self.eval(expr)?;
                write!(self.out, "{value}").map_err(|e| WabbitError::internal(e.to_string()))?;
                Ok(Flow::Normal)
            }
            Stmt::VarDecl { name, ty, value, span } => {
                self.declare(name, *ty, value.as_ref(), *span, false)?;
                Ok(Flow::Normal)
            }
            Stmt::ConstDecl { name, ty, value, span } => {
                self.declare(name, *ty, Some(value), *span, true)?;
                Ok(Flow::Normal)
            }
            Stmt::ExprStmt { expr, .. } => {
                self.eval(expr)?;
                Ok(Flow::Normal)
            }
            Stmt::If { test, body, else_body, span } => {
                if self.eval_condition(test, *span)? {
                    self.exec_block(body)
                } else if let Some(else_body) = else_body {
                    self.exec_block(else_body)
                } else {
                    Ok(Flow::Normal)
                }
            }
            Stmt::While { test, body, span } => {
                loop {
                    if !self.eval_condition(test, *span)? {
                        break;
                    }
                    match self.exec_block(body)? {
                        Flow::Break => break,
                        Flow::Normal | Flow::Continue => continue,
                        returning @ Flow::Return(_) => return Ok(returning),
                    }
                }
                Ok(Flow::Normal)
            }
            Stmt::Break { .. } => Ok(Flow::Break),
            Stmt::Continue { .. } => Ok(Flow::Continue),
            Stmt::Return { value, .. } => Ok(Flow::Return(self.eval(value)?)),
            Stmt::FuncDef { name, args, return_type, body, .. } => {
                let info = FuncInfo { args, return_type: *return_type, body };
                self.env_mut().functions.insert(name.text.clone(), info);
                Ok(Flow::Normal)
            }
        }
    }

    fn declare(
        &mut self,
        name: &Name,
        ty: Option<Type>,
        value: Option<&'ast Expr>,
        span: wabbit_span::Span,
        is_const: bool,
    ) -> WabbitResult<()> {
        if self.env().is_defined(&name.text) {
            return Err(WabbitError::runtime(RuntimeError::NameAlreadyDefined(name.text.clone()), Some(span)));
        }
        let resolved = match value {
            Some(expr) => self.eval(expr)?,
            None => Value::default_for(ty.expect("VarDecl without a value always carries a type")),
        };
        if let Some(declared) = ty {
            if declared != resolved.type_of() {
                return Err(WabbitError::ty(
                    TypeError::DeclaredTypeMismatch {
                        name: name.text.clone(),
                        declared: declared.to_string(),
                        found: resolved.type_of().to_string(),
                    },
                    Some(span),
                ));
            }
        }
        let target = if is_const { &mut self.env_mut().constants } else { &mut self.env_mut().variables };
        target.insert(name.text.clone(), resolved);
        Ok(())
    }

    fn eval_condition(&mut self, expr: &'ast Expr, span: wabbit_span::Span) -> WabbitResult<bool> {
        match self.eval(expr)? {
            Value::Bool(b) => Ok(b),
            other => {
                Err(WabbitError::ty(TypeError::NonBooleanCondition { found: other.type_of().to_string() }, Some(span)))
            }
        }
    }

    fn eval(&mut self, expr: &'ast Expr) -> WabbitResult<Value> {
        match expr {
            Expr::Integer { lexeme, span } => lexeme
                .parse()
                .map(Value::Int)
                .map_err(|_| WabbitError::internal(format!("lexer produced a non-integer INTEGER lexeme: {lexeme:?}"))),
            Expr::Float { lexeme, .. } => lexeme
                .parse()
                .map(Value::Float)
                .map_err(|_| WabbitError::internal(format!("lexer produced a non-float FLOAT lexeme: {lexeme:?}"))),
            Expr::Boolean { value, .. } => Ok(Value::Bool(*value)),
            Expr::Character { value, .. } => Ok(Value::Char(*value)),
            Expr::Name(name) => self
                .env()
                .lookup(&name.text)
                .ok_or_else(|| WabbitError::runtime(RuntimeError::UndefinedName(name.text.clone()), Some(name.span))),
            Expr::ParenExpr { inner, .. } => self.eval(inner),
            Expr::UnaryOp { op, operand, span } => {
                let value = self.eval(operand)?;
                ops::unary(*op, value, Some(*span))
            }
            Expr::BinOp { op, left, right, span } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                ops::arith(*op, left, right, Some(*span))
            }
            Expr::LogicalOp { op, left, right, span } => {
                // Both operands are always evaluated: spec.md §4.E explicitly
                // rejects short-circuiting since evaluation has no side
                // effects beyond `print`.
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                ops::logical(*op, left, right, Some(*span))
            }
            Expr::Assignment { target, value, span } => {
                let resolved = self.eval(value)?;
                let env = self.env_mut();
                if env.variables.contains_key(&target.text) {
                    env.variables.insert(target.text.clone(), resolved);
                    Ok(resolved)
                } else if env.constants.contains_key(&target.text) {
                    Err(WabbitError::runtime(RuntimeError::AssignToConstant(target.text.clone()), Some(*span)))
                } else {
                    Err(WabbitError::runtime(RuntimeError::AssignToUndefined(target.text.clone()), Some(*span)))
                }
            }
            Expr::FuncCall { name, args, span } => self.call(name, args, *span),
        }
    }

    fn call(&mut self, name: &Name, args: &'ast [Expr], span: wabbit_span::Span) -> WabbitResult<Value> {
        let info = *self
            .env()
            .functions
            .get(&name.text)
            .ok_or_else(|| WabbitError::runtime(RuntimeError::UndefinedFunction(name.text.clone()), Some(span)))?;

        if args.len() != info.args.len() {
            return Err(WabbitError::runtime(
                RuntimeError::ArityMismatch { function: name.text.clone(), expected: info.args.len(), found: args.len() },
                Some(span),
            ));
        }
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg)?);
        }

        let mut frame = self.env().child_frame();
        for (formal, value) in info.args.iter().zip(values) {
            frame.variables.insert(formal.name.text.clone(), value);
        }
        self.stack.push(frame);
        let flow = self.exec_block(info.body);
        self.stack.pop();

        match flow? {
            Flow::Return(value) => Ok(value),
            // Falling off the end of a function body is unspecified by
            // spec.md §4.E ("the caller must not observe it"); we return the
            // declared return type's default rather than leave this undefined
            // in the Rust sense.
            _ => Ok(Value::default_for(info.return_type)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wabbit_parser::parser;

    fn run(source: &str) -> String {
        let program = parser::parse(source).unwrap();
        let mut out = Vec::new();
        interpret(&program, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_arithmetic() {
        assert_eq!(run("print 2 + 3 * 4;"), "14");
    }

    #[test]
    fn var_without_initializer_uses_type_default() {
        assert_eq!(run("var x int; print x;"), "0");
    }

    #[test]
    fn while_loop_with_break() {
        assert_eq!(run("var i int = 0; while i < 5 { print i; i = i + 1; if i == 3 { break; } }"), "012");
    }

    #[test]
    fn function_call_returns_value() {
        assert_eq!(run("func add(x int, y int) int { return x + y; } print add(2, 3);"), "5");
    }

    #[test]
    fn assignment_to_undefined_name_is_runtime_error() {
        let program = parser::parse("x = 1;").unwrap();
        let mut out = Vec::new();
        assert!(interpret(&program, &mut out).is_err());
    }

    #[test]
    fn assignment_to_constant_is_runtime_error() {
        let program = parser::parse("const x = 1; x = 2;").unwrap();
        let mut out = Vec::new();
        assert!(interpret(&program, &mut out).is_err());
    }

    #[test]
    fn and_or_reject_mixed_with_non_bool_left_operand() {
        let program = parser::parse("print 1 && true;").unwrap();
        let mut out = Vec::new();
        assert!(interpret(&program, &mut out).is_err());
    }
}

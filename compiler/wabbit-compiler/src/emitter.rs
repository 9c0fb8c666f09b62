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

//! Lowers a Wabbit AST to a single textual LLVM IR module, per spec.md §4.F.
//! Top-level `FuncDef` statements become their own `define`d functions;
//! every other top-level statement is lowered straight into `main`.

use indexmap::IndexMap;
use itertools::Itertools as _;
use tracing::debug;
use wabbit_ast::{ArithOp, Block, Expr, FuncArg, LogicalOp, Name, Program, Stmt, Type, UnaryOp};
use wabbit_errors::{RuntimeError, TypeError, WabbitError, WabbitResult};
use wabbit_span::Span;

use crate::types::{llvm_type, llvm_value, llvm_zero, print_function};

type Signature = (Vec<Type>, Type);

/// Lowers `program` into a complete textual IR module.
pub fn emit(program: &Program) -> WabbitResult<String> {
    let mut module = Module::new();
    module.lower(program)?;
    let rendered = module.render();
    debug!(lines = rendered.lines().count(), "emitted textual IR module");
    Ok(rendered)
}

struct Module {
    sigs: IndexMap<String, Signature>,
    function_irs: Vec<String>,
}

impl Module {
    fn new() -> Self {
        Self { sigs: IndexMap::new(), function_irs: Vec::new() }
    }

    fn lower(&mut self, program: &Program) -> WabbitResult<()> {
        for stmt in program {
            if let Stmt::FuncDef { name, args, return_type, .. } = stmt {
                self.sigs.insert(name.text.clone(), (args.iter().map(|a| a.ty).collect(), *return_type));
            }
        }
        debug!(functions = self.sigs.len(), "collected top-level function signatures");

        let mut main = FunctionBuilder::new("main", &[], Type::Int);
        for stmt in program {
            match stmt {
                Stmt::FuncDef { name, args, return_type, body, .. } => {
                    let mut builder = FunctionBuilder::new(&name.text, args, *return_type);
                    builder.lower_block(body, &self.sigs)?;
                    builder.finalize_user_function();
                    self.function_irs.push(builder.render());
                }
                other => main.lower_stmt(other, &self.sigs)?,
            }
        }
        if !main.terminated {
            main.terminate("  ret i32 0".to_string());
        }
        self.function_irs.push(main.render());
        Ok(())
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (name, ty) in PRINT_EXTERNS {
            out.push_str(&format!("declare void @{name}({ty})\n"));
        }
        out.push('\n');
        out.push_str(&self.function_irs.join("\n"));
        out
    }
}

const PRINT_EXTERNS: &[(&str, &str)] =
    &[("__wabbit_print_int", "i32"), ("__wabbit_print_float", "double"), ("__wabbit_print_bool", "i1"), ("__wabbit_print_char", "i8")];

/// Accumulates one LLVM function's basic blocks. Variable slots persist for
/// the whole function: `if`/`while` bodies share the enclosing function's
/// locals, matching the interpreter's environment model (spec.md §4.E).
struct FunctionBuilder {
    name: String,
    return_type: Type,
    params: Vec<(String, Type)>,
    blocks: IndexMap<String, Vec<String>>,
    /// `alloca` lines for every entry-region local, rendered ahead of
    /// `blocks["entry"]`'s own instructions. Declarations lowered after the
    /// entry block has already been terminated (e.g. a `var` following a
    /// top-level `if`/`while`) would otherwise land after that terminator —
    /// an instruction-after-terminator is invalid IR — so allocas are kept
    /// here and spliced in before anything else in `entry`, never appended
    /// in lowering order.
    entry_allocas: Vec<String>,
    current: String,
    terminated: bool,
    locals: IndexMap<String, (String, Type)>,
    next_reg: u32,
    next_label: u32,
    loop_stack: Vec<(String, String)>,
}

impl FunctionBuilder {
    fn new(name: &str, args: &[FuncArg], return_type: Type) -> Self {
        let mut builder = Self {
            name: name.to_string(),
            return_type,
            params: args.iter().map(|a| (a.name.text.clone(), a.ty)).collect(),
            blocks: IndexMap::new(),
            entry_allocas: Vec::new(),
            current: "entry".to_string(),
            terminated: false,
            locals: IndexMap::new(),
            next_reg: 0,
            next_label: 0,
            loop_stack: Vec::new(),
        };
        builder.blocks.insert("entry".to_string(), Vec::new());
        for (pname, pty) in builder.params.clone() {
            let slot = format!("%local.{pname}");
            let lt = llvm_type(pty);
            builder.entry_allocas.push(format!("  {slot} = alloca {lt}"));
            builder.emit_instr(format!("  store {lt} %arg.{pname}, {lt}* {slot}"));
            builder.locals.insert(pname, (slot, pty));
        }
        builder
    }

    fn fresh_reg(&mut self) -> String {
        let reg = format!("%t{}", self.next_reg);
        self.next_reg += 1;
        reg
    }

    fn fresh_label(&mut self, prefix: &str) -> String {
        let label = format!("{prefix}{}", self.next_label);
        self.next_label += 1;
        label
    }

    fn emit_instr(&mut self, line: String) {
        self.blocks.get_mut(&self.current).expect("current block always exists").push(line);
    }

    fn terminate(&mut self, line: String) {
        self.emit_instr(line);
        self.terminated = true;
    }

    fn start_block(&mut self, label: String) {
        self.blocks.insert(label.clone(), Vec::new());
        self.current = label;
        self.terminated = false;
    }

    fn declare_local(&mut self, name: &str, ty: Type, span: Span) -> WabbitResult<String> {
        if self.locals.contains_key(name) {
            return Err(WabbitError::runtime(RuntimeError::NameAlreadyDefined(name.to_string()), Some(span)));
        }
        let slot = format!("%local.{name}");
        // Per spec.md §4.F the alloca belongs in the entry region regardless of
        // which block is being built: a `var`/`const` inside a `while` body is
        // still lowered every time that block is visited, and an alloca left
        // there would grow the stack on every iteration instead of once per call.
        // It goes into `entry_allocas`, not `blocks["entry"]` directly: entry may
        // already carry a terminator by the time this declaration is reached
        // (e.g. a `var` following a top-level `if`), and `render` always places
        // `entry_allocas` ahead of that terminator.
        self.entry_allocas.push(format!("  {slot} = alloca {}", llvm_type(ty)));
        self.locals.insert(name.to_string(), (slot.clone(), ty));
        Ok(slot)
    }

    /// Falling off the end of a function body without a `Return` is
    /// unspecified by spec.md §4.E; the emitter terminates with a zeroed
    /// return of the declared type rather than leave a block unterminated.
    fn finalize_user_function(&mut self) {
        if !self.terminated {
            self.terminate(format!("  ret {}", llvm_zero(self.return_type)));
        }
    }

    fn lower_block(&mut self, block: &Block, sigs: &IndexMap<String, Signature>) -> WabbitResult<()> {
        for stmt in block {
            self.lower_stmt(stmt, sigs)?;
        }
        Ok(())
    }

    fn lower_stmt(&mut self, stmt: &Stmt, sigs: &IndexMap<String, Signature>) -> WabbitResult<()> {
        match stmt {
            Stmt::Print { expr, .. } => {
                let (value, ty) = self.lower_expr(expr, sigs)?;
                self.emit_instr(format!("  call void @{}({} {value})", print_function(ty), llvm_type(ty)));
                Ok(())
            }
            Stmt::VarDecl { name, ty, value, span } => self.lower_decl(name, *ty, value.as_ref(), *span, sigs, false),
            Stmt::ConstDecl { name, ty, value, span } => self.lower_decl(name, *ty, Some(value), *span, sigs, true),
            Stmt::ExprStmt { expr, .. } => {
                self.lower_expr(expr, sigs)?;
                Ok(())
            }
            Stmt::If { test, body, else_body, span } => self.lower_if(test, body, else_body.as_ref(), *span, sigs),
            Stmt::While { test, body, span } => self.lower_while(test, body, *span, sigs),
            Stmt::Break { .. } => {
                let (_, exit) =
                    self.loop_stack.last().cloned().ok_or_else(|| WabbitError::internal("'break' outside a loop"))?;
                self.terminate(format!("  br label %{exit}"));
                Ok(())
            }
            Stmt::Continue { .. } => {
                let (test, _) =
                    self.loop_stack.last().cloned().ok_or_else(|| WabbitError::internal("'continue' outside a loop"))?;
                self.terminate(format!("  br label %{test}"));
                Ok(())
            }
            Stmt::Return { value, .. } => {
                let (v, ty) = self.lower_expr(value, sigs)?;
                self.terminate(format!("  ret {} {v}", llvm_type(ty)));
                Ok(())
            }
            Stmt::FuncDef { .. } => {
                Err(WabbitError::internal("nested function definitions are not supported by the IR emitter"))
            }
        }
    }

    fn lower_decl(
        &mut self,
        name: &Name,
        ty: Option<Type>,
        value: Option<&Expr>,
        span: Span,
        sigs: &IndexMap<String, Signature>,
        is_const: bool,
    ) -> WabbitResult<()> {
        let resolved_value = value.map(|expr| self.lower_expr(expr, sigs)).transpose()?;
        let resolved_type = match (ty, resolved_value) {
            (Some(declared), Some((_, found))) if declared != found => {
                return Err(WabbitError::ty(
                    TypeError::DeclaredTypeMismatch {
                        name: name.text.clone(),
                        declared: declared.to_string(),
                        found: found.to_string(),
                    },
                    Some(span),
                ));
            }
            (Some(declared), _) => declared,
            (None, Some((_, found))) => found,
            (None, None) => unreachable!("the grammar requires at least one of type or value"),
        };
        let _ = is_const; // constants and variables share a storage model in this emitter
        let slot = self.declare_local(&name.text, resolved_type, span)?;
        let init = resolved_value.map(|(v, _)| v).unwrap_or_else(|| llvm_value(wabbit_ast::Value::default_for(resolved_type)));
        let lt = llvm_type(resolved_type);
        self.emit_instr(format!("  store {lt} {init}, {lt}* {slot}"));
        Ok(())
    }

    fn lower_if(
        &mut self,
        test: &Expr,
        body: &Block,
        else_body: Option<&Block>,
        span: Span,
        sigs: &IndexMap<String, Signature>,
    ) -> WabbitResult<()> {
        let (cond, cond_ty) = self.lower_expr(test, sigs)?;
        if cond_ty != Type::Bool {
            return Err(WabbitError::ty(TypeError::NonBooleanCondition { found: cond_ty.to_string() }, Some(span)));
        }
        let then_label = self.fresh_label("if.then.");
        let merge_label = self.fresh_label("if.merge.");
        let else_label = else_body.map(|_| self.fresh_label("if.else."));
        let else_target = else_label.clone().unwrap_or_else(|| merge_label.clone());

        self.terminate(format!("  br i1 {cond}, label %{then_label}, label %{else_target}"));

        self.start_block(then_label);
        self.lower_block(body, sigs)?;
        if !self.terminated {
            self.terminate(format!("  br label %{merge_label}"));
        }

        if let (Some(else_body), Some(else_label)) = (else_body, else_label) {
            self.start_block(else_label);
            self.lower_block(else_body, sigs)?;
            if !self.terminated {
                self.terminate(format!("  br label %{merge_label}"));
            }
        }

        self.start_block(merge_label);
        Ok(())
    }

    fn lower_while(&mut self, test: &Expr, body: &Block, span: Span, sigs: &IndexMap<String, Signature>) -> WabbitResult<()> {
        let test_label = self.fresh_label("while.test.");
        let body_label = self.fresh_label("while.body.");
        let exit_label = self.fresh_label("while.exit.");

        self.terminate(format!("  br label %{test_label}"));
        self.start_block(test_label.clone());
        let (cond, cond_ty) = self.lower_expr(test, sigs)?;
        if cond_ty != Type::Bool {
            return Err(WabbitError::ty(TypeError::NonBooleanCondition { found: cond_ty.to_string() }, Some(span)));
        }
        self.terminate(format!("  br i1 {cond}, label %{body_label}, label %{exit_label}"));

        self.start_block(body_label);
        self.loop_stack.push((test_label.clone(), exit_label.clone()));
        self.lower_block(body, sigs)?;
        self.loop_stack.pop();
        if !self.terminated {
            self.terminate(format!("  br label %{test_label}"));
        }

        self.start_block(exit_label);
        Ok(())
    }

    fn lower_expr(&mut self, expr: &Expr, sigs: &IndexMap<String, Signature>) -> WabbitResult<(String, Type)> {
        match expr {
            Expr::Integer { lexeme, .. } => Ok((lexeme.clone(), Type::Int)),
            Expr::Float { lexeme, .. } => {
                let v: f64 = lexeme.parse().map_err(|_| WabbitError::internal("non-float FLOAT lexeme"))?;
                Ok((llvm_value(wabbit_ast::Value::Float(v)), Type::Float))
            }
            Expr::Boolean { value, .. } => Ok(((*value as u8).to_string(), Type::Bool)),
            Expr::Character { value, .. } => Ok((value.to_string(), Type::Char)),
            Expr::Name(name) => self.lower_name(name),
            Expr::ParenExpr { inner, .. } => self.lower_expr(inner, sigs),
            Expr::UnaryOp { op, operand, span } => self.lower_unary(*op, operand, *span, sigs),
            Expr::BinOp { op, left, right, span } => self.lower_arith(*op, left, right, *span, sigs),
            Expr::LogicalOp { op, left, right, span } => self.lower_logical(*op, left, right, *span, sigs),
            Expr::Assignment { target, value, span } => self.lower_assignment(target, value, *span, sigs),
            Expr::FuncCall { name, args, span } => self.lower_call(name, args, *span, sigs),
        }
    }

    fn lower_name(&mut self, name: &Name) -> WabbitResult<(String, Type)> {
        let (slot, ty) = self
            .locals
            .get(&name.text)
            .cloned()
            .ok_or_else(|| WabbitError::runtime(RuntimeError::UndefinedName(name.text.clone()), Some(name.span)))?;
        let reg = self.fresh_reg();
        self.emit_instr(format!("  {reg} = load {lt}, {lt}* {slot}", lt = llvm_type(ty)));
        Ok((reg, ty))
    }

    fn lower_unary(&mut self, op: UnaryOp, operand: &Expr, span: Span, sigs: &IndexMap<String, Signature>) -> WabbitResult<(String, Type)> {
        let (value, ty) = self.lower_expr(operand, sigs)?;
        match (op, ty) {
            (UnaryOp::Pos, Type::Int | Type::Float) => Ok((value, ty)),
            (UnaryOp::Neg, Type::Int) => {
                let reg = self.fresh_reg();
                self.emit_instr(format!("  {reg} = sub i32 0, {value}"));
                Ok((reg, ty))
            }
            (UnaryOp::Neg, Type::Float) => {
                let reg = self.fresh_reg();
                self.emit_instr(format!("  {reg} = fneg double {value}"));
                Ok((reg, ty))
            }
            (UnaryOp::Not, Type::Bool) => {
                let reg = self.fresh_reg();
                self.emit_instr(format!("  {reg} = xor i1 {value}, 1"));
                Ok((reg, ty))
            }
            _ => Err(WabbitError::ty(
                TypeError::UnaryOperandMismatch { op: op.to_string(), operand: ty.to_string() },
                Some(span),
            )),
        }
    }

    fn lower_arith(&mut self, op: ArithOp, left: &Expr, right: &Expr, span: Span, sigs: &IndexMap<String, Signature>) -> WabbitResult<(String, Type)> {
        let (l, lt) = self.lower_expr(left, sigs)?;
        let (r, rt) = self.lower_expr(right, sigs)?;
        if lt != rt {
            return Err(binary_mismatch(op.to_string(), lt, rt, span));
        }
        let mnemonic = match (op, lt) {
            (ArithOp::Add, Type::Int) => "add",
            (ArithOp::Add, Type::Float) => "fadd",
            (ArithOp::Sub, Type::Int) => "sub",
            (ArithOp::Sub, Type::Float) => "fsub",
            (ArithOp::Mul, Type::Int) => "mul",
            (ArithOp::Mul, Type::Float) => "fmul",
            (ArithOp::Div, Type::Int) => "sdiv",
            (ArithOp::Div, Type::Float) => "fdiv",
            _ => return Err(binary_mismatch(op.to_string(), lt, rt, span)),
        };
        let reg = self.fresh_reg();
        self.emit_instr(format!("  {reg} = {mnemonic} {} {l}, {r}", llvm_type(lt)));
        Ok((reg, lt))
    }

    fn lower_logical(&mut self, op: LogicalOp, left: &Expr, right: &Expr, span: Span, sigs: &IndexMap<String, Signature>) -> WabbitResult<(String, Type)> {
        // Both operands always lowered: spec.md §4.F mirrors the interpreter's
        // no-short-circuit rule for `&&`/`||`.
        let (l, lt) = self.lower_expr(left, sigs)?;
        let (r, rt) = self.lower_expr(right, sigs)?;

        if matches!(op, LogicalOp::And | LogicalOp::Or) {
            if lt != Type::Bool || rt != Type::Bool {
                return Err(WabbitError::ty(
                    TypeError::NonBooleanLogicalOperand { found: if lt != Type::Bool { lt } else { rt }.to_string() },
                    Some(span),
                ));
            }
            let mnemonic = if op == LogicalOp::And { "and" } else { "or" };
            let reg = self.fresh_reg();
            self.emit_instr(format!("  {reg} = {mnemonic} i1 {l}, {r}"));
            return Ok((reg, Type::Bool));
        }

        if lt != rt {
            return Err(binary_mismatch(op.to_string(), lt, rt, span));
        }
        let reg = self.fresh_reg();
        if lt == Type::Float {
            let pred = match op {
                LogicalOp::Eq => "oeq",
                LogicalOp::NotEq => "one",
                LogicalOp::Lt => "olt",
                LogicalOp::LtEq => "ole",
                LogicalOp::Gt => "ogt",
                LogicalOp::GtEq => "oge",
                LogicalOp::And | LogicalOp::Or => unreachable!("handled above"),
            };
            self.emit_instr(format!("  {reg} = fcmp {pred} double {l}, {r}"));
        } else {
            let pred = match op {
                LogicalOp::Eq => "eq",
                LogicalOp::NotEq => "ne",
                LogicalOp::Lt => "slt",
                LogicalOp::LtEq => "sle",
                LogicalOp::Gt => "sgt",
                LogicalOp::GtEq => "sge",
                LogicalOp::And | LogicalOp::Or => unreachable!("handled above"),
            };
            self.emit_instr(format!("  {reg} = icmp {pred} {} {l}, {r}", llvm_type(lt)));
        }
        Ok((reg, Type::Bool))
    }

    fn lower_assignment(&mut self, target: &Name, value: &Expr, span: Span, sigs: &IndexMap<String, Signature>) -> WabbitResult<(String, Type)> {
        let (value, value_ty) = self.lower_expr(value, sigs)?;
        let (slot, ty) = self
            .locals
            .get(&target.text)
            .cloned()
            .ok_or_else(|| WabbitError::runtime(RuntimeError::AssignToUndefined(target.text.clone()), Some(span)))?;
        if ty != value_ty {
            return Err(WabbitError::ty(
                TypeError::DeclaredTypeMismatch { name: target.text.clone(), declared: ty.to_string(), found: value_ty.to_string() },
                Some(span),
            ));
        }
        self.emit_instr(format!("  store {lt} {value}, {lt}* {slot}", lt = llvm_type(ty)));
        Ok((value, ty))
    }

    fn lower_call(&mut self, name: &Name, args: &[Expr], span: Span, sigs: &IndexMap<String, Signature>) -> WabbitResult<(String, Type)> {
        let (param_types, return_type) = sigs
            .get(&name.text)
            .cloned()
            .ok_or_else(|| WabbitError::runtime(RuntimeError::UndefinedFunction(name.text.clone()), Some(span)))?;
        if args.len() != param_types.len() {
            return Err(WabbitError::runtime(
                RuntimeError::ArityMismatch { function: name.text.clone(), expected: param_types.len(), found: args.len() },
                Some(span),
            ));
        }
        let mut rendered = Vec::with_capacity(args.len());
        for (index, (arg, expected)) in args.iter().zip(param_types.iter()).enumerate() {
            let (value, ty) = self.lower_expr(arg, sigs)?;
            if ty != *expected {
                return Err(WabbitError::ty(
                    TypeError::ArgumentTypeMismatch {
                        function: name.text.clone(),
                        index,
                        expected: expected.to_string(),
                        found: ty.to_string(),
                    },
                    Some(span),
                ));
            }
            rendered.push(format!("{} {value}", llvm_type(ty)));
        }
        let reg = self.fresh_reg();
        self.emit_instr(format!("  {reg} = call {} @{}({})", llvm_type(return_type), name.text, rendered.iter().join(", ")));
        Ok((reg, return_type))
    }

    fn render(&self) -> String {
        let signature = self
            .params
            .iter()
            .map(|(name, ty)| format!("{} %arg.{name}", llvm_type(*ty)))
            .join(", ");
        let mut out = format!("define {} @{}({signature}) {{\n", llvm_type(self.return_type), self.name);
        for (label, instrs) in &self.blocks {
            out.push_str(&format!("{label}:\n"));
            if label == "entry" {
                for alloca in &self.entry_allocas {
                    out.push_str(alloca);
                    out.push('\n');
                }
            }
            for instr in instrs {
                out.push_str(instr);
                out.push('\n');
            }
        }
        out.push_str("}\n");
        out
    }
}

fn binary_mismatch(op: String, left: Type, right: Type, span: Span) -> WabbitError {
    WabbitError::ty(TypeError::BinaryOperandMismatch { op, left: left.to_string(), right: right.to_string() }, Some(span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wabbit_parser::parser;

    fn ir(source: &str) -> String {
        let program = parser::parse(source).unwrap();
        emit(&program).unwrap()
    }

    #[test]
    fn emits_print_externs() {
        let out = ir("print 1;");
        assert!(out.contains("declare void @__wabbit_print_int(i32)"));
    }

    #[test]
    fn main_returns_zero() {
        let out = ir("print 1;");
        assert!(out.contains("ret i32 0"));
    }

    #[test]
    fn function_def_emits_its_own_function() {
        let out = ir("func add(x int, y int) int { return x + y; } print add(1, 2);");
        assert!(out.contains("define i32 @add(i32 %arg.x, i32 %arg.y)"));
        assert!(out.contains("call i32 @add("));
    }

    #[test]
    fn while_loop_emits_three_labeled_blocks() {
        let out = ir("var i int; while i < 10 { i = i + 1; }");
        assert!(out.contains("while.test."));
        assert!(out.contains("while.body."));
        assert!(out.contains("while.exit."));
    }

    #[test]
    fn mismatched_operand_types_are_type_errors() {
        let program = parser::parse("print 1 + 1.0;").unwrap();
        assert!(emit(&program).is_err());
    }

    #[test]
    fn var_declared_inside_a_loop_body_allocas_once_in_entry() {
        // A naive lowering would place the alloca in while.body, which re-runs
        // every iteration and would grow the stack frame on each pass.
        let out = ir("var i int; while i < 3 { var j = i; i = i + 1; }");
        let entry = out.split("entry:\n").nth(1).unwrap().split(":\n").next().unwrap();
        assert!(entry.contains("%local.j = alloca i32"));
        assert!(alloca_precedes_terminator(entry));
        let body = out.split("while.body.").nth(1).unwrap();
        assert!(!body.contains("alloca"));
    }

    #[test]
    fn var_declared_after_a_top_level_if_allocas_before_entrys_terminator() {
        // entry is terminated by the `if`'s `br` before `var x` is lowered; the
        // alloca must still land ahead of that `br`, not after it.
        let out = ir("if true { print 1; } var x int = 2; print x;");
        let entry = out.split("entry:\n").nth(1).unwrap().split(":\n").next().unwrap();
        assert!(entry.contains("%local.x = alloca i32"));
        assert!(alloca_precedes_terminator(entry));
    }

    /// True if every `alloca` line in a block's text comes before its first
    /// terminator (`br`/`ret`) line.
    fn alloca_precedes_terminator(block: &str) -> bool {
        let terminator = block.lines().position(|line| {
            let line = line.trim_start();
            line.starts_with("br ") || line.starts_with("ret ")
        });
        let last_alloca = block.lines().rposition(|line| line.trim_start().starts_with("alloca") || line.contains("= alloca"));
        match (terminator, last_alloca) {
            (Some(t), Some(a)) => a < t,
            _ => true,
        }
    }
}

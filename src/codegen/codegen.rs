use std::io::{self, Write};

use thiserror::Error;

use crate::analyzer::{SymbolTable, SymbolTableOverflow};
use crate::parser::{BinOpKind, Expr, Program, Stmt};

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("failed to write output")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Overflow(#[from] SymbolTableOverflow),
}

/// Emits stack-machine assembly for a parsed program, one instruction
/// per line.
///
/// The generator owns the symbol table and populates it as it walks the
/// tree; labels for `if` statements come from their own counter,
/// independent of variable addresses.
pub struct Codegen<W: Write> {
    out: W,
    symbol_table: SymbolTable,
    label_index: usize,
}

impl<W: Write> Codegen<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            symbol_table: SymbolTable::new(),
            label_index: 0,
        }
    }

    /// Single depth-first pass over the whole program.
    pub fn generate(&mut self, program: &Program) -> Result<(), CodegenError> {
        for stmt in &program.0 {
            self.gen_stmt(stmt)?;
        }
        Ok(())
    }

    fn new_label(&mut self) -> String {
        let label = format!("ELSE_{}", self.label_index);
        self.label_index += 1;
        label
    }

    fn gen_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match stmt {
            // reserves the slot, emits nothing
            Stmt::VarDecl(name) => {
                self.symbol_table.resolve(name)?;
            }
            Stmt::Assign(name, expr) => {
                // the target claims its address before the right-hand
                // side runs, which fixes first-appearance order
                let address = self.symbol_table.resolve(name)?;
                self.gen_expr(expr)?;
                writeln!(self.out, "STORE {}", address)?;
            }
            Stmt::If(condition, body) => {
                let label = self.new_label();
                self.gen_expr(condition)?;
                writeln!(self.out, "JUMPZ {}", label)?;
                self.gen_stmt(body)?;
                writeln!(self.out, "{}:", label)?;
            }
        }
        Ok(())
    }

    /// The left operand of a binary operation is parked on the stack
    /// while the right one evaluates; POP restores it so both results
    /// are available to the arithmetic instruction.
    fn gen_expr(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        match expr {
            Expr::Num(text) => {
                writeln!(self.out, "LOADI {}", text)?;
            }
            Expr::Var(name) => {
                let address = self.symbol_table.resolve(name)?;
                writeln!(self.out, "LOAD {}", address)?;
            }
            Expr::Binary(op, left, right) => {
                self.gen_expr(left)?;
                writeln!(self.out, "PUSH")?;
                self.gen_expr(right)?;
                writeln!(self.out, "POP")?;
                let mnemonic = match op {
                    BinOpKind::Add => "ADD",
                    BinOpKind::Sub => "SUB",
                };
                writeln!(self.out, "{}", mnemonic)?;
            }
        }
        Ok(())
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }
}

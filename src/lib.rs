//! A small educational compiler.
//!
//! The source language has integer variable declarations, assignment,
//! `+`/`-` expressions and single-branch `if` statements. [`compile`]
//! turns a source string into text-form instructions for a stack-based
//! virtual machine: [`lexer`] produces tokens on demand, [`parser`]
//! builds the syntax tree, and [`codegen`] walks it once, resolving
//! variable addresses through the symbol table in [`analyzer`].
//!
//! Known limitation carried over from the language definition: the lexer
//! recognizes `==`, but no grammar production consumes it, so equality
//! comparisons always fail to parse.

pub mod analyzer;
pub mod codegen;
pub mod lexer;
pub mod parser;

use std::io::Write;

use thiserror::Error;

use codegen::{Codegen, CodegenError};
use lexer::Lexer;
use parser::{ParseError, Parser};

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

/// Compiles `source` and writes the generated assembly to `out`.
///
/// The stages run in one synchronous pass: the parser pulls tokens from
/// the lexer as it needs them, and code generation starts only once the
/// whole tree is built. The first error aborts the run; nothing may have
/// been written to `out` by then, but nothing is rolled back either.
pub fn compile<W: Write>(source: &str, out: W) -> Result<(), CompileError> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse()?;

    let mut codegen = Codegen::new(out);
    codegen.generate(&program)?;
    Ok(())
}

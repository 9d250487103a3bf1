//! Command-line driver: reads the input file, runs the pipeline, writes
//! the assembly to the output file. Any failure exits with status 1.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

/// Compiles a small imperative language to stack-machine assembly.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Source file to compile
    input: PathBuf,

    /// File the generated assembly is written to
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // clap would exit with status 2 on a usage error; the contract is 1
    let args = Args::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(1);
    });

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to open input file: {}", args.input.display()))?;

    let file = File::create(&args.output)
        .with_context(|| format!("failed to open output file: {}", args.output.display()))?;
    let mut out = BufWriter::new(file);

    minicc::compile(&source, &mut out)
        .with_context(|| format!("failed to compile {}", args.input.display()))?;

    out.flush()
        .with_context(|| format!("failed to write output file: {}", args.output.display()))?;

    Ok(())
}

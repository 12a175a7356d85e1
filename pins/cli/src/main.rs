// Licensed under the Apache-2.0 license

//! `make-pins`: compile datasheet pin/AF CSV tables into the
//! board-specific pin source, header, and qstr artifacts.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use pins_generator::emit::{generate_header, generate_source, generate_symbol_list};
use pins_generator::{AfTableLayout, PinRegistry};

#[derive(Parser, Debug)]
#[command(
    name = "make-pins",
    author,
    version,
    about = "Generate the board-specific pin tables from datasheet CSVs"
)]
struct Cli {
    /// Alternate-function table for the chip
    #[arg(short = 'a', long = "af", value_name = "FILE")]
    af: Option<PathBuf>,

    /// Board pin file
    #[arg(short = 'b', long = "board", value_name = "FILE")]
    board: Option<PathBuf>,

    /// Column of the board file holding the referenced cpu pin
    #[arg(long = "board-pin-col", value_name = "COL", default_value_t = 1)]
    board_pin_col: usize,

    /// File copied verbatim to the head of the generated source
    #[arg(short = 'p', long = "prefix", value_name = "FILE")]
    prefix: Option<PathBuf>,

    /// Output path for the generated qstr list
    #[arg(short = 'q', long = "qstr", value_name = "FILE")]
    qstr: Option<PathBuf>,

    /// Output path for the generated pin header
    #[arg(short = 'r', long = "hdr", value_name = "FILE")]
    hdr: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut registry = PinRegistry::new();

    // The banner and flag echoes are part of the generated source, so a
    // generated file records its own provenance.
    println!("// This file was automatically generated by make-pins");
    println!("//");

    if let Some(af) = &cli.af {
        println!("// --af {}", af.display());
        registry
            .ingest_af_file(af, &AfTableLayout::default())
            .with_context(|| format!("failed to ingest AF table {}", af.display()))?;
    }
    if let Some(board) = &cli.board {
        println!("// --board {}", board.display());
        registry
            .ingest_board_file(board, cli.board_pin_col)
            .with_context(|| format!("failed to ingest board table {}", board.display()))?;
    }
    if let Some(prefix) = &cli.prefix {
        println!("// --prefix {}", prefix.display());
        println!();
        let text = fs::read_to_string(prefix)
            .with_context(|| format!("failed to read prefix file {}", prefix.display()))?;
        println!("{text}");
    }

    print!("{}", generate_source(&registry));

    if let Some(path) = &cli.qstr {
        fs::write(path, generate_symbol_list(&registry))
            .with_context(|| format!("failed to write qstr list {}", path.display()))?;
    }
    if let Some(path) = &cli.hdr {
        fs::write(path, generate_header(&registry))
            .with_context(|| format!("failed to write pin header {}", path.display()))?;
    }
    Ok(())
}

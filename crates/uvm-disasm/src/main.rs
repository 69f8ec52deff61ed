use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::Path;

use uvm_disasm::{build_listing, load_raw_bin, render_text};

#[derive(Parser, Debug)]
#[command(author, version, about = "UVM disassembler CLI", long_about=None)]
struct Cli {
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
    /// Skip N bytes at start of file before decoding
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Limit bytes decoded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Show instruction bytes (text format only)
    #[arg(long)]
    show_bytes: bool,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn main() -> Result<()> {
    let cli = Cli::parse();
    let bytes = load_raw_bin(Path::new(&cli.input), cli.skip, cli.len)?;
    let entries = build_listing(&bytes);

    let buf = match cli.format {
        OutputFormat::Text => render_text(&entries, cli.show_bytes),
        OutputFormat::Json => serde_json::to_string_pretty(&entries)? + "\n",
    };
    if let Some(path) = cli.out { std::fs::write(path, buf)?; } else { print!("{}", buf); }
    Ok(())
}

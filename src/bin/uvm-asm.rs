use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use uvm_asm::disasm::{fmt_commands, format_bytes_hex, hex_dump};
use uvm_asm::vectors::{self, SAMPLE_PROGRAM};
use uvm_asm::{AsmConfig, Assembler, ErrorPolicy, OverflowPolicy};

#[derive(Parser, Debug)]
#[command(author, version, about = "UVM assembler: source text to raw machine code")]
struct Opts {
    /// Assembly source (one instruction or label per line)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Raw binary output
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Print the assembled bytes and run the reference vectors afterwards
    #[arg(long)]
    test: bool,
    /// Print the resolved commands of INPUT and exit without encoding
    #[arg(long)]
    ir: bool,
    /// Check the reference encodings and exit
    #[arg(long)]
    self_check: bool,
    /// Write a sample program covering the reference encodings
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "sample.asm")]
    write_sample: Option<PathBuf>,
    /// Drop commands that fail to encode instead of stopping
    #[arg(long)]
    best_effort: bool,
    /// Reject operands wider than their field instead of masking them
    #[arg(long)]
    reject_overflow: bool,
    /// JSON assembler configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Opts {
    fn asm_config(&self) -> Result<AsmConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => AsmConfig::default(),
        };
        if self.best_effort {
            cfg.errors = ErrorPolicy::BestEffort;
        }
        if self.reject_overflow {
            cfg.overflow = OverflowPolicy::Reject;
        }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let asm = Assembler::new(opts.asm_config()?);

    if opts.self_check {
        return self_check(&asm);
    }
    if let Some(path) = &opts.write_sample {
        fs::write(path, SAMPLE_PROGRAM).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote sample program to {}", path.display());
        return Ok(());
    }
    if opts.ir {
        let Some(input) = &opts.input else {
            bail!("--ir needs an INPUT file");
        };
        let text =
            fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
        let commands = asm
            .assemble(&text)
            .with_context(|| format!("resolving {}", input.display()))?;
        for line in fmt_commands(&commands) {
            println!("{line}");
        }
        return Ok(());
    }
    let (Some(input), Some(output)) = (&opts.input, &opts.output) else {
        use clap::CommandFactory;
        Opts::command().print_help()?;
        println!("\nSample program:\n\n{SAMPLE_PROGRAM}");
        return Ok(());
    };

    let bytes = assemble_file(&asm, input, output)?;
    println!("Binary size: {} bytes", bytes.len());

    if opts.test {
        println!("\nBytes:");
        for line in hex_dump(&bytes, 8) {
            println!("{line}");
        }
        println!();
        self_check(&asm)?;
    }
    Ok(())
}

fn assemble_file(asm: &Assembler, input: &Path, output: &Path) -> Result<Vec<u8>> {
    let text = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let out = asm
        .assemble_to_bytes(&text)
        .with_context(|| format!("assembling {}", input.display()))?;
    for diag in &out.diagnostics {
        eprintln!("warning: {diag}");
    }
    ensure!(!out.bytes.is_empty(), "{} produced no machine code", input.display());
    fs::write(output, &out.bytes).with_context(|| format!("writing {}", output.display()))?;
    Ok(out.bytes)
}

fn self_check(asm: &Assembler) -> Result<()> {
    let results = vectors::check(asm);
    for r in &results {
        println!("{}", r.source);
        println!("  expected: {}", format_bytes_hex(r.expected).join(" "));
        match &r.actual {
            Ok(bytes) => println!("  actual:   {}", format_bytes_hex(bytes).join(" ")),
            Err(e) => println!("  actual:   error: {e}"),
        }
        println!("  {}", if r.passed() { "PASS" } else { "FAIL" });
    }
    let failed = results.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        bail!("{failed} of {} reference encodings failed", results.len());
    }
    Ok(())
}

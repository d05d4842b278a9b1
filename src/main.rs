use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Translate a BTOR2 circuit description into a SystemVerilog module.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input BTOR2 file
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let lines = btor2sv_frontend::parse(&source)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;
    info!("parsed {} lines", lines.len());

    let verilog = btor2sv_codegen::translate(&lines)
        .with_context(|| format!("failed to translate {}", cli.input.display()))?;

    match &cli.output {
        Some(path) => {
            fs::write(path, verilog)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => print!("{}", verilog),
    }

    Ok(())
}

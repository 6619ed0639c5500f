use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reflow::app;

#[derive(Parser)]
#[command(name = "reflow")]
#[command(version, about = "Re-wraps paragraphs into lines of balanced length")]
struct Cli {
    /// File to reflow; reads stdin when omitted
    file: Option<PathBuf>,

    /// Column width to wrap to
    #[arg(short, long, default_value_t = 79, value_parser = clap::value_parser!(i64).range(1..))]
    width: i64,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Structured logging goes to stderr only; stdout carries nothing but
    // reflowed text.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            app::run(BufReader::new(file), &mut out, cli.width)?;
        }
        None => {
            let stdin = io::stdin();
            app::run(stdin.lock(), &mut out, cli.width)?;
        }
    }
    out.flush()?;

    Ok(())
}

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use statebox::config::{Config, ReducerKind};
use statebox::logging::init_tracing;
use statebox::replay::{replay_with, ReplayOptions};

/// Replay JSON-lines action scripts through an example reducer.
#[derive(Debug, Parser)]
#[command(name = "statebox", version)]
struct Cli {
    /// Config file (default: platform config dir/statebox/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Reducer to drive (overrides config defaults.reducer)
    #[arg(long, value_enum)]
    reducer: Option<ReducerKind>,

    /// Print only the final state
    #[arg(long)]
    quiet: bool,

    /// Action script, one JSON action per line ("-" or omitted for stdin)
    script: Option<PathBuf>,
}

fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let kind = cli.reducer.unwrap_or(config.defaults.reducer);
    let options = ReplayOptions {
        print_intermediate: config.defaults.print_intermediate && !cli.quiet,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.script.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script '{}'", path.display()))?;
            replay_with(kind, &config, BufReader::new(file), &mut out, options)?;
        }
        _ => {
            let stdin = io::stdin();
            replay_with(kind, &config, stdin.lock(), &mut out, options)?;
        }
    }

    out.flush()?;
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lcalc::engine::Calculator;
use lcalc::repl;

/// A four-function calculator: digits, `+ - x /`, repeated equals.
#[derive(Parser, Debug)]
#[command(name = "lcalc", version, about)]
struct Args {
    /// Run a whitespace-separated button sequence (e.g. "5 + 2 =") and print
    /// the final display instead of starting the prompt.
    #[arg(long)]
    keys: Option<String>,

    /// Suppress the banner, prompt, and per-token display echo.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut calc = Calculator::new();

    match args.keys {
        Some(keys) => repl::run_keys(&mut calc, &keys),
        None => repl::run_interactive(&mut calc, args.quiet),
    }
}

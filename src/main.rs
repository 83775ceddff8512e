use clap::Parser;
use colored::*;
use std::process;
use taxoline::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then TAXOLINE_LOG, then -v/-vv
    let log_level = std::env::var("TAXOLINE_LOG").unwrap_or_else(|_| {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<taxoline::TaxolineError>() {
            Some(taxoline::TaxolineError::Config(_)) => 2,
            Some(taxoline::TaxolineError::Io(_)) => 3,
            Some(taxoline::TaxolineError::Parse(_)) => 4,
            Some(taxoline::TaxolineError::NotFound(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Resolve(args) => taxoline::cli::commands::resolve::run(args),
        Commands::Lineage(args) => taxoline::cli::commands::lineage::run(args),
        Commands::Config(args) => taxoline::cli::commands::config::run(args),
    }
}

use crate::cli::output::*;
use crate::core::config::{default_config, resolve_config, save_config, DEFAULT_CONFIG_FILE};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a configuration file with default values
    Init {
        /// Destination file
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    Show {
        /// Configuration file (defaults to ./taxoline.toml when present)
        path: Option<PathBuf>,
    },
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init { path, force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            save_config(&path, &default_config())?;
            success(&format!("Wrote {}", path.display()));
            Ok(())
        }
        ConfigCommands::Show { path } => {
            let config = resolve_config(path.as_deref())?;
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| crate::TaxolineError::Config(format!("Failed to serialize config: {}", e)))?;
            print!("{}", rendered);
            Ok(())
        }
    }
}

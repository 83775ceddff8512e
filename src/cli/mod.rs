pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "taxoline",
    version,
    about = "Resolve NCBI taxonomy IDs to fixed 7-rank lineage labels",
    long_about = "Taxoline walks an NCBI taxdump (nodes.dmp / names.dmp) from each taxon up to the \
                  root and projects the lineage onto kingdom, phylum, class, order, family, genus \
                  and species, producing `tax=k__..;p__..;...;s__..` labels for barcode classifiers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve an accession/taxon table into lineage labels
    Resolve(commands::resolve::ResolveArgs),

    /// Show the lineage of a single taxonomy ID
    Lineage(commands::lineage::LineageArgs),

    /// Create or inspect the configuration file
    Config(commands::config::ConfigArgs),
}

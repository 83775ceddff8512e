pub mod config;
pub mod lineage;
pub mod resolve;

use crate::bio::taxonomy::{ncbi, TaxonomyDB};
use crate::core::config::{resolve_config, Config};
use crate::utils::format::{format_count, format_elapsed};
use crate::utils::progress::create_spinner;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

/// Taxonomy sources shared by every command that walks lineages
#[derive(Args, Debug, Clone, Default)]
pub struct TaxonomyArgs {
    /// Configuration file (defaults to ./taxoline.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// NCBI nodes.dmp
    #[arg(long, value_name = "FILE")]
    pub nodes: Option<PathBuf>,

    /// NCBI names.dmp
    #[arg(long, value_name = "FILE")]
    pub names: Option<PathBuf>,

    /// Taxon at which lineage walks stop
    #[arg(long, value_name = "TAX_ID")]
    pub root_id: Option<String>,
}

impl TaxonomyArgs {
    /// Configuration with command-line overrides applied
    pub fn effective_config(&self) -> Result<Config> {
        let mut config = resolve_config(self.config.as_deref())?;

        if let Some(nodes) = &self.nodes {
            config.taxonomy.nodes = nodes.clone();
        }
        if let Some(names) = &self.names {
            config.taxonomy.names = names.clone();
        }
        if let Some(root_id) = &self.root_id {
            if root_id.trim().is_empty() {
                return Err(crate::TaxolineError::Config("--root-id must not be empty".to_string()).into());
            }
            config.taxonomy.root_id = root_id.clone();
        }

        Ok(config)
    }
}

/// Load nodes and names tables named by `config`
pub fn load_taxonomy(config: &Config) -> Result<TaxonomyDB> {
    let taxonomy = &config.taxonomy;
    for path in [&taxonomy.nodes, &taxonomy.names] {
        if !path.exists() {
            return Err(crate::TaxolineError::NotFound(format!(
                "taxonomy file {}",
                path.display()
            ))
            .into());
        }
    }

    let start = Instant::now();
    let pb = create_spinner("Parsing taxonomy files...");
    let result = ncbi::build_taxonomy_db(&taxonomy.nodes, &taxonomy.names, &taxonomy.root_id);
    pb.finish_and_clear();
    let db = result?;

    tracing::debug!(
        "Taxonomy loaded in {}: {} nodes, {} scientific names",
        format_elapsed(start.elapsed().as_millis()),
        format_count(db.node_count()),
        format_count(db.name_count())
    );
    Ok(db)
}

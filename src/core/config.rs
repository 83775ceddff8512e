use crate::bio::taxonomy::DEFAULT_ROOT_ID;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "taxoline.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub taxonomy: TaxonomyConfig,
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// nodes.dmp from the NCBI taxdump
    pub nodes: PathBuf,
    /// names.dmp from the NCBI taxdump
    pub names: PathBuf,
    /// Taxon at which lineage walks stop (not emitted)
    pub root_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Rows of `accession<TAB>taxon:<id>`
    pub input: PathBuf,
    /// Rows of `accession<TAB>tax=...`
    pub output: PathBuf,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            nodes: PathBuf::from("nodes.dmp"),
            names: PathBuf::from("names.dmp"),
            root_id: DEFAULT_ROOT_ID.to_string(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("ids_and_taxon.txt"),
            output: PathBuf::from("ncbi_taxa.tsv"),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::TaxolineError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::TaxolineError::Config(format!("Failed to parse config: {}", e)))?;

    if config.taxonomy.root_id.trim().is_empty() {
        return Err(crate::TaxolineError::Config(
            "taxonomy.root_id must not be empty".to_string(),
        ));
    }

    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), crate::TaxolineError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| crate::TaxolineError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Load `path` if given, else `taxoline.toml` when present, else defaults
pub fn resolve_config(path: Option<&Path>) -> Result<Config, crate::TaxolineError> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            tracing::debug!("Using {} from the working directory", DEFAULT_CONFIG_FILE);
            load_config(DEFAULT_CONFIG_FILE)
        }
        None => Ok(default_config()),
    }
}

/// Taxonomy tables and lineage traversal for NCBI-style dumps
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Root identifier used by NCBI taxonomy dumps
pub const DEFAULT_ROOT_ID: &str = "1";

/// Name class retained from names.dmp
pub const SCIENTIFIC_NAME: &str = "scientific name";

/// Field separator shared by nodes.dmp and names.dmp
pub const FIELD_SEPARATOR: &str = "\t|\t";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyNode {
    pub id: String,
    pub parent_id: String,
    pub rank: String,
}

/// One named ancestor of a taxon, rank lower-cased
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageEntry {
    pub rank: String,
    pub name: String,
}

impl LineageEntry {
    pub fn new(rank: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            rank: rank.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug)]
pub struct TaxonomyDB {
    nodes: HashMap<String, TaxonomyNode>,
    names: HashMap<String, String>,
    root_id: String,
}

impl TaxonomyDB {
    pub fn new(root_id: impl Into<String>) -> Self {
        Self {
            nodes: HashMap::new(),
            names: HashMap::new(),
            root_id: root_id.into(),
        }
    }

    pub fn from_tables(
        nodes: HashMap<String, TaxonomyNode>,
        names: HashMap<String, String>,
        root_id: impl Into<String>,
    ) -> Self {
        Self {
            nodes,
            names,
            root_id: root_id.into(),
        }
    }

    /// Later nodes with the same id replace earlier ones
    pub fn add_node(&mut self, node: TaxonomyNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn add_name(&mut self, taxon_id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(taxon_id.into(), name.into());
    }

    pub fn contains(&self, taxon_id: &str) -> bool {
        self.nodes.contains_key(taxon_id)
    }

    pub fn node(&self, taxon_id: &str) -> Option<&TaxonomyNode> {
        self.nodes.get(taxon_id)
    }

    pub fn scientific_name(&self, taxon_id: &str) -> Option<&str> {
        self.names.get(taxon_id).map(String::as_str)
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    /// Walk parent pointers from `taxon_id` and return named ancestors root-first.
    ///
    /// The walk stops when the current id is unknown, when an id repeats (corrupt
    /// cyclic dumps), or when the next parent is the root identifier. The root
    /// itself is never emitted unless the walk starts on it. Nodes without a
    /// scientific name are traversed but not emitted.
    pub fn resolve(&self, taxon_id: &str) -> Vec<LineageEntry> {
        let mut lineage = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = taxon_id;

        while let Some(node) = self.nodes.get(current) {
            if !visited.insert(current) {
                tracing::debug!("Cycle detected at taxon {} while resolving {}", current, taxon_id);
                break;
            }

            if let Some(name) = self.names.get(current) {
                lineage.push(LineageEntry::new(node.rank.to_lowercase(), name.clone()));
            }

            current = node.parent_id.as_str();
            if current == self.root_id {
                break;
            }
        }

        lineage.reverse();
        lineage
    }
}

/// Parse NCBI taxonomy dump files
pub mod ncbi {
    use super::*;
    use crate::{Result, TaxolineError};
    use std::fs::File;
    use std::io::{BufRead, BufReader};
    use std::path::Path;

    pub fn parse_nodes<R: BufRead>(reader: R, source: &str) -> Result<HashMap<String, TaxonomyNode>> {
        let mut nodes = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();

            if fields.len() < 3 {
                return Err(TaxolineError::Parse(format!(
                    "{}:{}: expected at least 3 fields, found {}: '{}'",
                    source,
                    index + 1,
                    fields.len(),
                    line
                )));
            }

            let node = TaxonomyNode {
                id: fields[0].to_string(),
                parent_id: fields[1].to_string(),
                rank: fields[2].to_string(),
            };
            nodes.insert(node.id.clone(), node);
        }

        Ok(nodes)
    }

    pub fn parse_names<R: BufRead>(reader: R, source: &str) -> Result<HashMap<String, String>> {
        let mut names = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line
                .trim()
                .split(FIELD_SEPARATOR)
                .map(|field| field.trim().trim_matches('|').trim())
                .collect();

            if fields.len() < 4 {
                return Err(TaxolineError::Parse(format!(
                    "{}:{}: expected at least 4 fields, found {}: '{}'",
                    source,
                    index + 1,
                    fields.len(),
                    line
                )));
            }

            if fields[3] == SCIENTIFIC_NAME {
                if let Some(previous) = names.insert(fields[0].to_string(), fields[1].to_string()) {
                    tracing::debug!(
                        "Duplicate scientific name for taxon {}: '{}' replaced by '{}'",
                        fields[0],
                        previous,
                        fields[1]
                    );
                }
            }
        }

        Ok(names)
    }

    pub fn load_nodes<P: AsRef<Path>>(path: P) -> Result<HashMap<String, TaxonomyNode>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        parse_nodes(BufReader::new(file), &path.display().to_string())
    }

    pub fn load_names<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        parse_names(BufReader::new(file), &path.display().to_string())
    }

    pub fn build_taxonomy_db<P: AsRef<Path>, Q: AsRef<Path>>(
        nodes_path: P,
        names_path: Q,
        root_id: &str,
    ) -> Result<TaxonomyDB> {
        let nodes = load_nodes(&nodes_path)?;
        tracing::info!("Loaded {} taxonomy nodes from {}", nodes.len(), nodes_path.as_ref().display());

        let names = load_names(&names_path)?;
        tracing::info!("Loaded {} scientific names from {}", names.len(), names_path.as_ref().display());

        if !nodes.contains_key(root_id) {
            tracing::warn!("Root taxon {} is not present in the nodes table", root_id);
        }

        Ok(TaxonomyDB::from_tables(nodes, names, root_id))
    }
}

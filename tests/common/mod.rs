#![allow(dead_code)]

/// Shared taxdump fixtures for integration tests
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Red fox lineage as it appears in an NCBI taxdump, root first
pub const FOX_NODES: &[(&str, &str, &str)] = &[
    ("1", "1", "no rank"),
    ("131567", "1", "no rank"),
    ("2759", "131567", "superkingdom"),
    ("33208", "2759", "kingdom"),
    ("7711", "33208", "phylum"),
    ("89593", "7711", "subphylum"),
    ("40674", "89593", "class"),
    ("33554", "40674", "order"),
    ("9608", "33554", "family"),
    ("9625", "9608", "genus"),
    ("9627", "9625", "species"),
    ("9615", "9608", "genus"),
];

pub const FOX_NAMES: &[(&str, &str, &str)] = &[
    ("1", "root", "scientific name"),
    ("131567", "cellular organisms", "scientific name"),
    ("2759", "Eukaryota", "scientific name"),
    ("2759", "eucaryotes", "genbank common name"),
    ("33208", "Metazoa", "scientific name"),
    ("33208", "animals", "blast name"),
    ("7711", "Chordata", "scientific name"),
    ("89593", "Craniata", "scientific name"),
    ("40674", "Mammalia", "scientific name"),
    ("33554", "Carnivora", "scientific name"),
    ("9608", "Canidae", "scientific name"),
    ("9625", "Vulpes", "scientific name"),
    ("9627", "Vulpes vulpes", "scientific name"),
    ("9627", "red fox", "genbank common name"),
];

pub const FOX_LABEL: &str =
    "tax=k__Metazoa;p__Chordata;c__Mammalia;o__Carnivora;f__Canidae;g__Vulpes;s__Vulpes vulpes";

pub fn nodes_dump(nodes: &[(&str, &str, &str)]) -> String {
    nodes
        .iter()
        .map(|(id, parent, rank)| format!("{}\t|\t{}\t|\t{}\t|\t\t|\t0\t|\n", id, parent, rank))
        .collect()
}

pub fn names_dump(names: &[(&str, &str, &str)]) -> String {
    names
        .iter()
        .map(|(id, name, class)| format!("{}\t|\t{}\t|\t\t|\t{}\t|\n", id, name, class))
        .collect()
}

/// Temporary directory holding nodes.dmp and names.dmp
pub struct TaxdumpFixture {
    temp_dir: TempDir,
}

impl TaxdumpFixture {
    pub fn new(nodes: &[(&str, &str, &str)], names: &[(&str, &str, &str)]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("nodes.dmp"), nodes_dump(nodes)).unwrap();
        fs::write(temp_dir.path().join("names.dmp"), names_dump(names)).unwrap();
        Self { temp_dir }
    }

    pub fn fox() -> Self {
        Self::new(FOX_NODES, FOX_NAMES)
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    pub fn nodes(&self) -> PathBuf {
        self.path("nodes.dmp")
    }

    pub fn names(&self) -> PathBuf {
        self.path("names.dmp")
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        fs::write(&path, contents).unwrap();
        path
    }
}

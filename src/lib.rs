pub mod bio;
pub mod cli;
pub mod core;
pub mod utils;

pub use crate::bio::lineage::{project, CanonicalRank, FixedLineage};
pub use crate::bio::taxonomy::{LineageEntry, TaxonomyDB, TaxonomyNode};
pub use crate::core::resolver::{BatchReport, BatchResolver, SkipReason, SkippedRow};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaxolineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, TaxolineError>;

pub mod lineage;
pub mod taxonomy;

pub use lineage::{project, CanonicalRank, FixedLineage};
pub use taxonomy::{LineageEntry, TaxonomyDB, TaxonomyNode};

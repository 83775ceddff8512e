//! Projection of arbitrary-depth lineages onto the fixed 7-rank label schema
//!
//! The rendered form is `tax=k__<kingdom>;p__<phylum>;...;s__<species>`, with an
//! empty name for every rank the lineage does not supply.

use crate::bio::taxonomy::LineageEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label prefix written before the joined ranks
pub const LINEAGE_PREFIX: &str = "tax=";

/// The seven ranks of the label schema, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalRank {
    Kingdom,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    Species,
}

impl CanonicalRank {
    pub const ALL: [CanonicalRank; 7] = [
        Self::Kingdom,
        Self::Phylum,
        Self::Class,
        Self::Order,
        Self::Family,
        Self::Genus,
        Self::Species,
    ];

    /// Parse a lower-cased rank label; other ranks are not part of the schema
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "kingdom" => Some(Self::Kingdom),
            "phylum" => Some(Self::Phylum),
            "class" => Some(Self::Class),
            "order" => Some(Self::Order),
            "family" => Some(Self::Family),
            "genus" => Some(Self::Genus),
            "species" => Some(Self::Species),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kingdom => "kingdom",
            Self::Phylum => "phylum",
            Self::Class => "class",
            Self::Order => "order",
            Self::Family => "family",
            Self::Genus => "genus",
            Self::Species => "species",
        }
    }

    pub fn prefix(&self) -> char {
        match self {
            Self::Kingdom => 'k',
            Self::Phylum => 'p',
            Self::Class => 'c',
            Self::Order => 'o',
            Self::Family => 'f',
            Self::Genus => 'g',
            Self::Species => 's',
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for CanonicalRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedLineage {
    slots: [Option<String>; 7],
}

impl FixedLineage {
    pub fn get(&self, rank: CanonicalRank) -> Option<&str> {
        self.slots[rank.index()].as_deref()
    }

    /// True when none of the seven ranks carries a name
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalRank, Option<&str>)> + '_ {
        CanonicalRank::ALL
            .into_iter()
            .map(move |rank| (rank, self.get(rank)))
    }
}

impl fmt::Display for FixedLineage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(LINEAGE_PREFIX)?;
        for (i, (rank, name)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}__{}", rank.prefix(), name.unwrap_or(""))?;
        }
        Ok(())
    }
}

/// Project a root-first lineage onto the seven canonical ranks.
///
/// When a rank occurs more than once the last occurrence wins.
pub fn project(lineage: &[LineageEntry]) -> FixedLineage {
    let mut fixed = FixedLineage::default();
    for entry in lineage {
        if let Some(rank) = CanonicalRank::from_label(&entry.rank) {
            fixed.slots[rank.index()] = Some(entry.name.clone());
        }
    }
    fixed
}

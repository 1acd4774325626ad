//! The full pair-keyed matrix produced by one build.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use dn_registry::PairKey;
use dn_registry::pair::serialize_pair_rows;

use crate::entry::DistanceEntry;

/// Distance entries keyed by `(supply, demand)` name pair.
///
/// Always rebuilt as a whole; there is no incremental update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceMatrix {
    entries: BTreeMap<PairKey, DistanceEntry>,
}

impl DistanceMatrix {
    pub fn from_entries(entries: BTreeMap<PairKey, DistanceEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, supply: &str, demand: &str) -> Option<&DistanceEntry> {
        self.entries.get(&PairKey::new(supply, demand))
    }

    pub fn get_pair(&self, key: &PairKey) -> Option<&DistanceEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in `(supply, demand)` name order.
    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, &DistanceEntry)> + '_ {
        self.entries.iter()
    }

    /// Number of entries that fell back to the straight-line estimate.
    pub fn fallback_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_fallback).count()
    }

    pub fn into_inner(self) -> BTreeMap<PairKey, DistanceEntry> {
        self.entries
    }
}

impl Serialize for DistanceMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_pair_rows(&self.entries, "entry", serializer)
    }
}

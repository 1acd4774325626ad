//! Keys for per-(supply, demand) results.

use std::collections::BTreeMap;

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// Ordered `(supply name, demand name)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairKey {
    pub supply: String,
    pub demand: String,
}

impl PairKey {
    pub fn new(supply: impl Into<String>, demand: impl Into<String>) -> Self {
        Self { supply: supply.into(), demand: demand.into() }
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.supply, self.demand)
    }
}

/// Serialize a pair-keyed map as a flat sequence of
/// `{ supply, demand, <field>: value }` records.
///
/// Text formats such as JSON only allow string map keys, so pair-keyed maps
/// go out as rows instead.
pub fn serialize_pair_rows<V, S>(
    map: &BTreeMap<PairKey, V>,
    field: &'static str,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    V: Serialize,
    S: Serializer,
{
    struct Row<'a, V> {
        key:   &'a PairKey,
        field: &'static str,
        value: &'a V,
    }

    impl<V: Serialize> Serialize for Row<'_, V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut row = serializer.serialize_struct("PairRow", 3)?;
            row.serialize_field("supply", &self.key.supply)?;
            row.serialize_field("demand", &self.key.demand)?;
            row.serialize_field(self.field, self.value)?;
            row.end()
        }
    }

    serializer.collect_seq(map.iter().map(|(key, value)| Row { key, field, value }))
}

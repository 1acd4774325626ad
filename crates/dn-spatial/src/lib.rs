//! `dn-spatial` — road network, nearest-node lookup, and routing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`network`]  | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder`          |
//! | [`router`]   | `Router` trait, `ShortestPath`, `DijkstraRouter`            |
//! | [`provider`] | `RoadNetworkProvider`, `NetworkSource`, `RegionDescriptor`  |
//! | [`osm`]      | `load_from_pbf`, `PbfSource` (feature = `"osm"` only)       |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `osm`   | Enables OSM PBF loading via the `osmpbf` crate.             |
//! | `serde` | Derives `Serialize`/`Deserialize` on `ShortestPath` and `RegionDescriptor`. |

pub mod error;
pub mod network;
pub mod provider;
pub mod router;

#[cfg(feature = "osm")]
pub mod osm;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use provider::{NetworkSource, OfflineSource, RegionDescriptor, RoadNetworkProvider};
pub use router::{DijkstraRouter, Router, ShortestPath};

#[cfg(feature = "osm")]
pub use osm::PbfSource;

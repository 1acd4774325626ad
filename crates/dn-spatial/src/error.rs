//! Spatial-subsystem error type.

use thiserror::Error;

use dn_core::NodeId;

/// Errors produced by `dn-spatial`.
///
/// `NodeLookup` and `NoPath` are per-query failures; `NetworkLoad` means no
/// graph is available at all.  The distance matrix builder absorbs all three.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("road network could not be built: {0}")]
    NetworkLoad(String),

    #[error("no network data for place {0:?}")]
    UnknownPlace(String),

    #[error("no road node for ({lat}, {lon}): {reason}")]
    NodeLookup {
        lat:    f64,
        lon:    f64,
        reason: &'static str,
    },

    #[error("no path from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "osm")]
    #[error("OSM parse error: {0}")]
    Osm(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;

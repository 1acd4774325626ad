//! Matrix construction with per-pair fallback.
//!
//! For each `(supply, demand)` pair:
//!
//! 1. snap both coordinates to the nearest road node,
//! 2. run the provider's shortest-path query,
//! 3. on success: `distance_km = length_m / 1000`, route = node polyline;
//!    on any error: straight-line estimate (see
//!    [`DistanceEntry::straight_line`]).
//!
//! Errors never escape.  If the network itself cannot be loaded, every pair
//! takes the fallback and a single warning is logged.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use dn_core::PlannerConfig;
use dn_core::config::DEFAULT_FALLBACK_KM_PER_DEGREE;
use dn_registry::{DemandPoint, PairKey, PointRegistry, SupplyPoint};
use dn_spatial::{NetworkSource, RoadNetwork, RoadNetworkProvider, Router, SpatialError};

use crate::entry::DistanceEntry;
use crate::matrix::DistanceMatrix;

/// Build the matrix with the default fallback factor (111 km per degree).
pub fn build_distance_matrix<S, R>(
    registry: &PointRegistry,
    provider: &RoadNetworkProvider<S, R>,
) -> DistanceMatrix
where
    S: NetworkSource + Sync,
    R: Router,
{
    DistanceMatrixBuilder::default().build(registry, provider)
}

/// Configurable matrix builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceMatrixBuilder {
    km_per_degree: f64,
}

impl Default for DistanceMatrixBuilder {
    fn default() -> Self {
        Self { km_per_degree: DEFAULT_FALLBACK_KM_PER_DEGREE }
    }
}

impl DistanceMatrixBuilder {
    pub fn new(km_per_degree: f64) -> Self {
        Self { km_per_degree }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.fallback_km_per_degree)
    }

    pub fn km_per_degree(&self) -> f64 {
        self.km_per_degree
    }

    /// One entry per `(supply, demand)` pair of `registry`.
    pub fn build<S, R>(&self, registry: &PointRegistry, provider: &RoadNetworkProvider<S, R>) -> DistanceMatrix
    where
        S: NetworkSource + Sync,
        R: Router,
    {
        let supplies = registry.supplies();
        let demands = registry.demands();

        let network = match provider.load() {
            Ok(network) => Some(network),
            Err(e) => {
                warn!(error = %e, pairs = supplies.len() * demands.len(), "using straight-line distances for every pair");
                None
            }
        };

        let pairs: Vec<(&SupplyPoint, &DemandPoint)> = supplies
            .iter()
            .flat_map(|&s| demands.iter().map(move |&d| (s, d)))
            .collect();

        #[cfg(feature = "parallel")]
        let entries: BTreeMap<PairKey, DistanceEntry> = {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|&(s, d)| self.pair_entry(provider, network, s, d))
                .collect::<Vec<_>>()
                .into_iter()
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let entries: BTreeMap<PairKey, DistanceEntry> = pairs
            .iter()
            .map(|&(s, d)| self.pair_entry(provider, network, s, d))
            .collect();

        let matrix = DistanceMatrix::from_entries(entries);
        info!(
            entries = matrix.len(),
            fallbacks = matrix.fallback_count(),
            "distance matrix built"
        );
        matrix
    }

    fn pair_entry<S, R>(
        &self,
        provider: &RoadNetworkProvider<S, R>,
        network: Option<&RoadNetwork>,
        supply: &SupplyPoint,
        demand: &DemandPoint,
    ) -> (PairKey, DistanceEntry)
    where
        S: NetworkSource,
        R: Router,
    {
        let key = PairKey::new(supply.name.as_str(), demand.name.as_str());
        let from = supply.coordinates;
        let to = demand.coordinates;

        let entry = match network {
            None => DistanceEntry::straight_line(from, to, self.km_per_degree),
            Some(network) => match route_pair(provider, network, supply, demand) {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(pair = %key, error = %e, "routing failed, using straight-line distance");
                    DistanceEntry::straight_line(from, to, self.km_per_degree)
                }
            },
        };
        (key, entry)
    }
}

fn route_pair<S, R>(
    provider: &RoadNetworkProvider<S, R>,
    network: &RoadNetwork,
    supply: &SupplyPoint,
    demand: &DemandPoint,
) -> Result<DistanceEntry, SpatialError>
where
    S: NetworkSource,
    R: Router,
{
    let from = provider.nearest_node(network, supply.coordinates)?;
    let to = provider.nearest_node(network, demand.coordinates)?;
    let path = provider.shortest_path(network, from, to)?;
    DistanceEntry::routed(path.length_m, network.polyline(&path.nodes))
        .ok_or(SpatialError::NoPath { from, to })
}

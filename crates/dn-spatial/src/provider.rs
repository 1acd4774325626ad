//! Cached access to the road network of one planning region.
//!
//! Building a regional graph is the single expensive operation of a planning
//! session.  [`RoadNetworkProvider`] builds it lazily on the first
//! [`load`](RoadNetworkProvider::load) and keeps the outcome (graph *or*
//! failure) for the rest of its lifetime.  The graph is never mutated after
//! load, so `&RoadNetwork` is handed out freely.
//!
//! # Load order
//!
//! 1. `source.from_place(region.place)`
//! 2. on failure: `source.from_point(region.center, region.radius_m)`
//! 3. on failure: [`SpatialError::NetworkLoad`], cached and never retried.
//!
//! An empty graph counts as a failure at either step.

use std::sync::OnceLock;

use tracing::{info, warn};

use dn_core::{GeoPoint, NodeId, PlannerConfig};
use dn_core::config::DEFAULT_REGION_RADIUS_M;

use crate::network::RoadNetwork;
use crate::router::{DijkstraRouter, Router, ShortestPath};
use crate::{SpatialError, SpatialResult};

// ── RegionDescriptor ──────────────────────────────────────────────────────────

/// Which region to build the road network for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionDescriptor {
    /// Place name tried first.
    pub place: String,
    /// Center of the fallback disc.
    pub center: GeoPoint,
    /// Radius of the fallback disc in metres.
    pub radius_m: f64,
}

impl RegionDescriptor {
    /// Region with the default 3 km fallback radius.
    pub fn new(place: impl Into<String>, center: GeoPoint) -> Self {
        Self { place: place.into(), center, radius_m: DEFAULT_REGION_RADIUS_M }
    }

    pub fn with_radius(mut self, radius_m: f64) -> Self {
        self.radius_m = radius_m;
        self
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            place:    config.region_place.clone(),
            center:   config.region_center,
            radius_m: config.region_radius_m,
        }
    }
}

// ── NetworkSource ─────────────────────────────────────────────────────────────

/// Where road graphs come from (OSM extract, test fixture, …).
pub trait NetworkSource {
    /// Build the drivable network of a named place.
    fn from_place(&self, place: &str) -> SpatialResult<RoadNetwork>;

    /// Build the drivable network within `radius_m` metres of `center`.
    fn from_point(&self, center: GeoPoint, radius_m: f64) -> SpatialResult<RoadNetwork>;
}

/// A source with no data.  Used by providers wrapping a pre-built graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

impl NetworkSource for OfflineSource {
    fn from_place(&self, place: &str) -> SpatialResult<RoadNetwork> {
        Err(SpatialError::UnknownPlace(place.to_string()))
    }

    fn from_point(&self, center: GeoPoint, _radius_m: f64) -> SpatialResult<RoadNetwork> {
        Err(SpatialError::NetworkLoad(format!("offline source has no data around {center}")))
    }
}

// ── RoadNetworkProvider ───────────────────────────────────────────────────────

/// Loads the region graph at most once and answers routing queries on it.
pub struct RoadNetworkProvider<S: NetworkSource = OfflineSource, R: Router = DijkstraRouter> {
    region: RegionDescriptor,
    source: S,
    router: R,
    graph:  OnceLock<Result<RoadNetwork, String>>,
}

impl<S: NetworkSource> RoadNetworkProvider<S, DijkstraRouter> {
    /// Provider using Dijkstra for shortest paths.
    pub fn new(region: RegionDescriptor, source: S) -> Self {
        Self::with_router(region, source, DijkstraRouter)
    }
}

impl RoadNetworkProvider<OfflineSource, DijkstraRouter> {
    /// Wrap a graph that was built elsewhere.  `load` never touches a source.
    pub fn preloaded(region: RegionDescriptor, network: RoadNetwork) -> Self {
        let provider = Self::new(region, OfflineSource);
        let _ = provider.graph.set(Ok(network));
        provider
    }
}

impl<S: NetworkSource, R: Router> RoadNetworkProvider<S, R> {
    pub fn with_router(region: RegionDescriptor, source: S, router: R) -> Self {
        Self { region, source, router, graph: OnceLock::new() }
    }

    pub fn region(&self) -> &RegionDescriptor {
        &self.region
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// `true` once a load has been attempted, successful or not.
    pub fn is_loaded(&self) -> bool {
        self.graph.get().is_some()
    }

    /// The region graph, building it on first use.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NetworkLoad`] if neither the place nor the fallback
    /// disc produced a usable graph.  The failure is remembered.
    pub fn load(&self) -> SpatialResult<&RoadNetwork> {
        self.graph
            .get_or_init(|| self.build())
            .as_ref()
            .map_err(|reason| SpatialError::NetworkLoad(reason.clone()))
    }

    /// Closest graph vertex to `pos`.
    pub fn nearest_node(&self, network: &RoadNetwork, pos: GeoPoint) -> SpatialResult<NodeId> {
        network.nearest_node(pos)
    }

    /// Least-length path between two graph vertices.
    pub fn shortest_path(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
    ) -> SpatialResult<ShortestPath> {
        self.router.shortest_path(network, from, to)
    }

    /// Load, snap both coordinates, and route between them.
    ///
    /// Returns the path together with the loaded network so callers can
    /// turn node ids into coordinates.
    pub fn route_between(
        &self,
        from: GeoPoint,
        to: GeoPoint,
    ) -> SpatialResult<(&RoadNetwork, ShortestPath)> {
        let network = self.load()?;
        let from_node = self.nearest_node(network, from)?;
        let to_node = self.nearest_node(network, to)?;
        let path = self.shortest_path(network, from_node, to_node)?;
        Ok((network, path))
    }

    fn build(&self) -> Result<RoadNetwork, String> {
        let region = &self.region;

        let place_error = match non_empty(self.source.from_place(&region.place)) {
            Ok(network) => {
                info!(
                    place = %region.place,
                    nodes = network.node_count(),
                    edges = network.edge_count(),
                    "loaded road network by place name"
                );
                return Ok(network);
            }
            Err(e) => e,
        };

        warn!(
            place = %region.place,
            error = %place_error,
            center = %region.center,
            radius_m = region.radius_m,
            "place lookup failed, building road network around region center"
        );

        match non_empty(self.source.from_point(region.center, region.radius_m)) {
            Ok(network) => {
                info!(
                    nodes = network.node_count(),
                    edges = network.edge_count(),
                    "loaded road network around region center"
                );
                Ok(network)
            }
            Err(point_error) => {
                warn!(error = %point_error, "road network unavailable, routing will use straight-line fallback");
                Err(format!("place: {place_error}; center: {point_error}"))
            }
        }
    }
}

fn non_empty(result: SpatialResult<RoadNetwork>) -> SpatialResult<RoadNetwork> {
    match result {
        Ok(network) if network.is_empty() => {
            Err(SpatialError::NetworkLoad("source returned an empty graph".to_string()))
        }
        other => other,
    }
}

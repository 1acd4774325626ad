//! Unit tests for dn-spatial.
//!
//! All tests use hand-crafted networks so they run without any OSM file.

#[cfg(test)]
mod helpers {
    use dn_core::{GeoPoint, NodeId};
    use crate::{RoadNetwork, RoadNetworkBuilder};

    /// Small grid network.
    ///
    /// Nodes (lat, lon):
    ///   0:(0,0)  1:(0,1)  2:(0,2)
    ///   3:(1,0)           4:(1,2)
    ///
    /// Two-way roads: 0-1, 1-2, 2-4 (100 m each), 0-3 (500 m), 3-4 (100 m).
    /// Shortest 0→4 is 0→1→2→4 = 300 m; the detour 0→3→4 is 600 m.
    pub fn grid_network() -> (RoadNetwork, [NodeId; 5]) {
        let mut b = RoadNetworkBuilder::new();

        let n0 = b.add_node(GeoPoint::new(0.0, 0.0));
        let n1 = b.add_node(GeoPoint::new(0.0, 1.0));
        let n2 = b.add_node(GeoPoint::new(0.0, 2.0));
        let n3 = b.add_node(GeoPoint::new(1.0, 0.0));
        let n4 = b.add_node(GeoPoint::new(1.0, 2.0));

        b.add_road(n0, n1, 100.0);
        b.add_road(n1, n2, 100.0);
        b.add_road(n2, n4, 100.0);
        b.add_road(n0, n3, 500.0);
        b.add_road(n3, n4, 100.0);

        (b.build(), [n0, n1, n2, n3, n4])
    }

    /// Two equal-length routes 0→1→3 and 0→2→3 (200 m each).
    pub fn diamond_network() -> (RoadNetwork, [NodeId; 4]) {
        let mut b = RoadNetworkBuilder::new();
        let n0 = b.add_node(GeoPoint::new(0.0, 0.0));
        let n1 = b.add_node(GeoPoint::new(0.1, 0.1));
        let n2 = b.add_node(GeoPoint::new(-0.1, 0.1));
        let n3 = b.add_node(GeoPoint::new(0.0, 0.2));
        b.add_road(n0, n1, 100.0);
        b.add_road(n0, n2, 100.0);
        b.add_road(n1, n3, 100.0);
        b.add_road(n2, n3, 100.0);
        (b.build(), [n0, n1, n2, n3])
    }
}

// ── Builder & network structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use dn_core::GeoPoint;
    use crate::RoadNetworkBuilder;

    #[test]
    fn empty_build() {
        let net = RoadNetworkBuilder::new().build();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn csr_out_edges() {
        let (net, [n0, n1, n2, n3, n4]) = super::helpers::grid_network();
        assert_eq!(net.out_degree(n0), 2);
        assert_eq!(net.out_degree(n1), 2);
        assert_eq!(net.out_degree(n2), 2);
        assert_eq!(net.out_degree(n3), 2);
        assert_eq!(net.out_degree(n4), 2);
        for e in net.out_edges(n0) {
            assert_eq!(net.edge_from[e.index()], n0);
        }
    }

    #[test]
    fn directed_only_edge() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        b.add_directed_edge(a, c, 100.0);
        let net = b.build();
        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.out_degree(a), 1);
        assert_eq!(net.out_degree(c), 0);
    }

    #[test]
    fn measured_road_uses_great_circle_length() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(1.0, -75.0));
        let c = b.add_node(GeoPoint::new(1.01, -75.0));
        let len = b.add_measured_road(a, c);
        assert!((len - 1_112.0).abs() < 5.0, "got {len}");
        let net = b.build();
        assert_eq!(net.edge_length_m, vec![len, len]);
    }

    #[test]
    fn polyline_follows_nodes() {
        let (net, [n0, n1, n2, ..]) = super::helpers::grid_network();
        let line = net.polyline(&[n0, n1, n2]);
        assert_eq!(line, vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(0.0, 2.0),
        ]);
    }
}

// ── Nearest node ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod nearest {
    use dn_core::GeoPoint;
    use crate::{RoadNetworkBuilder, SpatialError};

    #[test]
    fn exact_position() {
        let (net, [n0, ..]) = super::helpers::grid_network();
        assert_eq!(net.nearest_node(GeoPoint::new(0.0, 0.0)).unwrap(), n0);
    }

    #[test]
    fn closest_wins() {
        let (net, [n0, n1, ..]) = super::helpers::grid_network();
        assert_eq!(net.nearest_node(GeoPoint::new(0.0, 0.4)).unwrap(), n0);
        assert_eq!(net.nearest_node(GeoPoint::new(0.0, 0.6)).unwrap(), n1);
    }

    #[test]
    fn empty_network_is_lookup_error() {
        let net = RoadNetworkBuilder::new().build();
        let err = net.nearest_node(GeoPoint::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, SpatialError::NodeLookup { .. }));
    }

    #[test]
    fn invalid_coordinate_is_lookup_error() {
        let (net, _) = super::helpers::grid_network();
        for pos in [GeoPoint::new(f64::NAN, 0.0), GeoPoint::new(0.0, 200.0), GeoPoint::new(-95.0, 0.0)] {
            assert!(matches!(net.nearest_node(pos), Err(SpatialError::NodeLookup { .. })));
        }
    }
}

// ── Dijkstra routing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use dn_core::{GeoPoint, NodeId};
    use crate::{DijkstraRouter, RoadNetworkBuilder, Router, SpatialError};

    #[test]
    fn trivial_same_node() {
        let (net, [n0, ..]) = super::helpers::grid_network();
        let p = DijkstraRouter.shortest_path(&net, n0, n0).unwrap();
        assert!(p.is_trivial());
        assert_eq!(p.nodes, vec![n0]);
        assert_eq!(p.length_m, 0.0);
    }

    #[test]
    fn shortest_path_correct() {
        let (net, [n0, n1, n2, _, n4]) = super::helpers::grid_network();
        let p = DijkstraRouter.shortest_path(&net, n0, n4).unwrap();
        assert_eq!(p.nodes, vec![n0, n1, n2, n4]);
        assert_eq!(p.edges.len(), 3);
        assert!((p.length_m - 300.0).abs() < 1e-9);
        assert!((p.length_km() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn ties_are_deterministic() {
        let (net, [n0, n1, _, n3]) = super::helpers::diamond_network();
        let first = DijkstraRouter.shortest_path(&net, n0, n3).unwrap();
        for _ in 0..10 {
            assert_eq!(DijkstraRouter.shortest_path(&net, n0, n3).unwrap(), first);
        }
        // Equal costs: the lower NodeId is settled first and reaches n3 first.
        assert_eq!(first.nodes, vec![n0, n1, n3]);
        assert!((first.length_m - 200.0).abs() < 1e-9);
    }

    #[test]
    fn no_path_disconnected() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(1.0, 0.0));
        let net = b.build();
        let result = DijkstraRouter.shortest_path(&net, a, c);
        assert!(matches!(result, Err(SpatialError::NoPath { .. })));
    }

    #[test]
    fn one_way_blocks_return() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        b.add_directed_edge(a, c, 100.0);
        let net = b.build();
        assert!(DijkstraRouter.shortest_path(&net, a, c).is_ok());
        assert!(DijkstraRouter.shortest_path(&net, c, a).is_err());
    }

    #[test]
    fn unknown_node_is_rejected() {
        let (net, [n0, ..]) = super::helpers::grid_network();
        let err = DijkstraRouter.shortest_path(&net, n0, NodeId(99)).unwrap_err();
        assert!(matches!(err, SpatialError::NodeNotFound(NodeId(99))));
    }
}

// ── Provider: caching and fallback order ──────────────────────────────────────

#[cfg(test)]
mod provider {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use dn_core::{GeoPoint, PlannerConfig};
    use crate::{
        NetworkSource, RegionDescriptor, RoadNetwork, RoadNetworkProvider, SpatialError,
        SpatialResult,
    };

    /// Counts calls and serves the grid network from whichever entry point
    /// is enabled.
    #[derive(Default)]
    struct CountingSource {
        place_ok:    bool,
        point_ok:    bool,
        place_calls: AtomicUsize,
        point_calls: AtomicUsize,
    }

    impl NetworkSource for CountingSource {
        fn from_place(&self, place: &str) -> SpatialResult<RoadNetwork> {
            self.place_calls.fetch_add(1, Ordering::SeqCst);
            if self.place_ok {
                Ok(super::helpers::grid_network().0)
            } else {
                Err(SpatialError::UnknownPlace(place.to_string()))
            }
        }

        fn from_point(&self, _center: GeoPoint, radius_m: f64) -> SpatialResult<RoadNetwork> {
            self.point_calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(radius_m, 3_000.0);
            if self.point_ok {
                Ok(super::helpers::grid_network().0)
            } else {
                Ok(RoadNetwork::empty())
            }
        }
    }

    fn region() -> RegionDescriptor {
        RegionDescriptor::from_config(&PlannerConfig::florencia())
    }

    #[test]
    fn place_success_skips_point() {
        let source = CountingSource { place_ok: true, ..Default::default() };
        let provider = RoadNetworkProvider::new(region(), source);
        assert!(!provider.is_loaded());
        assert_eq!(provider.load().unwrap().node_count(), 5);
        assert!(provider.is_loaded());
        assert_eq!(provider.source_calls(), (1, 0));
    }

    #[test]
    fn falls_back_to_point() {
        let source = CountingSource { point_ok: true, ..Default::default() };
        let provider = RoadNetworkProvider::new(region(), source);
        assert_eq!(provider.load().unwrap().node_count(), 5);
    }

    #[test]
    fn graph_is_built_once() {
        let source = CountingSource { point_ok: true, ..Default::default() };
        let provider = RoadNetworkProvider::new(region(), source);
        for _ in 0..3 {
            provider.load().unwrap();
        }
        assert_eq!(provider.source_calls(), (1, 1));
    }

    #[test]
    fn total_failure_is_cached_network_load_error() {
        let provider = RoadNetworkProvider::new(region(), CountingSource::default());
        assert!(matches!(provider.load(), Err(SpatialError::NetworkLoad(_))));
        assert!(matches!(provider.load(), Err(SpatialError::NetworkLoad(_))));
        assert_eq!(provider.source_calls(), (1, 1));
    }

    #[test]
    fn preloaded_routes_between_coordinates() {
        let (net, _) = super::helpers::grid_network();
        let provider = RoadNetworkProvider::preloaded(region(), net);
        let (network, path) = provider
            .route_between(GeoPoint::new(0.01, 0.01), GeoPoint::new(0.99, 2.01))
            .unwrap();
        assert!((path.length_m - 300.0).abs() < 1e-9);
        assert_eq!(network.polyline(&path.nodes).len(), 4);
    }

    impl RoadNetworkProvider<CountingSource> {
        fn source_calls(&self) -> (usize, usize) {
            let s = self.source();
            (s.place_calls.load(Ordering::SeqCst), s.point_calls.load(Ordering::SeqCst))
        }
    }
}

// ── Serde (feature = "serde") ─────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod serde_derives {
    use dn_core::PlannerConfig;
    use crate::{DijkstraRouter, RegionDescriptor, Router, ShortestPath};

    #[test]
    fn region_descriptor_fields() {
        let region = RegionDescriptor::from_config(&PlannerConfig::florencia()).with_radius(2_500.0);
        let json = serde_json::to_value(&region).unwrap();
        assert_eq!(json["place"], "Florencia, Caquetá, Colombia");
        assert_eq!(json["radius_m"], 2_500.0);
        assert_eq!(json["center"]["lat"], 1.6145);

        let back: RegionDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, region);
    }

    #[test]
    fn shortest_path_lists_node_ids() {
        let (net, [n0, _, _, _, n4]) = super::helpers::grid_network();
        let path = DijkstraRouter.shortest_path(&net, n0, n4).unwrap();
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json["nodes"], serde_json::json!([0, 1, 2, 4]));
        assert_eq!(json["edges"].as_array().unwrap().len(), 3);

        let back: ShortestPath = serde_json::from_value(json).unwrap();
        assert_eq!(back, path);
    }
}

// ── OSM tag handling (feature = "osm") ────────────────────────────────────────

#[cfg(all(test, feature = "osm"))]
mod osm_tags {
    use dn_core::GeoPoint;
    use crate::osm::{add_segment, is_drivable, way_direction, WayDirection};
    use crate::{DijkstraRouter, RoadNetworkBuilder, Router};

    #[test]
    fn oneway_tag_values() {
        assert_eq!(way_direction("residential", &[]), WayDirection::Both);
        assert_eq!(way_direction("residential", &[("oneway", "yes")]), WayDirection::Forward);
        assert_eq!(way_direction("residential", &[("oneway", "-1")]), WayDirection::Backward);
        assert_eq!(way_direction("motorway", &[]), WayDirection::Forward);
        assert_eq!(way_direction("motorway_link", &[("oneway", "no")]), WayDirection::Both);
    }

    #[test]
    fn reverse_oneway_only_allows_travel_against_node_order() {
        let mut b = RoadNetworkBuilder::new();
        let first = b.add_node(GeoPoint::new(1.610, -75.610));
        let second = b.add_node(GeoPoint::new(1.611, -75.610));
        add_segment(&mut b, first, second, way_direction("primary", &[("oneway", "-1")]));
        let net = b.build();

        assert_eq!(net.edge_count(), 1);
        assert!(DijkstraRouter.shortest_path(&net, second, first).is_ok());
        assert!(DijkstraRouter.shortest_path(&net, first, second).is_err());
    }

    #[test]
    fn two_way_segment_adds_both_edges() {
        let mut b = RoadNetworkBuilder::new();
        let first = b.add_node(GeoPoint::new(1.610, -75.610));
        let second = b.add_node(GeoPoint::new(1.611, -75.610));
        add_segment(&mut b, first, second, WayDirection::Both);
        assert_eq!(b.build().edge_count(), 2);
    }

    #[test]
    fn footways_are_not_drivable() {
        assert!(!is_drivable("footway"));
        assert!(is_drivable("residential"));
    }
}

//! Unit tests for dn-matrix.

#[cfg(test)]
mod helpers {
    use dn_core::{GeoPoint, PlannerConfig};
    use dn_registry::{Point, PointRegistry};
    use dn_spatial::{
        OfflineSource, RegionDescriptor, RoadNetwork, RoadNetworkBuilder, RoadNetworkProvider,
    };

    /// A 1 km road from (1.60, -75.60) to (1.61, -75.60), with a separate
    /// island node at (1.70, -75.70) that no road reaches.
    pub fn network() -> RoadNetwork {
        let mut b = RoadNetworkBuilder::new();
        let south = b.add_node(GeoPoint::new(1.60, -75.60));
        let mid = b.add_node(GeoPoint::new(1.605, -75.60));
        let north = b.add_node(GeoPoint::new(1.61, -75.60));
        b.add_node(GeoPoint::new(1.70, -75.70));
        b.add_road(south, mid, 500.0);
        b.add_road(mid, north, 500.0);
        b.build()
    }

    pub fn region() -> RegionDescriptor {
        RegionDescriptor::from_config(&PlannerConfig::florencia())
    }

    pub fn provider() -> RoadNetworkProvider {
        RoadNetworkProvider::preloaded(region(), network())
    }

    pub fn offline_provider() -> RoadNetworkProvider {
        RoadNetworkProvider::new(region(), OfflineSource)
    }

    pub fn registry() -> PointRegistry {
        PointRegistry::from_points([
            Point::supply("S1", GeoPoint::new(1.6001, -75.6001), 100.0, 1.0),
            Point::supply("S2", GeoPoint::new(1.6099, -75.5999), 100.0, 1.0),
            Point::demand("D1", GeoPoint::new(1.6100, -75.6000), 50.0, 1.0),
            Point::demand("D2", GeoPoint::new(1.7000, -75.7000), 50.0, 1.0),
            Point::demand("D3", GeoPoint::new(1.6050, -75.6000), 50.0, 1.0),
        ])
        .unwrap()
    }
}

#[cfg(test)]
mod entries {
    use dn_core::GeoPoint;
    use crate::DistanceEntry;

    #[test]
    fn straight_line_uses_degree_distance() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.03, 0.04);
        let e = DistanceEntry::straight_line(a, b, 111.0);
        assert!((e.distance_km - 0.05 * 111.0).abs() < 1e-9);
        assert_eq!(e.route, vec![a, b]);
        assert!(e.is_fallback);
    }

    #[test]
    fn single_node_route_is_widened() {
        let p = GeoPoint::new(1.0, 1.0);
        let e = DistanceEntry::routed(0.0, vec![p]).unwrap();
        assert_eq!(e.route, vec![p, p]);
        assert_eq!(e.distance_km, 0.0);
        assert!(!e.is_fallback);
    }

    #[test]
    fn empty_route_is_rejected() {
        assert_eq!(DistanceEntry::routed(250.0, Vec::new()), None);
    }
}

#[cfg(test)]
mod build {
    use dn_core::GeoPoint;
    use dn_registry::{Point, PointRegistry};
    use dn_spatial::{RoadNetwork, RoadNetworkProvider, SpatialError};
    use crate::{build_distance_matrix, DistanceEntry, DistanceMatrixBuilder};

    #[test]
    fn one_entry_per_pair() {
        let reg = super::helpers::registry();
        let matrix = build_distance_matrix(&reg, &super::helpers::provider());
        assert_eq!(matrix.len(), 2 * 3);
        for (_, entry) in matrix.iter() {
            assert!(entry.distance_km >= 0.0);
            assert!(entry.route.len() >= 2);
        }
    }

    #[test]
    fn routed_pair_uses_road_length() {
        let reg = super::helpers::registry();
        let matrix = build_distance_matrix(&reg, &super::helpers::provider());
        let e = matrix.get("S1", "D1").unwrap();
        assert!(!e.is_fallback);
        assert!((e.distance_km - 1.0).abs() < 1e-9);
        assert_eq!(e.route.len(), 3);
        assert_eq!(e.route[0], GeoPoint::new(1.60, -75.60));
        assert_eq!(e.route[2], GeoPoint::new(1.61, -75.60));
    }

    #[test]
    fn same_node_pair_has_zero_length_and_two_waypoints() {
        let reg = super::helpers::registry();
        let matrix = build_distance_matrix(&reg, &super::helpers::provider());
        let e = matrix.get("S2", "D1").unwrap();
        assert!(!e.is_fallback);
        assert_eq!(e.distance_km, 0.0);
        assert_eq!(e.route.len(), 2);
    }

    #[test]
    fn unreachable_pair_falls_back() {
        let reg = super::helpers::registry();
        let matrix = build_distance_matrix(&reg, &super::helpers::provider());
        let s1 = reg.supply("S1").unwrap().coordinates;
        let d2 = reg.demand("D2").unwrap().coordinates;
        let e = matrix.get("S1", "D2").unwrap();
        assert!(e.is_fallback);
        assert_eq!(e, &DistanceEntry::straight_line(s1, d2, 111.0));
        assert_eq!(matrix.fallback_count(), 2); // S1→D2, S2→D2
    }

    #[test]
    fn missing_network_falls_back_everywhere() {
        let reg = super::helpers::registry();
        let matrix = build_distance_matrix(&reg, &super::helpers::offline_provider());
        assert_eq!(matrix.len(), 6);
        assert_eq!(matrix.fallback_count(), 6);
        for (key, entry) in matrix.iter() {
            let a = reg.supply(&key.supply).unwrap().coordinates;
            let b = reg.demand(&key.demand).unwrap().coordinates;
            assert!((entry.distance_km - a.degree_distance(b) * 111.0).abs() < 1e-9);
            assert_eq!(entry.route, vec![a, b]);
        }
    }

    #[test]
    fn empty_graph_lookup_failure_falls_back_everywhere() {
        let reg = super::helpers::registry();
        let provider = RoadNetworkProvider::preloaded(super::helpers::region(), RoadNetwork::empty());
        assert!(matches!(
            provider.nearest_node(provider.load().unwrap(), GeoPoint::new(1.6, -75.6)),
            Err(SpatialError::NodeLookup { .. })
        ));

        let matrix = build_distance_matrix(&reg, &provider);
        assert_eq!(matrix.len(), 2 * 3);
        assert_eq!(matrix.fallback_count(), 2 * 3);
        for (key, entry) in matrix.iter() {
            let a = reg.supply(&key.supply).unwrap().coordinates;
            let b = reg.demand(&key.demand).unwrap().coordinates;
            assert!((entry.distance_km - a.degree_distance(b) * 111.0).abs() < 1e-9);
            assert_eq!(entry.route, vec![a, b]);
        }
    }

    #[test]
    fn custom_fallback_factor() {
        let reg = super::helpers::registry();
        let matrix = DistanceMatrixBuilder::new(100.0).build(&reg, &super::helpers::offline_provider());
        let a = reg.supply("S1").unwrap().coordinates;
        let b = reg.demand("D3").unwrap().coordinates;
        let e = matrix.get("S1", "D3").unwrap();
        assert!((e.distance_km - a.degree_distance(b) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn no_demands_gives_empty_matrix() {
        let reg = PointRegistry::from_points([
            Point::supply("S", GeoPoint::new(1.6, -75.6), 1.0, 0.0),
        ])
        .unwrap();
        assert!(build_distance_matrix(&reg, &super::helpers::provider()).is_empty());
    }

    #[test]
    fn serializes_as_rows() {
        let reg = super::helpers::registry();
        let matrix = build_distance_matrix(&reg, &super::helpers::offline_provider());
        let json = serde_json::to_value(&matrix).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0]["supply"], "S1");
        assert_eq!(rows[0]["demand"], "D1");
        assert_eq!(rows[0]["entry"]["is_fallback"], true);
    }
}

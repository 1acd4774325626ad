//! One cell of the distance matrix.

use serde::Serialize;

use dn_core::GeoPoint;

/// Distance and polyline from one supply to one demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceEntry {
    /// Road distance, or the straight-line estimate when `is_fallback`.
    pub distance_km: f64,
    /// Waypoints from supply to demand; never fewer than two.
    pub route: Vec<GeoPoint>,
    /// `true` when routing failed and the estimate was used.
    pub is_fallback: bool,
}

impl DistanceEntry {
    /// Entry for a routed path, or `None` if `route` has no waypoints.
    ///
    /// A path that collapses to a single node is widened to two identical
    /// waypoints so the polyline stays drawable.
    pub(crate) fn routed(length_m: f64, mut route: Vec<GeoPoint>) -> Option<Self> {
        let first = *route.first()?;
        if route.len() == 1 {
            route.push(first);
        }
        Some(Self { distance_km: length_m.max(0.0) / 1_000.0, route, is_fallback: false })
    }

    /// Straight-line estimate: planar degree distance × `km_per_degree`,
    /// drawn as the direct segment `[from, to]`.
    pub fn straight_line(from: GeoPoint, to: GeoPoint, km_per_degree: f64) -> Self {
        Self {
            distance_km: from.degree_distance(to) * km_per_degree,
            route: vec![from, to],
            is_fallback: true,
        }
    }
}

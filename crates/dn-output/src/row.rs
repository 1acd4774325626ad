//! Plain data rows produced from an optimization result.

use serde::Serialize;

use dn_core::GeoPoint;
use dn_registry::Role;

/// One assignment with its cost and drawable route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostedRoute {
    pub supply:      String,
    pub demand:      String,
    pub quantity:    f64,
    /// `quantity × (supply unit cost + demand unit cost)`.
    pub cost:        f64,
    pub distance_km: f64,
    /// Polyline from supply to demand; at least two points.
    pub route:       Vec<GeoPoint>,
    pub is_fallback: bool,
}

/// Flat export row, one per non-zero assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentRow {
    pub source:      String,
    pub destination: String,
    pub quantity:    f64,
    /// 0 when the matrix has no entry for the pair.
    pub distance_km: f64,
    pub cost:        f64,
}

impl From<&CostedRoute> for AssignmentRow {
    fn from(r: &CostedRoute) -> Self {
        Self {
            source:      r.supply.clone(),
            destination: r.demand.clone(),
            quantity:    r.quantity,
            distance_km: r.distance_km,
            cost:        r.cost,
        }
    }
}

/// Per-point flow summary.  `flow` is sent (supply) or received (demand);
/// `limit` is capacity or demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilizationRow {
    pub name:    String,
    pub role:    Role,
    pub flow:    f64,
    pub limit:   f64,
    pub percent: f64,
}

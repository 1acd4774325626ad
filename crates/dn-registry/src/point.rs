//! Supply and demand locations.
//!
//! A point is either a supply (bounded outgoing flow) or a demand (required
//! incoming flow).  The variant carries the one amount that makes sense for
//! its role, so a supply can never hold a demand figure and vice versa.

use serde::{Deserialize, Serialize};

use dn_core::GeoPoint;

use crate::{RegistryError, RegistryResult};

/// Role of a point in the transportation problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Supply,
    Demand,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Supply => f.write_str("supply"),
            Role::Demand => f.write_str("demand"),
        }
    }
}

/// A production site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyPoint {
    pub name:        String,
    pub coordinates: GeoPoint,
    /// Upper bound on total outgoing flow.
    pub capacity:    f64,
    /// Cost per unit shipped out of this site.
    pub unit_cost:   f64,
}

/// A distribution point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandPoint {
    pub name:        String,
    pub coordinates: GeoPoint,
    /// Lower bound on total incoming flow.
    pub demand:      f64,
    /// Cost per unit received at this site.
    pub unit_cost:   f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Point {
    Supply(SupplyPoint),
    Demand(DemandPoint),
}

impl Point {
    pub fn supply(name: impl Into<String>, coordinates: GeoPoint, capacity: f64, unit_cost: f64) -> Self {
        Point::Supply(SupplyPoint { name: name.into(), coordinates, capacity, unit_cost })
    }

    pub fn demand(name: impl Into<String>, coordinates: GeoPoint, demand: f64, unit_cost: f64) -> Self {
        Point::Demand(DemandPoint { name: name.into(), coordinates, demand, unit_cost })
    }

    pub fn name(&self) -> &str {
        match self {
            Point::Supply(s) => &s.name,
            Point::Demand(d) => &d.name,
        }
    }

    pub fn coordinates(&self) -> GeoPoint {
        match self {
            Point::Supply(s) => s.coordinates,
            Point::Demand(d) => d.coordinates,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Point::Supply(_) => Role::Supply,
            Point::Demand(_) => Role::Demand,
        }
    }

    pub fn unit_cost(&self) -> f64 {
        match self {
            Point::Supply(s) => s.unit_cost,
            Point::Demand(d) => d.unit_cost,
        }
    }

    /// Capacity of a supply or requirement of a demand.
    pub fn amount(&self) -> f64 {
        match self {
            Point::Supply(s) => s.capacity,
            Point::Demand(d) => d.demand,
        }
    }

    /// Reject empty names, invalid coordinates, and negative or non-finite
    /// amounts and costs.
    pub fn validate(&self) -> RegistryResult<()> {
        let invalid = |reason: String| RegistryError::InvalidPoint {
            name: self.name().to_string(),
            reason,
        };

        if self.name().trim().is_empty() {
            return Err(invalid("name is empty".to_string()));
        }
        if !self.coordinates().is_valid() {
            return Err(invalid(format!("coordinates {} are out of range", self.coordinates())));
        }
        let amount_label = match self.role() {
            Role::Supply => "capacity",
            Role::Demand => "demand",
        };
        if !(self.amount().is_finite() && self.amount() >= 0.0) {
            return Err(invalid(format!("{amount_label} must be non-negative, got {}", self.amount())));
        }
        if !(self.unit_cost().is_finite() && self.unit_cost() >= 0.0) {
            return Err(invalid(format!("unit cost must be non-negative, got {}", self.unit_cost())));
        }
        Ok(())
    }
}

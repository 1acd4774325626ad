//! Planner configuration.
//!
//! Typically loaded from a JSON file by the application crate (feature
//! `serde`) and passed to `dn_planner::Planner`.  Every field has a default,
//! so a partial file only needs to name what it overrides.

use crate::GeoPoint;
#[cfg(feature = "serde")]
use crate::{CoreError, CoreResult};

/// Radius in metres used when the road network has to be built around the
/// region center instead of from the place name.
pub const DEFAULT_REGION_RADIUS_M: f64 = 3_000.0;

/// Flows at or below this quantity are treated as solver noise.
pub const DEFAULT_ASSIGNMENT_TOLERANCE: f64 = 0.001;

/// Kilometres per degree used by the straight-line distance fallback.
pub const DEFAULT_FALLBACK_KM_PER_DEGREE: f64 = 111.0;

/// Top-level configuration for one planning session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Place name handed to the network source first
    /// (e.g. `"Florencia, Caquetá, Colombia"`).
    pub region_place: String,

    /// Center of the fallback region.
    pub region_center: GeoPoint,

    /// Radius of the fallback region in metres.
    pub region_radius_m: f64,

    /// Minimum quantity reported as an assignment.
    pub assignment_tolerance: f64,

    /// Degree-to-kilometre factor of the straight-line fallback.
    pub fallback_km_per_degree: f64,
}

impl PlannerConfig {
    /// Florencia, Caquetá (Colombia) with a 3 km fallback radius.
    pub fn florencia() -> Self {
        Self {
            region_place:           "Florencia, Caquetá, Colombia".to_string(),
            region_center:          GeoPoint::new(1.6145, -75.6062),
            region_radius_m:        DEFAULT_REGION_RADIUS_M,
            assignment_tolerance:   DEFAULT_ASSIGNMENT_TOLERANCE,
            fallback_km_per_degree: DEFAULT_FALLBACK_KM_PER_DEGREE,
        }
    }

    /// Check ranges that would otherwise surface as confusing solver or
    /// routing behaviour later on.
    pub fn validate(&self) -> Result<(), String> {
        if !self.region_center.is_valid() {
            return Err(format!("region_center {} is not a valid coordinate", self.region_center));
        }
        if !(self.region_radius_m.is_finite() && self.region_radius_m > 0.0) {
            return Err(format!("region_radius_m must be positive, got {}", self.region_radius_m));
        }
        if !(self.assignment_tolerance.is_finite() && self.assignment_tolerance >= 0.0) {
            return Err(format!(
                "assignment_tolerance must be non-negative, got {}",
                self.assignment_tolerance
            ));
        }
        if !(self.fallback_km_per_degree.is_finite() && self.fallback_km_per_degree > 0.0) {
            return Err(format!(
                "fallback_km_per_degree must be positive, got {}",
                self.fallback_km_per_degree
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: PlannerConfig =
            serde_json::from_str(json).map_err(|e| CoreError::Parse(e.to_string()))?;
        config.validate().map_err(CoreError::Config)?;
        Ok(config)
    }

    /// Like [`from_json_str`](Self::from_json_str) but reads `path` first.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: &std::path::Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::florencia()
    }
}

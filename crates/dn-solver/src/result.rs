//! Outcome of one solve.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use dn_registry::PairKey;
use dn_registry::pair::serialize_pair_rows;

/// Solver outcome.  Every variant is a normal, reportable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    /// The solver stopped without a definitive answer (numerical trouble,
    /// limits, internal error).
    Undefined,
}

impl SolveStatus {
    pub fn is_optimal(self) -> bool {
        self == SolveStatus::Optimal
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded => "Unbounded",
            SolveStatus::Undefined => "Undefined",
        };
        f.write_str(s)
    }
}

/// How much of a supply's capacity the plan uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Utilization {
    pub sent:     f64,
    pub capacity: f64,
    /// `sent / capacity` in percent, capped at 100; 0 for zero capacity.
    pub percent:  f64,
}

/// How much of a demand's requirement the plan covers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Satisfaction {
    pub received: f64,
    pub demand:   f64,
    /// `received / demand` in percent, capped at 100; 0 for zero demand.
    pub percent:  f64,
}

/// Capped percentage with a zero guard on the denominator.
pub(crate) fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole * 100.0).min(100.0)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    pub status: SolveStatus,

    /// Σ quantity × (supply unit cost + demand unit cost) over `assignments`.
    pub total_cost: f64,

    /// Non-negligible flows only.
    #[serde(serialize_with = "assignment_rows")]
    pub assignments: BTreeMap<PairKey, f64>,

    pub supply_utilization: BTreeMap<String, Utilization>,

    pub demand_satisfaction: BTreeMap<String, Satisfaction>,
}

impl OptimizationResult {
    /// Assigned quantity for a pair; 0 if the pair carries no flow.
    pub fn quantity(&self, supply: &str, demand: &str) -> f64 {
        self.assignments
            .get(&PairKey::new(supply, demand))
            .copied()
            .unwrap_or(0.0)
    }

    /// Σ of all reported assignments.
    pub fn total_flow(&self) -> f64 {
        self.assignments.values().sum()
    }
}

fn assignment_rows<S: Serializer>(map: &BTreeMap<PairKey, f64>, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_pair_rows(map, "quantity", serializer)
}

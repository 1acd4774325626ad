//! Transportation LP: formulation, solve, and solution extraction.
//!
//! Columns are laid out supply-major in a flat `Vec<Col>`:
//! `x[s, d] = cols[s * n_demand + d]`.  Rows are added in registry order,
//! capacities first, then demands.

use std::collections::BTreeMap;

use highs::{Col, HighsModelStatus, RowProblem, Sense};
use tracing::{debug, info, warn};

use dn_core::PlannerConfig;
use dn_core::config::DEFAULT_ASSIGNMENT_TOLERANCE;
use dn_registry::{DemandPoint, PairKey, PointRegistry, SupplyPoint};

use crate::result::{percent_of, OptimizationResult, Satisfaction, SolveStatus, Utilization};
use crate::{SolverError, SolverResult};

/// Solve with the default assignment tolerance (0.001).
pub fn optimize(registry: &PointRegistry) -> SolverResult<OptimizationResult> {
    TransportationSolver::default().solve(registry)
}

/// `Σ demand − Σ capacity` when positive.  Advisory only: the LP is still
/// solved and reports `Infeasible` on its own.
pub fn capacity_shortfall(registry: &PointRegistry) -> Option<f64> {
    let gap = registry.total_demand() - registry.total_capacity();
    (gap > 0.0).then_some(gap)
}

/// Both roles must be present before a solve or any network work.
///
/// # Errors
///
/// [`SolverError::InsufficientPoints`] with the count of each role.
pub fn require_both_roles(registry: &PointRegistry) -> SolverResult<()> {
    let supplies = registry.supplies().len();
    let demands = registry.demands().len();
    if supplies == 0 || demands == 0 {
        return Err(SolverError::InsufficientPoints { supplies, demands });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportationSolver {
    /// Flows at or below this value are dropped from the result.
    tolerance: f64,
}

impl Default for TransportationSolver {
    fn default() -> Self {
        Self { tolerance: DEFAULT_ASSIGNMENT_TOLERANCE }
    }
}

impl TransportationSolver {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.assignment_tolerance)
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Minimum-cost assignment of supply capacity to demand.
    ///
    /// # Errors
    ///
    /// [`SolverError::InsufficientPoints`] when either role is empty.  Every
    /// other outcome, including infeasibility, is an `Ok` result carrying the
    /// corresponding [`SolveStatus`].
    pub fn solve(&self, registry: &PointRegistry) -> SolverResult<OptimizationResult> {
        require_both_roles(registry)?;
        let supplies = registry.supplies();
        let demands = registry.demands();

        if let Some(gap) = capacity_shortfall(registry) {
            warn!(
                shortfall = gap,
                capacity = registry.total_capacity(),
                demand = registry.total_demand(),
                "total capacity is below total demand"
            );
        }

        let (status, flows) = solve_lp(&supplies, &demands);
        let result = self.extract(status, &supplies, &demands, &flows);
        info!(
            status = %result.status,
            total_cost = result.total_cost,
            assignments = result.assignments.len(),
            "transportation problem solved"
        );
        Ok(result)
    }

    fn extract(
        &self,
        status: SolveStatus,
        supplies: &[&SupplyPoint],
        demands: &[&DemandPoint],
        flows: &[f64],
    ) -> OptimizationResult {
        let n_d = demands.len();

        let mut assignments = BTreeMap::new();
        let mut total_cost = 0.0;
        for (si, s) in supplies.iter().enumerate() {
            for (di, d) in demands.iter().enumerate() {
                let q = flows[si * n_d + di];
                if q > self.tolerance {
                    total_cost += q * (s.unit_cost + d.unit_cost);
                    assignments.insert(PairKey::new(s.name.as_str(), d.name.as_str()), q);
                }
            }
        }

        let supply_utilization = supplies
            .iter()
            .enumerate()
            .map(|(si, s)| {
                let sent: f64 = flows[si * n_d..(si + 1) * n_d].iter().sum();
                let util = Utilization {
                    sent,
                    capacity: s.capacity,
                    percent: percent_of(sent, s.capacity),
                };
                (s.name.clone(), util)
            })
            .collect();

        let demand_satisfaction = demands
            .iter()
            .enumerate()
            .map(|(di, d)| {
                let received: f64 = (0..supplies.len()).map(|si| flows[si * n_d + di]).sum();
                let sat = Satisfaction {
                    received,
                    demand: d.demand,
                    percent: percent_of(received, d.demand),
                };
                (d.name.clone(), sat)
            })
            .collect();

        OptimizationResult { status, total_cost, assignments, supply_utilization, demand_satisfaction }
    }
}

/// Build and run the LP.  Returns the mapped status and one flow per column
/// (all zeros if HiGHS produced no solution).  Negative round-off is clamped.
fn solve_lp(supplies: &[&SupplyPoint], demands: &[&DemandPoint]) -> (SolveStatus, Vec<f64>) {
    let n_s = supplies.len();
    let n_d = demands.len();

    let mut pb = RowProblem::new();

    let mut cols: Vec<Col> = Vec::with_capacity(n_s * n_d);
    for s in supplies {
        for d in demands {
            cols.push(pb.add_column(s.unit_cost + d.unit_cost, 0.0..));
        }
    }

    for (si, s) in supplies.iter().enumerate() {
        let terms: Vec<(Col, f64)> = (0..n_d).map(|di| (cols[si * n_d + di], 1.0)).collect();
        pb.add_row(..=s.capacity, terms);
        debug!(row = %format!("Capacity_{}", s.name), bound = s.capacity, "added capacity row");
    }

    for (di, d) in demands.iter().enumerate() {
        let terms: Vec<(Col, f64)> = (0..n_s).map(|si| (cols[si * n_d + di], 1.0)).collect();
        pb.add_row(d.demand.., terms);
        debug!(row = %format!("Demand_{}", d.name), bound = d.demand, "added demand row");
    }

    debug!(columns = cols.len(), rows = n_s + n_d, "transportation LP built");

    let mut model = pb.optimise(Sense::Minimise);
    model.set_option("output_flag", false);

    let solved = match model.try_solve() {
        Ok(solved) => solved,
        Err(e) => {
            warn!(error = ?e, "HiGHS failed to run");
            return (SolveStatus::Undefined, vec![0.0; cols.len()]);
        }
    };

    let status = map_status(solved.status());
    let solution = solved.get_solution();
    let flows = cols.iter().map(|&col| solution[col].max(0.0)).collect();
    (status, flows)
}

fn map_status(status: HighsModelStatus) -> SolveStatus {
    match status {
        HighsModelStatus::Optimal | HighsModelStatus::ModelEmpty => SolveStatus::Optimal,
        // Costs and flows are non-negative, so the objective is bounded below.
        HighsModelStatus::Infeasible | HighsModelStatus::UnboundedOrInfeasible => SolveStatus::Infeasible,
        HighsModelStatus::Unbounded => SolveStatus::Unbounded,
        other => {
            debug!(status = ?other, "unmapped HiGHS status");
            SolveStatus::Undefined
        }
    }
}

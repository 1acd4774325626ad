//! Joining solver assignments with the distance matrix and point costs.

use dn_matrix::DistanceMatrix;
use dn_registry::{PointRegistry, Role};
use dn_solver::OptimizationResult;

use crate::{AssignmentRow, CostedRoute, OutputError, OutputResult, UtilizationRow};

/// One [`CostedRoute`] per assignment, in pair order.
///
/// Pairs the matrix does not cover get distance 0 and a straight two-point
/// route marked as fallback.
///
/// # Errors
///
/// [`OutputError::MissingPoint`] if an assignment names a point that is not
/// (or no longer) in `registry`.
pub fn cost_routes(
    result: &OptimizationResult,
    matrix: &DistanceMatrix,
    registry: &PointRegistry,
) -> OutputResult<Vec<CostedRoute>> {
    result
        .assignments
        .iter()
        .map(|(key, &quantity)| {
            let supply = registry
                .supply(&key.supply)
                .ok_or_else(|| OutputError::MissingPoint(key.supply.clone()))?;
            let demand = registry
                .demand(&key.demand)
                .ok_or_else(|| OutputError::MissingPoint(key.demand.clone()))?;

            let (distance_km, route, is_fallback) = match matrix.get_pair(key) {
                Some(entry) => (entry.distance_km, entry.route.clone(), entry.is_fallback),
                None => (0.0, vec![supply.coordinates, demand.coordinates], true),
            };

            Ok(CostedRoute {
                supply: key.supply.clone(),
                demand: key.demand.clone(),
                quantity,
                cost: quantity * (supply.unit_cost + demand.unit_cost),
                distance_km,
                route,
                is_fallback,
            })
        })
        .collect()
}

/// Flat `{source, destination, quantity, distance_km, cost}` rows.
pub fn export_rows(
    result: &OptimizationResult,
    matrix: &DistanceMatrix,
    registry: &PointRegistry,
) -> OutputResult<Vec<AssignmentRow>> {
    Ok(cost_routes(result, matrix, registry)?
        .iter()
        .map(AssignmentRow::from)
        .collect())
}

/// Supplies first, then demands, each in name order.
pub fn utilization_rows(result: &OptimizationResult) -> Vec<UtilizationRow> {
    let supplies = result.supply_utilization.iter().map(|(name, u)| UtilizationRow {
        name:    name.clone(),
        role:    Role::Supply,
        flow:    u.sent,
        limit:   u.capacity,
        percent: u.percent,
    });
    let demands = result.demand_satisfaction.iter().map(|(name, s)| UtilizationRow {
        name:    name.clone(),
        role:    Role::Demand,
        flow:    s.received,
        limit:   s.demand,
        percent: s.percent,
    });
    supplies.chain(demands).collect()
}

//! [`Planner`] and the outcome of one request.

use serde::Serialize;
use tracing::info;

use dn_core::PlannerConfig;
use dn_matrix::{DistanceMatrix, DistanceMatrixBuilder};
use dn_output::{cost_routes, CostedRoute, OutputWriter};
use dn_registry::PointRegistry;
use dn_solver::{require_both_roles, OptimizationResult, SolveStatus, TransportationSolver};
use dn_spatial::{
    DijkstraRouter, NetworkSource, OfflineSource, RegionDescriptor, RoadNetwork, RoadNetworkProvider, Router,
};

use crate::{PlannerError, PlannerResult};

/// Everything one optimize request produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanOutcome {
    pub matrix: DistanceMatrix,
    pub result: OptimizationResult,
    /// One per assignment; empty unless the solve produced flows.
    pub routes: Vec<CostedRoute>,
}

impl PlanOutcome {
    pub fn status(&self) -> SolveStatus {
        self.result.status
    }
}

/// Owns the configuration and the cached road network of one region.
///
/// | Constructor                  | Network                                 |
/// |------------------------------|-----------------------------------------|
/// | [`new`](Self::new)           | loaded lazily from `source`             |
/// | [`with_provider`](Self::with_provider) | caller-built provider         |
/// | [`preloaded`](Self::preloaded) | a graph built in memory               |
pub struct Planner<S: NetworkSource = OfflineSource, R: Router = DijkstraRouter> {
    config:   PlannerConfig,
    provider: RoadNetworkProvider<S, R>,
    matrix:   DistanceMatrixBuilder,
    solver:   TransportationSolver,
}

impl<S: NetworkSource> Planner<S, DijkstraRouter> {
    pub fn new(config: PlannerConfig, source: S) -> PlannerResult<Self> {
        let region = RegionDescriptor::from_config(&config);
        Self::with_provider(config, RoadNetworkProvider::new(region, source))
    }
}

impl Planner<OfflineSource, DijkstraRouter> {
    pub fn preloaded(config: PlannerConfig, network: RoadNetwork) -> PlannerResult<Self> {
        let region = RegionDescriptor::from_config(&config);
        Self::with_provider(config, RoadNetworkProvider::preloaded(region, network))
    }
}

impl<S: NetworkSource, R: Router> Planner<S, R> {
    /// # Errors
    ///
    /// [`PlannerError::Config`] if `config` fails validation.
    pub fn with_provider(config: PlannerConfig, provider: RoadNetworkProvider<S, R>) -> PlannerResult<Self> {
        config.validate().map_err(PlannerError::Config)?;
        Ok(Self {
            matrix: DistanceMatrixBuilder::from_config(&config),
            solver: TransportationSolver::from_config(&config),
            config,
            provider,
        })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn provider(&self) -> &RoadNetworkProvider<S, R> {
        &self.provider
    }

    /// Write the outcome's rows to `writer` and finish it.
    pub fn export<W: OutputWriter>(
        &self,
        outcome: &PlanOutcome,
        registry: &PointRegistry,
        writer: &mut W,
    ) -> PlannerResult<()> {
        writer.write_plan(&outcome.result, &outcome.matrix, registry)?;
        writer.finish()?;
        Ok(())
    }
}

impl<S: NetworkSource + Sync, R: Router> Planner<S, R> {
    /// Distance matrix, LP solve, and route costing for the current points.
    ///
    /// # Errors
    ///
    /// - [`dn_solver::SolverError::InsufficientPoints`], before any network or matrix
    ///   work, when either role is empty.
    /// - [`PlannerError::Output`] if costing fails to find an assigned point.
    ///
    /// Infeasible, unbounded and undefined solves are returned as `Ok`.
    pub fn optimize(&self, registry: &PointRegistry) -> PlannerResult<PlanOutcome> {
        require_both_roles(registry)?;

        let matrix = self.matrix.build(registry, &self.provider);
        let result = self.solver.solve(registry)?;
        let routes = cost_routes(&result, &matrix, registry)?;

        info!(
            status = %result.status,
            total_cost = result.total_cost,
            routes = routes.len(),
            fallbacks = matrix.fallback_count(),
            "plan ready"
        );
        Ok(PlanOutcome { matrix, result, routes })
    }
}

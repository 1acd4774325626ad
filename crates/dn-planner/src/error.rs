use dn_output::OutputError;
use dn_solver::SolverError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("planner configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),
}

pub type PlannerResult<T> = Result<T, PlannerError>;

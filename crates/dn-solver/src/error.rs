use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("optimization needs at least one supply and one demand point (got {supplies} supplies, {demands} demands)")]
    InsufficientPoints { supplies: usize, demands: usize },
}

pub type SolverResult<T> = Result<T, SolverError>;

//! `dn-solver` — cost-minimizing flow from supply to demand points.
//!
//! The transportation problem is solved as a continuous linear program with
//! HiGHS.  One variable per `(supply, demand)` pair carries the shipped
//! quantity; the objective charges each unit the sum of the two endpoints'
//! unit costs.  Route distance is not part of the objective.
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`lp`]     | `TransportationSolver`, `optimize`, LP formulation        |
//! | [`result`] | `OptimizationResult`, `SolveStatus`, utilization records  |
//! | [`error`]  | `SolverError`, `SolverResult<T>`                          |
//!
//! Infeasible and unbounded problems are *not* errors: they come back as an
//! [`OptimizationResult`] whose `status` says so.

pub mod error;
pub mod lp;
pub mod result;


pub use error::{SolverError, SolverResult};
pub use lp::{capacity_shortfall, optimize, require_both_roles, TransportationSolver};
pub use result::{OptimizationResult, Satisfaction, SolveStatus, Utilization};

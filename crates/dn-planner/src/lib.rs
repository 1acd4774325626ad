//! `dn-planner` — one synchronous "optimize" request, end to end.
//!
//! ```rust,ignore
//! let planner = Planner::new(PlannerConfig::florencia(), PbfSource::new(extract))?;
//! let outcome = planner.optimize(&registry)?;
//! planner.export(&outcome, &registry, &mut CsvWriter::new(out_dir)?)?;
//! ```
//!
//! The road network is loaded on the first request and reused by every
//! later one.

pub mod error;
pub mod planner;


pub use error::{PlannerError, PlannerResult};
pub use planner::{PlanOutcome, Planner};

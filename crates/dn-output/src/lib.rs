//! `dn-output` — turns an optimization result into things people look at.
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`costing`] | `cost_routes`, `export_rows`, `utilization_rows`           |
//! | [`row`]     | `CostedRoute`, `AssignmentRow`, `UtilizationRow`           |
//! | [`writer`]  | `OutputWriter` trait                                       |
//! | [`csv`]     | `CsvWriter` (`assignments.csv`, `utilization.csv`)         |
//! | [`error`]   | `OutputError`, `OutputResult<T>`                           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use dn_output::{cost_routes, CsvWriter, OutputWriter};
//!
//! let routes = cost_routes(&result, &matrix, &registry)?;
//! let mut w = CsvWriter::new(Path::new("./output"))?;
//! w.write_plan(&result, &matrix, &registry)?;
//! w.finish()?;
//! ```

pub mod costing;
pub mod csv;
pub mod error;
pub mod row;
pub mod writer;


pub use costing::{cost_routes, export_rows, utilization_rows};
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{AssignmentRow, CostedRoute, UtilizationRow};
pub use writer::OutputWriter;

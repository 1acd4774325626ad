//! The `OutputWriter` trait implemented by output backends.

use dn_matrix::DistanceMatrix;
use dn_registry::PointRegistry;
use dn_solver::OptimizationResult;

use crate::{export_rows, utilization_rows, AssignmentRow, OutputResult, UtilizationRow};

pub trait OutputWriter {
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()>;

    fn write_utilization(&mut self, rows: &[UtilizationRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write every row derived from one result.
    fn write_plan(
        &mut self,
        result: &OptimizationResult,
        matrix: &DistanceMatrix,
        registry: &PointRegistry,
    ) -> OutputResult<()> {
        self.write_assignments(&export_rows(result, matrix, registry)?)?;
        self.write_utilization(&utilization_rows(result))
    }
}

//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `assignments.csv`
//! - `utilization.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{AssignmentRow, OutputResult, UtilizationRow};
use crate::writer::OutputWriter;

pub struct CsvWriter {
    assignments: Writer<File>,
    utilization: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut assignments = Writer::from_path(dir.join("assignments.csv"))?;
        assignments.write_record(["source", "destination", "quantity", "distance_km", "cost"])?;

        let mut utilization = Writer::from_path(dir.join("utilization.csv"))?;
        utilization.write_record(["name", "role", "flow", "limit", "percent"])?;

        Ok(Self {
            assignments,
            utilization,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()> {
        for row in rows {
            self.assignments.write_record(&[
                row.source.clone(),
                row.destination.clone(),
                row.quantity.to_string(),
                format!("{:.3}", row.distance_km),
                row.cost.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_utilization(&mut self, rows: &[UtilizationRow]) -> OutputResult<()> {
        for row in rows {
            self.utilization.write_record(&[
                row.name.clone(),
                row.role.to_string(),
                row.flow.to_string(),
                row.limit.to_string(),
                format!("{:.1}", row.percent),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.assignments.flush()?;
        self.utilization.flush()?;
        Ok(())
    }
}

//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `queue_snapshots.csv`
//! - `final_report.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, QueueSnapshotRow, ReportRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    report:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("queue_snapshots.csv"))?;
        snapshots.write_record(["tick", "queue", "position", "person"])?;

        let mut report = Writer::from_path(dir.join("final_report.csv"))?;
        report.write_record(["ticks", "elapsed_ms", "reason", "remaining_tokens"])?;

        Ok(Self {
            snapshots,
            report,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, rows: &[QueueSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.queue.to_string(),
                row.position.to_string(),
                row.person.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_report(&mut self, row: &ReportRow) -> OutputResult<()> {
        self.report.write_record(&[
            row.ticks.to_string(),
            row.elapsed_ms.to_string(),
            row.reason.clone(),
            row.remaining_tokens.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.report.flush()?;
        Ok(())
    }
}

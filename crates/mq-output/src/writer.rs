//! The `OutputWriter` trait implemented by file backends.

use crate::{OutputResult, QueueSnapshotRow, ReportRow};

/// Trait implemented by file writers.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error`, since observer hooks cannot fail.
pub trait OutputWriter {
    /// Write every row of one tick's snapshot.
    fn write_snapshot(&mut self, rows: &[QueueSnapshotRow]) -> OutputResult<()>;

    /// Write the final report.
    fn write_report(&mut self, row: &ReportRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use mq_chain::QueueChain;
use mq_core::Tick;
use mq_sim::{FinalReport, SimObserver};

use crate::row::{QueueSnapshotRow, ReportRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes every snapshot and the final report to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn record(&mut self, tick: Tick, chain: &QueueChain) {
        let rows: Vec<QueueSnapshotRow> = chain
            .iter()
            .flat_map(|(queue, people)| {
                people.iter().enumerate().map(move |(position, person)| QueueSnapshotRow {
                    tick:     tick.0,
                    queue:    queue.0,
                    position: position as u32,
                    person:   person.0,
                })
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshot(&rows);
            self.store_err(result);
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_start(&mut self, tick: Tick, chain: &QueueChain) {
        // Resuming after a stop would repeat rows already written.
        if tick == Tick::ZERO {
            self.record(tick, chain);
        }
    }

    fn on_state_changed(&mut self, tick: Tick, chain: &QueueChain) {
        self.record(tick, chain);
    }

    fn on_end(&mut self, report: &FinalReport) {
        let row = ReportRow {
            ticks:            report.ticks.0,
            elapsed_ms:       u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
            reason:           report.reason.to_string(),
            remaining_tokens: report.remaining_tokens as u64,
        };
        let result = self.writer.write_report(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}

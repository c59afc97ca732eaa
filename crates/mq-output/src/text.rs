//! Plain-text renderer: the queues side by side, one frame per tick.
//!
//! ```text
//! T1
//! Ticket Collector
//! Queue 0   Queue 1   Queue 2
//! Person 1  Person 1  Person 1
//! Person 0  Person 0
//! ```
//!
//! The `Total processing time` line always follows the last frame.  On
//! completion the controller reports the end before the final frame, so the
//! line is held back until that frame has been written.

use std::io::{self, Write};

use mq_chain::QueueChain;
use mq_core::Tick;
use mq_sim::{EndReason, FinalReport, SimObserver};

/// Caption shown above the collector queue.
pub const COLLECTOR_CAPTION: &str = "Ticket Collector";

/// A [`SimObserver`] that writes text frames to `out`.
///
/// The first I/O error is kept and returned by
/// [`take_error`][Self::take_error]; later frames are still attempted.
pub struct TextRenderer<W: Write> {
    out:        W,
    last_error: Option<io::Error>,
    /// Completion report waiting for the final frame.
    pending:    Option<FinalReport>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None, pending: None }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write_total(&mut self, report: &FinalReport) -> io::Result<()> {
        writeln!(self.out, "Total {report}")?;
        self.out.flush()
    }

    fn write_frame(&mut self, tick: Tick, chain: &QueueChain) -> io::Result<()> {
        let headers: Vec<String> = chain.iter().map(|(q, _)| q.to_string()).collect();
        let columns: Vec<Vec<String>> = chain
            .iter()
            .map(|(_, people)| people.iter().map(ToString::to_string).collect())
            .collect();

        let width = headers
            .iter()
            .chain(columns.iter().flatten())
            .map(String::len)
            .max()
            .unwrap_or(0)
            + 2;
        let depth = columns.iter().map(Vec::len).max().unwrap_or(0);

        writeln!(self.out, "{tick}")?;
        writeln!(self.out, "{COLLECTOR_CAPTION}")?;
        write_row(&mut self.out, headers.iter().map(String::as_str), width)?;
        for row in 0..depth {
            let cells = columns
                .iter()
                .map(|col| col.get(row).map_or("", String::as_str));
            write_row(&mut self.out, cells, width)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Write padded cells with trailing whitespace trimmed.
fn write_row<'a, W: Write>(
    out:   &mut W,
    cells: impl Iterator<Item = &'a str>,
    width: usize,
) -> io::Result<()> {
    let mut line = String::new();
    for cell in cells {
        line.push_str(&format!("{cell:<width$}"));
    }
    writeln!(out, "{}", line.trim_end())
}

impl<W: Write> SimObserver for TextRenderer<W> {
    fn on_start(&mut self, tick: Tick, chain: &QueueChain) {
        let result = self.write_frame(tick, chain);
        self.store_err(result);
    }

    fn on_state_changed(&mut self, tick: Tick, chain: &QueueChain) {
        let mut result = self.write_frame(tick, chain);
        if let Some(report) = self.pending.take() {
            result = result.and_then(|()| self.write_total(&report));
        }
        self.store_err(result);
    }

    fn on_end(&mut self, report: &FinalReport) {
        match report.reason {
            EndReason::Completed => self.pending = Some(report.clone()),
            EndReason::Manual => {
                let result = self.write_total(report);
                self.store_err(result);
            }
        }
    }
}

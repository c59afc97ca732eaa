//! The summary emitted once when a simulation ends.

use std::fmt;
use std::time::Duration;

use mq_core::Tick;

/// Why the simulation ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// Every queue drained.
    Completed,
    /// `end()` was called before the chain drained.
    Manual,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EndReason::Completed => "completed",
            EndReason::Manual    => "manual",
        })
    }
}

/// Final processing-time report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalReport {
    /// Ticks executed before the end.
    pub ticks:            Tick,
    /// Accumulated processing time: `ticks * tick_duration`.
    pub elapsed:          Duration,
    pub reason:           EndReason,
    /// Tokens still queued; 0 when `reason` is `Completed`.
    pub remaining_tokens: usize,
}

impl fmt::Display for FinalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processing time {:.1} s over {} ticks ({})",
            self.elapsed.as_secs_f64(),
            self.ticks.0,
            self.reason,
        )
    }
}

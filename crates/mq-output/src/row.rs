//! Plain data row types written by output backends.

/// One person's position in one queue at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueSnapshotRow {
    pub tick:     u64,
    pub queue:    u32,
    /// 0 is the head of the queue.
    pub position: u32,
    pub person:   u32,
}

/// The final report, flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub ticks:            u64,
    pub elapsed_ms:       u64,
    /// `completed` or `manual`.
    pub reason:           String,
    pub remaining_tokens: u64,
}

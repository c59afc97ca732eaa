//! Simulation parameters.

use std::time::Duration;

use crate::{MqError, MqResult, SimClock};

/// Processing time credited per tick when none is configured.
pub const DEFAULT_TICK_DURATION_MS: u64 = 2_000;

/// Top-level simulation configuration.
///
/// Typically built from command-line flags or loaded from a JSON file by the
/// application crate, then handed to the controller builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of queues in the chain, collector included.  Must be at least 1.
    pub num_queues: u32,

    /// Number of people seeded into every queue.
    pub num_persons: u32,

    /// Processing time credited per tick, in milliseconds.  Default: 2000.
    #[cfg_attr(feature = "serde", serde(default = "default_tick_duration_ms"))]
    pub tick_duration_ms: u64,

    /// Real time between scheduler firings, in milliseconds.  `None` uses
    /// `tick_duration_ms`, so the simulation plays back in real time.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interval_ms: Option<u64>,

    /// End the run manually once this many ticks have been processed.
    /// `None` runs until the chain drains.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_ticks: Option<u64>,
}

/// Ticks a chain of `num_queues` queues, each seeded with `num_persons`
/// people, takes to drain completely.
#[inline]
pub fn drain_ticks(num_queues: u32, num_persons: u32) -> u64 {
    u64::from(num_queues) * u64::from(num_persons)
}

#[cfg(feature = "serde")]
fn default_tick_duration_ms() -> u64 {
    DEFAULT_TICK_DURATION_MS
}

impl SimConfig {
    /// A configuration with the default two-second tick.
    pub fn new(num_queues: u32, num_persons: u32) -> Self {
        Self {
            num_queues,
            num_persons,
            tick_duration_ms: DEFAULT_TICK_DURATION_MS,
            interval_ms:      None,
            max_ticks:        None,
        }
    }

    /// Reject parameters that cannot describe a runnable chain.
    pub fn validate(&self) -> MqResult<()> {
        if self.num_queues < 1 {
            return Err(MqError::InvalidConfiguration(
                "num_queues must be at least 1 (the collector queue)".into(),
            ));
        }
        if self.tick_duration_ms == 0 {
            return Err(MqError::InvalidConfiguration(
                "tick_duration_ms must be positive".into(),
            ));
        }
        if self.interval_ms == Some(0) {
            return Err(MqError::InvalidConfiguration(
                "interval_ms must be positive when set".into(),
            ));
        }
        if self.max_ticks == Some(0) {
            return Err(MqError::InvalidConfiguration(
                "max_ticks must be positive when set".into(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_duration_ms)
    }

    /// The cadence handed to the scheduler.
    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.unwrap_or(self.tick_duration_ms))
    }

    /// Ticks the seeded chain needs to drain: one per token, and every
    /// person is seeded into every queue.
    #[inline]
    pub fn ticks_to_complete(&self) -> u64 {
        drain_ticks(self.num_queues, self.num_persons)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration())
    }
}

//! Simulation time model.
//!
//! # Design
//!
//! Time is a count of executed ticks.  Every tick credits a fixed processing
//! duration to the accumulator held in `SimClock`:
//!
//!   elapsed = current_tick * tick_duration
//!
//! The accumulator is advanced on every tick, including ticks on which no
//! person moved.  Keeping an integer tick next to the `Duration` means the
//! tick count itself never drifts.

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of ticks executed since the simulation was constructed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tick counter plus the accumulated processing time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Processing time credited per tick.
    pub tick_duration: Duration,
    /// Ticks executed so far.
    pub current_tick: Tick,
    /// Total processing time accumulated so far.
    pub elapsed: Duration,
}

impl SimClock {
    /// A clock at tick 0 with nothing accumulated.
    pub fn new(tick_duration: Duration) -> Self {
        Self {
            tick_duration,
            current_tick: Tick::ZERO,
            elapsed:      Duration::ZERO,
        }
    }

    /// Count one tick and credit one tick's worth of processing time.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
        self.elapsed = self.elapsed.saturating_add(self.tick_duration);
    }

    /// Processing time that `ticks` ticks would accumulate.
    pub fn duration_for_ticks(&self, ticks: u64) -> Duration {
        let ticks = u32::try_from(ticks).unwrap_or(u32::MAX);
        self.tick_duration.saturating_mul(ticks)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} s)", self.current_tick, self.elapsed.as_secs_f64())
    }
}

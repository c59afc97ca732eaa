//! `mq-chain` — the queue chain at the heart of the movie-queue simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                   |
//! |--------------|--------------------------------------------|
//! | [`chain`]    | `QueueChain`: seeding, `tick`, completion  |
//! | [`snapshot`] | `ChainSnapshot`, the renderer-facing view  |
//! | [`error`]    | `ChainError`, `ChainResult<T>`             |
//!
//! # Rotation model (summary)
//!
//! ```text
//! queue 0 (collector) ← queue 1 ← … ← queue N-1 (entry)
//!
//! each tick:
//!   ① pop the head of queue 0 (served, discarded)
//!   ② for i in N-1 down to 1: move the head of queue i to the tail of i-1
//! ```
//!
//! Descending order in ② means nobody moves more than one queue per tick.

pub mod chain;
pub mod error;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use chain::QueueChain;
pub use error::{ChainError, ChainResult};
pub use snapshot::ChainSnapshot;

//! `mq-core` — foundational types for the movie-queue simulator.
//!
//! This crate is a dependency of every other `mq-*` crate.  It has no `mq-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module      | Contents                                     |
//! |-------------|----------------------------------------------|
//! | [`ids`]     | `PersonId`, `QueueIndex`                     |
//! | [`time`]    | `Tick`, `SimClock`                           |
//! | [`config`]  | `SimConfig`                                  |
//! | [`error`]   | `MqError`, `MqResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, drain_ticks};
pub use error::{MqError, MqResult};
pub use ids::{PersonId, QueueIndex};
pub use time::{SimClock, Tick};

//! `mq-sim` — drives a [`QueueChain`][mq_chain::QueueChain] on a periodic
//! trigger and accounts the processing time.
//!
//! # Control flow
//!
//! ```text
//! Scheduler fires ─▶ tick task
//!   ① chain.tick()
//!   ② clock.advance()          elapsed += tick_duration (always)
//!   ③ chain complete?          stop + end, report emitted, task says Break
//!   ④ observer.on_state_changed(&chain)
//!   ⑤ tick limit reached?      stop + manual end, task says Break
//! ```
//!
//! # Controller states
//!
//! ```text
//! Idle ──start──▶ Running ───────stop───────▶ Stopped ──start──▶ Running
//!                    │                          │
//!                    └──end / complete / limit──┴──end──▶ Ended (terminal)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mq_core::SimConfig;
//! use mq_sim::{ControllerBuilder, ManualScheduler};
//!
//! let scheduler = ManualScheduler::new();
//! let mut ctl = ControllerBuilder::new(SimConfig::new(3, 2), scheduler.clone()).build()?;
//! ctl.start()?;
//! scheduler.run_until_disarmed();
//! assert!(ctl.report().is_some());
//! ```

pub mod builder;
pub mod controller;
pub mod error;
pub mod observer;
pub mod report;
pub mod scheduler;


pub use builder::ControllerBuilder;
pub use controller::{ControllerState, SimulationController};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{EndReason, FinalReport};
pub use scheduler::{ManualScheduler, Scheduler, ThreadScheduler, TickTask};

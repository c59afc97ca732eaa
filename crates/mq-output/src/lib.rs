//! `mq-output` — renderers and report sinks for the movie-queue simulator.
//!
//! | Type                   | Output                                                |
//! |------------------------|-------------------------------------------------------|
//! | [`TextRenderer`]       | One text frame per tick on any `io::Write`            |
//! | [`CsvWriter`]          | `queue_snapshots.csv`, `final_report.csv`             |
//!
//! File backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `mq_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mq_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut ctl = ControllerBuilder::new(config, ThreadScheduler::new())
//!     .observer(SimOutputObserver::new(writer))
//!     .build()?;
//! ctl.start()?;
//! ctl.wait_for_end(timeout);
//! if let Some(e) = ctl.with_observer(|o| o.take_error()) {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod fanout;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use fanout::Fanout;
pub use observer::SimOutputObserver;
pub use row::{QueueSnapshotRow, ReportRow};
pub use text::TextRenderer;
pub use writer::OutputWriter;

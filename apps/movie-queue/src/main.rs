//! movie-queue — people moving through a chain of ticket queues.
//!
//! Every person stands in every queue; each tick the ticket collector
//! (queue 0) serves its head and every other queue hands its head one step
//! closer.  Frames are printed to stdout as the timer fires; the total
//! processing time is printed when the last queue drains.
//!
//! ```text
//! RUST_LOG=info movie-queue --queues 3 --persons 2 --interval-ms 200
//! ```
//!
//! Press Enter to end the simulation early.

mod args;

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use mq_output::{CsvWriter, Fanout, SimOutputObserver, TextRenderer};
use mq_sim::{ControllerBuilder, ThreadScheduler};

use args::Args;

/// How often the main thread checks for completion and for an End request.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let args = Args::parse();
    let config = args.resolve_config()?;

    let expected = config.ticks_to_complete();
    info!(
        "{} queues × {} persons, {} ms per tick, {} ticks to drain",
        config.num_queues, config.num_persons, config.tick_duration_ms, expected,
    );

    // 1. Observers: text frames always, CSV when asked.
    let csv = match &args.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(SimOutputObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };
    let observer = Fanout::new(TextRenderer::new(io::stdout()), csv);

    // 2. Controller on a real timer thread.
    let mut ctl = ControllerBuilder::new(config, ThreadScheduler::new())
        .observer(observer)
        .build()?;

    // 3. End requests from stdin.  EOF (non-interactive stdin) is ignored.
    let (end_tx, end_rx) = mpsc::channel::<()>();
    thread::spawn(move || {
        let mut line = String::new();
        if let Ok(n) = io::stdin().lock().read_line(&mut line) {
            if n > 0 {
                let _ = end_tx.send(());
            }
        }
    });

    // 4. Run.
    ctl.start()?;
    // `--max-ticks` is enforced by the controller on the tick itself.
    let report = loop {
        if let Some(report) = ctl.wait_for_end(POLL_INTERVAL) {
            break report;
        }
        if end_rx.try_recv().is_ok() {
            if let Some(report) = ctl.end() {
                break report;
            }
        }
    };

    // 5. Surface any output errors.
    let (text_err, csv_err) = ctl.with_observer(|o| {
        (o.first.take_error(), o.second.as_mut().and_then(SimOutputObserver::take_error))
    });
    if let Some(e) = text_err {
        warn!("stdout error: {e}");
    }
    if let Some(e) = csv_err {
        warn!("output error: {e}");
    }

    info!("done: {report}");
    Ok(())
}

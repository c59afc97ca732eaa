//! Command-line flags and how they combine with an optional JSON config.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use mq_core::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "movie-queue", about = "Simulate people moving through a chain of ticket queues")]
pub struct Args {
    /// Number of queues, collector included.
    #[arg(short, long)]
    pub queues: Option<u32>,

    /// Number of people seeded into every queue.
    #[arg(short, long)]
    pub persons: Option<u32>,

    /// Processing time credited per tick, in milliseconds.
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Real time between ticks, in milliseconds (defaults to --tick-ms).
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// JSON file holding a SimConfig; flags override its fields.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for queue_snapshots.csv and final_report.csv.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// End the simulation manually after this many ticks.
    #[arg(long)]
    pub max_ticks: Option<u64>,
}

impl Args {
    /// Merge the config file (if any) with flags and validate the result.
    pub fn resolve_config(&self) -> Result<SimConfig> {
        let base = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Some(
                    serde_json::from_str::<SimConfig>(&text)
                        .with_context(|| format!("parsing {}", path.display()))?,
                )
            }
            None => None,
        };

        let (queues, persons) = match (&base, self.queues, self.persons) {
            (_, Some(q), Some(p)) => (q, p),
            (Some(b), q, p) => (q.unwrap_or(b.num_queues), p.unwrap_or(b.num_persons)),
            (None, _, _) => bail!("--queues and --persons are required without --config"),
        };

        let mut config = base.unwrap_or_else(|| SimConfig::new(queues, persons));
        config.num_queues = queues;
        config.num_persons = persons;
        if let Some(ms) = self.tick_ms {
            config.tick_duration_ms = ms;
        }
        if let Some(ms) = self.interval_ms {
            config.interval_ms = Some(ms);
        }
        if let Some(max) = self.max_ticks {
            config.max_ticks = Some(max);
        }

        config.validate()?;
        Ok(config)
    }
}

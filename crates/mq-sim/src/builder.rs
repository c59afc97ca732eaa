//! Fluent builder for constructing a [`SimulationController`].

use mq_chain::QueueChain;
use mq_core::{SimConfig, Tick};

use crate::{NoopObserver, Scheduler, SimObserver, SimResult, SimulationController};

/// Fluent builder for [`SimulationController<S, O>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — queue count, person count, tick duration, interval,
///   optional tick limit
/// - `S: Scheduler` — e.g. [`ThreadScheduler`][crate::ThreadScheduler] or
///   [`ManualScheduler`][crate::ManualScheduler]
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default          |
/// |-----------------|------------------|
/// | `.observer(o)`  | [`NoopObserver`] |
///
/// # Example
///
/// ```rust,ignore
/// let mut ctl = ControllerBuilder::new(config, ThreadScheduler::new())
///     .observer(renderer)
///     .build()?;
/// ctl.start()?;
/// ```
pub struct ControllerBuilder<S: Scheduler, O: SimObserver = NoopObserver> {
    config:    SimConfig,
    scheduler: S,
    observer:  O,
}

impl<S: Scheduler> ControllerBuilder<S, NoopObserver> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, scheduler: S) -> Self {
        Self { config, scheduler, observer: NoopObserver }
    }
}

impl<S: Scheduler, O: SimObserver + Send + 'static> ControllerBuilder<S, O> {
    /// Attach the renderer / report sink.
    pub fn observer<O2: SimObserver + Send + 'static>(self, observer: O2) -> ControllerBuilder<S, O2> {
        ControllerBuilder {
            config:    self.config,
            scheduler: self.scheduler,
            observer,
        }
    }

    /// Validate the configuration, seed the chain, and return an `Idle`
    /// controller.  Nothing is built if validation fails.
    pub fn build(self) -> SimResult<SimulationController<S, O>> {
        self.config.validate()?;
        let chain = QueueChain::new(self.config.num_queues, self.config.num_persons)?;
        Ok(SimulationController::new(
            chain,
            self.config.make_clock(),
            self.config.interval(),
            self.config.max_ticks.map(Tick),
            self.scheduler,
            self.observer,
        ))
    }
}

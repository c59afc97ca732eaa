//! Observer hooks for rendering and reporting.

use mq_chain::QueueChain;
use mq_core::Tick;

use crate::FinalReport;

/// Callbacks invoked by [`SimulationController`][crate::SimulationController]
/// as the simulation progresses.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// Hooks run while the controller's state lock is held: they must not call
/// back into the controller.  The chain is lent, not copied; call
/// [`QueueChain::snapshot`] to keep its contents past the hook.
///
/// When the chain drains, `on_stop` and `on_end` fire before the
/// `on_state_changed` for the completing tick.  A manual end has no
/// following `on_state_changed`.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_state_changed(&mut self, tick: Tick, chain: &QueueChain) {
///         println!("{tick}: {} people queued", chain.total_tokens());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called each time the controller enters `Running`, with the chain as it
    /// stands before the next tick.
    fn on_start(&mut self, _tick: Tick, _chain: &QueueChain) {}

    /// Called after every tick with the chain's new contents.
    fn on_state_changed(&mut self, _tick: Tick, _chain: &QueueChain) {}

    /// Called when the controller leaves `Running`.
    fn on_stop(&mut self, _tick: Tick) {}

    /// Called exactly once, when the simulation ends.
    fn on_end(&mut self, _report: &FinalReport) {}
}

/// A [`SimObserver`] that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// An absent observer does nothing; lets frontends make a sink optional.
impl<O: SimObserver> SimObserver for Option<O> {
    fn on_start(&mut self, tick: Tick, chain: &QueueChain) {
        if let Some(o) = self {
            o.on_start(tick, chain);
        }
    }

    fn on_state_changed(&mut self, tick: Tick, chain: &QueueChain) {
        if let Some(o) = self {
            o.on_state_changed(tick, chain);
        }
    }

    fn on_stop(&mut self, tick: Tick) {
        if let Some(o) = self {
            o.on_stop(tick);
        }
    }

    fn on_end(&mut self, report: &FinalReport) {
        if let Some(o) = self {
            o.on_end(report);
        }
    }
}

//! Forward every hook to two observers.

use mq_chain::QueueChain;
use mq_core::Tick;
use mq_sim::{FinalReport, SimObserver};

/// A [`SimObserver`] that calls `first` then `second` for each hook.
///
/// Nest to combine more than two: `Fanout::new(a, Fanout::new(b, c))`.
pub struct Fanout<A, B> {
    pub first:  A,
    pub second: B,
}

impl<A: SimObserver, B: SimObserver> Fanout<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: SimObserver, B: SimObserver> SimObserver for Fanout<A, B> {
    fn on_start(&mut self, tick: Tick, chain: &QueueChain) {
        self.first.on_start(tick, chain);
        self.second.on_start(tick, chain);
    }

    fn on_state_changed(&mut self, tick: Tick, chain: &QueueChain) {
        self.first.on_state_changed(tick, chain);
        self.second.on_state_changed(tick, chain);
    }

    fn on_stop(&mut self, tick: Tick) {
        self.first.on_stop(tick);
        self.second.on_stop(tick);
    }

    fn on_end(&mut self, report: &FinalReport) {
        self.first.on_end(report);
        self.second.on_end(report);
    }
}

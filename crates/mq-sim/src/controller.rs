//! `SimulationController` — start/stop/end commands over a queue chain.

use std::ops::ControlFlow;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use log::{debug, info};
use mq_chain::{ChainSnapshot, QueueChain};
use mq_core::{SimClock, Tick};

use crate::{EndReason, FinalReport, Scheduler, SimError, SimObserver, SimResult};

/// Lifecycle of a controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControllerState {
    /// Built, never started.
    Idle,
    /// The scheduler is armed and ticks are being processed.
    Running,
    /// Paused by `stop()`; `start()` resumes.
    Stopped,
    /// The final report has been emitted.  Terminal.
    Ended,
}

// ── Shared state ──────────────────────────────────────────────────────────────

/// Everything a tick touches.  Lives behind a single mutex so the timer
/// thread and the command caller never interleave inside a tick.
struct Inner<O> {
    chain:     QueueChain,
    clock:     SimClock,
    max_ticks: Option<Tick>,
    state:     ControllerState,
    report:    Option<FinalReport>,
    observer:  O,
}

impl<O: SimObserver> Inner<O> {
    /// One scheduler firing.
    fn on_tick(&mut self) -> ControlFlow<()> {
        // A firing that raced with stop()/end() must not touch the chain.
        if self.state != ControllerState::Running {
            return ControlFlow::Break(());
        }

        self.chain.tick();
        self.clock.advance();
        let tick = self.clock.current_tick;
        debug!("{tick}: {} tokens queued", self.chain.total_tokens());

        if self.chain.is_complete() {
            self.halt();
            self.finish(EndReason::Completed);
            self.observer.on_state_changed(tick, &self.chain);
        } else {
            self.observer.on_state_changed(tick, &self.chain);
            // Same as an end() issued right after this tick.
            if self.max_ticks.is_some_and(|max| tick >= max) {
                self.halt();
                self.finish(EndReason::Manual);
            }
        }

        if self.state == ControllerState::Running {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }

    /// Leave `Running`.  No-op in any other state.
    fn halt(&mut self) {
        if self.state == ControllerState::Running {
            self.state = ControllerState::Stopped;
            self.observer.on_stop(self.clock.current_tick);
            info!("stopped at {}", self.clock);
        }
    }

    /// Emit the final report and enter `Ended`.
    fn finish(&mut self, reason: EndReason) -> FinalReport {
        let report = FinalReport {
            ticks:            self.clock.current_tick,
            elapsed:          self.clock.elapsed,
            reason,
            remaining_tokens: self.chain.total_tokens(),
        };
        self.state = ControllerState::Ended;
        self.observer.on_end(&report);
        info!("simulation ended: {report}");
        self.report = Some(report.clone());
        report
    }
}

struct Shared<O> {
    inner: Mutex<Inner<O>>,
    ended: Condvar,
}

impl<O> Shared<O> {
    fn lock(&self) -> MutexGuard<'_, Inner<O>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── SimulationController ──────────────────────────────────────────────────────

/// Drives a [`QueueChain`] from a [`Scheduler`] and accumulates processing
/// time.
///
/// Commands (`start`, `stop`, `end`) may come from a different thread than
/// the scheduler's firings; both paths serialize on one lock.
///
/// Create via [`ControllerBuilder`][crate::ControllerBuilder].
pub struct SimulationController<S: Scheduler, O: SimObserver + Send + 'static> {
    shared:    Arc<Shared<O>>,
    scheduler: S,
    interval:  Duration,
}

impl<S: Scheduler, O: SimObserver + Send + 'static> SimulationController<S, O> {
    pub(crate) fn new(
        chain:     QueueChain,
        clock:     SimClock,
        interval:  Duration,
        max_ticks: Option<Tick>,
        scheduler: S,
        observer:  O,
    ) -> Self {
        let inner = Inner {
            chain,
            clock,
            max_ticks,
            state: ControllerState::Idle,
            report: None,
            observer,
        };
        Self {
            shared: Arc::new(Shared { inner: Mutex::new(inner), ended: Condvar::new() }),
            scheduler,
            interval,
        }
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Arm the scheduler and enter `Running`.
    ///
    /// Fails with `AlreadyRunning` while running (the scheduler is not armed
    /// a second time) and with `AlreadyEnded` once the simulation has ended.
    /// From `Stopped` this resumes where the simulation left off.
    pub fn start(&mut self) -> SimResult<()> {
        {
            let mut guard = self.shared.lock();
            let inner = &mut *guard;
            match inner.state {
                ControllerState::Running => return Err(SimError::AlreadyRunning),
                ControllerState::Ended   => return Err(SimError::AlreadyEnded),
                ControllerState::Idle | ControllerState::Stopped => {}
            }
            inner.state = ControllerState::Running;
            inner.observer.on_start(inner.clock.current_tick, &inner.chain);
            info!(
                "started at {} ({} queues, interval {:?})",
                inner.clock,
                inner.chain.num_queues(),
                self.interval,
            );
        }

        let shared = Arc::clone(&self.shared);
        self.scheduler.arm(
            self.interval,
            Box::new(move || {
                let flow = shared.lock().on_tick();
                if flow.is_break() {
                    shared.ended.notify_all();
                }
                flow
            }),
        );
        Ok(())
    }

    /// Disarm the scheduler and leave `Running`.  Safe in any state.
    pub fn stop(&mut self) {
        self.shared.lock().halt();
        // Outside the lock: a firing blocked on it must be able to finish
        // before the scheduler joins it.
        self.scheduler.disarm();
    }

    /// End the simulation and emit the final report.
    ///
    /// Stops first if running.  Returns the report when this call emitted
    /// it; returns `None` if the simulation was never started or had
    /// already ended (see [`report`][Self::report] for the stored one).
    pub fn end(&mut self) -> Option<FinalReport> {
        self.stop();
        let report = {
            let mut inner = self.shared.lock();
            match inner.state {
                ControllerState::Idle | ControllerState::Ended => None,
                ControllerState::Running | ControllerState::Stopped => {
                    Some(inner.finish(EndReason::Manual))
                }
            }
        };
        self.shared.ended.notify_all();
        report
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn state(&self) -> ControllerState {
        self.shared.lock().state
    }

    pub fn is_running(&self) -> bool {
        self.state() == ControllerState::Running
    }

    /// Accumulated processing time.
    pub fn elapsed(&self) -> Duration {
        self.shared.lock().clock.elapsed
    }

    /// Ticks executed so far.
    pub fn ticks(&self) -> Tick {
        self.shared.lock().clock.current_tick
    }

    /// Current chain contents.  Never observes a tick half-applied.
    pub fn snapshot(&self) -> ChainSnapshot {
        self.shared.lock().chain.snapshot()
    }

    /// The final report, once emitted.
    pub fn report(&self) -> Option<FinalReport> {
        self.shared.lock().report.clone()
    }

    /// `true` while the scheduler still holds the tick task.
    pub fn is_armed(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Block until the simulation ends or `timeout` passes.
    ///
    /// Returns the final report if it ended in time.  Ending by manual
    /// `end()` on another thread wakes the waiter too.  A timeout too large
    /// to add to the current instant waits without a deadline.
    pub fn wait_for_end(&self, timeout: Duration) -> Option<FinalReport> {
        let deadline = Instant::now().checked_add(timeout);
        let mut inner = self.shared.lock();
        while inner.state != ControllerState::Ended {
            inner = match deadline {
                Some(deadline) => {
                    let left = deadline.saturating_duration_since(Instant::now());
                    if left.is_zero() {
                        return None;
                    }
                    self.shared
                        .ended
                        .wait_timeout(inner, left)
                        .unwrap_or_else(PoisonError::into_inner)
                        .0
                }
                None => self
                    .shared
                    .ended
                    .wait(inner)
                    .unwrap_or_else(PoisonError::into_inner),
            };
        }
        inner.report.clone()
    }

    /// Run `f` against the observer, e.g. to collect output after the run.
    pub fn with_observer<R>(&self, f: impl FnOnce(&mut O) -> R) -> R {
        f(&mut self.shared.lock().observer)
    }
}

impl<S: Scheduler, O: SimObserver + Send + 'static> Drop for SimulationController<S, O> {
    fn drop(&mut self) {
        self.scheduler.disarm();
    }
}

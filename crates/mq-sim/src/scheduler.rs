//! Periodic triggers that invoke the controller's tick task.
//!
//! A [`Scheduler`] only knows how to start and stop firing a task; it holds
//! no simulation state.  The task reports back through its return value:
//! `ControlFlow::Break` means "do not fire me again", which lets a tick that
//! detects completion stop its own trigger.
//!
//! Guarantees every implementation provides:
//!
//! - at most one task invocation in flight at a time;
//! - no invocation after `disarm()` returns;
//! - `arm()` on an armed scheduler replaces the task rather than adding one.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};

/// The callback a scheduler fires once per interval.
pub type TickTask = Box<dyn FnMut() -> ControlFlow<()> + Send + 'static>;

/// Start/stop capability over a periodic trigger.
pub trait Scheduler {
    /// Begin firing `task` every `interval`.
    fn arm(&mut self, interval: Duration, task: TickTask);

    /// Stop firing.  Safe to call when not armed.
    fn disarm(&mut self);

    /// `true` while a task is installed and has not asked to stop.
    fn is_armed(&self) -> bool;
}

// ── ManualScheduler ──────────────────────────────────────────────────────────

#[derive(Default)]
struct ManualSlot {
    task:       Option<TickTask>,
    interval:   Option<Duration>,
    /// Bumped on every arm/disarm so a task taken out by `fire` is not put
    /// back over a newer arming.
    generation: u64,
    arm_count:  usize,
}

/// A scheduler that fires only when told to.
///
/// Cloning yields another handle to the same slot: hand one clone to the
/// controller and keep one to step the simulation from a test or a
/// step-through frontend.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    slot: Arc<Mutex<ManualSlot>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, ManualSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run the armed task once.  Returns `false` if nothing was armed.
    pub fn fire(&self) -> bool {
        let (mut task, generation) = {
            let mut slot = self.slot();
            match slot.task.take() {
                Some(task) => (task, slot.generation),
                None       => return false,
            }
        };

        // The lock is released while the task runs so the task may reach
        // code that disarms this scheduler.
        let flow = task();

        let mut slot = self.slot();
        if slot.generation == generation {
            match flow {
                ControlFlow::Continue(()) => slot.task = Some(task),
                ControlFlow::Break(())    => {
                    slot.interval = None;
                    slot.generation += 1;
                }
            }
        }
        true
    }

    /// Fire repeatedly until the task stops itself or is disarmed.
    ///
    /// Returns the number of firings.
    pub fn run_until_disarmed(&self) -> u64 {
        let mut fired = 0;
        while self.fire() {
            fired += 1;
        }
        fired
    }

    /// Interval given to the most recent `arm`, while still armed.
    pub fn interval(&self) -> Option<Duration> {
        self.slot().interval
    }

    /// How many times `arm` has been called over this scheduler's lifetime.
    pub fn arm_count(&self) -> usize {
        self.slot().arm_count
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, interval: Duration, task: TickTask) {
        let mut slot = self.slot();
        slot.task = Some(task);
        slot.interval = Some(interval);
        slot.generation += 1;
        slot.arm_count += 1;
    }

    fn disarm(&mut self) {
        let mut slot = self.slot();
        slot.task = None;
        slot.interval = None;
        slot.generation += 1;
    }

    fn is_armed(&self) -> bool {
        self.slot().task.is_some()
    }
}

// ── ThreadScheduler ──────────────────────────────────────────────────────────

struct Worker {
    stop:   Sender<()>,
    handle: JoinHandle<()>,
    done:   Arc<AtomicBool>,
}

/// A scheduler backed by a dedicated timer thread.
///
/// Firings are paced at a fixed rate from the moment of arming.  The thread
/// waits on a channel rather than sleeping, so `disarm()` wakes it at once;
/// `disarm()` then joins the thread, which is what guarantees no firing
/// after it returns.
#[derive(Default)]
pub struct ThreadScheduler {
    worker: Option<Worker>,
}

impl ThreadScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for ThreadScheduler {
    fn arm(&mut self, interval: Duration, mut task: TickTask) {
        self.disarm();

        let (stop, stop_rx) = mpsc::channel::<()>();
        let done = Arc::new(AtomicBool::new(false));
        let done_flag = Arc::clone(&done);

        let handle = thread::spawn(move || {
            let mut next = Instant::now() + interval;
            loop {
                let wait = next.saturating_duration_since(Instant::now());
                match stop_rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {
                        if task().is_break() {
                            break;
                        }
                        next += interval;
                    }
                    // Explicit stop, or the scheduler was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            done_flag.store(true, Ordering::Release);
            debug!("timer thread exiting");
        });

        self.worker = Some(Worker { stop, handle, done });
    }

    fn disarm(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        // A send error only means the thread already left its loop.
        let _ = worker.stop.send(());
        if worker.handle.thread().id() == thread::current().id() {
            // Disarmed from inside the task; the loop exits on its own.
            return;
        }
        if worker.handle.join().is_err() {
            warn!("timer thread panicked");
        }
    }

    fn is_armed(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|w| !w.done.load(Ordering::Acquire))
    }
}

impl Drop for ThreadScheduler {
    fn drop(&mut self) {
        self.disarm();
    }
}

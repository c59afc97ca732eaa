//! `QueueChain` — N FIFO queues advanced in lockstep.
//!
//! # Seeding
//!
//! Every person is enqueued once into *every* queue, in person order.  Queue
//! `j` therefore models "how many ticks remain before person p reaches stage
//! j", not N independent streams of people.  Each queue owns its own copy of
//! the `PersonId`.
//!
//! # Tick cost
//!
//! O(N): one pop from the collector plus at most one pop/push per adjacent
//! pair.  `VecDeque` keeps both ends O(1).

use std::collections::VecDeque;

use mq_core::{MqError, PersonId, QueueIndex, SimConfig, drain_ticks};

use crate::{ChainResult, ChainSnapshot};

/// The ordered chain of queues.  Index 0 is the collector, `N-1` the entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueChain {
    queues: Vec<VecDeque<PersonId>>,
    num_persons: u32,
}

impl QueueChain {
    /// Create `num_queues` queues and seed `num_persons` people into each.
    ///
    /// Fails with `InvalidConfiguration` when `num_queues` is 0; nothing is
    /// allocated in that case.
    pub fn new(num_queues: u32, num_persons: u32) -> ChainResult<Self> {
        if num_queues < 1 {
            return Err(MqError::InvalidConfiguration(
                "a queue chain needs at least the collector queue".into(),
            )
            .into());
        }

        let mut queues: Vec<VecDeque<PersonId>> = (0..num_queues)
            .map(|_| VecDeque::with_capacity(num_persons as usize))
            .collect();

        for p in 0..num_persons {
            for queue in queues.iter_mut().rev() {
                queue.push_back(PersonId(p));
            }
        }

        Ok(Self { queues, num_persons })
    }

    /// Validate `config` and build the chain it describes.
    pub fn from_config(config: &SimConfig) -> ChainResult<Self> {
        config.validate()?;
        Self::new(config.num_queues, config.num_persons)
    }

    // ── Transition ────────────────────────────────────────────────────────

    /// Advance every queue by one step.
    ///
    /// The collector's head is served first; then each queue, from the
    /// entry down to queue 1, hands its head to the tail of the next queue.
    /// Empty queues are skipped, so this never fails and is a no-op once the
    /// chain is complete.
    pub fn tick(&mut self) {
        if let Some(collector) = self.queues.first_mut() {
            collector.pop_front();
        }

        for i in (1..self.queues.len()).rev() {
            // Split so queue i and i-1 can be borrowed at once.
            let (lower, upper) = self.queues.split_at_mut(i);
            if let Some(person) = upper[0].pop_front() {
                lower[i - 1].push_back(person);
            }
        }
    }

    /// `true` once every queue is empty.
    pub fn is_complete(&self) -> bool {
        self.queues.iter().all(VecDeque::is_empty)
    }

    /// Owned copy of every queue, head first.
    pub fn snapshot(&self) -> ChainSnapshot {
        ChainSnapshot::new(
            self.queues
                .iter()
                .map(|q| q.iter().copied().collect())
                .collect(),
        )
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn num_queues(&self) -> usize {
        self.queues.len()
    }

    /// Number of people seeded at construction.
    #[inline]
    pub fn num_persons(&self) -> u32 {
        self.num_persons
    }

    pub fn queue(&self, index: QueueIndex) -> Option<&VecDeque<PersonId>> {
        self.queues.get(index.index())
    }

    /// Borrowed view of every queue, collector first.
    pub fn iter(&self) -> impl Iterator<Item = (QueueIndex, &VecDeque<PersonId>)> + '_ {
        self.queues
            .iter()
            .enumerate()
            .map(|(i, q)| (QueueIndex(i as u32), q))
    }

    /// Tokens currently held across all queues.
    pub fn total_tokens(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    /// Ticks a freshly seeded chain needs before `is_complete` holds.
    ///
    /// Exactly one token leaves the chain per tick and the collector is never
    /// starved while upstream queues hold tokens, so this is the seeded token
    /// count `num_queues * num_persons`.  Queue `k` drains after
    /// `(num_queues - k) * num_persons` ticks.
    pub fn ticks_to_complete(&self) -> u64 {
        // `new` takes the queue count as u32, so this cannot truncate.
        drain_ticks(self.queues.len() as u32, self.num_persons)
    }
}

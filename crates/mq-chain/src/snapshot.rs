//! Read-only view of the chain handed to renderers.

use std::fmt;

use mq_core::{PersonId, QueueIndex};

/// Contents of every queue at one instant, head first.
///
/// The snapshot owns its data, so renderers can keep it past the next tick
/// and cannot reach back into the chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainSnapshot {
    queues: Vec<Vec<PersonId>>,
}

impl ChainSnapshot {
    pub fn new(queues: Vec<Vec<PersonId>>) -> Self {
        Self { queues }
    }

    /// Number of queues (not people).
    #[inline]
    pub fn len(&self) -> usize {
        self.queues.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    pub fn queue(&self, index: QueueIndex) -> Option<&[PersonId]> {
        self.queues.get(index.index()).map(Vec::as_slice)
    }

    /// Iterate `(index, contents)` from the collector to the entry queue.
    pub fn iter(&self) -> impl Iterator<Item = (QueueIndex, &[PersonId])> + '_ {
        self.queues
            .iter()
            .enumerate()
            .map(|(i, q)| (QueueIndex(i as u32), q.as_slice()))
    }

    pub fn total_tokens(&self) -> usize {
        self.queues.iter().map(Vec::len).sum()
    }

    /// `true` when no queue holds anyone.
    pub fn is_drained(&self) -> bool {
        self.queues.iter().all(Vec::is_empty)
    }

    pub fn into_inner(self) -> Vec<Vec<PersonId>> {
        self.queues
    }
}

/// One block per queue: a `Queue i:` header line followed by one person per
/// line.
impl fmt::Display for ChainSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, people) in self.iter() {
            writeln!(f, "{index}:")?;
            for person in people {
                writeln!(f, "{person}")?;
            }
        }
        Ok(())
    }
}

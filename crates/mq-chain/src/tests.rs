//! Unit tests for mq-chain.

use mq_core::{PersonId, QueueIndex};

use crate::QueueChain;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn people(ids: &[u32]) -> Vec<PersonId> {
    ids.iter().map(|&i| PersonId(i)).collect()
}

/// Contents of every queue as raw person numbers, collector first.
fn layout(chain: &QueueChain) -> Vec<Vec<u32>> {
    chain
        .snapshot()
        .into_inner()
        .into_iter()
        .map(|q| q.into_iter().map(|p| p.0).collect())
        .collect()
}

fn sorted(mut v: Vec<PersonId>) -> Vec<PersonId> {
    v.sort();
    v
}

// ── Construction and seeding ──────────────────────────────────────────────────

#[cfg(test)]
mod seeding {
    use super::*;

    #[test]
    fn zero_queues_is_invalid() {
        assert!(QueueChain::new(0, 3).is_err());
        assert!(QueueChain::new(0, 0).is_err());
    }

    #[test]
    fn zero_persons_starts_complete() {
        let chain = QueueChain::new(4, 0).unwrap();
        assert!(chain.is_complete());
        assert_eq!(chain.total_tokens(), 0);
        assert_eq!(chain.ticks_to_complete(), 0);
    }

    #[test]
    fn from_config_validates() {
        let bad = mq_core::SimConfig::new(0, 1);
        assert!(QueueChain::from_config(&bad).is_err());
        let good = mq_core::SimConfig::new(2, 3);
        assert_eq!(QueueChain::from_config(&good).unwrap().total_tokens(), 6);
    }

    #[test]
    fn out_of_range_queue_is_none() {
        let chain = QueueChain::new(2, 1).unwrap();
        assert!(chain.queue(QueueIndex(2)).is_none());
    }
}

// ── Tick transition ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tick {
    use super::*;

    #[test]
    fn three_queues_two_persons_full_trace() {
        let mut chain = QueueChain::new(3, 2).unwrap();
        assert_eq!(layout(&chain), vec![vec![0, 1], vec![0, 1], vec![0, 1]]);

        let expected: [Vec<Vec<u32>>; 6] = [
            vec![vec![1, 0], vec![1, 0], vec![1]],
            vec![vec![0, 1], vec![0, 1], vec![]],
            vec![vec![1, 0], vec![1], vec![]],
            vec![vec![0, 1], vec![], vec![]],
            vec![vec![1], vec![], vec![]],
            vec![vec![], vec![], vec![]],
        ];

        for (i, want) in expected.iter().enumerate() {
            assert!(!chain.is_complete(), "complete too early at tick {i}");
            chain.tick();
            assert_eq!(&layout(&chain), want, "after tick {}", i + 1);
        }
        assert!(chain.is_complete());
    }

    #[test]
    fn single_queue_just_pops() {
        let mut chain = QueueChain::new(1, 5).unwrap();
        for t in 1..=5u32 {
            chain.tick();
            let remaining: Vec<u32> = (t..5).collect();
            assert_eq!(layout(&chain), vec![remaining]);
        }
        assert!(chain.is_complete());
        assert_eq!(chain.ticks_to_complete(), 5);
    }

    #[test]
    fn entry_queue_never_grows() {
        let mut chain = QueueChain::new(4, 3).unwrap();
        let entry = QueueIndex(3);
        let mut prev = chain.queue(entry).unwrap().len();
        while !chain.is_complete() {
            chain.tick();
            let now = chain.queue(entry).unwrap().len();
            assert!(now <= prev);
            prev = now;
        }
    }

    #[test]
    fn tokens_move_at_most_one_queue_per_tick() {
        // Each queue below the entry received one token and passed one on;
        // a cascading shift would have emptied the middle queues.
        let mut chain = QueueChain::new(4, 1).unwrap();
        chain.tick();
        assert_eq!(layout(&chain), vec![vec![0], vec![0], vec![0], vec![]]);
    }

    #[test]
    fn complete_chain_stays_complete() {
        let mut chain = QueueChain::new(2, 2).unwrap();
        for _ in 0..chain.ticks_to_complete() {
            chain.tick();
        }
        assert!(chain.is_complete());
        for _ in 0..3 {
            chain.tick();
            assert!(chain.is_complete());
            assert_eq!(chain.total_tokens(), 0);
        }
    }
}

// ── Properties over arbitrary sizes ──────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn prop_every_queue_seeded_with_every_person(
            n in 1u32..16,
            p in 0u32..32,
        ) {
            let chain = QueueChain::new(n, p).unwrap();
            prop_assert_eq!(chain.num_queues(), n as usize);
            let expected = people(&(0..p).collect::<Vec<_>>());
            for k in 0..n {
                let q: Vec<PersonId> = chain.queue(QueueIndex(k)).unwrap().iter().copied().collect();
                prop_assert_eq!(&q, &expected, "queue {}", k);
            }
        }

        #[test]
        fn prop_completes_after_exactly_ticks_to_complete(
            n in 1u32..16,
            p in 0u32..32,
        ) {
            let mut chain = QueueChain::new(n, p).unwrap();
            let needed = chain.ticks_to_complete();
            prop_assert_eq!(needed, u64::from(n) * u64::from(p));
            for t in 0..needed {
                prop_assert!(!chain.is_complete(), "complete at tick {}", t);
                chain.tick();
            }
            prop_assert!(chain.is_complete());
        }

        #[test]
        fn prop_total_drops_by_one_while_collector_busy(
            n in 1u32..16,
            p in 0u32..32,
        ) {
            let mut chain = QueueChain::new(n, p).unwrap();
            for _ in 0..(chain.ticks_to_complete() + 2) {
                let before = chain.total_tokens();
                let collector_busy = !chain.queue(QueueIndex::COLLECTOR).unwrap().is_empty();
                chain.tick();
                let after = chain.total_tokens();
                if collector_busy {
                    prop_assert_eq!(after + 1, before);
                } else {
                    prop_assert_eq!(after, before);
                    prop_assert!(chain.is_complete(), "collector starved with tokens upstream");
                }
            }
        }

        #[test]
        fn prop_upstream_loses_only_the_head_of_queue_one(
            n in 2u32..16,
            p in 1u32..32,
        ) {
            let mut chain = QueueChain::new(n, p).unwrap();
            while !chain.is_complete() {
                let before = chain.snapshot();
                let mut expected: Vec<PersonId> = before
                    .iter()
                    .skip(1)
                    .flat_map(|(_, q)| q.iter().copied())
                    .collect();
                let moved = before.queue(QueueIndex(1)).unwrap().first().copied();

                chain.tick();

                let after = chain.snapshot();
                let upstream_after: Vec<PersonId> = after
                    .iter()
                    .skip(1)
                    .flat_map(|(_, q)| q.iter().copied())
                    .collect();

                if let Some(m) = moved {
                    let pos = expected.iter().position(|&x| x == m).unwrap();
                    expected.remove(pos);
                    prop_assert_eq!(after.queue(QueueIndex(0)).unwrap().last(), Some(&m));
                }
                prop_assert_eq!(sorted(upstream_after), sorted(expected));
            }
        }

        #[test]
        fn prop_complete_chain_is_a_fixed_point(
            n in 1u32..16,
            p in 0u32..32,
            extra in 1u32..8,
        ) {
            let mut chain = QueueChain::new(n, p).unwrap();
            for _ in 0..chain.ticks_to_complete() {
                chain.tick();
            }
            let done = chain.clone();
            for _ in 0..extra {
                chain.tick();
                prop_assert_eq!(&chain, &done);
            }
        }
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot {
    use super::*;

    #[test]
    fn snapshot_is_detached_from_chain() {
        let mut chain = QueueChain::new(2, 2).unwrap();
        let snap = chain.snapshot();
        chain.tick();
        assert_eq!(snap.queue(QueueIndex(0)).unwrap(), people(&[0, 1]).as_slice());
        assert_eq!(snap.total_tokens(), 4);
        assert_eq!(chain.total_tokens(), 3);
    }

    #[test]
    fn iter_borrows_queues_in_order() {
        let mut chain = QueueChain::new(3, 2).unwrap();
        chain.tick();
        let view: Vec<(u32, Vec<u32>)> = chain
            .iter()
            .map(|(q, people)| (q.0, people.iter().map(|p| p.0).collect()))
            .collect();
        assert_eq!(view, vec![(0, vec![1, 0]), (1, vec![1, 0]), (2, vec![1])]);
    }

    #[test]
    fn display_lists_queues_and_people() {
        let chain = QueueChain::new(2, 1).unwrap();
        let text = chain.snapshot().to_string();
        assert_eq!(text, "Queue 0:\nPerson 0\nQueue 1:\nPerson 0\n");
    }

    #[test]
    fn drained_snapshot() {
        let chain = QueueChain::new(3, 0).unwrap();
        let snap = chain.snapshot();
        assert_eq!(snap.len(), 3);
        assert!(!snap.is_empty());
        assert!(snap.is_drained());
    }
}

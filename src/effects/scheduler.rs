//! Delayed removal of effects.

use super::EffectId;
use crate::utils::time::Millis;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Capability to run a removal at a later time.
///
/// Removals are fire-and-forget: nothing cancels them, and whoever drains
/// [`Scheduler::take_due`] must tolerate ids that no longer exist.
pub trait Scheduler {
    /// Arrange for `id` to be handed back once the time reaches `due`
    fn schedule(&mut self, due: Millis, id: EffectId);

    /// Remove and return every id whose due time is `<= now`, earliest first
    fn take_due(&mut self, now: Millis) -> Vec<EffectId>;

    /// Number of removals still waiting
    fn pending(&self) -> usize;
}

/// Min-heap of pending removals ordered by due time, then by scheduling order
#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Reverse<(Millis, u64, EffectId)>>,
    seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Due time of the earliest pending removal
    pub fn next_due(&self) -> Option<Millis> {
        self.heap.peek().map(|Reverse((due, _, _))| *due)
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, due: Millis, id: EffectId) {
        self.heap.push(Reverse((due, self.seq, id)));
        self.seq += 1;
    }

    fn take_due(&mut self, now: Millis) -> Vec<EffectId> {
        let mut due_ids = Vec::new();
        while let Some(Reverse((due, _, _))) = self.heap.peek() {
            if *due > now {
                break;
            }
            if let Some(Reverse((_, _, id))) = self.heap.pop() {
                due_ids.push(id);
            }
        }
        due_ids
    }

    fn pending(&self) -> usize {
        self.heap.len()
    }
}

//! A small timer queue replacing independent callback timers.
//!
//! Events are kept in a min-heap keyed by due time; events due at the same instant fire in the
//! order they were scheduled, which keeps every run deterministic under a virtual clock.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::entity::ghost::GhostType;

/// Something the game has to do at a given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// A ghost picks a new random direction; re-armed after firing.
    GhostRedirect(GhostType),
    /// An energizer's effect wears off. Carries the token of the impairment it ends.
    ImpairmentExpired { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scheduled {
    due: Duration,
    sequence: u64,
    event: TimerEvent,
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.sequence).cmp(&(other.due, other.sequence))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending timer events, ordered by due time then scheduling order.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<Scheduled>>,
    next_sequence: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules an event to fire at `due`.
    pub fn schedule(&mut self, due: Duration, event: TimerEvent) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(Reverse(Scheduled { due, sequence, event }));
    }

    /// Removes and returns the earliest event due at or before `now`, with the time it was due.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, TimerEvent)> {
        match self.queue.peek() {
            Some(Reverse(next)) if next.due <= now => self.queue.pop().map(|Reverse(s)| (s.due, s.event)),
            _ => None,
        }
    }

    /// The due time of the earliest pending event.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(s)| s.due)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Keeps only the pending events for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&TimerEvent) -> bool) {
        self.queue.retain(|Reverse(scheduled)| keep(&scheduled.event));
    }

    /// Cancels every pending event.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

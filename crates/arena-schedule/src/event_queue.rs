//! `EventQueue`: a time-ordered queue of pending actions.
//!
//! `BTreeMap` gives O(log W) insert and pop where W is the number of distinct
//! fire times.  A review session has a handful of agents and one poll timer,
//! so W stays tiny.  Entries that share a fire time pop in insertion order.

use std::collections::{BTreeMap, VecDeque};

use arena_core::{AgentId, SimTime};

struct Entry<E> {
    /// Cancellation token: the agent this timer belongs to, if any.
    owner: Option<AgentId>,
    event: E,
}

/// A priority queue mapping fire times → events due at that time.
pub struct EventQueue<E> {
    inner: BTreeMap<SimTime, VecDeque<Entry<E>>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self { inner: BTreeMap::new(), total: 0 }
    }
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a session-wide event at `at`.
    pub fn push(&mut self, at: SimTime, event: E) {
        self.insert(at, Entry { owner: None, event });
    }

    /// Schedule an event owned by `agent`; it is dropped by
    /// [`cancel_owner`](Self::cancel_owner).
    pub fn push_for(&mut self, at: SimTime, agent: AgentId, event: E) {
        self.insert(at, Entry { owner: Some(agent), event });
    }

    fn insert(&mut self, at: SimTime, entry: Entry<E>) {
        self.inner.entry(at).or_default().push_back(entry);
        self.total += 1;
    }

    /// Remove and return the earliest event due at or before `now`.
    ///
    /// Returns `None` once nothing is due, even if later events remain.
    pub fn pop_due(&mut self, now: SimTime) -> Option<(SimTime, E)> {
        let mut slot = self.inner.first_entry()?;
        let at = *slot.key();
        if at > now {
            return None;
        }
        let entry = slot.get_mut().pop_front()?;
        if slot.get().is_empty() {
            slot.remove();
        }
        self.total -= 1;
        Some((at, entry.event))
    }

    /// Drop every pending event owned by `agent`.  Returns how many were
    /// dropped.
    pub fn cancel_owner(&mut self, agent: AgentId) -> usize {
        let before = self.total;
        self.inner.retain(|_, entries| {
            entries.retain(|e| e.owner != Some(agent));
            !entries.is_empty()
        });
        self.total = self.inner.values().map(VecDeque::len).sum();
        before - self.total
    }

    /// Drop every pending event matching `pred`.  Returns how many were
    /// dropped.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&E) -> bool) -> usize {
        let before = self.total;
        self.inner.retain(|_, entries| {
            entries.retain(|e| !pred(&e.event));
            !entries.is_empty()
        });
        self.total = self.inner.values().map(VecDeque::len).sum();
        before - self.total
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.total = 0;
    }

    /// `true` if `agent` has at least one pending event.
    pub fn has_pending_for(&self, agent: AgentId) -> bool {
        self.inner
            .values()
            .flatten()
            .any(|e| e.owner == Some(agent))
    }

    /// Iterate over pending `(fire_time, event)` pairs in firing order.
    pub fn iter(&self) -> impl Iterator<Item = (SimTime, &E)> + '_ {
        self.inner
            .iter()
            .flat_map(|(&at, entries)| entries.iter().map(move |e| (at, &e.event)))
    }

    /// The earliest fire time with at least one queued event.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Total number of pending events.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

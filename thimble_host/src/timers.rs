// Copyright 2025 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use hashbrown::HashMap;
use thimble_input::{TimerDriver, TimerId};

/// A timer queue that fires only on request.
///
/// Clones share one queue: hand one clone to the recognizer as its
/// [`TimerDriver`] and keep another to inspect and expire countdowns from
/// the test. Expiring a countdown here only removes it from the queue; the
/// caller still relays the expiry to whoever scheduled it (for example
/// `TapRecognizer::on_timer_expiry`), matching how a real platform delivers
/// timer callbacks.
#[derive(Clone, Debug, Default)]
pub struct ManualTimers {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    next: u64,
    pending: HashMap<TimerId, u64>,
}

impl ManualTimers {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outstanding countdown handles, oldest first.
    #[must_use]
    pub fn pending(&self) -> Vec<TimerId> {
        let mut ids: Vec<TimerId> = self.inner.borrow().pending.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Whether `id` is still outstanding.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.inner.borrow().pending.contains_key(&id)
    }

    /// The duration an outstanding countdown was scheduled with.
    #[must_use]
    pub fn duration_of(&self, id: TimerId) -> Option<u64> {
        self.inner.borrow().pending.get(&id).copied()
    }

    /// Fire `id`: remove it from the queue. Returns whether it was still
    /// outstanding. The caller relays the expiry to the scheduler's owner.
    pub fn expire(&self, id: TimerId) -> bool {
        self.inner.borrow_mut().pending.remove(&id).is_some()
    }
}

impl TimerDriver for ManualTimers {
    fn schedule(&mut self, duration: u64) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        inner.next += 1;
        let id = TimerId::new(inner.next).expect("ids start at 1");
        inner.pending.insert(id, duration);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        // Idempotent: cancelling a fired or foreign id is a no-op.
        self.inner.borrow_mut().pending.remove(&id);
    }
}

// Copyright 2025 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::RefCell;

use thimble_input::{EventSet, EventTarget};

/// An element that only remembers what was asked of it.
///
/// Tracks listener registrations per phase and the disabled attribute.
/// Clones share one element: hand one clone to a recognizer and keep
/// another, so the test can still assert what the recognizer did after it
/// released its reference.
#[derive(Clone, Debug, Default)]
pub struct SimElement {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Debug)]
struct Inner {
    bubble: EventSet,
    capture: EventSet,
    disabled: bool,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            bubble: EventSet::empty(),
            capture: EventSet::empty(),
            disabled: false,
        }
    }
}

impl SimElement {
    /// Create an enabled element with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners currently registered for the given phase.
    #[must_use]
    pub fn listeners(&self, use_capture: bool) -> EventSet {
        let inner = self.inner.borrow();
        if use_capture { inner.capture } else { inner.bubble }
    }
}

impl EventTarget for SimElement {
    fn add_listeners(&mut self, kinds: EventSet, use_capture: bool) {
        let mut inner = self.inner.borrow_mut();
        if use_capture {
            inner.capture |= kinds;
        } else {
            inner.bubble |= kinds;
        }
    }

    fn remove_listeners(&mut self, kinds: EventSet, use_capture: bool) {
        let mut inner = self.inner.borrow_mut();
        if use_capture {
            inner.capture &= !kinds;
        } else {
            inner.bubble &= !kinds;
        }
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.inner.borrow_mut().disabled = disabled;
    }

    fn is_disabled(&self) -> bool {
        self.inner.borrow().disabled
    }
}

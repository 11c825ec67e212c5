// Copyright 2025 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suppression of synthetic mouse events after touch input.

use alloc::rc::Rc;
use core::cell::Cell;

/// Shared flag suppressing the synthetic mouse replay of a touch gesture.
///
/// After a touch interaction completes, many platforms dispatch an
/// equivalent mouse sequence for the same physical gesture, followed by a
/// `click`. The replay is a document-wide phenomenon: it targets whatever
/// element the gesture hit, which need not be the element whose recognizer
/// last saw a touch. The flag is therefore shared across every recognizer
/// built from clones of one guard, not kept per element.
///
/// State transitions, in dispatch order:
/// - any touch-start or touch-end observed anywhere arms the guard,
/// - while armed, mouse-shaped presses and releases are discarded,
/// - any `click` observed anywhere disarms it (this also restores sanity on
///   devices with inconsistent touch/click firing order).
///
/// Everything runs on the host's single dispatch thread, so a plain shared
/// cell is enough; there is no locking to get wrong. Construct one guard
/// per document (or per test) and clone it into each recognizer.
#[derive(Clone, Debug, Default)]
pub struct SyntheticMouseGuard {
    suppressing: Rc<Cell<bool>>,
}

impl SyntheticMouseGuard {
    /// Create a guard with suppression disarmed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a touch-start or touch-end was observed.
    pub fn observe_touch(&self) {
        self.suppressing.set(true);
    }

    /// Record that a `click` was observed.
    pub fn observe_click(&self) {
        self.suppressing.set(false);
    }

    /// Whether mouse-shaped presses and releases should currently be
    /// discarded.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.suppressing.get()
    }
}

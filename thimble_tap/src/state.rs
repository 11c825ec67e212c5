// Copyright 2025 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-element gesture state machine.

use kurbo::Point;
use thimble_input::{InputEvent, InputKind, PointerSource, SECONDARY_BUTTON, TimerDriver, TimerId};

use crate::guard::SyntheticMouseGuard;

/// Countdown started at each accepted press, in host time units
/// (milliseconds on browser-like hosts).
///
/// While it runs, further press-starts on the same element are treated as
/// duplicate first-pointer events of the same physical gesture and ignored.
/// Expiry only retires the guard; it never invalidates the gesture, so a
/// slow stationary press still commits on release.
pub const PRESS_GUARD_DURATION: u64 = 300;

/// Squared displacement from the press position beyond which the pointer is
/// considered drifting, in squared logical units (20 units straight-line).
///
/// Large enough to absorb finger jitter on touch screens, small enough that
/// an intentional drag drops out of the duplicate-guard window quickly.
pub const DRIFT_THRESHOLD_SQUARED: f64 = 400.0;

/// Classification of one input event by [`TapState::handle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TapResult {
    /// The event was absorbed with no recognition outcome.
    Ignored,
    /// A press was accepted and the duplicate-guard countdown started.
    Pressed,
    /// Movement exceeded [`DRIFT_THRESHOLD_SQUARED`]; the countdown was
    /// dropped.
    Drifted,
    /// The platform cancelled the gesture; press state was discarded.
    Canceled,
    /// The release completed a tap.
    Tap,
    /// A bare `click` completed a tap with no recognized press/release pair.
    ClickTap,
}

/// Per-element tap state machine.
///
/// Feed every normalized event for the bound element to
/// [`TapState::handle`] in dispatch order and act on the returned
/// [`TapResult`]. The machine performs no side effects beyond guard and
/// timer bookkeeping; it never panics, and irrelevant or suppressed input
/// classifies as [`TapResult::Ignored`].
///
/// ## Drift asymmetry
///
/// Moving beyond [`DRIFT_THRESHOLD_SQUARED`] while the countdown is pending
/// drops the countdown but deliberately leaves the press flag set, so a
/// subsequent release still commits a tap. This mirrors the long-shipped
/// behavior of the widget stacks this machine is compatible with; widgets
/// relying on drag-then-release activation depend on it.
#[derive(Clone, Debug)]
pub struct TapState {
    guard: SyntheticMouseGuard,
    pointer_down: bool,
    timer: Option<TimerId>,
    start: Point,
}

impl TapState {
    /// Create an idle machine sharing `guard` with its sibling recognizers.
    #[must_use]
    pub fn new(guard: SyntheticMouseGuard) -> Self {
        Self {
            guard,
            pointer_down: false,
            timer: None,
            start: Point::ZERO,
        }
    }

    /// Classify one event, scheduling or cancelling countdowns on `timers`
    /// as needed.
    pub fn handle(&mut self, event: &InputEvent, timers: &mut dyn TimerDriver) -> TapResult {
        match event.kind {
            InputKind::PressStart => self.on_press_start(event, timers),
            InputKind::Move => self.on_move(event, timers),
            InputKind::Release => self.on_release(event, timers),
            InputKind::Cancel => self.on_cancel(timers),
            InputKind::Click => self.on_click(),
        }
    }

    /// Platform callback for an expired countdown.
    ///
    /// Only retires the duplicate guard; the gesture itself stays valid.
    /// Stale ids (already cancelled or superseded) are absorbed.
    pub fn on_timer_expiry(&mut self, id: TimerId) {
        if self.timer == Some(id) {
            self.timer = None;
        }
    }

    /// Whether a press is awaiting resolution.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pointer_down
    }

    /// Whether the duplicate-guard countdown is outstanding.
    #[must_use]
    pub const fn timer_pending(&self) -> bool {
        self.timer.is_some()
    }

    fn on_press_start(&mut self, event: &InputEvent, timers: &mut dyn TimerDriver) -> TapResult {
        // A second finger makes this a multi-finger gesture, not a tap.
        if event.touch_count() > 1 {
            return TapResult::Ignored;
        }
        if event.source == PointerSource::Touch {
            self.guard.observe_touch();
        } else if self.guard.is_active() {
            // Synthetic replay of a touch gesture already handled.
            return TapResult::Ignored;
        }
        // An outstanding countdown means a first pointer for this physical
        // gesture was already accepted; platforms that emit both device
        // forms deliver the duplicate within the window.
        if self.timer.is_some() {
            return TapResult::Ignored;
        }
        self.start = event.position();
        self.pointer_down = true;
        self.timer = Some(timers.schedule(PRESS_GUARD_DURATION));
        TapResult::Pressed
    }

    fn on_move(&mut self, event: &InputEvent, timers: &mut dyn TimerDriver) -> TapResult {
        // Movement only matters while the countdown is pending.
        let Some(id) = self.timer else {
            return TapResult::Ignored;
        };
        if event.position().distance_squared(self.start) > DRIFT_THRESHOLD_SQUARED {
            // Drops the countdown only; `pointer_down` survives. See the
            // drift asymmetry note on the struct.
            timers.cancel(id);
            self.timer = None;
            return TapResult::Drifted;
        }
        TapResult::Ignored
    }

    fn on_release(&mut self, event: &InputEvent, timers: &mut dyn TimerDriver) -> TapResult {
        if event.source == PointerSource::Touch {
            self.guard.observe_touch();
        } else if self.guard.is_active() {
            return TapResult::Ignored;
        }
        if !self.pointer_down {
            return TapResult::Ignored;
        }
        self.pointer_down = false;
        self.clear_timer(timers);
        // Contextual-click suppression, checked only once the press state
        // is confirmed and consumed.
        if event.button == SECONDARY_BUTTON {
            return TapResult::Ignored;
        }
        TapResult::Tap
    }

    fn on_cancel(&mut self, timers: &mut dyn TimerDriver) -> TapResult {
        self.pointer_down = false;
        self.clear_timer(timers);
        TapResult::Canceled
    }

    fn on_click(&mut self) -> TapResult {
        let was_suppressing = self.guard.is_active();
        // Always disarm, whatever else happens; some older tablets fire
        // touch and click in inconsistent orders.
        self.guard.observe_click();
        if self.pointer_down && !was_suppressing {
            // Pointer devices that deliver only `click`, with no down/up
            // pair this machine recognizes, commit from here. The countdown
            // is left to retire itself on expiry.
            self.pointer_down = false;
            return TapResult::ClickTap;
        }
        TapResult::Ignored
    }

    fn clear_timer(&mut self, timers: &mut dyn TimerDriver) {
        if let Some(id) = self.timer.take() {
            timers.cancel(id);
        }
    }
}

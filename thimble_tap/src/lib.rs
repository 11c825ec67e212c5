// Copyright 2025 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thimble Tap: one canonical tap per physical gesture, across mouse and
//! touch.
//!
//! ## Overview
//!
//! Hybrid platforms emit redundant input for a single physical press: a
//! touch sequence, then a synthetic mouse sequence replaying the same
//! gesture against the same element, and finally a `click`. This crate
//! collapses that noise into exactly one tap notification, while rejecting
//! gestures that are really drags or multi-finger touches:
//!
//! - [`TapState`] is the per-element state machine. It owns the press flag,
//!   the start position, and a duplicate-guard countdown, and classifies
//!   each normalized [`InputEvent`](thimble_input::InputEvent) into a
//!   [`TapResult`].
//! - [`SyntheticMouseGuard`] is the cross-instance suppression flag. Touch
//!   activity arms it anywhere; while armed, mouse-shaped presses and
//!   releases are discarded everywhere; the trailing `click` disarms it.
//! - [`TapRecognizer`] binds a state machine and a guard to one
//!   [`EventTarget`](thimble_input::EventTarget), applies the side effects
//!   (default prevention, propagation stop), and invokes a [`TapHandler`]
//!   exactly once per recognized tap, notifying an optional
//!   [`AnalyticsObserver`].
//!
//! ## Minimal example
//!
//! Driving the state machine directly, with hand-rolled timers:
//!
//! ```
//! use kurbo::Point;
//! use thimble_input::{InputEvent, TimerDriver, TimerId};
//! use thimble_tap::{SyntheticMouseGuard, TapResult, TapState};
//!
//! struct Timers(u64);
//! impl TimerDriver for Timers {
//!     fn schedule(&mut self, _duration: u64) -> TimerId {
//!         self.0 += 1;
//!         TimerId::new(self.0).expect("ids start at 1")
//!     }
//!     fn cancel(&mut self, _id: TimerId) {}
//! }
//!
//! let mut timers = Timers(0);
//! let guard = SyntheticMouseGuard::new();
//! let mut state = TapState::new(guard.clone());
//!
//! // A stationary touch press/release pair commits a tap…
//! let down = InputEvent::touch_start(&[Point::new(10.0, 10.0)]);
//! assert_eq!(state.handle(&down, &mut timers), TapResult::Pressed);
//! let up = InputEvent::touch_end(&[Point::new(10.0, 10.0)]);
//! assert_eq!(state.handle(&up, &mut timers), TapResult::Tap);
//!
//! // …and arms the guard, so the synthetic mouse replay is discarded.
//! assert!(guard.is_active());
//! let ghost = InputEvent::mouse_down(Point::new(10.0, 10.0), 0);
//! assert_eq!(state.handle(&ghost, &mut timers), TapResult::Ignored);
//!
//! // The trailing click disarms it for the next real mouse interaction.
//! let click = InputEvent::click(Point::new(10.0, 10.0));
//! state.handle(&click, &mut timers);
//! assert!(!guard.is_active());
//! ```
//!
//! ## Layering
//!
//! [`TapState`] only classifies; it performs no side effects beyond guard
//! and timer bookkeeping. [`TapRecognizer`] is the layer that owns an
//! element, applies effect flags to the triggering event, and calls user
//! code. Hosts that already have their own widget plumbing can use the
//! state machine alone.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod guard;
mod recognizer;
mod state;

pub use guard::SyntheticMouseGuard;
pub use recognizer::{AnalyticsObserver, TapHandler, TapOptions, TapRecognizer};
pub use state::{DRIFT_THRESHOLD_SQUARED, PRESS_GUARD_DURATION, TapResult, TapState};

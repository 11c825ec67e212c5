// Copyright 2025 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thimble Input: a normalized pointer-input model for tap recognition.
//!
//! ## Overview
//!
//! Hybrid mouse/touch platforms deliver redundant, device-inconsistent event
//! streams: a single physical press may surface as a touch sequence, a mouse
//! sequence, or both. This crate models the slice of that input a tap
//! recognizer consumes as a closed set of [`InputKind`]s, each normalized
//! into one [`InputEvent`] payload (coordinates, active-touch list, button),
//! so downstream state machines dispatch on a tagged value instead of
//! sniffing raw event shapes.
//!
//! It also defines the two traits a host platform must provide:
//!
//! - [`EventTarget`]: the element boundary — listener registration for an
//!   [`EventSet`] and the disabled attribute.
//! - [`TimerDriver`]: cancellable one-shot countdowns, the only timing
//!   primitive recognition needs.
//!
//! ## Coordinates
//!
//! Mouse-shaped events carry direct coordinates; touch-shaped events carry a
//! list of active touch points and no direct coordinates.
//! [`InputEvent::position`] unifies the two, reading the first touch entry
//! when no direct coordinates are present:
//!
//! ```
//! use kurbo::Point;
//! use thimble_input::InputEvent;
//!
//! let mouse = InputEvent::mouse_move(Point::new(4.0, 8.0));
//! assert_eq!(mouse.position(), Point::new(4.0, 8.0));
//!
//! let touch = InputEvent::touch_start(&[Point::new(15.0, 16.0)]);
//! assert_eq!(touch.position(), Point::new(15.0, 16.0));
//! assert_eq!(touch.touch_count(), 1);
//! ```
//!
//! ## Effect flags
//!
//! Default prevention and propagation stopping live on the event payload,
//! mutated by whoever consumes the event and inspected by the host after
//! dispatch:
//!
//! ```
//! use kurbo::Point;
//! use thimble_input::{InputEvent, PRIMARY_BUTTON};
//!
//! let mut ev = InputEvent::mouse_up(Point::ZERO, PRIMARY_BUTTON);
//! assert!(!ev.default_prevented());
//! ev.prevent_default();
//! assert!(ev.default_prevented());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod target;
mod timer;

pub use event::{
    Button, InputEvent, InputKind, PRIMARY_BUTTON, PointerSource, SECONDARY_BUTTON,
};
pub use target::{EventSet, EventTarget};
pub use timer::{TimerDriver, TimerId};

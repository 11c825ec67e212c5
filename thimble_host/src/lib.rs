// Copyright 2025 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thimble Host: in-memory implementations of the platform boundary.
//!
//! Real hosts hand recognizers live elements and a real timer queue. For
//! tests and demos this crate provides deterministic stand-ins:
//!
//! - [`SimElement`]: listener bookkeeping and a disabled flag behind
//!   [`EventTarget`](thimble_input::EventTarget).
//! - [`ManualTimers`]: a [`TimerDriver`](thimble_input::TimerDriver) whose
//!   countdowns fire only when the test says so.
//!
//! ```
//! use thimble_input::TimerDriver;
//! use thimble_host::ManualTimers;
//!
//! let timers = ManualTimers::new();
//! let id = timers.clone().schedule(300);
//! assert!(timers.is_pending(id));
//!
//! // The test decides when "300 time units" have passed.
//! assert!(timers.expire(id));
//! assert!(!timers.is_pending(id));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod element;
mod timers;

pub use element::SimElement;
pub use timers::ManualTimers;

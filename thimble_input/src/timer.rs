// Copyright 2025 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellable one-shot countdowns, the only timing primitive recognition
//! requires of the platform.

use core::num::NonZeroU64;

/// Handle to a scheduled countdown.
pub type TimerId = NonZeroU64;

/// Provider of one-shot countdowns.
///
/// A recognizer schedules at most one outstanding countdown per bound
/// element. Expiry is delivered by the host calling back into the owner
/// (for example `TapRecognizer::on_timer_expiry`) with the handle; there is
/// no ambient callback. Everything runs on the host's single dispatch
/// thread, so a pending countdown can be observed or cancelled by any event
/// delivered before it fires.
pub trait TimerDriver {
    /// Schedule a countdown of `duration` host time units (milliseconds on
    /// browser-like hosts) and return its handle.
    fn schedule(&mut self, duration: u64) -> TimerId;

    /// Cancel an outstanding countdown. Must be idempotent: cancelling a
    /// handle that already fired, was already cancelled, or was never issued
    /// is a no-op.
    fn cancel(&mut self, id: TimerId);
}

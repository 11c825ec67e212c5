// Copyright 2025 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element boundary: named listener registration and the disabled
//! attribute, the only pieces of the host's element surface recognition
//! consumes.

bitflags::bitflags! {
    /// Catalog of listener registrations a recognizer may request on an
    /// element, one flag per [`InputKind`](crate::InputKind) in each of its
    /// raw shapes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventSet: u8 {
        /// `mousedown` and `touchstart`.
        const PRESS_START = 0b0000_0001;
        /// `mousemove` and `touchmove`.
        const MOVE        = 0b0000_0010;
        /// `mouseup` and `touchend`.
        const RELEASE     = 0b0000_0100;
        /// `touchcancel`.
        const CANCEL      = 0b0000_1000;
        /// `click`.
        const CLICK       = 0b0001_0000;
        /// Everything tap recognition listens for.
        const TAP = Self::PRESS_START.bits()
            | Self::MOVE.bits()
            | Self::RELEASE.bits()
            | Self::CANCEL.bits()
            | Self::CLICK.bits();
    }
}

/// An element a recognizer can bind to.
///
/// This is the seam to the host's element/style utility surface. The
/// recognizer registers listeners on construction, removes them on
/// destruction, and reads/writes the disabled attribute; it requires nothing
/// else of the element. Hosts route the raw events selected here back to the
/// recognizer as normalized [`InputEvent`](crate::InputEvent)s.
pub trait EventTarget {
    /// Register listeners for `kinds`, in the capture phase when
    /// `use_capture` is set.
    fn add_listeners(&mut self, kinds: EventSet, use_capture: bool);

    /// Remove previously registered listeners for `kinds`. Removing a
    /// listener that was never added is a no-op.
    fn remove_listeners(&mut self, kinds: EventSet, use_capture: bool);

    /// Write the element's disabled attribute.
    fn set_disabled(&mut self, disabled: bool);

    /// Read the element's disabled attribute. A disabled element ignores
    /// every incoming event.
    fn is_disabled(&self) -> bool;
}

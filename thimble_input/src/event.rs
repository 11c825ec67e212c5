// Copyright 2025 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The normalized input event: a tagged kind plus the payload tap
//! recognition reads (coordinates, touch list, button, effect flags).

use kurbo::Point;
use smallvec::SmallVec;

/// Mouse button identifier, using the platform's numbering
/// (`0` primary, `2` secondary).
pub type Button = u8;

/// The primary (left, on a right-handed mouse) button.
pub const PRIMARY_BUTTON: Button = 0;

/// The secondary (right, on a right-handed mouse) button, the one that opens
/// contextual menus and must not commit a tap.
pub const SECONDARY_BUTTON: Button = 2;

/// Which device family shaped an event.
///
/// Suppression of synthetic mouse events hinges on this distinction: after a
/// touch interaction, many platforms replay the same physical gesture as a
/// mouse sequence against the same element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// Mouse-shaped: direct coordinates, a meaningful button id.
    Mouse,
    /// Touch-shaped: coordinates live in the active-touch list.
    Touch,
}

/// The closed set of input kinds tap recognition consumes.
///
/// `PressStart`/`Move`/`Release` unify the mouse and touch forms of the same
/// physical phase; [`PointerSource`] records which form arrived. `Cancel` is
/// touch-only. `Click` is the platform's own activation event, delivered
/// after (or, on some devices, instead of) a distinguishable down/up pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// `mousedown` / `touchstart`.
    PressStart,
    /// `mousemove` / `touchmove`.
    Move,
    /// `mouseup` / `touchend`.
    Release,
    /// `touchcancel`.
    Cancel,
    /// `click`.
    Click,
}

/// One normalized input event.
///
/// Constructed per raw platform event via the shape-specific constructors
/// ([`InputEvent::mouse_down`], [`InputEvent::touch_start`], …), then fed to
/// a recognizer, which may raise the effect flags. The host inspects
/// [`InputEvent::default_prevented`] and [`InputEvent::propagation_stopped`]
/// after dispatch to apply them on the real platform event.
#[derive(Clone, Debug)]
pub struct InputEvent {
    /// Which phase of input this event represents.
    pub kind: InputKind,
    /// Which device family shaped it.
    pub source: PointerSource,
    /// Button carried by mouse-shaped events; [`PRIMARY_BUTTON`] otherwise.
    pub button: Button,
    /// Direct coordinates; absent on touch-shaped events.
    coords: Option<Point>,
    /// Active touch points; the first entry supplies coordinates when
    /// `coords` is absent.
    touches: SmallVec<[Point; 2]>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl InputEvent {
    fn mouse(kind: InputKind, position: Point, button: Button) -> Self {
        Self {
            kind,
            source: PointerSource::Mouse,
            button,
            coords: Some(position),
            touches: SmallVec::new(),
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    fn touch(kind: InputKind, touches: &[Point]) -> Self {
        Self {
            kind,
            source: PointerSource::Touch,
            button: PRIMARY_BUTTON,
            coords: None,
            touches: SmallVec::from_slice(touches),
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// A mouse-shaped press start.
    #[must_use]
    pub fn mouse_down(position: Point, button: Button) -> Self {
        Self::mouse(InputKind::PressStart, position, button)
    }

    /// A mouse-shaped move.
    #[must_use]
    pub fn mouse_move(position: Point) -> Self {
        Self::mouse(InputKind::Move, position, PRIMARY_BUTTON)
    }

    /// A mouse-shaped release.
    #[must_use]
    pub fn mouse_up(position: Point, button: Button) -> Self {
        Self::mouse(InputKind::Release, position, button)
    }

    /// A touch-shaped press start carrying the active touch points.
    #[must_use]
    pub fn touch_start(touches: &[Point]) -> Self {
        Self::touch(InputKind::PressStart, touches)
    }

    /// A touch-shaped move.
    #[must_use]
    pub fn touch_move(touches: &[Point]) -> Self {
        Self::touch(InputKind::Move, touches)
    }

    /// A touch-shaped release.
    #[must_use]
    pub fn touch_end(touches: &[Point]) -> Self {
        Self::touch(InputKind::Release, touches)
    }

    /// A touch cancellation. Carries no useful payload.
    #[must_use]
    pub fn touch_cancel() -> Self {
        Self::touch(InputKind::Cancel, &[])
    }

    /// The platform's activation event.
    #[must_use]
    pub fn click(position: Point) -> Self {
        Self::mouse(InputKind::Click, position, PRIMARY_BUTTON)
    }

    /// The event's position, regardless of shape.
    ///
    /// Direct coordinates win when present; otherwise the first entry of the
    /// touch list supplies them. Well-formed platform events always carry
    /// one or the other; an empty event reads as the origin.
    #[must_use]
    pub fn position(&self) -> Point {
        self.coords
            .or_else(|| self.touches.first().copied())
            .unwrap_or(Point::ZERO)
    }

    /// Number of simultaneously active touch points (zero for mouse-shaped
    /// events).
    #[must_use]
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Ask the host to suppress the platform's default action for this
    /// event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Ask the host to stop this event from propagating further.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether default suppression was requested.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether a propagation stop was requested.
    #[must_use]
    pub const fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

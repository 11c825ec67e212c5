// Copyright 2025 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public recognizer: one element, one handler, one tap per gesture.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use thimble_input::{EventSet, EventTarget, InputEvent, TimerDriver, TimerId};

use crate::guard::SyntheticMouseGuard;
use crate::state::{TapResult, TapState};

/// User callback invoked once per recognized tap.
///
/// Blanket-implemented for closures, which carry their own captured scope;
/// there is no separate scope object to resolve at invocation time.
pub trait TapHandler {
    /// Called with the event that completed the tap (the release, or the
    /// bare `click` on click-only devices). The handler may raise further
    /// effect flags on it.
    fn on_tap(&mut self, event: &mut InputEvent);
}

impl<F: FnMut(&mut InputEvent)> TapHandler for F {
    fn on_tap(&mut self, event: &mut InputEvent) {
        self(event);
    }
}

/// Optional observer notified after each recognized tap.
///
/// Purely an observer: it receives no gesture details and its return value
/// is not consumed. Shared between the caller and the recognizer, never
/// owned by it.
pub trait AnalyticsObserver {
    /// A tap completed on the recognizer this observer is attached to.
    fn tap_completed(&mut self);
}

/// Construction-time configuration, fixed for the recognizer's lifetime.
#[derive(Copy, Clone, Debug)]
pub struct TapOptions {
    /// Stop the triggering release event from propagating further.
    pub stop_propagation: bool,
    /// Register listeners in the capture phase.
    pub use_capture: bool,
}

impl Default for TapOptions {
    fn default() -> Self {
        Self {
            stop_propagation: true,
            use_capture: false,
        }
    }
}

/// Binds a [`TapState`] and a [`SyntheticMouseGuard`] to one element.
///
/// Construction registers listeners for [`EventSet::TAP`] on the target;
/// the host then routes the selected raw events back through
/// [`TapRecognizer::handle`] as normalized [`InputEvent`]s, and relays
/// countdown expiry through [`TapRecognizer::on_timer_expiry`]. Per
/// recognized tap the recognizer prevents the triggering event's default
/// action, optionally stops its propagation, invokes the handler exactly
/// once, and notifies the analytics observer if attached.
///
/// A recognizer may be constructed detached (`target: None`); registration
/// is then a no-op and every event is absorbed until a bound instance is
/// built in its place.
pub struct TapRecognizer<T: EventTarget, D: TimerDriver> {
    target: Option<T>,
    timers: D,
    state: TapState,
    handler: Option<Box<dyn TapHandler>>,
    analytics: Option<Rc<RefCell<dyn AnalyticsObserver>>>,
    options: TapOptions,
}

impl<T: EventTarget, D: TimerDriver> core::fmt::Debug for TapRecognizer<T, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TapRecognizer")
            .field("bound", &self.target.is_some())
            .field("options", &self.options)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<T: EventTarget, D: TimerDriver> TapRecognizer<T, D> {
    /// Create a recognizer with default [`TapOptions`] and register its
    /// listeners on `target`.
    pub fn new(
        target: Option<T>,
        handler: impl TapHandler + 'static,
        guard: SyntheticMouseGuard,
        timers: D,
    ) -> Self {
        Self::with_options(target, handler, guard, timers, TapOptions::default())
    }

    /// Create a recognizer with explicit options.
    pub fn with_options(
        mut target: Option<T>,
        handler: impl TapHandler + 'static,
        guard: SyntheticMouseGuard,
        timers: D,
        options: TapOptions,
    ) -> Self {
        if let Some(t) = &mut target {
            t.add_listeners(EventSet::TAP, options.use_capture);
        }
        Self {
            target,
            timers,
            state: TapState::new(guard),
            handler: Some(Box::new(handler)),
            analytics: None,
            options,
        }
    }

    /// Process one normalized event for the bound element.
    ///
    /// Destroyed, detached, and disabled recognizers absorb everything.
    /// Hosts deliver events in platform dispatch order; the returned
    /// [`TapResult`] is informational (handler invocation and effect flags
    /// have already been applied).
    pub fn handle(&mut self, event: &mut InputEvent) -> TapResult {
        let Some(target) = &self.target else {
            return TapResult::Ignored;
        };
        // Disabled elements ignore every incoming event, ahead of any guard
        // or press bookkeeping.
        if target.is_disabled() {
            return TapResult::Ignored;
        }
        let result = self.state.handle(event, &mut self.timers);
        match result {
            TapResult::Tap => {
                event.prevent_default();
                if self.options.stop_propagation {
                    event.stop_propagation();
                }
                self.invoke(event);
            }
            TapResult::ClickTap => self.invoke(event),
            _ => {}
        }
        result
    }

    /// Platform callback for an expired countdown.
    pub fn on_timer_expiry(&mut self, id: TimerId) {
        self.state.on_timer_expiry(id);
    }

    /// Unregister all listeners and release the target, handler, and
    /// observer references.
    ///
    /// Call at most once. Events delivered afterwards are absorbed without
    /// effect; so is a late `destroy` on an already-destroyed instance.
    pub fn destroy(&mut self) {
        if let Some(target) = &mut self.target {
            target.remove_listeners(EventSet::TAP, self.options.use_capture);
        }
        self.target = None;
        self.handler = None;
        self.analytics = None;
    }

    /// Replace the tap callback. The new callback carries its own captured
    /// scope; the replacement is atomic with respect to event dispatch.
    pub fn change_handler(&mut self, handler: impl TapHandler + 'static) {
        self.handler = Some(Box::new(handler));
    }

    /// Write the bound element's disabled attribute, inverse of `enabled`.
    pub fn set_enabled(&mut self, enabled: bool) {
        if let Some(target) = &mut self.target {
            target.set_disabled(!enabled);
        }
    }

    /// Attach the optional analytics hook.
    pub fn set_analytics_observer(&mut self, observer: Rc<RefCell<dyn AnalyticsObserver>>) {
        self.analytics = Some(observer);
    }

    /// The bound element, if any (`None` once destroyed or when constructed
    /// detached).
    #[must_use]
    pub fn element(&self) -> Option<&T> {
        self.target.as_ref()
    }

    fn invoke(&mut self, event: &mut InputEvent) {
        if let Some(handler) = &mut self.handler {
            handler.on_tap(event);
        }
        if let Some(analytics) = &self.analytics {
            analytics.borrow_mut().tap_completed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};
    use kurbo::Point;

    /// Minimal in-module target; the full simulation lives in
    /// `thimble_host` and is exercised by the integration tests.
    struct StubTarget {
        listeners: EventSet,
        disabled: bool,
    }

    impl StubTarget {
        fn new() -> Self {
            Self {
                listeners: EventSet::empty(),
                disabled: false,
            }
        }
    }

    impl EventTarget for StubTarget {
        fn add_listeners(&mut self, kinds: EventSet, _use_capture: bool) {
            self.listeners |= kinds;
        }
        fn remove_listeners(&mut self, kinds: EventSet, _use_capture: bool) {
            self.listeners &= !kinds;
        }
        fn set_disabled(&mut self, disabled: bool) {
            self.disabled = disabled;
        }
        fn is_disabled(&self) -> bool {
            self.disabled
        }
    }

    struct StubTimers(u64);

    impl TimerDriver for StubTimers {
        fn schedule(&mut self, _duration: u64) -> TimerId {
            self.0 += 1;
            TimerId::new(self.0).expect("ids start at 1")
        }
        fn cancel(&mut self, _id: TimerId) {}
    }

    struct CountingObserver(u32);

    impl AnalyticsObserver for CountingObserver {
        fn tap_completed(&mut self) {
            self.0 += 1;
        }
    }

    fn recognizer(
        taps: &Rc<Cell<u32>>,
    ) -> TapRecognizer<StubTarget, StubTimers> {
        let taps = Rc::clone(taps);
        TapRecognizer::new(
            Some(StubTarget::new()),
            move |_: &mut InputEvent| taps.set(taps.get() + 1),
            SyntheticMouseGuard::new(),
            StubTimers(0),
        )
    }

    fn tap_events(p: Point) -> Vec<InputEvent> {
        alloc::vec![InputEvent::touch_start(&[p]), InputEvent::touch_end(&[p])]
    }

    #[test]
    fn tap_invokes_handler_once_and_flags_the_event() {
        let taps = Rc::new(Cell::new(0));
        let mut rec = recognizer(&taps);

        let p = Point::new(10.0, 10.0);
        let mut down = InputEvent::touch_start(&[p]);
        rec.handle(&mut down);
        let mut up = InputEvent::touch_end(&[p]);
        assert_eq!(rec.handle(&mut up), TapResult::Tap);

        assert_eq!(taps.get(), 1);
        assert!(up.default_prevented());
        assert!(up.propagation_stopped());
        assert!(!down.default_prevented());
    }

    #[test]
    fn stop_propagation_can_be_disabled() {
        let mut rec = TapRecognizer::with_options(
            Some(StubTarget::new()),
            |_: &mut InputEvent| {},
            SyntheticMouseGuard::new(),
            StubTimers(0),
            TapOptions {
                stop_propagation: false,
                use_capture: false,
            },
        );
        let p = Point::ZERO;
        for (i, ev) in tap_events(p).iter_mut().enumerate() {
            let result = rec.handle(ev);
            if i == 1 {
                assert_eq!(result, TapResult::Tap);
                assert!(ev.default_prevented());
                assert!(!ev.propagation_stopped());
            }
        }
    }

    #[test]
    fn construction_registers_and_destroy_unregisters() {
        let taps = Rc::new(Cell::new(0));
        let mut rec = recognizer(&taps);
        assert_eq!(
            rec.element().expect("bound").listeners,
            EventSet::TAP
        );

        rec.destroy();
        assert!(rec.element().is_none());
    }

    #[test]
    fn events_after_destroy_are_absorbed() {
        let taps = Rc::new(Cell::new(0));
        let mut rec = recognizer(&taps);
        rec.destroy();

        for ev in &mut tap_events(Point::ZERO) {
            assert_eq!(rec.handle(ev), TapResult::Ignored);
        }
        let mut click = InputEvent::click(Point::ZERO);
        assert_eq!(rec.handle(&mut click), TapResult::Ignored);
        assert_eq!(taps.get(), 0);

        // A late second destroy is likewise absorbed.
        rec.destroy();
    }

    #[test]
    fn disabled_target_ignores_everything() {
        let taps = Rc::new(Cell::new(0));
        let mut rec = recognizer(&taps);
        rec.set_enabled(false);
        assert!(rec.element().expect("bound").is_disabled());

        for ev in &mut tap_events(Point::ZERO) {
            assert_eq!(rec.handle(ev), TapResult::Ignored);
        }
        assert_eq!(taps.get(), 0);

        rec.set_enabled(true);
        for ev in &mut tap_events(Point::ZERO) {
            rec.handle(ev);
        }
        assert_eq!(taps.get(), 1);
    }

    #[test]
    fn detached_recognizer_absorbs_events() {
        let mut rec = TapRecognizer::new(
            None::<StubTarget>,
            |_: &mut InputEvent| {},
            SyntheticMouseGuard::new(),
            StubTimers(0),
        );
        let mut down = InputEvent::touch_start(&[Point::ZERO]);
        assert_eq!(rec.handle(&mut down), TapResult::Ignored);
        assert!(rec.element().is_none());
    }

    #[test]
    fn change_handler_swaps_the_callback() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut rec = recognizer(&first);

        let s = Rc::clone(&second);
        rec.change_handler(move |_: &mut InputEvent| s.set(s.get() + 1));

        for ev in &mut tap_events(Point::ZERO) {
            rec.handle(ev);
        }
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn analytics_notified_once_per_tap() {
        let taps = Rc::new(Cell::new(0));
        let mut rec = recognizer(&taps);
        let observer = Rc::new(RefCell::new(CountingObserver(0)));
        rec.set_analytics_observer(observer.clone());

        for ev in &mut tap_events(Point::ZERO) {
            rec.handle(ev);
        }
        assert_eq!(observer.borrow().0, 1);
    }

    #[test]
    fn click_commit_invokes_handler_without_default_prevention() {
        let taps = Rc::new(Cell::new(0));
        let mut rec = recognizer(&taps);
        let observer = Rc::new(RefCell::new(CountingObserver(0)));
        rec.set_analytics_observer(observer.clone());

        let p = Point::new(4.0, 4.0);
        let mut down = InputEvent::mouse_down(p, 0);
        rec.handle(&mut down);
        let mut click = InputEvent::click(p);
        assert_eq!(rec.handle(&mut click), TapResult::ClickTap);

        assert_eq!(taps.get(), 1);
        assert_eq!(observer.borrow().0, 1);
        // The platform click is the delivery vehicle here; its default
        // action is left alone.
        assert!(!click.default_prevented());
    }
}

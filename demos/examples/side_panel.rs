// Copyright 2025 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A side-panel toggle driven by a tap recognizer.
//!
//! This example wires a [`thimble_tap::TapRecognizer`] to a toggle button
//! and replays the event salad a hybrid device produces for one physical
//! tap: the touch pair, the synthetic mouse pair, and the trailing click.
//! The panel flips exactly once.
//!
//! Run:
//! - `cargo run -p thimble_demos --example side_panel`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use thimble_demos::SidePanel;
use thimble_host::{ManualTimers, SimElement};
use thimble_input::{InputEvent, PRIMARY_BUTTON};
use thimble_tap::{SyntheticMouseGuard, TapRecognizer};

fn main() {
    // One guard per document; every recognizer on the page shares it.
    let guard = SyntheticMouseGuard::new();
    let timers = ManualTimers::new();
    let toggle_button = SimElement::new();

    let panel = Rc::new(RefCell::new(SidePanel::new()));

    // The widget contributes no recognition logic of its own: it hands the
    // recognizer a callback and waits.
    let panel_for_taps = Rc::clone(&panel);
    let mut recognizer = TapRecognizer::new(
        Some(toggle_button.clone()),
        move |_: &mut InputEvent| panel_for_taps.borrow_mut().toggle(),
        guard.clone(),
        timers.clone(),
    );

    println!("panel open: {}", panel.borrow().is_open());

    // A finger taps the toggle button…
    let p = Point::new(12.0, 20.0);
    recognizer.handle(&mut InputEvent::touch_start(&[p]));
    let mut release = InputEvent::touch_end(&[p]);
    let result = recognizer.handle(&mut release);
    println!(
        "touch release -> {result:?}, default prevented: {}",
        release.default_prevented()
    );
    println!("panel open: {}", panel.borrow().is_open());

    // …and the platform replays the same gesture as mouse input. The
    // shared guard swallows it, so the panel does not flip back.
    let ghost_down = recognizer.handle(&mut InputEvent::mouse_down(p, PRIMARY_BUTTON));
    let ghost_up = recognizer.handle(&mut InputEvent::mouse_up(p, PRIMARY_BUTTON));
    println!("synthetic mouse pair -> {ghost_down:?}, {ghost_up:?}");
    println!("panel open: {}", panel.borrow().is_open());

    // The trailing click disarms suppression for the next real mouse user.
    recognizer.handle(&mut InputEvent::click(p));
    println!("suppression active after click: {}", guard.is_active());

    // A plain mouse tap now toggles the panel shut again.
    recognizer.handle(&mut InputEvent::mouse_down(p, PRIMARY_BUTTON));
    recognizer.handle(&mut InputEvent::mouse_up(p, PRIMARY_BUTTON));
    println!("panel open: {}", panel.borrow().is_open());

    recognizer.destroy();
}

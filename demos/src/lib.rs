// Copyright 2025 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo widgets built on the public Thimble surface.
//!
//! Nothing here contributes recognition logic; these types exist so the
//! runnable examples have something realistic to drive.

/// A side panel whose open state is flipped by taps on its toggle button.
#[derive(Debug, Default)]
pub struct SidePanel {
    open: bool,
}

impl SidePanel {
    /// A closed panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the panel's open state.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Whether the panel is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}

// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture tracking: two states, idle and panning.
//!
//! ## Usage
//!
//! 1) Call [`PanState::begin`] on a primary-button press over empty canvas.
//! 2) On each pointer move, call [`PanState::drag`]; while panning it
//!    returns the movement since the previous call, which the caller adds to
//!    its pan offset.
//! 3) Call [`PanState::finish`] on pointer-up or when the pointer leaves the
//!    surface. There is no momentum: finishing stops all motion.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use shajra_event_state::pan::PanState;
//!
//! let mut pan = PanState::default();
//! let mut offset = Vec2::ZERO;
//!
//! pan.begin(Point::new(100.0, 100.0));
//! offset += pan.drag(Point::new(110.0, 95.0)).unwrap();
//! offset += pan.drag(Point::new(130.0, 95.0)).unwrap();
//! assert_eq!(offset, Vec2::new(30.0, -5.0));
//!
//! assert_eq!(pan.finish(), Some(Vec2::new(30.0, -5.0)));
//! assert!(!pan.is_panning());
//! assert_eq!(pan.drag(Point::new(0.0, 0.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Phase of a pan gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PanPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The primary button is held over empty canvas.
    Panning {
        /// Where the gesture started.
        origin: Point,
        /// Pointer position at the last [`PanState::drag`].
        anchor: Point,
    },
}

/// Tracks one pan gesture at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanState {
    phase: PanPhase,
}

impl PanState {
    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> PanPhase {
        self.phase
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.phase, PanPhase::Panning { .. })
    }

    /// Starts a gesture at `pos`, discarding any gesture already in progress.
    pub fn begin(&mut self, pos: Point) {
        self.phase = PanPhase::Panning {
            origin: pos,
            anchor: pos,
        };
    }

    /// Moves the anchor to `pos` and returns the movement since the previous
    /// anchor, or `None` when idle.
    pub fn drag(&mut self, pos: Point) -> Option<Vec2> {
        match &mut self.phase {
            PanPhase::Idle => None,
            PanPhase::Panning { anchor, .. } => {
                let delta = pos - *anchor;
                *anchor = pos;
                Some(delta)
            }
        }
    }

    /// Ends the gesture and returns the total movement from its origin to the
    /// last anchor, or `None` when idle.
    pub fn finish(&mut self) -> Option<Vec2> {
        match core::mem::take(&mut self.phase) {
            PanPhase::Idle => None,
            PanPhase::Panning { origin, anchor } => Some(anchor - origin),
        }
    }
}

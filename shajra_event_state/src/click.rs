// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition: a press and a release on the same target.
//!
//! A click is reported only when the pointer goes down and comes back up on
//! the same target with no cancellation in between. Starting a pan, losing
//! the pointer, or releasing over a different target all cancel it.
//!
//! ```
//! use kurbo::Point;
//! use shajra_event_state::click::ClickState;
//!
//! let mut clicks = ClickState::default();
//! clicks.press("hasan-1", Point::new(10.0, 20.0));
//! assert_eq!(clicks.release(Some(&"hasan-1")), Some("hasan-1"));
//!
//! clicks.press("hasan-1", Point::new(10.0, 20.0));
//! assert_eq!(clicks.release(Some(&"ali-1")), None);
//! ```

use kurbo::Point;

/// A press waiting for its release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingClick<K> {
    /// Target under the pointer at press time.
    pub target: K,
    /// Pointer position at press time.
    pub pos: Point,
}

/// Tracks at most one pending press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickState<K> {
    pending: Option<PendingClick<K>>,
}

impl<K> Default for ClickState<K> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<K: PartialEq> ClickState<K> {
    /// Records a press on `target`, replacing any earlier pending press.
    pub fn press(&mut self, target: K, pos: Point) {
        self.pending = Some(PendingClick { target, pos });
    }

    /// Completes the pending press.
    ///
    /// Returns the pressed target if `target` (what is under the pointer now)
    /// is the same one. The pending press is cleared either way.
    pub fn release(&mut self, target: Option<&K>) -> Option<K> {
        let pending = self.pending.take()?;
        (target == Some(&pending.target)).then_some(pending.target)
    }

    /// Drops the pending press without reporting a click.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The pending press, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingClick<K>> {
        self.pending.as_ref()
    }
}

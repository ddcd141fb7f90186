// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shajra Event State: pointer gesture state for the family tree canvas.
//!
//! Two small state machines, each tracking just enough to turn a stream of
//! raw pointer events into the transitions the viewport cares about:
//!
//! - [`pan`]: Idle/Panning, with movement deltas between pointer moves.
//! - [`click`]: press and release on the same target.
//!
//! Neither knows anything about hit-testing or transforms. Callers decide
//! what is under the pointer and feed the answer in.
//!
//! ## Pan and click together
//!
//! A press over a node records a click and never starts a pan; a press over
//! empty canvas starts a pan and never clicks:
//!
//! ```rust
//! # #[cfg(all(feature = "pan", feature = "click"))]
//! # fn example() {
//! use kurbo::Point;
//! use shajra_event_state::{click::ClickState, pan::PanState};
//!
//! let mut pan = PanState::default();
//! let mut clicks = ClickState::default();
//!
//! let hit: Option<u32> = Some(4);
//! let pos = Point::new(10.0, 10.0);
//! match hit {
//!     Some(node) => clicks.press(node, pos),
//!     None => pan.begin(pos),
//! }
//! assert!(!pan.is_panning());
//! assert_eq!(clicks.release(hit.as_ref()), Some(4));
//! # }
//! ```
//!
//! ## Features
//!
//! - `pan`: pan gesture tracking (requires `kurbo`).
//! - `click`: click recognition (requires `kurbo`).
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "click")]
pub mod click;

#[cfg(feature = "pan")]
pub mod pan;

// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shajra View 2D: the interactive viewport over a laid-out family tree.
//!
//! This crate sits between [`shajra_layout`] and whatever draws pixels. It
//! provides:
//! - [`CanvasTransform`]: pan offset plus uniform scale, clamped to
//!   [`MIN_SCALE`]..=[`MAX_SCALE`].
//! - [`Viewport`]: turns pointer and wheel input into pan/zoom updates or
//!   node selections, with a two-state machine ([`InteractionState`]).
//! - [`hit_test`]: which node, if any, lies under a point.
//! - [`connectors`]: one S-curve per parent-child pair, attached at the disc
//!   edges using the same radius as hit-testing.
//!
//! It does not draw anything and does not own the tree or the layout.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use shajra_family::demo_tree;
//! use shajra_layout::compute_layout;
//! use shajra_view2d::{InteractionState, PointerButton, Viewport, connectors};
//!
//! let root = demo_tree();
//! let layout = compute_layout(&root).unwrap();
//! let mut view = Viewport::new(Rect::new(0.0, 0.0, 1200.0, 800.0));
//!
//! // Click on the root node: no pan, and the root becomes the selection.
//! let root_on_screen = view.layout_to_view(layout.root().point);
//! view.pointer_down(&layout, PointerButton::Primary, root_on_screen);
//! assert_eq!(view.state(), InteractionState::Idle);
//! assert_eq!(view.pointer_up(&layout, root_on_screen), Some(0));
//!
//! // Scroll down twice: zoom out by 0.9 each time.
//! view.wheel(1.0);
//! let scale = view.wheel(1.0);
//! assert!((scale - 2.0 * 0.9 * 0.9).abs() < 1e-12);
//!
//! // Five parent-child edges in the demo family.
//! assert_eq!(connectors(&root, &layout).len(), 5);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is anchored at the top-center of the view, not at the cursor.
//! - Panning is additive and unbounded; there is no inertia.
//! - A member missing from the layout loses its connectors but never stops
//!   the rest of the tree from rendering.

mod connector;
mod hit;
mod transform;
mod viewport;

pub use connector::{CONNECTOR_BEND, Connector, connectors};
pub use hit::hit_test;
pub use transform::{
    BUTTON_ZOOM_STEP, CanvasTransform, MAX_SCALE, MIN_SCALE, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
};
pub use viewport::{InteractionState, PointerButton, Viewport};

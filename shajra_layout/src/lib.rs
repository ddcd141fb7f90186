// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shajra Layout: top-down tidy layout for family trees.
//!
//! [`compute_layout`] turns a [`FamilyMember`](shajra_family::FamilyMember)
//! tree into one [`NodePosition`] per member. The layout is a pure function
//! of the tree: no randomness, no caching, and bit-identical output for the
//! same input.
//!
//! The algorithm runs in two passes:
//! 1. **Width**: bottom-up, every member reserves a band as wide as its
//!    subtree. Leaves take [`NODE_WIDTH`]; a parent takes the sum of its
//!    children, floored at [`NODE_WIDTH`].
//! 2. **Position**: top-down, children divide their parent's band left to
//!    right in child order and each member is centered in its own band.
//!
//! Sibling bands are adjacent and never overlap, so sibling subtrees never
//! collide. The root always ends up at `x = 0`.
//!
//! This crate also owns the two presentation heuristics every renderer and
//! hit-tester must agree on: the disc radius policy ([`node_radius`]) and the
//! label line wrapping ([`wrap_label`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use shajra_family::FamilyMember;
//! use shajra_layout::{GENERATION_HEIGHT, NODE_WIDTH, compute_layout};
//!
//! let root = FamilyMember::new("ahmad", "Ahmad")
//!     .with_child(FamilyMember::new("omar", "Omar"))
//!     .with_child(FamilyMember::new("ali", "Ali"));
//!
//! let layout = compute_layout(&root).unwrap();
//! assert_eq!(layout.len(), 3);
//! assert_eq!(layout.root().point.x, 0.0);
//!
//! let omar = layout.get("omar").unwrap();
//! assert_eq!(omar.generation, 1);
//! assert_eq!(omar.point.x, -NODE_WIDTH / 2.0);
//! assert_eq!(omar.point.y, GENERATION_HEIGHT);
//! ```

mod label;
mod layout;
mod radius;

pub use label::{LABEL_LINE_CHARS, LabelLines, wrap_label};
pub use layout::{GENERATION_HEIGHT, Layout, NODE_WIDTH, NodePosition, compute_layout};
pub use radius::{RadiusTier, node_radius};

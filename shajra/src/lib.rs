// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shajra: an interactive genealogical tree viewer.
//!
//! This crate is the host layer over the Shajra building blocks:
//! - [`shajra_family`]: the member tree and its JSON form.
//! - [`shajra_layout`]: positions for every member.
//! - [`shajra_view2d`]: pan, zoom, hit-testing and connector curves.
//!
//! [`Session`] is the one owning controller. It holds the tree and its
//! layout, the viewport, the selection, and the theme and stats toggles, and
//! it is the only place that state changes. A renderer asks it for a
//! [`Frame`] and sends pointer input back; [`render_svg`] is one such
//! renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use shajra::{Session, render_svg};
//! use shajra_family::demo_tree;
//!
//! let mut session = Session::new(demo_tree(), Rect::new(0.0, 0.0, 1200.0, 800.0)).unwrap();
//!
//! let hasan = session.select("hasan-1").unwrap();
//! assert_eq!(hasan.generation, 2);
//! assert_eq!(hasan.children_count, 1);
//!
//! // A failed import leaves the open tree alone.
//! assert!(session.import_json("{ definitely not json").is_err());
//! assert_eq!(session.stats().total_members, 6);
//!
//! let svg = render_svg(&session.frame());
//! assert!(svg.starts_with("<svg"));
//! ```

mod error;
mod selection;
mod session;
mod stats;
mod svg;
mod theme;

pub use error::{Error, Result};
pub use selection::{DetailPanel, DetailRow, MemberDetails, SelectedMember};
pub use session::{Frame, Session};
pub use stats::FamilyStats;
pub use svg::{EXPORT_PADDING, render_svg};
pub use theme::{Theme, ThemeMode};

// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shajra Family: the family tree data model.
//!
//! This crate owns the in-memory shape of a genealogical record and nothing
//! else. It does not lay anything out and does not know about pixels:
//! - [`FamilyMember`] is an owned recursive tree. Each member exclusively owns
//!   its ordered `children`; child order is display order and is never sorted.
//! - [`from_json_str`] / [`to_json_string`] convert between that tree and the
//!   external JSON format (2-space indented on export).
//! - [`validate`] checks the structural invariants that the type system cannot
//!   express for untrusted input: unique ids, a non-empty English name, and a
//!   bounded depth.
//! - [`FamilyMember::preorder`], [`all_members`], [`search_members`] and
//!   [`find_member`] provide flat views for statistics and search.
//!
//! ## Minimal example
//!
//! ```rust
//! use shajra_family::{FamilyMember, from_json_str, to_json_string};
//!
//! let json = r#"{
//!   "id": "ahmad-1",
//!   "name": { "english": "Ahmad ibn Muhammad" },
//!   "children": [
//!     { "id": "hasan-1", "name": { "english": "Hasan ibn Ahmad" } }
//!   ]
//! }"#;
//!
//! let root: FamilyMember = from_json_str(json).unwrap();
//! assert_eq!(root.children.len(), 1);
//! assert_eq!(root.preorder().count(), 2);
//!
//! // Export and re-import yields the same tree.
//! let exported = to_json_string(&root).unwrap();
//! assert_eq!(from_json_str(&exported).unwrap(), root);
//! ```
//!
//! ## Import is all-or-nothing
//!
//! [`from_json_str`] either returns a fully validated tree or an [`Error`].
//! Invalid JSON text surfaces as [`Error::InvalidJson`]; JSON that parses but
//! does not describe a family tree (a missing `name.english`, a duplicated id)
//! surfaces as [`Error::Malformed`]. Callers holding a previous tree keep it
//! untouched on failure.

mod demo;
mod error;
mod json;
mod member;
mod traverse;
mod validate;

pub use demo::{GENERATION_COLORS, GenerationColors, demo_tree};
pub use error::{Error, Result, TreeError};
pub use json::{
    export_file_name, from_json_str, read_json_file, to_json_string, write_json_file,
};
pub use member::{FamilyMember, MemberName, Metadata};
pub use traverse::{Preorder, all_members, find_member, member_count, search_members};
pub use validate::{MAX_DEPTH, validate};

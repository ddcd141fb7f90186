// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON import and export.
//!
//! The external format mirrors [`FamilyMember`] field for field with
//! camelCase keys. Export is pretty-printed with 2-space indentation.

use std::fs;
use std::path::Path;

use serde::Deserialize as _;
use serde_json::error::Category;
use tracing::{info, warn};

use crate::error::{Error, Result, TreeError};
use crate::member::FamilyMember;
use crate::traverse::member_count;
use crate::validate::{MAX_DEPTH, validate};

/// Deepest JSON nesting a tree of [`MAX_DEPTH`] generations can produce.
///
/// Each generation adds a member object and its `children` array; the
/// deepest member adds its own object plus one nested `name` object.
const MAX_NESTING: usize = 2 * MAX_DEPTH + 2;

/// Parses and validates a family tree from JSON text.
///
/// Syntax errors map to [`Error::InvalidJson`]. Shape errors (a missing
/// `name.english`, a wrong type) and structural defects map to
/// [`Error::Malformed`]. Text nested deeper than any tree of [`MAX_DEPTH`]
/// generations is rejected as [`TreeError::TooDeep`] before it is parsed.
pub fn from_json_str(text: &str) -> Result<FamilyMember> {
    if exceeds_nesting(text, MAX_NESTING) {
        let err = TreeError::TooDeep {
            max_depth: MAX_DEPTH,
        };
        warn!(%err, "rejected family tree import");
        return Err(err.into());
    }
    let root = parse(text).map_err(|err| match err.classify() {
        Category::Data => Error::Malformed(TreeError::InvalidField {
            message: err.to_string(),
        }),
        Category::Syntax | Category::Eof | Category::Io => Error::InvalidJson(err),
    })?;
    if let Err(err) = validate(&root) {
        warn!(%err, "rejected family tree import");
        return Err(err.into());
    }
    Ok(root)
}

fn parse(text: &str) -> serde_json::Result<FamilyMember> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let root = FamilyMember::deserialize(&mut de)?;
    de.end()?;
    Ok(root)
}

/// Whether brackets in `text` nest deeper than `limit`, ignoring string
/// contents.
fn exceeds_nesting(text: &str, limit: usize) -> bool {
    let mut depth = 0_usize;
    let mut in_string = false;
    let mut escaped = false;
    for b in text.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

/// Serializes a family tree as 2-space indented JSON.
pub fn to_json_string(root: &FamilyMember) -> Result<String> {
    serde_json::to_string_pretty(root).map_err(Error::Serialize)
}

/// Reads and validates a family tree from a JSON file.
pub fn read_json_file(path: impl AsRef<Path>) -> Result<FamilyMember> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root = from_json_str(&text)?;
    info!(path = %path.display(), members = member_count(&root), "imported family tree");
    Ok(root)
}

/// Writes a family tree to a JSON file, replacing any existing file.
pub fn write_json_file(path: impl AsRef<Path>, root: &FamilyMember) -> Result<()> {
    let path = path.as_ref();
    let mut text = to_json_string(root)?;
    text.push('\n');
    fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), members = member_count(root), "exported family tree");
    Ok(())
}

/// Default export file name for a given `YYYY-MM-DD` date stamp.
pub fn export_file_name(date: &str) -> String {
    format!("shajra-family-tree-{date}.json")
}

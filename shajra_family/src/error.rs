// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

/// Result alias for fallible family tree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A structural defect in a family tree.
///
/// Produced by [`validate`](crate::validate) and by the layout engine's
/// guards. A tree with any of these defects is never laid out.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A member has an empty id.
    #[error("malformed tree: a member has an empty id")]
    MissingId,

    /// A member has an empty English name.
    #[error("malformed tree: member `{id}` has no English name")]
    MissingName {
        /// Id of the offending member.
        id: String,
    },

    /// The same id is reachable twice, so the node would have two parents.
    #[error("malformed tree / cycle detected: member `{id}` appears more than once")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// The tree is deeper than the supported maximum.
    #[error("malformed tree: deeper than {max_depth} generations")]
    TooDeep {
        /// The depth limit that was exceeded.
        max_depth: usize,
    },

    /// The JSON parsed but does not describe a family member.
    #[error("malformed tree: {message}")]
    InvalidField {
        /// Deserializer message, including the line and column.
        message: String,
    },
}

/// Errors from importing or exporting a family tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not valid JSON text.
    #[error("import failed: invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The input is JSON but not a well-formed family tree.
    #[error(transparent)]
    Malformed(#[from] TreeError),

    /// Serializing the tree failed.
    #[error("export failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

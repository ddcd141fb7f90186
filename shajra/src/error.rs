// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use shajra_family::TreeError;

/// Result alias for session operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by a [`Session`](crate::Session).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Importing or exporting the tree failed.
    #[error(transparent)]
    Family(#[from] shajra_family::Error),

    /// The tree could not be laid out.
    #[error(transparent)]
    Layout(#[from] TreeError),

    /// No member in the current tree has this id.
    #[error("no member with id `{id}`")]
    UnknownMember {
        /// The id that was looked up.
        id: String,
    },
}

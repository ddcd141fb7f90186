// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node radius policy.
//!
//! A node's disc grows with the length of its English name so that the
//! wrapped label fits inside. The same radius is used to draw the disc, to
//! attach connectors, and to hit-test pointer input, so it is computed in
//! exactly one place: [`node_radius`].

/// Size class of a node disc, chosen by name length in characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RadiusTier {
    /// Names of at most 8 characters.
    Small,
    /// Names of at most 15 characters.
    Medium,
    /// Names of at most 25 characters.
    Large,
    /// Anything longer.
    ExtraLarge,
}

impl RadiusTier {
    /// Classifies a display name.
    ///
    /// Length is counted in `char`s, so native-script names are not
    /// penalized for their UTF-8 width.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        match name.chars().count() {
            0..=8 => Self::Small,
            9..=15 => Self::Medium,
            16..=25 => Self::Large,
            _ => Self::ExtraLarge,
        }
    }

    /// Base radius in layout units, before any zoom is applied.
    #[must_use]
    pub const fn radius(self) -> f64 {
        match self {
            Self::Small => 40.0,
            Self::Medium => 55.0,
            Self::Large => 70.0,
            Self::ExtraLarge => 85.0,
        }
    }
}

/// Base radius of the disc drawn for a member with the given English name.
///
/// ```
/// use shajra_layout::node_radius;
///
/// assert_eq!(node_radius("Ali"), 40.0);
/// assert_eq!(node_radius("Ahmad ibn Muhammad"), 70.0);
/// ```
#[must_use]
pub fn node_radius(name: &str) -> f64 {
    RadiusTier::for_name(name).radius()
}

// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Serialize;
use shajra_layout::Layout;

/// Summary numbers for the stats panel.
///
/// Generation counts come from layout depth, not from any stored field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyStats {
    /// Every member, root included.
    pub total_members: usize,
    /// Members per generation, root generation first.
    pub generations: Vec<usize>,
    /// Members with no children.
    pub leaf_count: usize,
}

impl FamilyStats {
    /// Computes statistics from a layout.
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            total_members: layout.len(),
            generations: layout.generation_counts(),
            leaf_count: layout.iter().filter(|p| p.is_leaf()).count(),
        }
    }

    /// Number of generations present.
    #[must_use]
    pub fn generation_count(&self) -> usize {
        self.generations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shajra_family::demo_tree;
    use shajra_layout::compute_layout;

    #[test]
    fn demo_stats() {
        let stats = FamilyStats::from_layout(&compute_layout(&demo_tree()).unwrap());
        assert_eq!(stats.total_members, 6);
        assert_eq!(stats.generations, [1, 3, 1, 1]);
        assert_eq!(stats.generation_count(), 4);
        // Ali, Omar and Ibrahim.
        assert_eq!(stats.leaf_count, 3);
    }
}

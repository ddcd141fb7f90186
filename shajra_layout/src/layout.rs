// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use hashbrown::HashMap;
use kurbo::{Circle, Point, Rect, Shape};
use shajra_family::{FamilyMember, TreeError, validate};
use tracing::debug;

use crate::radius::node_radius;

/// Horizontal space reserved for a leaf, and the minimum distance between
/// sibling centers.
pub const NODE_WIDTH: f64 = 220.0;

/// Vertical distance between consecutive generations.
pub const GENERATION_HEIGHT: f64 = 250.0;

/// Where one member sits in layout space.
///
/// Positions are derived data: they are rebuilt in full whenever the tree
/// changes and never edited in place. The source member is identified by
/// [`id`](Self::id) and by its pre-order [`index`](Self::index).
#[derive(Clone, Debug, PartialEq)]
pub struct NodePosition {
    /// Id of the member this node draws.
    pub id: String,
    /// Pre-order index of the member, which is also its index in the layout.
    pub index: usize,
    /// Pre-order index of the parent, `None` for the root.
    pub parent: Option<usize>,
    /// Depth from the root; the root is generation 0.
    pub generation: usize,
    /// Center of the node disc.
    pub point: Point,
    /// Horizontal band reserved for this member's whole subtree.
    pub band: Range<f64>,
    /// Base disc radius from [`node_radius`].
    pub radius: f64,
    /// Number of immediate children.
    pub child_count: usize,
}

impl NodePosition {
    /// The node disc in layout space.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::new(self.point, self.radius)
    }

    /// Width of the subtree band.
    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.band.end - self.band.start
    }

    /// Returns `true` if the member has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.child_count == 0
    }
}

/// A complete layout: one [`NodePosition`] per member, in pre-order.
#[derive(Clone, Debug)]
pub struct Layout {
    positions: Vec<NodePosition>,
    by_id: HashMap<String, usize>,
}

impl Layout {
    /// Number of positioned members. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; every layout contains at least the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The root's position.
    #[must_use]
    pub fn root(&self) -> &NodePosition {
        &self.positions[0]
    }

    /// All positions in pre-order.
    #[must_use]
    pub fn positions(&self) -> &[NodePosition] {
        &self.positions
    }

    /// Iterates positions in pre-order.
    pub fn iter(&self) -> core::slice::Iter<'_, NodePosition> {
        self.positions.iter()
    }

    /// Looks up the position of the member with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NodePosition> {
        self.by_id.get(id).map(|&i| &self.positions[i])
    }

    /// Pairs each member of `root` with its position.
    ///
    /// `root` must be the tree this layout was computed from; pairing is by
    /// pre-order index.
    pub fn with_members<'a>(
        &'a self,
        root: &'a FamilyMember,
    ) -> impl Iterator<Item = (&'a FamilyMember, &'a NodePosition)> + 'a {
        root.preorder().zip(self.positions.iter())
    }

    /// Width of the root's band, i.e. of the whole tree.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.root().band_width()
    }

    /// Deepest generation present.
    #[must_use]
    pub fn max_generation(&self) -> usize {
        self.positions
            .iter()
            .map(|p| p.generation)
            .max()
            .unwrap_or(0)
    }

    /// Number of members in each generation, indexed by generation.
    #[must_use]
    pub fn generation_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.max_generation() + 1];
        for p in &self.positions {
            counts[p.generation] += 1;
        }
        counts
    }

    /// Bounding box of every node disc in layout space.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let first = self.root().circle().bounding_box();
        self.positions
            .iter()
            .skip(1)
            .fold(first, |acc, p| acc.union(p.circle().bounding_box()))
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a NodePosition;
    type IntoIter = core::slice::Iter<'a, NodePosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

/// Lays out a family tree top-down.
///
/// Every member gets a horizontal band as wide as its subtree: a leaf is
/// [`NODE_WIDTH`] wide and an internal member is the sum of its children's
/// bands, never less than [`NODE_WIDTH`]. Children split their parent's band
/// left to right in child order, each member is centered in its own band, and
/// `y` is `generation * GENERATION_HEIGHT`. Finally the whole layout is
/// shifted so the root sits at `x = 0`.
///
/// The tree is validated first, so a repeated id (a member with two parents,
/// or a cycle in the source data), a missing name or an excessively deep tree
/// fails with a [`TreeError`] and produces no positions at all.
///
/// The result is deterministic: the same tree always yields bit-identical
/// positions in the same pre-order.
pub fn compute_layout(root: &FamilyMember) -> Result<Layout, TreeError> {
    validate(root)?;

    let mut widths = Vec::new();
    measure(root, &mut widths);

    let mut placer = Placer {
        widths: &widths,
        positions: Vec::with_capacity(widths.len()),
    };
    placer.place(root, 0, None, -widths[0] / 2.0);
    let mut positions = placer.positions;

    let shift = -positions[0].point.x;
    for p in &mut positions {
        p.point.x += shift;
        p.band = (p.band.start + shift)..(p.band.end + shift);
    }

    let by_id = positions
        .iter()
        .map(|p| (p.id.clone(), p.index))
        .collect();

    debug!(
        members = positions.len(),
        total_width = widths[0],
        "computed family tree layout"
    );

    Ok(Layout { positions, by_id })
}

/// Records subtree widths in pre-order and returns the width of `member`.
fn measure(member: &FamilyMember, widths: &mut Vec<f64>) -> f64 {
    let slot = widths.len();
    widths.push(NODE_WIDTH);
    if !member.is_leaf() {
        let sum: f64 = member
            .children
            .iter()
            .map(|child| measure(child, widths))
            .sum();
        widths[slot] = sum.max(NODE_WIDTH);
    }
    widths[slot]
}

struct Placer<'w> {
    widths: &'w [f64],
    positions: Vec<NodePosition>,
}

impl Placer<'_> {
    fn place(
        &mut self,
        member: &FamilyMember,
        generation: usize,
        parent: Option<usize>,
        x_offset: f64,
    ) {
        let index = self.positions.len();
        let width = self.widths[index];
        self.positions.push(NodePosition {
            id: member.id.clone(),
            index,
            parent,
            generation,
            point: Point::new(
                x_offset + width / 2.0,
                generation as f64 * GENERATION_HEIGHT,
            ),
            band: x_offset..(x_offset + width),
            radius: node_radius(&member.name.english),
            child_count: member.children.len(),
        });

        let mut child_offset = x_offset;
        for child in &member.children {
            // The child is about to be pushed at the current end, which is
            // also its slot in `widths`.
            let child_width = self.widths[self.positions.len()];
            self.place(child, generation + 1, Some(index), child_offset);
            child_offset += child_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shajra_family::demo_tree;

    #[test]
    fn single_member_sits_at_origin() {
        let layout = compute_layout(&FamilyMember::new("solo", "Solo")).unwrap();
        assert_eq!(layout.len(), 1);
        let root = layout.root();
        assert_eq!(root.point, Point::ZERO);
        assert_eq!(root.generation, 0);
        assert_eq!(root.band_width(), NODE_WIDTH);
        assert_eq!(root.parent, None);
    }

    #[test]
    fn two_leaves_split_the_parent_band() {
        let root = FamilyMember::new("p", "Parent")
            .with_child(FamilyMember::new("a", "A"))
            .with_child(FamilyMember::new("b", "B"));
        let layout = compute_layout(&root).unwrap();

        let a = layout.get("a").unwrap();
        let b = layout.get("b").unwrap();
        assert_eq!(layout.root().band, -NODE_WIDTH..NODE_WIDTH);
        assert_eq!(a.point, Point::new(-NODE_WIDTH / 2.0, GENERATION_HEIGHT));
        assert_eq!(b.point, Point::new(NODE_WIDTH / 2.0, GENERATION_HEIGHT));
        assert_eq!(a.parent, Some(0));
        assert_eq!(b.parent, Some(0));
    }

    #[test]
    fn only_child_is_directly_below_parent() {
        let root = FamilyMember::new("p", "Parent").with_child(FamilyMember::new("c", "Child"));
        let layout = compute_layout(&root).unwrap();
        assert_eq!(layout.get("c").unwrap().point.x, 0.0);
        assert_eq!(layout.total_width(), NODE_WIDTH);
    }

    #[test]
    fn demo_generations_and_counts() {
        let layout = compute_layout(&demo_tree()).unwrap();
        let generations: Vec<usize> = layout.iter().map(|p| p.generation).collect();
        assert_eq!(generations, [0, 1, 2, 3, 1, 1]);
        assert_eq!(layout.generation_counts(), [1, 3, 1, 1]);
        assert_eq!(layout.max_generation(), 3);
        assert_eq!(layout.total_width(), 3.0 * NODE_WIDTH);
    }

    #[test]
    fn radius_follows_english_name() {
        let layout = compute_layout(&demo_tree()).unwrap();
        // "Ali ibn Hasan" is 13 characters.
        assert_eq!(layout.get("ali-1").unwrap().radius, 55.0);
        // "Ahmad ibn Muhammad" is 18 characters.
        assert_eq!(layout.root().radius, 70.0);
    }

    #[test]
    fn bounds_cover_every_disc() {
        let layout = compute_layout(&demo_tree()).unwrap();
        let bounds = layout.bounds();
        for p in &layout {
            let disc = p.circle().bounding_box();
            assert!(bounds.contains(disc.origin()), "{}", p.id);
            assert!(
                bounds.x1 >= disc.x1 && bounds.y1 >= disc.y1,
                "{} escapes {bounds:?}",
                p.id
            );
        }
    }

    #[test]
    fn with_members_pairs_by_preorder() {
        let root = demo_tree();
        let layout = compute_layout(&root).unwrap();
        for (member, position) in layout.with_members(&root) {
            assert_eq!(member.id, position.id);
            assert_eq!(member.children.len(), position.child_count);
        }
    }
}

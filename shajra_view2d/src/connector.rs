// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parent-to-child connector curves.

use kurbo::{BezPath, CubicBez, Point};
use shajra_family::FamilyMember;
use shajra_layout::{Layout, NodePosition};
use tracing::warn;

use crate::transform::CanvasTransform;

/// Distance below the parent's disc at which both control points sit.
pub const CONNECTOR_BEND: f64 = 50.0;

/// One S-shaped curve from the bottom of a parent's disc to the top of a
/// child's disc, in layout space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    /// Pre-order index of the parent.
    pub parent: usize,
    /// Pre-order index of the child.
    pub child: usize,
    /// The curve. Both control points sit [`CONNECTOR_BEND`] below the
    /// parent's disc, the first under the parent and the second above the
    /// child, so the curve leaves and arrives vertically.
    pub curve: CubicBez,
}

impl Connector {
    /// Builds the connector between two laid-out nodes.
    #[must_use]
    pub fn between(parent: &NodePosition, child: &NodePosition) -> Self {
        let start = Point::new(parent.point.x, parent.point.y + parent.radius);
        let end = Point::new(child.point.x, child.point.y - child.radius);
        let bend_y = start.y + CONNECTOR_BEND;
        Self {
            parent: parent.index,
            child: child.index,
            curve: CubicBez::new(
                start,
                Point::new(start.x, bend_y),
                Point::new(end.x, bend_y),
                end,
            ),
        }
    }

    /// Attachment point below the parent.
    #[must_use]
    pub fn start(&self) -> Point {
        self.curve.p0
    }

    /// Attachment point above the child.
    #[must_use]
    pub fn end(&self) -> Point {
        self.curve.p3
    }

    /// The curve mapped into canvas space.
    #[must_use]
    pub fn to_canvas(&self, transform: &CanvasTransform) -> CubicBez {
        transform.to_affine() * self.curve
    }

    /// The curve as SVG path data (`M … C …`) in layout space.
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        let mut path = BezPath::new();
        path.move_to(self.curve.p0);
        path.curve_to(self.curve.p1, self.curve.p2, self.curve.p3);
        path.to_svg()
    }
}

/// Connectors for every parent-child pair of `root`, in pre-order of the
/// parent and then child order.
///
/// A member whose id has no position in `layout` is skipped along with its
/// connectors; the rest of the tree is still connected.
pub fn connectors(root: &FamilyMember, layout: &Layout) -> Vec<Connector> {
    let mut out = Vec::with_capacity(layout.len().saturating_sub(1));
    for member in root.preorder() {
        if member.is_leaf() {
            continue;
        }
        let Some(parent) = layout.get(&member.id) else {
            warn!(id = %member.id, "connector parent has no layout position");
            continue;
        };
        for child in &member.children {
            match layout.get(&child.id) {
                Some(pos) => out.push(Connector::between(parent, pos)),
                None => warn!(
                    parent = %member.id,
                    child = %child.id,
                    "connector child has no layout position"
                ),
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shajra_layout::{GENERATION_HEIGHT, compute_layout};

    #[test]
    fn endpoints_sit_on_the_discs() {
        let root = FamilyMember::new("p", "Parent").with_child(FamilyMember::new("c", "Child"));
        let layout = compute_layout(&root).unwrap();
        let conns = connectors(&root, &layout);
        let [conn] = conns[..] else {
            panic!("expected exactly one connector");
        };
        let p = layout.get("p").unwrap();
        let c = layout.get("c").unwrap();
        assert_eq!(conn.start(), Point::new(p.point.x, p.radius));
        assert_eq!(conn.end(), Point::new(c.point.x, GENERATION_HEIGHT - c.radius));
    }

    #[test]
    fn control_points_bend_below_the_parent() {
        let root = shajra_family::demo_tree();
        let layout = compute_layout(&root).unwrap();
        for conn in connectors(&root, &layout) {
            let CubicBez { p0, p1, p2, p3 } = conn.curve;
            assert_eq!(p1.x, p0.x);
            assert_eq!(p2.x, p3.x);
            assert_eq!(p1.y, p0.y + CONNECTOR_BEND);
            assert_eq!(p2.y, p1.y);
        }
    }

    #[test]
    fn bend_ignores_the_child_radius() {
        // Ahmad (70) to Muhammad (70) and Ahmad to Omar (55) bend at the same height.
        let root = shajra_family::demo_tree();
        let layout = compute_layout(&root).unwrap();
        let conns = connectors(&root, &layout);
        let from_root: Vec<_> = conns.iter().filter(|c| c.parent == 0).collect();
        assert_eq!(from_root.len(), 3);
        for conn in from_root {
            assert_eq!(conn.curve.p1.y, 120.0);
            assert_eq!(conn.curve.p2.y, 120.0);
        }
    }

    #[test]
    fn one_connector_per_edge() {
        let root = shajra_family::demo_tree();
        let layout = compute_layout(&root).unwrap();
        let conns = connectors(&root, &layout);
        assert_eq!(conns.len(), layout.len() - 1);
        let pairs: Vec<(usize, usize)> = conns.iter().map(|c| (c.parent, c.child)).collect();
        assert_eq!(pairs, [(0, 1), (0, 4), (0, 5), (1, 2), (2, 3)]);
    }

    #[test]
    fn unresolved_child_is_skipped() {
        let laid_out = FamilyMember::new("p", "Parent")
            .with_child(FamilyMember::new("a", "A"))
            .with_child(FamilyMember::new("b", "B"));
        let layout = compute_layout(&laid_out).unwrap();

        // The tree has grown a child the layout has never seen.
        let grown = laid_out.with_child(FamilyMember::new("late", "Late"));
        let conns = connectors(&grown, &layout);
        assert_eq!(conns.len(), 2);
        assert!(conns.iter().all(|c| c.child != 3));
    }

    #[test]
    fn svg_path_is_a_single_cubic() {
        let root = FamilyMember::new("p", "Parent").with_child(FamilyMember::new("c", "Child"));
        let layout = compute_layout(&root).unwrap();
        let d = connectors(&root, &layout)[0].to_svg_path();
        assert!(d.starts_with('M'), "{d}");
        assert_eq!(d.matches('C').count(), 1, "{d}");
    }
}

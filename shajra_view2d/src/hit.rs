// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use shajra_layout::{Layout, NodePosition};

use crate::transform::CanvasTransform;

/// Finds the node under a canvas-space point.
///
/// Each node center is mapped through `transform` and the point hits when
/// it lies within the node's radius times the current scale. Boundary points
/// count as hits. Nodes are tried in pre-order and the first hit wins.
///
/// ```
/// use kurbo::Point;
/// use shajra_family::FamilyMember;
/// use shajra_layout::compute_layout;
/// use shajra_view2d::{CanvasTransform, hit_test};
///
/// let layout = compute_layout(&FamilyMember::new("solo", "Solo")).unwrap();
/// let t = CanvasTransform::IDENTITY;
/// assert_eq!(hit_test(&layout, &t, Point::new(0.0, 0.0)).map(|n| n.index), Some(0));
/// assert!(hit_test(&layout, &t, Point::new(0.0, 41.0)).is_none());
/// ```
#[must_use]
pub fn hit_test<'a>(
    layout: &'a Layout,
    transform: &CanvasTransform,
    canvas_pt: Point,
) -> Option<&'a NodePosition> {
    layout.iter().find(|node| {
        let center = transform.apply(node.point);
        center.distance(canvas_pt) <= node.radius * transform.scale
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;
    use shajra_family::FamilyMember;
    use shajra_layout::compute_layout;

    /// One child per radius tier so every tier gets exercised.
    fn every_tier() -> FamilyMember {
        FamilyMember::new("root", "Root")
            .with_child(FamilyMember::new("s", "Ali"))
            .with_child(FamilyMember::new("m", "Ali ibn Hasan"))
            .with_child(FamilyMember::new("l", "Hasan ibn Muhammad"))
            .with_child(FamilyMember::new("xl", "Ibrahim ibn Ahmad ibn Yousuf"))
    }

    #[test]
    fn center_hits_for_every_tier() {
        let layout = compute_layout(&every_tier()).unwrap();
        let t = CanvasTransform::IDENTITY;
        for node in &layout {
            let hit = hit_test(&layout, &t, node.point).map(|n| n.id.as_str());
            assert_eq!(hit, Some(node.id.as_str()));
        }
    }

    #[test]
    fn radius_scales_with_zoom() {
        let layout = compute_layout(&FamilyMember::new("solo", "Solo")).unwrap();
        // Radius 40 at scale 2 reaches 80 canvas pixels.
        let t = CanvasTransform::new(Vec2::ZERO, 2.0);
        assert!(hit_test(&layout, &t, Point::new(80.0, 0.0)).is_some());
        assert!(hit_test(&layout, &t, Point::new(80.5, 0.0)).is_none());
    }

    #[test]
    fn pan_moves_the_target() {
        let layout = compute_layout(&FamilyMember::new("solo", "Solo")).unwrap();
        let t = CanvasTransform::new(Vec2::new(300.0, 100.0), 1.0);
        assert!(hit_test(&layout, &t, Point::ZERO).is_none());
        assert!(hit_test(&layout, &t, Point::new(300.0, 100.0)).is_some());
    }

    #[test]
    fn empty_canvas_misses() {
        let layout = compute_layout(&every_tier()).unwrap();
        let t = CanvasTransform::IDENTITY;
        // Between the root and its children.
        assert!(hit_test(&layout, &t, Point::new(0.0, 125.0)).is_none());
    }
}

// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and wheel sequences driven through `Viewport`.

use kurbo::{Point, Rect, Vec2};
use shajra_family::demo_tree;
use shajra_layout::{Layout, compute_layout};
use shajra_view2d::{
    CanvasTransform, InteractionState, MAX_SCALE, MIN_SCALE, PointerButton, Viewport,
};

fn setup() -> (Layout, Viewport) {
    let layout = compute_layout(&demo_tree()).unwrap();
    let view = Viewport::new(Rect::new(0.0, 0.0, 1200.0, 800.0));
    (layout, view)
}

/// A device point well away from every node.
fn empty_spot(view: &Viewport) -> Point {
    view.layout_to_view(Point::new(0.0, -400.0))
}

#[test]
fn press_on_node_then_release_selects_it() {
    let (layout, mut view) = setup();
    let hasan = layout.get("hasan-1").unwrap();
    let at = view.layout_to_view(hasan.point);

    view.pointer_down(&layout, PointerButton::Primary, at);
    assert_eq!(view.state(), InteractionState::Idle);
    assert_eq!(view.pointer_move(at + Vec2::new(3.0, 0.0)), None);

    let selected = view.pointer_up(&layout, at).unwrap();
    let node = &layout.positions()[selected];
    assert_eq!(node.id, "hasan-1");
    assert_eq!(node.generation, 2);
    assert_eq!(node.child_count, 1);
}

#[test]
fn release_on_another_node_selects_nothing() {
    let (layout, mut view) = setup();
    let omar = view.layout_to_view(layout.get("omar-1").unwrap().point);
    let ibrahim = view.layout_to_view(layout.get("ibrahim-1").unwrap().point);

    view.pointer_down(&layout, PointerButton::Primary, omar);
    assert_eq!(view.pointer_up(&layout, ibrahim), None);
}

#[test]
fn pan_accumulates_deltas() {
    let (layout, mut view) = setup();
    let start = empty_spot(&view);
    let before = view.transform();

    view.pointer_down(&layout, PointerButton::Primary, start);
    assert_eq!(view.state(), InteractionState::Panning);
    assert_eq!(
        view.pointer_move(start + Vec2::new(10.0, 5.0)),
        Some(Vec2::new(10.0, 5.0))
    );
    assert_eq!(
        view.pointer_move(start + Vec2::new(25.0, -5.0)),
        Some(Vec2::new(15.0, -10.0))
    );
    assert_eq!(view.pointer_up(&layout, start + Vec2::new(25.0, -5.0)), None);
    assert_eq!(view.state(), InteractionState::Idle);

    let after = view.transform();
    assert_eq!(after.pan, before.pan + Vec2::new(25.0, -5.0));
    assert_eq!(after.scale, before.scale);
}

#[test]
fn leaving_the_surface_ends_panning() {
    let (layout, mut view) = setup();
    let start = empty_spot(&view);
    view.pointer_down(&layout, PointerButton::Primary, start);
    view.pointer_move(start + Vec2::new(4.0, 4.0));

    view.pointer_leave();
    assert_eq!(view.state(), InteractionState::Idle);
    let pan = view.transform().pan;
    assert_eq!(view.pointer_move(start + Vec2::new(50.0, 50.0)), None);
    assert_eq!(view.transform().pan, pan);
}

#[test]
fn leaving_the_surface_cancels_a_click() {
    let (layout, mut view) = setup();
    let at = view.layout_to_view(layout.root().point);
    view.pointer_down(&layout, PointerButton::Primary, at);
    view.pointer_leave();
    assert_eq!(view.pointer_up(&layout, at), None);
}

#[test]
fn scale_stays_in_bounds_under_any_zoom_sequence() {
    let (_, mut view) = setup();
    // A fixed pseudo-random walk over every zoom input.
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let scale = match seed % 5 {
            0 => view.wheel(1.0),
            1 => view.wheel(-1.0),
            2 => view.zoom_in(),
            3 => view.zoom_out(),
            _ => {
                view.reset_zoom();
                view.scale()
            }
        };
        assert!((MIN_SCALE..=MAX_SCALE).contains(&scale), "scale {scale}");
    }
    for _ in 0..50 {
        view.zoom_in();
    }
    assert_eq!(view.scale(), MAX_SCALE);
    for _ in 0..50 {
        view.wheel(3.0);
    }
    assert_eq!(view.scale(), MIN_SCALE);
}

#[test]
fn zoom_does_not_change_pan_or_state() {
    let (layout, mut view) = setup();
    let start = empty_spot(&view);
    view.pointer_down(&layout, PointerButton::Primary, start);
    let pan = view.transform().pan;

    view.wheel(-1.0);
    view.zoom_out();
    assert_eq!(view.transform().pan, pan);
    assert_eq!(view.state(), InteractionState::Panning);
}

#[test]
fn reset_restores_default_view() {
    let (layout, mut view) = setup();
    let start = empty_spot(&view);
    view.pointer_down(&layout, PointerButton::Primary, start);
    view.pointer_move(start + Vec2::new(300.0, 0.0));
    view.pointer_up(&layout, start);
    view.zoom_in();

    view.reset_zoom();
    assert_eq!(view.transform(), CanvasTransform::RESET);
}

#[test]
fn hit_test_follows_zoom() {
    let (layout, mut view) = setup();
    view.set_transform(CanvasTransform::new(Vec2::ZERO, 1.0));
    let root = layout.root();
    let edge = view.layout_to_view(root.point + Vec2::new(root.radius, 0.0));
    assert!(view.hit_test(&layout, edge).is_some());

    view.set_transform(CanvasTransform::new(Vec2::ZERO, 0.5));
    assert!(view.hit_test(&layout, edge).is_none());
}

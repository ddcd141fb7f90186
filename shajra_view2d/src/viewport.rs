// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use shajra_event_state::click::ClickState;
use shajra_event_state::pan::PanState;
use shajra_layout::{Layout, NodePosition};
use tracing::debug;

use crate::hit::hit_test;
use crate::transform::{BUTTON_ZOOM_STEP, CanvasTransform, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};

/// Pointer button reported with a press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Usually the left button; the only one that pans or selects.
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the middle button.
    Auxiliary,
}

/// Whether the viewport is currently following a pan gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The primary button went down over empty canvas and is still held.
    Panning,
}

/// Interactive view onto a laid-out family tree.
///
/// `Viewport` owns the [`CanvasTransform`] and turns pointer and wheel input
/// into transform updates or node selections. It does not own the layout;
/// callers pass the current [`Layout`] to the operations that hit-test.
///
/// Device coordinates are relative to the window. Canvas coordinates have
/// their origin at the top-center of [`view_rect`](Self::view_rect), which
/// is where zooming is anchored.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_rect: Rect,
    transform: CanvasTransform,
    pan: PanState,
    clicks: ClickState<usize>,
}

impl Viewport {
    /// Creates a viewport covering `view_rect` with the initial transform.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        Self {
            view_rect,
            transform: CanvasTransform::INITIAL,
            pan: PanState::default(),
            clicks: ClickState::default(),
        }
    }

    /// Current view rectangle in device coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle. Pan and zoom are kept, so the canvas origin
    /// follows the new top-center.
    pub fn set_view_rect(&mut self, rect: Rect) {
        self.view_rect = rect;
    }

    /// Current pan and zoom.
    #[must_use]
    pub fn transform(&self) -> CanvasTransform {
        self.transform
    }

    /// Replaces the transform, clamping its scale.
    pub fn set_transform(&mut self, transform: CanvasTransform) {
        self.transform = CanvasTransform::new(transform.pan, transform.scale);
    }

    /// Current zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Whether a pan gesture is in progress.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        if self.pan.is_panning() {
            InteractionState::Panning
        } else {
            InteractionState::Idle
        }
    }

    /// Converts a device-space point into canvas space.
    #[must_use]
    pub fn view_to_canvas(&self, pt: Point) -> Point {
        pt - self.canvas_origin()
    }

    /// Converts a canvas-space point into device space.
    #[must_use]
    pub fn canvas_to_view(&self, pt: Point) -> Point {
        pt + self.canvas_origin()
    }

    /// Converts a layout-space point into device space.
    #[must_use]
    pub fn layout_to_view(&self, pt: Point) -> Point {
        self.canvas_to_view(self.transform.apply(pt))
    }

    /// Converts a device-space point into layout space.
    #[must_use]
    pub fn view_to_layout(&self, pt: Point) -> Point {
        self.transform.invert(self.view_to_canvas(pt))
    }

    /// Node under a device-space point, if any.
    #[must_use]
    pub fn hit_test<'a>(&self, layout: &'a Layout, pt: Point) -> Option<&'a NodePosition> {
        hit_test(layout, &self.transform, self.view_to_canvas(pt))
    }

    /// Handles a button press at device position `pt`.
    ///
    /// A primary press over a node arms a click on it and never pans. A
    /// primary press over empty canvas starts panning. Other buttons are
    /// ignored.
    pub fn pointer_down(&mut self, layout: &Layout, button: PointerButton, pt: Point) {
        if button != PointerButton::Primary {
            return;
        }
        match self.hit_test(layout, pt) {
            Some(node) => {
                self.pan.finish();
                self.clicks.press(node.index, pt);
            }
            None => {
                self.clicks.cancel();
                self.pan.begin(pt);
                debug!(x = pt.x, y = pt.y, "pan started");
            }
        }
    }

    /// Handles pointer movement. While panning, the movement since the last
    /// event is added to the pan offset and returned.
    pub fn pointer_move(&mut self, pt: Point) -> Option<Vec2> {
        let delta = self.pan.drag(pt)?;
        self.transform = self.transform.panned(delta);
        Some(delta)
    }

    /// Handles a button release at device position `pt`.
    ///
    /// Ends panning, or completes a click: if the press and the release
    /// both landed on the same node, that node's pre-order index is
    /// returned as the new selection.
    pub fn pointer_up(&mut self, layout: &Layout, pt: Point) -> Option<usize> {
        if let Some(total) = self.pan.finish() {
            debug!(dx = total.x, dy = total.y, "pan ended");
            return None;
        }
        let under = self.hit_test(layout, pt).map(|node| node.index);
        let selected = self.clicks.release(under.as_ref());
        if let Some(index) = selected {
            debug!(index, "node clicked");
        }
        selected
    }

    /// Handles the pointer leaving the surface: ends panning and forgets any
    /// armed click.
    pub fn pointer_leave(&mut self) {
        if self.pan.finish().is_some() {
            debug!("pan ended on leave");
        }
        self.clicks.cancel();
    }

    /// Handles a wheel event. Positive `delta_y` (scrolling down) zooms out,
    /// anything else zooms in. Returns the new scale.
    pub fn wheel(&mut self, delta_y: f64) -> f64 {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT
        } else {
            WHEEL_ZOOM_IN
        };
        self.zoom_by(factor)
    }

    /// Zoom-in control. Returns the new scale.
    pub fn zoom_in(&mut self) -> f64 {
        self.zoom_by(BUTTON_ZOOM_STEP)
    }

    /// Zoom-out control. Returns the new scale.
    pub fn zoom_out(&mut self) -> f64 {
        self.zoom_by(1.0 / BUTTON_ZOOM_STEP)
    }

    /// Reset control: restores [`CanvasTransform::RESET`].
    pub fn reset_zoom(&mut self) {
        self.transform = CanvasTransform::RESET;
        debug!("view reset");
    }

    fn zoom_by(&mut self, factor: f64) -> f64 {
        self.transform = self.transform.zoomed(factor);
        debug!(scale = self.transform.scale, "zoomed");
        self.transform.scale
    }

    fn canvas_origin(&self) -> Vec2 {
        Vec2::new(self.view_rect.center().x, self.view_rect.y0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shajra_family::FamilyMember;
    use shajra_layout::compute_layout;

    #[test]
    fn canvas_origin_is_top_center() {
        let vp = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(vp.view_to_canvas(Point::new(400.0, 0.0)), Point::ZERO);
        assert_eq!(vp.canvas_to_view(Point::ZERO), Point::new(400.0, 0.0));
    }

    #[test]
    fn root_starts_below_top_center() {
        let vp = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(vp.layout_to_view(Point::ZERO), Point::new(400.0, 100.0));
        let back = vp.view_to_layout(Point::new(400.0, 100.0));
        assert!(back.x.abs() < 1e-9 && back.y.abs() < 1e-9);
    }

    #[test]
    fn secondary_button_is_ignored() {
        let layout = compute_layout(&FamilyMember::new("solo", "Solo")).unwrap();
        let mut vp = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        vp.pointer_down(&layout, PointerButton::Secondary, Point::new(10.0, 10.0));
        assert_eq!(vp.state(), InteractionState::Idle);
        assert_eq!(vp.pointer_move(Point::new(20.0, 20.0)), None);
    }

    #[test]
    fn resizing_moves_the_anchor() {
        let mut vp = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        vp.set_view_rect(Rect::new(0.0, 0.0, 1000.0, 600.0));
        assert_eq!(vp.layout_to_view(Point::ZERO), Point::new(500.0, 100.0));
    }
}

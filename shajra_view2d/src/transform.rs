// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f64 = 0.5;
/// Largest allowed zoom factor.
pub const MAX_SCALE: f64 = 3.0;

/// Scale multiplier for one wheel notch towards the user (zoom in).
pub const WHEEL_ZOOM_IN: f64 = 1.1;
/// Scale multiplier for one wheel notch away from the user (zoom out).
pub const WHEEL_ZOOM_OUT: f64 = 0.9;
/// Scale multiplier (or divisor) for the zoom buttons.
pub const BUTTON_ZOOM_STEP: f64 = 1.2;

/// Pan offset and uniform scale from layout space into canvas space.
///
/// Canvas space has its origin at the top-center of the view, which is also
/// the fixed anchor for zooming: a layout point `p` lands at
/// `p * scale + pan`. Changing the scale never changes `pan`, so zooming does
/// not keep the point under the cursor stationary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasTransform {
    /// Translation in canvas pixels.
    pub pan: Vec2,
    /// Uniform zoom factor, always within [`MIN_SCALE`]..=[`MAX_SCALE`].
    pub scale: f64,
}

impl CanvasTransform {
    /// Transform a freshly opened tree starts with: zoomed in, root a little
    /// below the top edge.
    pub const INITIAL: Self = Self {
        pan: Vec2::new(0.0, 100.0),
        scale: 2.0,
    };

    /// Transform restored by the reset control.
    pub const RESET: Self = Self {
        pan: Vec2::new(0.0, 50.0),
        scale: 1.0,
    };

    /// Unscaled and unpanned.
    pub const IDENTITY: Self = Self {
        pan: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform, clamping `scale` into the allowed range.
    #[must_use]
    pub fn new(pan: Vec2, scale: f64) -> Self {
        Self {
            pan,
            scale: clamp_scale(scale),
        }
    }

    /// Maps a layout-space point into canvas space.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        (p.to_vec2() * self.scale + self.pan).to_point()
    }

    /// Maps a canvas-space point back into layout space.
    #[must_use]
    pub fn invert(&self, p: Point) -> Point {
        ((p.to_vec2() - self.pan) / self.scale).to_point()
    }

    /// The same mapping as an [`Affine`], for transforming whole shapes.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.scale)
    }

    /// Returns this transform with the scale multiplied by `factor` and
    /// clamped. Non-positive or non-finite factors leave it unchanged.
    #[must_use]
    pub fn zoomed(self, factor: f64) -> Self {
        if !(factor.is_finite() && factor > 0.0) {
            return self;
        }
        Self::new(self.pan, self.scale * factor)
    }

    /// Returns this transform translated by `delta` canvas pixels.
    #[must_use]
    pub fn panned(self, delta: Vec2) -> Self {
        Self {
            pan: self.pan + delta,
            ..self
        }
    }
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self::INITIAL
    }
}

fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Light and dark palettes.

use peniko::Color;

/// Which palette is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The palette for this mode.
    #[must_use]
    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Light => &Theme::LIGHT,
            Self::Dark => &Theme::DARK,
        }
    }
}

/// Colors used to draw the tree canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Canvas background.
    pub background: Color,
    /// Text outside node discs.
    pub text: Color,
    /// Background grid lines.
    pub grid: Color,
    /// Parent-child connectors.
    pub connector: Color,
    /// Disc fill for members without their own color.
    pub node_fallback: Color,
    /// Disc outline.
    pub node_stroke: Color,
    /// Disc outline of the selected member.
    pub selected_stroke: Color,
    /// Label text inside discs.
    pub label: Color,
}

impl Theme {
    /// Light palette.
    pub const LIGHT: Self = Self {
        background: Color::from_rgb8(0xff, 0xff, 0xff),
        text: Color::from_rgb8(0x11, 0x18, 0x27),
        grid: Color::from_rgb8(0xe5, 0xe7, 0xeb),
        connector: Color::from_rgb8(0x9c, 0xa3, 0xaf),
        node_fallback: Color::from_rgb8(0x9c, 0xa3, 0xaf),
        node_stroke: Color::from_rgb8(0xa8, 0xd5, 0xba),
        selected_stroke: Color::from_rgb8(0xf5, 0x9e, 0x0b),
        label: Color::from_rgb8(0xff, 0xff, 0xff),
    };

    /// Dark palette.
    pub const DARK: Self = Self {
        background: Color::from_rgb8(0x1f, 0x29, 0x37),
        text: Color::from_rgb8(0xe5, 0xe7, 0xeb),
        grid: Color::from_rgb8(0x37, 0x41, 0x51),
        connector: Color::from_rgb8(0x4b, 0x55, 0x63),
        node_fallback: Color::from_rgb8(0x4b, 0x55, 0x63),
        node_stroke: Color::from_rgb8(0x2d, 0x5a, 0x52),
        selected_stroke: Color::from_rgb8(0xfb, 0xbf, 0x24),
        label: Color::from_rgb8(0xff, 0xff, 0xff),
    };
}

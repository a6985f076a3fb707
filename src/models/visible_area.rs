// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Visible area domain type (UI-agnostic).

use std::fmt;

/// Bounding rectangle of an element relative to the viewport, in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VisibleArea {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl VisibleArea {
    /// Round fractional viewport coordinates to the nearest whole pixel.
    ///
    /// Halfway values round away from zero.
    pub fn from_rounded(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
            width: width.round() as i32,
            height: height.round() as i32,
        }
    }
}

impl fmt::Display for VisibleArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={} y={} {}×{}",
            self.x, self.y, self.width, self.height
        )
    }
}

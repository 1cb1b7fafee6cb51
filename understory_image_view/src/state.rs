// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::rotation::Rotation;

/// Dimensions of a decoded raster image.
///
/// The pixels themselves stay with the host; the view only needs the size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSurface {
    width: u32,
    height: u32,
}

impl ImageSurface {
    /// Creates a surface description of `width` × `height` pixels.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// The presentation of an image: zoom, rotation and scroll position.
///
/// Scroll offsets are whole pixels into the zoomed, rotated content. They
/// are zero on any axis where the content is not larger than the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformState {
    /// Uniform zoom factor.
    pub zoom: f64,
    /// Rotation in quarter turns.
    pub rotation: Rotation,
    /// Horizontal scroll offset in pixels.
    pub scroll_x: u32,
    /// Vertical scroll offset in pixels.
    pub scroll_y: u32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            rotation: Rotation::Deg0,
            scroll_x: 0,
            scroll_y: 0,
        }
    }
}

impl TransformState {
    /// Rotation angle in degrees.
    #[must_use]
    pub fn angle(&self) -> u32 {
        self.rotation.degrees()
    }

    /// Scroll offset as a vector.
    #[must_use]
    pub fn scroll(&self) -> Vec2 {
        Vec2::new(f64::from(self.scroll_x), f64::from(self.scroll_y))
    }
}

/// Converts a clamped, rounded scroll offset to whole pixels.
#[expect(
    clippy::cast_possible_truncation,
    reason = "callers pass values already rounded and clamped to a non-negative range"
)]
pub(crate) fn to_pixels(value: f64) -> u32 {
    value.max(0.0).min(f64::from(u32::MAX)) as u32
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::rotation::Rotation;

/// Computes the fit-to-view zoom for an image.
///
/// Returns the largest zoom no greater than `1.0` at which `surface`, after
/// `rotation`, fits entirely inside `viewport`. Images that already fit are
/// shown 1:1; they are never upscaled.
///
/// A degenerate (empty) surface also yields `1.0`. An empty viewport yields
/// `0.0`, which callers are expected to clamp into their zoom limits.
///
/// ```rust
/// use kurbo::Size;
/// use understory_image_view::{Rotation, fit_zoom};
///
/// let viewport = Size::new(800.0, 600.0);
/// assert_eq!(fit_zoom(Size::new(400.0, 300.0), viewport, Rotation::Deg0), 1.0);
/// assert_eq!(fit_zoom(Size::new(1600.0, 600.0), viewport, Rotation::Deg0), 0.5);
/// // A quarter turn makes the tall side horizontal.
/// assert_eq!(fit_zoom(Size::new(600.0, 1600.0), viewport, Rotation::Deg90), 0.5);
/// ```
#[must_use]
pub fn fit_zoom(surface: Size, viewport: Size, rotation: Rotation) -> f64 {
    let content = rotation.apply_to_size(surface);
    if content.width <= 0.0 || content.height <= 0.0 {
        return 1.0;
    }
    if content.width <= viewport.width && content.height <= viewport.height {
        return 1.0;
    }
    let sx = viewport.width / content.width;
    let sy = viewport.height / content.height;
    sx.min(sy).clamp(0.0, 1.0)
}

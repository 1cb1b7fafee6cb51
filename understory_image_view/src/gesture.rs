// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient gesture state: pinch-zoom anchors and relative rotation.
//!
//! Gestures follow a begin/update/end lifecycle. Begin captures the
//! starting zoom or rotation; updates are relative to that start; end
//! discards the state.

use kurbo::{Point, Size, Vec2};

use crate::rotation::Rotation;

/// Focal point of a zoom gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomAnchor {
    /// Focal point as a fraction of the viewport, each component in `[0, 1]`.
    pub fraction: Vec2,
    /// Zoom when the gesture started.
    pub start_zoom: f64,
}

impl ZoomAnchor {
    /// Creates an anchor at `point` (viewport pixels) within `viewport`.
    ///
    /// Points outside the viewport are clamped to its edges. On an empty
    /// viewport axis the anchor falls back to the middle.
    #[must_use]
    pub fn at_view_point(point: Point, viewport: Size, start_zoom: f64) -> Self {
        fn fraction(pos: f64, len: f64) -> f64 {
            if len > 0.0 {
                (pos / len).clamp(0.0, 1.0)
            } else {
                0.5
            }
        }
        Self {
            fraction: Vec2::new(
                fraction(point.x, viewport.width),
                fraction(point.y, viewport.height),
            ),
            start_zoom,
        }
    }

    /// The center of the viewport, used when no gesture anchor applies.
    pub(crate) fn centered(start_zoom: f64) -> Self {
        Self {
            fraction: Vec2::new(0.5, 0.5),
            start_zoom,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GestureState {
    pinch: Option<ZoomAnchor>,
    rotate_origin: Option<Rotation>,
}

impl GestureState {
    pub(crate) fn begin_pinch(&mut self, anchor: ZoomAnchor) {
        self.pinch = Some(anchor);
    }

    pub(crate) fn pinch(&self) -> Option<ZoomAnchor> {
        self.pinch
    }

    pub(crate) fn end_pinch(&mut self) {
        self.pinch = None;
    }

    pub(crate) fn begin_rotate(&mut self, origin: Rotation) {
        self.rotate_origin = Some(origin);
    }

    pub(crate) fn rotate_origin(&self) -> Option<Rotation> {
        self.rotate_origin
    }

    pub(crate) fn end_rotate(&mut self) {
        self.rotate_origin = None;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{GestureState, ZoomAnchor};
    use crate::Rotation;

    #[test]
    fn anchor_is_a_viewport_fraction() {
        let a = ZoomAnchor::at_view_point(
            Point::new(200.0, 450.0),
            Size::new(800.0, 600.0),
            0.5,
        );
        assert_eq!(a.fraction, Vec2::new(0.25, 0.75));
        assert_eq!(a.start_zoom, 0.5);
    }

    #[test]
    fn anchor_outside_viewport_is_clamped() {
        let a = ZoomAnchor::at_view_point(
            Point::new(-10.0, 9000.0),
            Size::new(800.0, 600.0),
            1.0,
        );
        assert_eq!(a.fraction, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn empty_viewport_anchors_in_the_middle() {
        let a = ZoomAnchor::at_view_point(Point::new(3.0, 4.0), Size::ZERO, 1.0);
        assert_eq!(a.fraction, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn gestures_begin_and_end_independently() {
        let mut g = GestureState::default();
        g.begin_pinch(ZoomAnchor::centered(1.0));
        g.begin_rotate(Rotation::Deg90);
        g.end_pinch();
        assert!(g.pinch().is_none());
        assert_eq!(g.rotate_origin(), Some(Rotation::Deg90));
        g.end_rotate();
        assert!(g.rotate_origin().is_none());

        g.begin_pinch(ZoomAnchor::centered(1.0));
        g.reset();
        assert!(g.pinch().is_none());
    }
}

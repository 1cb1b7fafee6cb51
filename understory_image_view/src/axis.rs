// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis scroll arithmetic.
//!
//! Scrolling is independent per axis, so everything here works on one
//! dimension at a time: the viewport length and the unzoomed content
//! length along that axis (after rotation).

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`, `round`

/// One axis of the content/viewport pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Axis {
    /// Viewport length in pixels.
    pub(crate) viewport: f64,
    /// Unzoomed content length in image pixels.
    pub(crate) extent: f64,
}

impl Axis {
    /// Zoomed content length, truncated to whole pixels.
    pub(crate) fn content(self, zoom: f64) -> f64 {
        (self.extent * zoom).floor()
    }

    /// Offset that centers content smaller than the viewport.
    pub(crate) fn inset(self, zoom: f64) -> f64 {
        centering_inset(self.content(zoom), self.viewport)
    }

    /// Clamps `scroll` to the scrollable range at `zoom`, in whole pixels.
    pub(crate) fn clamp_scroll(self, scroll: f64, zoom: f64) -> f64 {
        let content = self.content(zoom);
        if content <= self.viewport {
            return 0.0;
        }
        scroll.round().clamp(0.0, content - self.viewport)
    }

    /// Scroll offset at `to_zoom` that keeps the content point under
    /// `anchor` (a fraction of the viewport) visually fixed.
    ///
    /// `scroll` is the offset at `from_zoom`. When the content at `from_zoom`
    /// was smaller than the viewport it was centered rather than scrolled, so
    /// the centering inset is removed before locating the anchored point.
    pub(crate) fn anchored_scroll(
        self,
        scroll: f64,
        from_zoom: f64,
        to_zoom: f64,
        anchor: f64,
    ) -> f64 {
        let anchor_px = anchor * self.viewport;
        let focus = (scroll + anchor_px - self.inset(from_zoom)) / from_zoom;
        self.clamp_scroll(focus * to_zoom - anchor_px, to_zoom)
    }
}

/// Inset that centers `content` inside `viewport`, in whole pixels.
///
/// Zero when the content is at least as large as the viewport.
pub(crate) fn centering_inset(content: f64, viewport: f64) -> f64 {
    if content < viewport {
        ((viewport - content) / 2.0).floor()
    } else {
        0.0
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Default lower zoom limit.
pub const DEFAULT_MIN_ZOOM: f64 = 0.05;
/// Default upper zoom limit.
pub const DEFAULT_MAX_ZOOM: f64 = 4.0;
/// Default zoom increment used by [`ImageView::zoom_in`](crate::ImageView::zoom_in)
/// and [`ImageView::zoom_out`](crate::ImageView::zoom_out).
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;
/// Default quiet period before high-quality rendering is requested.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Tunables for an [`ImageView`](crate::ImageView).
///
/// ```rust
/// use core::time::Duration;
/// use understory_image_view::ViewConfig;
///
/// let config = ViewConfig::default()
///     .with_zoom_limits(8.0, 0.25) // normalized to 0.25..=8.0
///     .with_settle_delay(Duration::from_millis(120));
/// assert_eq!(config.min_zoom(), 0.25);
/// assert_eq!(config.clamp_zoom(100.0), 8.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewConfig {
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
    settle_delay: Duration,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl ViewConfig {
    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`.
    /// Limits that are not strictly positive are ignored.
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        let positive = min_zoom > 0.0 && max_zoom > 0.0;
        if !positive {
            return self;
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the zoom increment. Steps that are not strictly positive are ignored.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        if step > 0.0 && step.is_finite() {
            self.zoom_step = step;
        }
        self
    }

    /// Sets the quiet period after the last transform change before
    /// high-quality rendering is requested.
    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Lower zoom limit.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Upper zoom limit.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Zoom increment.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Quiet period before high-quality rendering.
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Clamps `zoom` into the configured limits.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        // Not `f64::clamp`: deserialized limits may be inverted.
        zoom.max(self.min_zoom).min(self.max_zoom)
    }

    /// Returns `true` if `zoom` lies within the configured limits.
    #[must_use]
    pub fn contains_zoom(&self, zoom: f64) -> bool {
        zoom >= self.min_zoom && zoom <= self.max_zoom
    }
}

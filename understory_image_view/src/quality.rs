// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use understory_timing::Debouncer;

/// Filtering the host should use when painting the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderQuality {
    /// Nearest-neighbour filtering while the user is interacting.
    Fast,
    /// Smooth filtering once interaction has settled.
    #[default]
    HighQuality,
}

impl RenderQuality {
    /// Returns `true` for smooth (interpolating) filtering.
    #[must_use]
    pub fn is_smooth(self) -> bool {
        matches!(self, Self::HighQuality)
    }
}

/// Two-phase render hint: fast right after a change, high quality once the
/// settle delay passes with no further change.
#[derive(Clone, Debug)]
pub(crate) struct QualityHint {
    quality: RenderQuality,
    settle: Debouncer,
}

impl QualityHint {
    pub(crate) fn new(settle_delay: Duration) -> Self {
        Self {
            quality: RenderQuality::HighQuality,
            settle: Debouncer::new(settle_delay),
        }
    }

    pub(crate) fn quality(&self) -> RenderQuality {
        self.quality
    }

    pub(crate) fn set_settle_delay(&mut self, delay: Duration) {
        self.settle.set_delay(delay);
    }

    /// Drops to fast rendering and restarts the settle period.
    pub(crate) fn note_change(&mut self, now: Duration) {
        self.quality = RenderQuality::Fast;
        self.settle.trigger(now);
    }

    pub(crate) fn deadline(&self) -> Option<Duration> {
        self.settle.deadline()
    }

    /// Returns `true` exactly once per settle, switching to high quality.
    pub(crate) fn poll(&mut self, now: Duration) -> bool {
        if self.settle.poll(now) {
            self.quality = RenderQuality::HighQuality;
            true
        } else {
            false
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_image_view --heading-base-level=0

//! Understory Image View: headless view transforms for a single raster image.
//!
//! This crate models how one image is presented inside a resizable
//! viewport. It focuses on:
//! - Fit-to-view zoom that never upscales, plus 1:1 and stepped zoom.
//! - Rotation in quarter turns, pivoting about the image center.
//! - Scroll offsets that keep a chosen point fixed across zoom changes
//!   (the viewport center, or a pinch anchor).
//! - A fast/high-quality rendering hint that settles after a quiet period.
//!
//! It does **not** decode, paint or own any widget. Callers are expected to:
//! - Decode the image and hand its size to [`ImageView::set_surface`].
//! - Report viewport size changes with [`ImageView::set_viewport`].
//! - Translate input events into zoom/rotate/pan/pinch calls.
//! - Paint with [`ImageView::transform`] using the filter suggested by
//!   [`ImageView::render_quality`], and call [`ImageView::poll`] when
//!   [`ImageView::next_deadline`] passes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_image_view::{ImageSurface, ImageView, RenderQuality, Rotation, ViewEvent};
//! use understory_timing::{Clock, ManualClock};
//!
//! let clock = ManualClock::new();
//! let mut view = ImageView::new(clock.clone());
//! view.subscribe(|event| {
//!     if let ViewEvent::ZoomChanged { zoom } = event {
//!         // Update a zoom label, persist a remembered zoom, ...
//!         let _ = zoom;
//!     }
//! });
//!
//! view.set_viewport(Size::new(800.0, 600.0));
//! view.set_surface(ImageSurface::new(2000, 1500));
//! assert_eq!(view.zoom(), 0.4); // fit-to-view
//!
//! // Pinch around the viewport center.
//! view.begin_pinch(Point::new(400.0, 300.0));
//! view.update_pinch(2.0);
//! view.end_pinch();
//! let state = view.state().unwrap();
//! assert_eq!((state.scroll_x, state.scroll_y), (400, 300));
//!
//! view.rotate_clockwise();
//! assert_eq!(view.rotation(), Rotation::Deg90);
//!
//! // Interaction paints fast; once things settle, repaint smoothly.
//! assert_eq!(view.render_quality(), RenderQuality::Fast);
//! if let Some(deadline) = view.next_deadline() {
//!     clock.set(deadline);
//! }
//! assert!(view.poll());
//! assert_eq!(view.render_quality(), RenderQuality::HighQuality);
//! # let _ = clock.now();
//! ```
//!
//! ## Design notes
//!
//! - Rotation is limited to quarter turns; whether width and height swap is
//!   derived from the rotation, never stored separately.
//! - Time comes from an `understory_timing` [`Clock`](understory_timing::Clock)
//!   supplied by the host, so settle behaviour is deterministic in tests.
//! - Requests made before a surface is loaded are ignored.
//! - Zoom requests are clamped and angles are snapped rather than rejected.
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: `no_std` float support through Kurbo.
//! - `serde`: `Serialize`/`Deserialize` for [`ViewConfig`],
//!   [`TransformState`] and [`Rotation`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod config;
mod event;
mod fit;
mod gesture;
mod quality;
mod rotation;
mod state;
mod view;

pub use config::{
    DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_SETTLE_DELAY, DEFAULT_ZOOM_STEP, ViewConfig,
};
pub use event::{ListenerId, ViewEvent};
pub use fit::fit_zoom;
pub use gesture::ZoomAnchor;
pub use quality::RenderQuality;
pub use rotation::Rotation;
pub use state::{ImageSurface, TransformState};
pub use view::{ImageView, ImageViewDebugInfo};

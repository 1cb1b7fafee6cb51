// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::time::Duration;

use kurbo::{Affine, Point, Size, Vec2};
use log::{debug, trace};
use understory_timing::Clock;

use crate::axis::Axis;
use crate::config::ViewConfig;
use crate::event::{ListenerId, Listeners, ViewEvent};
use crate::fit::fit_zoom;
use crate::gesture::{GestureState, ZoomAnchor};
use crate::quality::{QualityHint, RenderQuality};
use crate::rotation::Rotation;
use crate::state::{ImageSurface, TransformState, to_pixels};

/// View transform engine for one raster image in a resizable viewport.
///
/// `ImageView` turns surface size, viewport size and user gestures into a
/// [`TransformState`] (zoom, rotation, scroll) and an image-to-viewport
/// [`Affine`]. It also tracks a two-phase [`RenderQuality`] hint, reading
/// time from the host-supplied [`Clock`].
///
/// Until a surface is loaded with [`set_surface`](Self::set_surface), every
/// transform request is ignored: no state changes and no events fire.
#[derive(Debug)]
pub struct ImageView<C> {
    clock: C,
    config: ViewConfig,
    surface: Option<ImageSurface>,
    viewport: Size,
    state: TransformState,
    auto_fit: bool,
    gestures: GestureState,
    quality: QualityHint,
    listeners: Listeners,
}

impl<C: Clock> ImageView<C> {
    /// Creates an empty view with the default [`ViewConfig`].
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, ViewConfig::default())
    }

    /// Creates an empty view with `config`.
    #[must_use]
    pub fn with_config(clock: C, config: ViewConfig) -> Self {
        Self {
            clock,
            config,
            surface: None,
            viewport: Size::ZERO,
            state: TransformState::default(),
            auto_fit: true,
            gestures: GestureState::default(),
            quality: QualityHint::new(config.settle_delay()),
            listeners: Listeners::default(),
        }
    }

    /// Returns the clock this view reads time from.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> ViewConfig {
        self.config
    }

    /// Replaces the configuration.
    ///
    /// The current zoom is brought back into the new limits (refitting when
    /// fit-to-view is active). The new settle delay applies from the next
    /// transform change.
    pub fn set_config(&mut self, config: ViewConfig) {
        self.config = config;
        self.quality.set_settle_delay(config.settle_delay());
        if self.surface.is_none() {
            return;
        }
        if self.auto_fit {
            self.refit();
        } else if !config.contains_zoom(self.state.zoom) {
            self.apply_zoom(self.state.zoom);
        }
    }

    /// Loads (or replaces) the image.
    ///
    /// The new image is shown fit-to-view from the top-left scroll position.
    /// Active gestures are dropped. The rotation carries over from the
    /// previous image.
    pub fn set_surface(&mut self, surface: ImageSurface) {
        debug!(
            "image view: loading {}x{} surface",
            surface.width(),
            surface.height()
        );
        self.surface = Some(surface);
        self.gestures.reset();
        self.auto_fit = true;
        self.state.scroll_x = 0;
        self.state.scroll_y = 0;
        let fit = self.fit_zoom().unwrap_or(1.0);
        self.state.zoom = self.config.clamp_zoom(fit);
        self.emit(ViewEvent::ZoomChanged {
            zoom: self.state.zoom,
        });
        self.note_change();
    }

    /// Returns the loaded image, if any.
    #[must_use]
    pub fn surface(&self) -> Option<ImageSurface> {
        self.surface
    }

    /// Sets the viewport size, typically on every layout pass.
    ///
    /// While fit-to-view is active the zoom follows the viewport; otherwise
    /// the scroll position is re-clamped to the new size.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        if self.surface.is_none() {
            return;
        }
        if self.auto_fit {
            self.refit();
        } else if self.clamp_scroll() {
            self.note_change();
        }
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Fit-to-view zoom for the loaded image at the current rotation and
    /// viewport, before clamping to the zoom limits.
    #[must_use]
    pub fn fit_zoom(&self) -> Option<f64> {
        let surface = self.surface?;
        let zoom = fit_zoom(surface.size(), self.viewport, self.state.rotation);
        debug!("image view: fit zoom {zoom}");
        Some(zoom)
    }

    /// Sets the zoom, clamped into the configured limits.
    ///
    /// This turns fit-to-view off. The scroll position is recomputed so that
    /// the active pinch anchor (or else the viewport center) stays visually
    /// fixed. [`ViewEvent::ZoomChanged`] fires once per call, even if the
    /// clamped zoom equals the previous one. `NaN` is ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if self.surface.is_none() {
            debug!("image view: ignoring zoom request without a surface");
            return;
        }
        if zoom.is_nan() {
            return;
        }
        self.auto_fit = false;
        self.apply_zoom(zoom);
    }

    /// Zooms in by one step. Returns `true` while further zooming in is possible.
    pub fn zoom_in(&mut self) -> bool {
        if self.surface.is_none() {
            return false;
        }
        self.set_zoom(self.state.zoom + self.config.zoom_step());
        self.state.zoom < self.config.max_zoom()
    }

    /// Zooms out by one step. Returns `true` while further zooming out is possible.
    pub fn zoom_out(&mut self) -> bool {
        if self.surface.is_none() {
            return false;
        }
        self.set_zoom(self.state.zoom - self.config.zoom_step());
        self.state.zoom > self.config.min_zoom()
    }

    /// Switches to fit-to-view. The zoom then follows viewport changes until
    /// another explicit zoom request.
    pub fn zoom_to_fit(&mut self) {
        if self.surface.is_none() {
            return;
        }
        self.auto_fit = true;
        self.refit();
    }

    /// Shows the image at 1:1.
    pub fn zoom_to_original(&mut self) {
        self.set_zoom(1.0);
    }

    /// Returns `true` while the zoom follows the fit-to-view value.
    #[must_use]
    pub fn is_fit_to_view(&self) -> bool {
        self.auto_fit
    }

    /// Sets the rotation from an angle in degrees, snapped to a quarter turn.
    ///
    /// The image point at the viewport center stays at the center; the
    /// content pivots about its own center. Fit-to-view is re-enabled, so the
    /// next viewport change refits the rotated image. [`ViewEvent::AngleChanged`]
    /// fires once per call. Non-finite angles are ignored.
    pub fn set_angle(&mut self, degrees: f64) {
        let Some(surface) = self.surface else {
            debug!("image view: ignoring rotation request without a surface");
            return;
        };
        if !degrees.is_finite() {
            return;
        }
        let from = self.state.rotation;
        let to = Rotation::from_degrees(degrees);
        let zoom = self.state.zoom;
        let (bx, by) = self.axes(surface, from);
        let (ax, ay) = self.axes(surface, to);

        // Viewport center relative to the content center, before the turn.
        let focus = Vec2::new(
            f64::from(self.state.scroll_x) + 0.5 * bx.viewport
                - bx.inset(zoom)
                - 0.5 * bx.content(zoom),
            f64::from(self.state.scroll_y) + 0.5 * by.viewport
                - by.inset(zoom)
                - 0.5 * by.content(zoom),
        );
        let focus = Rotation::from_quarter_turns(to.quarter_turns() - from.quarter_turns())
            .apply_to_vec(focus);
        let sx = 0.5 * ax.content(zoom) + focus.x - 0.5 * ax.viewport;
        let sy = 0.5 * ay.content(zoom) + focus.y - 0.5 * ay.viewport;

        self.state.rotation = to;
        self.state.scroll_x = to_pixels(ax.clamp_scroll(sx, zoom));
        self.state.scroll_y = to_pixels(ay.clamp_scroll(sy, zoom));
        self.auto_fit = true;
        trace!(
            "image view: rotation {} -> {} deg, scroll ({}, {})",
            from.degrees(),
            to.degrees(),
            self.state.scroll_x,
            self.state.scroll_y
        );
        self.emit(ViewEvent::AngleChanged { rotation: to });
        self.note_change();
    }

    /// Rotates a quarter turn clockwise.
    pub fn rotate_clockwise(&mut self) {
        self.set_angle(f64::from(self.state.rotation.rotate_by(1).degrees()));
    }

    /// Rotates a quarter turn counter-clockwise.
    pub fn rotate_counter_clockwise(&mut self) {
        self.set_angle(f64::from(self.state.rotation.rotate_by(-1).degrees()));
    }

    /// Moves the scroll position by `delta` pixels, clamped to the content.
    ///
    /// Positive components reveal content further right/down; a host
    /// dragging the image passes the negated pointer delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        if self.surface.is_none() || delta == Vec2::ZERO {
            return;
        }
        self.scroll_to(self.state.scroll() + delta);
    }

    /// Sets the scroll position, clamped to the content.
    ///
    /// Hosts call this when their own scroll container moves.
    pub fn scroll_to(&mut self, scroll: Vec2) {
        let Some(surface) = self.surface else {
            return;
        };
        if !(scroll.x.is_finite() && scroll.y.is_finite()) {
            return;
        }
        let zoom = self.state.zoom;
        let (x, y) = self.axes(surface, self.state.rotation);
        let sx = to_pixels(x.clamp_scroll(scroll.x, zoom));
        let sy = to_pixels(y.clamp_scroll(scroll.y, zoom));
        if (sx, sy) == (self.state.scroll_x, self.state.scroll_y) {
            return;
        }
        self.state.scroll_x = sx;
        self.state.scroll_y = sy;
        trace!("image view: scroll ({sx}, {sy})");
        self.note_change();
    }

    /// Starts a pinch gesture focused on `anchor` (viewport pixels).
    ///
    /// Until [`end_pinch`](Self::end_pinch), zoom changes keep the content
    /// under the anchor stationary on screen. Anchoring only applies to an
    /// upright image; while rotated, zoom is anchored at the viewport center.
    pub fn begin_pinch(&mut self, anchor: Point) {
        if self.surface.is_none() {
            return;
        }
        self.gestures.begin_pinch(ZoomAnchor::at_view_point(
            anchor,
            self.viewport,
            self.state.zoom,
        ));
    }

    /// Updates the pinch with the total `scale` since the gesture began.
    ///
    /// Ignored when no pinch is active or `scale` is not positive.
    pub fn update_pinch(&mut self, scale: f64) {
        let Some(anchor) = self.gestures.pinch() else {
            return;
        };
        if scale.is_nan() || scale <= 0.0 {
            return;
        }
        self.set_zoom(anchor.start_zoom * scale);
    }

    /// Ends the pinch gesture and discards its anchor.
    pub fn end_pinch(&mut self) {
        self.gestures.end_pinch();
    }

    /// Returns the active pinch anchor, if any.
    #[must_use]
    pub fn zoom_anchor(&self) -> Option<ZoomAnchor> {
        self.gestures.pinch()
    }

    /// Starts a rotate gesture from the current rotation.
    pub fn begin_rotate(&mut self) {
        if self.surface.is_none() {
            return;
        }
        self.gestures.begin_rotate(self.state.rotation);
    }

    /// Updates the rotate gesture with the total angle, in degrees, since it began.
    pub fn update_rotate(&mut self, degrees: f64) {
        let Some(origin) = self.gestures.rotate_origin() else {
            return;
        };
        self.set_angle(f64::from(origin.degrees()) + degrees);
    }

    /// Ends the rotate gesture.
    pub fn end_rotate(&mut self) {
        self.gestures.end_rotate();
    }

    /// Re-applies a previously saved state: rotation, then zoom, then scroll.
    ///
    /// A non-positive saved zoom is treated as "not remembered" and leaves
    /// fit-to-view in place.
    pub fn restore(&mut self, saved: &TransformState) {
        if self.surface.is_none() {
            return;
        }
        if saved.rotation != self.state.rotation {
            self.set_angle(f64::from(saved.rotation.degrees()));
        }
        if saved.zoom > 0.0 {
            self.set_zoom(saved.zoom);
        }
        self.scroll_to(saved.scroll());
    }

    /// Current transform state, or `None` with no surface loaded.
    #[must_use]
    pub fn state(&self) -> Option<TransformState> {
        self.surface.map(|_| self.state)
    }

    /// Current zoom.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    /// Current rotation.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.state.rotation
    }

    /// Size of the zoomed, rotated image in whole pixels.
    ///
    /// Hosts with a scroll container use this as the scrollable extent.
    #[must_use]
    pub fn content_size(&self) -> Option<Size> {
        let surface = self.surface?;
        let (x, y) = self.axes(surface, self.state.rotation);
        Some(Size::new(
            x.content(self.state.zoom),
            y.content(self.state.zoom),
        ))
    }

    /// Viewport position of the content's top-left corner.
    ///
    /// This is the centering inset for content smaller than the viewport,
    /// minus the scroll offset.
    #[must_use]
    pub fn content_origin(&self) -> Option<Point> {
        let surface = self.surface?;
        let zoom = self.state.zoom;
        let (x, y) = self.axes(surface, self.state.rotation);
        Some(Point::new(
            x.inset(zoom) - f64::from(self.state.scroll_x),
            y.inset(zoom) - f64::from(self.state.scroll_y),
        ))
    }

    /// Image-pixel to viewport transform: rotate about the image center,
    /// scale, then translate into place.
    #[must_use]
    pub fn transform(&self) -> Option<Affine> {
        let surface = self.surface?;
        let content = self.content_size()?;
        let origin = self.content_origin()?;
        let image_center = surface.size().to_vec2() * 0.5;
        let content_center = content.to_vec2() * 0.5;
        Some(
            Affine::translate(origin.to_vec2() + content_center)
                * self.state.rotation.scaled(self.state.zoom)
                * Affine::translate(-image_center),
        )
    }

    /// Filtering the host should paint with right now.
    #[must_use]
    pub fn render_quality(&self) -> RenderQuality {
        self.quality.quality()
    }

    /// Time (per the view's clock) at which [`poll`](Self::poll) will next
    /// have work to do, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.quality.deadline()
    }

    /// Advances the render-quality hint.
    ///
    /// Once the settle delay has passed since the last transform change, this
    /// switches to [`RenderQuality::HighQuality`], emits one
    /// [`ViewEvent::RedrawRequested`] and returns `true`.
    pub fn poll(&mut self) -> bool {
        if !self.quality.poll(self.clock.now()) {
            return false;
        }
        trace!("image view: settled, requesting high-quality redraw");
        self.emit(ViewEvent::RedrawRequested {
            quality: RenderQuality::HighQuality,
        });
        true
    }

    /// Registers `listener` for [`ViewEvent`]s.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ViewEvent) + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ImageViewDebugInfo {
        ImageViewDebugInfo {
            surface: self.surface,
            viewport: self.viewport,
            state: self.state,
            fit_to_view: self.auto_fit,
            zoom_anchor: self.gestures.pinch(),
            render_quality: self.quality.quality(),
            settle_deadline: self.quality.deadline(),
            listeners: self.listeners.len(),
        }
    }

    fn axes(&self, surface: ImageSurface, rotation: Rotation) -> (Axis, Axis) {
        let extent = rotation.apply_to_size(surface.size());
        (
            Axis {
                viewport: self.viewport.width,
                extent: extent.width,
            },
            Axis {
                viewport: self.viewport.height,
                extent: extent.height,
            },
        )
    }

    fn refit(&mut self) {
        if let Some(fit) = self.fit_zoom() {
            self.apply_zoom(fit);
        }
    }

    fn apply_zoom(&mut self, zoom: f64) {
        let Some(surface) = self.surface else {
            return;
        };
        let from = self.state.zoom;
        let to = self.config.clamp_zoom(zoom);
        let anchor = match self.gestures.pinch() {
            // Anchoring is only reliable on an upright image.
            Some(anchor) if self.state.rotation == Rotation::Deg0 => anchor,
            _ => ZoomAnchor::centered(from),
        };
        let (x, y) = self.axes(surface, self.state.rotation);
        let sx = x.anchored_scroll(
            f64::from(self.state.scroll_x),
            from,
            to,
            anchor.fraction.x,
        );
        let sy = y.anchored_scroll(
            f64::from(self.state.scroll_y),
            from,
            to,
            anchor.fraction.y,
        );
        self.state.zoom = to;
        self.state.scroll_x = to_pixels(sx);
        self.state.scroll_y = to_pixels(sy);
        trace!(
            "image view: zoom {from} -> {to}, scroll ({}, {})",
            self.state.scroll_x, self.state.scroll_y
        );
        self.emit(ViewEvent::ZoomChanged { zoom: to });
        self.note_change();
    }

    /// Re-clamps scroll to the current geometry. Returns `true` if it moved.
    fn clamp_scroll(&mut self) -> bool {
        let Some(surface) = self.surface else {
            return false;
        };
        let zoom = self.state.zoom;
        let (x, y) = self.axes(surface, self.state.rotation);
        let sx = to_pixels(x.clamp_scroll(f64::from(self.state.scroll_x), zoom));
        let sy = to_pixels(y.clamp_scroll(f64::from(self.state.scroll_y), zoom));
        let moved = (sx, sy) != (self.state.scroll_x, self.state.scroll_y);
        self.state.scroll_x = sx;
        self.state.scroll_y = sy;
        moved
    }

    fn note_change(&mut self) {
        let now = self.clock.now();
        self.quality.note_change(now);
    }

    fn emit(&mut self, event: ViewEvent) {
        self.listeners.emit(&event);
    }
}

/// Debug snapshot of an [`ImageView`] state.
#[derive(Clone, Copy, Debug)]
pub struct ImageViewDebugInfo {
    /// Loaded image, if any.
    pub surface: Option<ImageSurface>,
    /// Viewport size.
    pub viewport: Size,
    /// Zoom, rotation and scroll (meaningful only with a surface).
    pub state: TransformState,
    /// Whether the zoom follows fit-to-view.
    pub fit_to_view: bool,
    /// Active pinch anchor.
    pub zoom_anchor: Option<ZoomAnchor>,
    /// Current render-quality hint.
    pub render_quality: RenderQuality,
    /// Pending settle deadline.
    pub settle_deadline: Option<Duration>,
    /// Number of registered listeners.
    pub listeners: usize,
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use core::time::Duration;

    use kurbo::{Point, Size, Vec2};
    use understory_timing::ManualClock;

    use super::ImageView;
    use crate::{ImageSurface, RenderQuality, Rotation, ViewConfig, ViewEvent};

    fn view_with(surface: (u32, u32), viewport: (f64, f64)) -> ImageView<ManualClock> {
        let mut view = ImageView::new(ManualClock::new());
        view.set_viewport(Size::new(viewport.0, viewport.1));
        view.set_surface(ImageSurface::new(surface.0, surface.1));
        view
    }

    fn record(view: &mut ImageView<ManualClock>) -> Rc<RefCell<Vec<ViewEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        view.subscribe(move |e| sink.borrow_mut().push(*e));
        events
    }

    #[test]
    fn loading_fits_large_images_and_keeps_small_ones_at_one() {
        let view = view_with((2000, 1500), (800.0, 600.0));
        assert_eq!(view.zoom(), 0.4);
        assert!(view.is_fit_to_view());

        let view = view_with((200, 100), (800.0, 600.0));
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.content_origin(), Some(Point::new(300.0, 250.0)));
    }

    #[test]
    fn fit_to_view_follows_viewport_until_explicit_zoom() {
        let mut view = view_with((2000, 1500), (800.0, 600.0));
        view.set_viewport(Size::new(400.0, 300.0));
        assert_eq!(view.zoom(), 0.2);

        view.set_zoom(0.5);
        assert!(!view.is_fit_to_view());
        view.set_viewport(Size::new(800.0, 600.0));
        assert_eq!(view.zoom(), 0.5);

        view.zoom_to_fit();
        assert_eq!(view.zoom(), 0.4);
        assert!(view.is_fit_to_view());
    }

    #[test]
    fn growing_viewport_reclamps_scroll_without_refitting() {
        let clock = ManualClock::new();
        let mut view = ImageView::new(clock.clone());
        view.set_viewport(Size::new(800.0, 600.0));
        view.set_surface(ImageSurface::new(2000, 1500));
        view.set_zoom(1.0);
        view.pan_by(Vec2::new(10_000.0, 10_000.0));
        let state = view.state().unwrap();
        assert_eq!((state.scroll_x, state.scroll_y), (1200, 900));

        clock.advance(Duration::from_millis(1000));
        assert!(view.poll());
        assert_eq!(view.next_deadline(), None);

        view.set_viewport(Size::new(1900.0, 1400.0));
        assert_eq!(view.zoom(), 1.0);
        let state = view.state().unwrap();
        assert_eq!((state.scroll_x, state.scroll_y), (100, 100));
        assert_eq!(view.render_quality(), RenderQuality::Fast);
        assert_eq!(view.next_deadline(), Some(Duration::from_millis(1200)));

        // Content now fits entirely: scroll collapses to zero.
        view.set_viewport(Size::new(2100.0, 1600.0));
        let state = view.state().unwrap();
        assert_eq!((state.scroll_x, state.scroll_y), (0, 0));
        assert_eq!(view.zoom(), 1.0);
    }

    #[test]
    fn zoom_changed_fires_even_when_clamped_value_is_unchanged() {
        let mut view = view_with((2000, 1500), (800.0, 600.0));
        let events = record(&mut view);
        view.set_zoom(100.0);
        view.set_zoom(100.0);
        assert_eq!(view.zoom(), 4.0);
        assert_eq!(
            *events.borrow(),
            [
                ViewEvent::ZoomChanged { zoom: 4.0 },
                ViewEvent::ZoomChanged { zoom: 4.0 },
            ]
        );
    }

    #[test]
    fn zoom_steps_report_remaining_headroom() {
        let config = ViewConfig::default()
            .with_zoom_limits(0.5, 1.0)
            .with_zoom_step(0.25);
        let mut view = ImageView::with_config(ManualClock::new(), config);
        view.set_viewport(Size::new(100.0, 100.0));
        view.set_surface(ImageSurface::new(100, 100));
        assert_eq!(view.zoom(), 1.0);

        assert!(view.zoom_out());
        assert_eq!(view.zoom(), 0.75);
        assert!(!view.zoom_out());
        assert_eq!(view.zoom(), 0.5);
        assert!(view.zoom_in());
        assert!(!view.zoom_in());
        assert_eq!(view.zoom(), 1.0);
    }

    #[test]
    fn zoom_to_original_shows_one_to_one() {
        let mut view = view_with((2000, 1500), (800.0, 600.0));
        view.zoom_to_original();
        assert_eq!(view.zoom(), 1.0);
        // Center-anchored: the image center stays in the middle.
        let state = view.state().unwrap();
        assert_eq!((state.scroll_x, state.scroll_y), (600, 450));
    }

    #[test]
    fn pinch_keeps_anchor_stationary() {
        let mut view = view_with((2000, 1500), (800.0, 600.0));
        // Pinch around the top-left quarter point.
        view.begin_pinch(Point::new(200.0, 150.0));
        let anchor = view.zoom_anchor().unwrap();
        assert_eq!(anchor.fraction, Vec2::new(0.25, 0.25));
        assert_eq!(anchor.start_zoom, 0.4);

        view.update_pinch(2.0);
        assert_eq!(view.zoom(), 0.8);
        let state = view.state().unwrap();
        // Image point (500, 375) was under the anchor and still is.
        assert_eq!((state.scroll_x, state.scroll_y), (200, 150));

        view.end_pinch();
        assert!(view.zoom_anchor().is_none());
    }

    #[test]
    fn pinch_anchor_is_ignored_while_rotated() {
        let mut view = view_with((2000, 1500), (800.0, 600.0));
        view.set_angle(180.0);
        view.begin_pinch(Point::new(0.0, 0.0));
        view.update_pinch(2.0);
        let state = view.state().unwrap();
        // Center anchoring instead of the top-left corner.
        assert_eq!((state.scroll_x, state.scroll_y), (400, 300));
    }

    #[test]
    fn rotation_keeps_center_and_swaps_extent() {
        let mut view = view_with((2000, 1000), (800.0, 600.0));
        view.set_zoom(1.0);
        let events = record(&mut view);

        view.rotate_clockwise();
        assert_eq!(view.rotation(), Rotation::Deg90);
        assert_eq!(view.content_size(), Some(Size::new(1000.0, 2000.0)));
        let state = view.state().unwrap();
        // Image center stays at the viewport center.
        assert_eq!((state.scroll_x, state.scroll_y), (100, 700));
        assert!(view.is_fit_to_view());
        assert_eq!(
            *events.borrow(),
            [ViewEvent::AngleChanged {
                rotation: Rotation::Deg90
            }]
        );

        view.rotate_counter_clockwise();
        view.rotate_counter_clockwise();
        assert_eq!(view.rotation(), Rotation::Deg270);
    }

    #[test]
    fn rotate_gesture_is_relative_to_start() {
        let mut view = view_with((100, 100), (800.0, 600.0));
        view.set_angle(90.0);
        view.begin_rotate();
        view.update_rotate(50.0);
        assert_eq!(view.rotation(), Rotation::Deg180);
        view.update_rotate(-100.0);
        assert_eq!(view.rotation(), Rotation::Deg0);
        view.end_rotate();
        view.update_rotate(90.0);
        assert_eq!(view.rotation(), Rotation::Deg0);
    }

    #[test]
    fn pan_is_clamped_to_content() {
        let mut view = view_with((2000, 1500), (800.0, 600.0));
        view.set_zoom(1.0);
        view.pan_by(Vec2::new(-5000.0, 10_000.0));
        let state = view.state().unwrap();
        assert_eq!((state.scroll_x, state.scroll_y), (0, 900));
    }

    #[test]
    fn transform_maps_image_corners() {
        let mut view = view_with((100, 50), (800.0, 600.0));
        // Content is centered: 100x50 at (350, 275).
        let t = view.transform().unwrap();
        assert_eq!(t * Point::new(0.0, 0.0), Point::new(350.0, 275.0));
        assert_eq!(t * Point::new(100.0, 50.0), Point::new(450.0, 325.0));

        // A quarter turn clockwise: 50x100 content at (375, 250), and the
        // image's top-left corner lands on the content's top-right corner.
        view.set_angle(90.0);
        let t = view.transform().unwrap();
        assert_eq!(t * Point::new(0.0, 0.0), Point::new(425.0, 250.0));
        assert_eq!(t * Point::new(100.0, 50.0), Point::new(375.0, 350.0));
    }

    #[test]
    fn restore_applies_remembered_state() {
        let mut saved_view = view_with((2000, 1500), (800.0, 600.0));
        saved_view.set_angle(270.0);
        saved_view.set_zoom(1.0);
        saved_view.scroll_to(Vec2::new(10.0, 20.0));
        let saved = saved_view.state().unwrap();

        let mut view = view_with((2000, 1500), (800.0, 600.0));
        view.restore(&saved);
        assert_eq!(view.state(), Some(saved));
    }

    #[test]
    fn quality_drops_to_fast_and_settles_once() {
        let clock = ManualClock::new();
        let mut view = ImageView::new(clock.clone());
        assert_eq!(view.render_quality(), RenderQuality::HighQuality);
        view.set_viewport(Size::new(800.0, 600.0));
        view.set_surface(ImageSurface::new(2000, 1500));
        let events = record(&mut view);

        assert_eq!(view.render_quality(), RenderQuality::Fast);
        assert_eq!(view.next_deadline(), Some(Duration::from_millis(200)));
        clock.advance(Duration::from_millis(200));
        assert!(view.poll());
        assert!(!view.poll());
        assert_eq!(view.render_quality(), RenderQuality::HighQuality);
        assert_eq!(
            *events.borrow(),
            [ViewEvent::RedrawRequested {
                quality: RenderQuality::HighQuality
            }]
        );
    }

    #[test]
    fn requests_without_surface_are_ignored() {
        let mut view = ImageView::new(ManualClock::new());
        let events = record(&mut view);
        view.set_viewport(Size::new(800.0, 600.0));
        view.set_zoom(2.0);
        view.set_angle(90.0);
        assert!(!view.zoom_in());
        assert!(!view.zoom_out());
        view.zoom_to_fit();
        view.pan_by(Vec2::new(10.0, 10.0));
        view.begin_pinch(Point::new(1.0, 1.0));
        view.update_pinch(2.0);

        assert!(view.state().is_none());
        assert!(view.transform().is_none());
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.rotation(), Rotation::Deg0);
        assert!(view.zoom_anchor().is_none());
        assert_eq!(view.next_deadline(), None);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn config_change_reclamps_zoom() {
        let mut view = view_with((2000, 1500), (800.0, 600.0));
        view.set_zoom(3.0);
        view.set_config(ViewConfig::default().with_zoom_limits(0.1, 2.0));
        assert_eq!(view.zoom(), 2.0);
        let info = view.debug_info();
        assert_eq!(info.state.zoom, 2.0);
        assert!(!info.fit_to_view);
    }

    #[test]
    fn unsubscribed_listeners_stop_receiving() {
        let mut view = view_with((10, 10), (100.0, 100.0));
        let events = Rc::new(RefCell::new(0_u32));
        let sink = events.clone();
        let id = view.subscribe(move |_| *sink.borrow_mut() += 1);
        view.set_zoom(2.0);
        assert!(view.unsubscribe(id));
        view.set_zoom(3.0);
        assert_eq!(*events.borrow(), 1);
        assert_eq!(view.debug_info().listeners, 0);
    }
}

// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use zoomview_geometry::{
    Axis, ImageToScreen, MirrorFlags, NormalizedPoint, NormalizedRect, ScreenRect, ViewGeometry,
};

use crate::config::ViewConfig;
use crate::log::{debug, warn};

/// Zoom, rotation and mirror state of the main image view.
///
/// `ViewportState` owns the zoom area (the visible part of the image in
/// normalized coordinates), the rotation and mirror flags, and the on-screen
/// rectangle of the displayed image. From these it derives exactly one
/// forward [`ImageToScreen`] transform.
///
/// Whenever any input changes, the transform is rebuilt from scratch and the
/// [revision](Self::revision) is bumped; it is never patched incrementally.
/// Until an image rectangle is known (the image has not loaded yet) there is
/// no transform and [`ViewportState::transform`] returns `None`.
///
/// All operations are infallible: out-of-range requests are clamped into the
/// full image, and meaningless input (NaN, non-positive factors) is ignored.
#[derive(Clone, Debug)]
pub struct ViewportState {
    config: ViewConfig,
    zoom_area: NormalizedRect,
    rotation: f64,
    mirror: MirrorFlags,
    image_rect: Option<ScreenRect>,
    transform: Option<ImageToScreen>,
    revision: u64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl ViewportState {
    /// Creates an unzoomed, unrotated, unmirrored view with no image yet.
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            zoom_area: NormalizedRect::FULL_AREA,
            rotation: 0.0,
            mirror: MirrorFlags::empty(),
            image_rect: None,
            transform: None,
            revision: 0,
        }
    }

    /// The configuration this view was created with.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The visible part of the image, in normalized coordinates.
    #[must_use]
    pub fn zoom_area(&self) -> NormalizedRect {
        self.zoom_area
    }

    /// Clockwise rotation in degrees, in `[0, 360)`.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Current mirror flags.
    #[must_use]
    pub fn mirror(&self) -> MirrorFlags {
        self.mirror
    }

    /// Returns `true` if the view is mirrored along `axis`.
    #[must_use]
    pub fn is_mirrored(&self, axis: Axis) -> bool {
        self.mirror.contains(MirrorFlags::for_axis(axis))
    }

    /// On-screen rectangle of the displayed image, once known.
    #[must_use]
    pub fn image_rect(&self) -> Option<ScreenRect> {
        self.image_rect
    }

    /// The current forward transform, or `None` before the image is laid out.
    #[must_use]
    pub fn transform(&self) -> Option<&ImageToScreen> {
        self.transform.as_ref()
    }

    /// Returns `true` once a transform is available.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.transform.is_some()
    }

    /// Incremented on every recompute; overlays compare it to know when to
    /// re-project.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All transform inputs, or `None` before the image is laid out.
    #[must_use]
    pub fn geometry(&self) -> Option<ViewGeometry> {
        self.image_rect.map(|screen| {
            ViewGeometry::new(self.zoom_area, screen)
                .with_rotation(self.rotation)
                .with_mirror(self.mirror)
        })
    }

    /// Records where the image element now sits on screen.
    ///
    /// This is the image-load hook: the replacement image for a new zoom area
    /// only reports its size once loaded, so projections stay stale until
    /// this is called and are then recomputed.
    pub fn set_image_rect(&mut self, rect: ScreenRect) {
        if self.image_rect == Some(rect) {
            return;
        }
        self.image_rect = Some(rect);
        self.recompute();
    }

    /// Forgets the image rectangle; projections are disabled until the next
    /// [`ViewportState::set_image_rect`].
    pub fn clear_image_rect(&mut self) {
        if self.image_rect.take().is_some() {
            self.recompute();
        }
    }

    /// Zooms around the center of the zoom area.
    ///
    /// The area shrinks by `1 / factor`, so `factor > 1` zooms in. The result
    /// is fit into the full image. Non-positive or non-finite factors are
    /// ignored.
    pub fn zoom_by(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            warn!(factor, "ignoring invalid zoom factor");
            return;
        }
        let area = self.zoom_area.scaled_about_center(1.0 / factor);
        self.commit_zoom_area(area);
    }

    /// Zooms in by the configured factor.
    pub fn zoom_in(&mut self) {
        self.zoom_by(self.config.zoom_in_factor());
    }

    /// Zooms out by the configured factor.
    pub fn zoom_out(&mut self) {
        self.zoom_by(self.config.zoom_out_factor());
    }

    /// Replaces the zoom area; the rectangle is fit into the full image.
    pub fn zoom_to_rect(&mut self, area: NormalizedRect) {
        if !area.is_finite() {
            warn!(?area, "ignoring non-finite zoom area");
            return;
        }
        self.commit_zoom_area(area);
    }

    /// Zooms to the image region under a screen rectangle, such as a
    /// rubber band drawn by the user.
    ///
    /// Returns the committed zoom area, or `None` if there is no transform yet.
    pub fn zoom_to_screen_rect(&mut self, rect: ScreenRect) -> Option<NormalizedRect> {
        let area = self.transform.as_ref()?.invtransform_rect(&rect);
        self.zoom_to_rect(area);
        Some(self.zoom_area)
    }

    /// Shows the whole image again.
    pub fn reset_zoom(&mut self) {
        self.commit_zoom_area(NormalizedRect::FULL_AREA);
    }

    /// Moves the zoom area (keeping its size) so that it is centered on
    /// `center`, as far as the image bounds allow.
    pub fn center_on(&mut self, center: NormalizedPoint) {
        if !center.is_finite() {
            return;
        }
        let area = self.zoom_area.with_center(center);
        self.commit_zoom_area(area);
    }

    /// Moves the zoom area by a screen-space distance.
    ///
    /// The delta is mapped through the inverse of the transform's linear
    /// part, so it follows rotation and mirroring. A positive delta moves the
    /// window right/down over the image (the content appears to move the
    /// other way). Without a transform this is a no-op.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        let Some(trafo) = self.transform.as_ref() else {
            return;
        };
        let offset = trafo.invtransform_vector(delta);
        let area = self.zoom_area.translate(offset);
        self.commit_zoom_area(area);
    }

    /// Sets the clockwise rotation in degrees; the value is normalized into
    /// `[0, 360)`.
    pub fn set_rotation(&mut self, degrees: f64) {
        if !degrees.is_finite() {
            warn!(degrees, "ignoring non-finite rotation");
            return;
        }
        let mut rotation = degrees % 360.0;
        if rotation < 0.0 {
            rotation += 360.0;
        }
        if rotation >= 360.0 {
            rotation = 0.0;
        }
        if rotation == self.rotation {
            return;
        }
        self.rotation = rotation;
        self.recompute();
    }

    /// Turns mirroring along `axis` on or off.
    pub fn set_mirror(&mut self, axis: Axis, enabled: bool) {
        let mut mirror = self.mirror;
        mirror.set(MirrorFlags::for_axis(axis), enabled);
        if mirror == self.mirror {
            return;
        }
        self.mirror = mirror;
        self.recompute();
    }

    /// Flips mirroring along `axis`.
    pub fn toggle_mirror(&mut self, axis: Axis) {
        self.set_mirror(axis, !self.is_mirrored(axis));
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            zoom_area: self.zoom_area,
            rotation: self.rotation,
            mirror: self.mirror,
            image_rect: self.image_rect,
            visible_rect: self
                .transform
                .as_ref()
                .map(|t| t.transform_rect(&self.zoom_area)),
            min_extent: self.config.min_extent(),
            revision: self.revision,
        }
    }

    /// Clamps `area` to the minimum extent and fits it into the full image,
    /// then stores it and recomputes if it changed.
    fn commit_zoom_area(&mut self, area: NormalizedRect) {
        let min = self.config.min_extent();
        let area = if area.width < min || area.height < min {
            NormalizedRect::new(0.0, 0.0, area.width.max(min), area.height.max(min))
                .with_center(area.center())
        } else {
            area
        };
        let area = area.fit(&NormalizedRect::FULL_AREA);
        if area == self.zoom_area {
            return;
        }
        debug!(?area, "committing zoom area");
        self.zoom_area = area;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.transform = self.geometry().and_then(|geometry| {
            geometry
                .image_to_screen()
                .map_err(|err| {
                    warn!(error = %err, ?geometry, "view transform unavailable");
                    err
                })
                .ok()
        });
        debug!(
            revision = self.revision,
            ready = self.transform.is_some(),
            "recomputed view transform"
        );
    }
}

/// Debug snapshot of a [`ViewportState`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Visible part of the image in normalized coordinates.
    pub zoom_area: NormalizedRect,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    /// Mirror flags.
    pub mirror: MirrorFlags,
    /// On-screen image rectangle, if known.
    pub image_rect: Option<ScreenRect>,
    /// Screen-space bounding box of the zoom area, if a transform exists.
    pub visible_rect: Option<ScreenRect>,
    /// Minimum zoom-area extent.
    pub min_extent: f64,
    /// Recompute counter.
    pub revision: u64,
}

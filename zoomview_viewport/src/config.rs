// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Tunables for a [`crate::ViewportState`].
///
/// Built with [`ViewConfig::default`] and adjusted through the `with_*`
/// methods. Out-of-range values passed to a builder are ignored and the
/// previous value is kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    min_extent: f64,
    click_threshold: f64,
    zoom_in_factor: f64,
    zoom_out_factor: f64,
    bird_max: Size,
}

impl Default for ViewConfig {
    /// - Minimum zoom-area extent `1e-4` (a 10 000× zoom).
    /// - Click threshold `5.0` pixels.
    /// - Zoom factors `1.4` (in) and `0.7` (out).
    /// - Bird's-eye image at most `200 × 200` pixels.
    fn default() -> Self {
        Self {
            min_extent: 1e-4,
            click_threshold: 5.0,
            zoom_in_factor: 1.4,
            zoom_out_factor: 0.7,
            bird_max: Size::new(200.0, 200.0),
        }
    }
}

impl ViewConfig {
    /// Smallest width or height a zoom area may shrink to, in normalized units.
    #[must_use]
    pub const fn min_extent(&self) -> f64 {
        self.min_extent
    }

    /// Pointer travel, in pixels, below which a drag counts as a click.
    #[must_use]
    pub const fn click_threshold(&self) -> f64 {
        self.click_threshold
    }

    /// Factor used by [`crate::ViewportState::zoom_in`].
    #[must_use]
    pub const fn zoom_in_factor(&self) -> f64 {
        self.zoom_in_factor
    }

    /// Factor used by [`crate::ViewportState::zoom_out`].
    #[must_use]
    pub const fn zoom_out_factor(&self) -> f64 {
        self.zoom_out_factor
    }

    /// Bounding box for the bird's-eye image.
    #[must_use]
    pub const fn bird_max(&self) -> Size {
        self.bird_max
    }

    /// Sets the minimum zoom-area extent; must lie in `(0, 1]`.
    #[must_use]
    pub fn with_min_extent(mut self, extent: f64) -> Self {
        if extent > 0.0 && extent <= 1.0 {
            self.min_extent = extent;
        }
        self
    }

    /// Sets the click threshold; must be finite and non-negative.
    #[must_use]
    pub fn with_click_threshold(mut self, pixels: f64) -> Self {
        if pixels.is_finite() && pixels >= 0.0 {
            self.click_threshold = pixels;
        }
        self
    }

    /// Sets the zoom-in and zoom-out factors; both must be finite and positive.
    #[must_use]
    pub fn with_zoom_factors(mut self, zoom_in: f64, zoom_out: f64) -> Self {
        if is_positive(zoom_in) && is_positive(zoom_out) {
            self.zoom_in_factor = zoom_in;
            self.zoom_out_factor = zoom_out;
        }
        self
    }

    /// Sets the bird's-eye bounding box; both sides must be positive.
    #[must_use]
    pub fn with_bird_max(mut self, size: Size) -> Self {
        if is_positive(size.width) && is_positive(size.height) {
            self.bird_max = size;
        }
        self
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

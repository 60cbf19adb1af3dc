// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use zoomview_geometry::{
    ImageToScreen, NormalizedPoint, NormalizedRect, ScreenPoint, ScreenRect, ViewGeometry,
};

use crate::config::ViewConfig;
use crate::log::warn;

/// The bird's-eye overview: a small, always unzoomed copy of the image with a
/// frame marking the main view's zoom area.
///
/// It keeps its own transform, built like the main one but with the full
/// area as the zoom area and the overview image's rectangle as the screen.
/// The overview image is never rotated or mirrored, so neither is this
/// transform.
#[derive(Clone, Debug, Default)]
pub struct BirdsEye {
    image_rect: Option<ScreenRect>,
    transform: Option<ImageToScreen>,
}

impl BirdsEye {
    /// Creates an overview whose image is not laid out yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest size with the image's aspect ratio (`width / height`) that
    /// fits into the configured [`ViewConfig::bird_max`] box.
    ///
    /// Falls back to the box itself for a non-positive or non-finite aspect.
    #[must_use]
    pub fn fit_size(config: &ViewConfig, aspect: f64) -> Size {
        let max = config.bird_max();
        if !aspect.is_finite() || aspect <= 0.0 {
            return max;
        }
        if max.width / max.height > aspect {
            Size::new(max.height * aspect, max.height)
        } else {
            Size::new(max.width, max.width / aspect)
        }
    }

    /// On-screen rectangle of the overview image, once known.
    #[must_use]
    pub fn image_rect(&self) -> Option<ScreenRect> {
        self.image_rect
    }

    /// The overview transform, if the overview image is laid out.
    #[must_use]
    pub fn transform(&self) -> Option<&ImageToScreen> {
        self.transform.as_ref()
    }

    /// Returns `true` once the overview has a transform.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.transform.is_some()
    }

    /// Records where the overview image sits on screen and rebuilds the
    /// transform.
    pub fn set_image_rect(&mut self, rect: ScreenRect) {
        if self.image_rect == Some(rect) {
            return;
        }
        self.image_rect = Some(rect);
        self.transform = ViewGeometry::new(NormalizedRect::FULL_AREA, rect)
            .image_to_screen()
            .map_err(|err| {
                warn!(error = %err, ?rect, "bird's-eye transform unavailable");
                err
            })
            .ok();
    }

    /// Forgets the overview image rectangle.
    pub fn clear_image_rect(&mut self) {
        self.image_rect = None;
        self.transform = None;
    }

    /// The indicator frame for `zoom_area`, in overview pixels.
    #[must_use]
    pub fn indicator(&self, zoom_area: &NormalizedRect) -> Option<ScreenRect> {
        Some(self.transform.as_ref()?.transform_rect(zoom_area))
    }

    /// The zoom area matching a (dragged) indicator frame.
    ///
    /// The frame is moved back inside the image without resizing it.
    #[must_use]
    pub fn zoom_area_for_indicator(&self, indicator: &ScreenRect) -> Option<NormalizedRect> {
        let area = self.transform.as_ref()?.invtransform_rect(indicator);
        Some(area.stay_inside(&NormalizedRect::FULL_AREA))
    }

    /// Maps an overview pixel to normalized image coordinates.
    #[must_use]
    pub fn point_to_image(&self, pt: ScreenPoint) -> Option<NormalizedPoint> {
        Some(self.transform.as_ref()?.invtransform_point(pt))
    }
}

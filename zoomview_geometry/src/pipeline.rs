// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::error::GeometryError;
use crate::modes::{Axis, MirrorFlags};
use crate::rectangle::{NormalizedRect, Rectangle, ScreenRect};
use crate::space::Space;
use crate::transform::{AffineTransform, ImageToScreen};

/// Everything the image-to-screen transform depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewGeometry {
    /// Visible part of the image, in normalized image space.
    pub zoom_area: NormalizedRect,
    /// On-screen rectangle of the displayed image element.
    pub screen: ScreenRect,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    /// Mirror flags.
    pub mirror: MirrorFlags,
}

impl ViewGeometry {
    /// Unrotated, unmirrored geometry.
    #[must_use]
    pub fn new(zoom_area: NormalizedRect, screen: ScreenRect) -> Self {
        Self {
            zoom_area,
            screen,
            rotation: 0.0,
            mirror: MirrorFlags::empty(),
        }
    }

    /// Same geometry with a different rotation.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Same geometry with different mirror flags.
    #[must_use]
    pub fn with_mirror(mut self, mirror: MirrorFlags) -> Self {
        self.mirror = mirror;
        self
    }

    /// Builds the forward transform from scratch.
    ///
    /// The steps are always composed in this order:
    /// 1. translate by the negated zoom-area origin,
    /// 2. scale by the reciprocal zoom-area size,
    /// 3. if rotated or mirrored: move the center to the origin, mirror,
    ///    rotate, move back,
    /// 4. scale to the screen size,
    /// 5. translate to the screen origin.
    ///
    /// Rotation and mirroring therefore pivot on the center of the visible
    /// area, not on the image center.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateRect`] if the zoom area or the screen rect
    /// has no extent, [`GeometryError::NonFinite`] for NaN or infinite input.
    pub fn image_to_screen(&self) -> Result<ImageToScreen, GeometryError> {
        check_extent(&self.zoom_area)?;
        check_extent(&self.screen)?;
        if !self.rotation.is_finite() {
            return Err(GeometryError::NonFinite);
        }

        let area = &self.zoom_area;
        let mut trafo = AffineTransform::translation(-area.origin().to_point().to_vec2())
            .concat(AffineTransform::scale(Size::new(
                1.0 / area.width,
                1.0 / area.height,
            )));

        if self.rotation != 0.0 || !self.mirror.is_empty() {
            let half = Vec2::new(0.5, 0.5);
            trafo = trafo.concat(AffineTransform::translation(-half));
            if self.mirror.contains(MirrorFlags::HORIZONTAL) {
                trafo = trafo.concat(AffineTransform::mirror(Axis::X));
            }
            if self.mirror.contains(MirrorFlags::VERTICAL) {
                trafo = trafo.concat(AffineTransform::mirror(Axis::Y));
            }
            if self.rotation != 0.0 {
                trafo = trafo.concat(AffineTransform::rotation(self.rotation));
            }
            trafo = trafo.concat(AffineTransform::translation(half));
        }

        let trafo = trafo
            .concat(AffineTransform::scale_to(&self.screen))
            .concat(AffineTransform::translation_to(&self.screen));
        ImageToScreen::try_new(trafo)
    }
}

fn check_extent<S: Space>(rect: &Rectangle<S>) -> Result<(), GeometryError> {
    if !rect.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Err(GeometryError::DegenerateRect {
            width: rect.width,
            height: rect.height,
        });
    }
    Ok(())
}

// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::marker::PhantomData;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::error::GeometryError;
use crate::modes::Axis;
use crate::position::Position;
use crate::rectangle::Rectangle;
use crate::space::{Normalized, Screen, Space};

/// Determinants at or below this magnitude are treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// A 2×3 affine map built by composing primitive steps.
///
/// Composition is immutable: [`AffineTransform::concat`] returns a new
/// transform, so a base transform can be shared by several pipelines
/// without one of them disturbing the other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform(Affine);

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    /// The transform that maps every point to itself.
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    /// Wraps a Kurbo affine.
    #[must_use]
    pub const fn from_affine(affine: Affine) -> Self {
        Self(affine)
    }

    /// The underlying Kurbo affine.
    #[must_use]
    pub const fn to_affine(self) -> Affine {
        self.0
    }

    /// Translation by `offset`.
    #[must_use]
    pub fn translation(offset: Vec2) -> Self {
        Self(Affine::translate(offset))
    }

    /// Translation to the origin of `rect`.
    #[must_use]
    pub fn translation_to<S: Space>(rect: &Rectangle<S>) -> Self {
        Self::translation(rect.origin().to_point().to_vec2())
    }

    /// Non-uniform scale by `size.width` and `size.height`.
    #[must_use]
    pub fn scale(size: Size) -> Self {
        Self(Affine::scale_non_uniform(size.width, size.height))
    }

    /// Scale by the width and height of `rect`; its offset is ignored.
    #[must_use]
    pub fn scale_to<S: Space>(rect: &Rectangle<S>) -> Self {
        Self::scale(rect.size())
    }

    /// Rotation about the origin by `degrees`, clockwise on a y-down screen.
    #[must_use]
    pub fn rotation(degrees: f64) -> Self {
        Self(Affine::rotate(degrees.to_radians()))
    }

    /// Mirror about the given axis through the origin.
    #[must_use]
    pub fn mirror(axis: Axis) -> Self {
        match axis {
            Axis::X => Self(Affine::scale_non_uniform(-1.0, 1.0)),
            Axis::Y => Self(Affine::scale_non_uniform(1.0, -1.0)),
        }
    }

    /// Returns a transform that applies `self` first and `next` after it.
    #[must_use]
    pub fn concat(self, next: Self) -> Self {
        Self(next.0 * self.0)
    }

    /// Determinant of the linear part.
    #[must_use]
    pub fn determinant(self) -> f64 {
        self.0.determinant()
    }

    /// Returns `true` if all six coefficients are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.as_coeffs().iter().all(|c| c.is_finite())
    }

    /// The exact inverse.
    ///
    /// # Errors
    ///
    /// [`GeometryError::SingularTransform`] if the matrix cannot be inverted,
    /// which only happens when a zero-size rectangle went into it.
    pub fn inverse(self) -> Result<Self, GeometryError> {
        let determinant = self.determinant();
        if !self.is_finite() || !determinant.is_finite() || determinant.abs() <= SINGULAR_EPSILON {
            return Err(GeometryError::SingularTransform { determinant });
        }
        Ok(Self(self.0.inverse()))
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn apply_point(self, pt: Point) -> Point {
        self.0 * pt
    }

    /// Applies only the linear part (no translation) to a vector.
    #[must_use]
    pub fn apply_vector(self, v: Vec2) -> Vec2 {
        let [a, b, c, d, _, _] = self.0.as_coeffs();
        Vec2::new(a * v.x + c * v.y, b * v.x + d * v.y)
    }

    /// Transforms the four corners of `rect` and returns their axis-aligned
    /// bounding box.
    ///
    /// Without rotation this is exact; under rotation it is the smallest
    /// axis-aligned box around the rotated rectangle.
    #[must_use]
    pub fn apply_rect(self, rect: Rect) -> Rect {
        let q0 = self.0 * Point::new(rect.x0, rect.y0);
        let q1 = self.0 * Point::new(rect.x1, rect.y0);
        let q2 = self.0 * Point::new(rect.x0, rect.y1);
        let q3 = self.0 * Point::new(rect.x1, rect.y1);
        let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
        let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
        let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
        let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
        Rect::new(min_x, min_y, max_x, max_y)
    }
}

/// An invertible transform from space `Src` to space `Dst`.
///
/// The inverse is computed once, when the transform is built, so inverse
/// queries can never hit a singular matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpaceTransform<Src: Space, Dst: Space> {
    forward: AffineTransform,
    inverse: AffineTransform,
    spaces: PhantomData<(Src, Dst)>,
}

/// Forward transform from normalized image space to screen pixels.
pub type ImageToScreen = SpaceTransform<Normalized, Screen>;

impl<Src: Space, Dst: Space> SpaceTransform<Src, Dst> {
    /// Wraps `forward` after checking that it can be inverted.
    ///
    /// # Errors
    ///
    /// [`GeometryError::SingularTransform`] if `forward` has no inverse.
    pub fn try_new(forward: AffineTransform) -> Result<Self, GeometryError> {
        let inverse = forward.inverse()?;
        Ok(Self {
            forward,
            inverse,
            spaces: PhantomData,
        })
    }

    /// The forward (`Src` → `Dst`) transform.
    #[must_use]
    pub fn forward(&self) -> AffineTransform {
        self.forward
    }

    /// The inverse (`Dst` → `Src`) transform.
    #[must_use]
    pub fn inverse(&self) -> AffineTransform {
        self.inverse
    }

    /// Maps a point from `Src` to `Dst`.
    #[must_use]
    pub fn transform_point(&self, pt: Position<Src>) -> Position<Dst> {
        Position::from_point(self.forward.apply_point(pt.to_point()))
    }

    /// Maps a point from `Dst` back to `Src`.
    #[must_use]
    pub fn invtransform_point(&self, pt: Position<Dst>) -> Position<Src> {
        Position::from_point(self.inverse.apply_point(pt.to_point()))
    }

    /// Maps a rectangle from `Src` to `Dst` (bounding box under rotation).
    #[must_use]
    pub fn transform_rect(&self, rect: &Rectangle<Src>) -> Rectangle<Dst> {
        Rectangle::from_rect(self.forward.apply_rect(rect.to_rect()))
    }

    /// Maps a rectangle from `Dst` back to `Src` (bounding box under rotation).
    #[must_use]
    pub fn invtransform_rect(&self, rect: &Rectangle<Dst>) -> Rectangle<Src> {
        Rectangle::from_rect(self.inverse.apply_rect(rect.to_rect()))
    }

    /// Maps a displacement from `Src` to `Dst`, ignoring translation.
    #[must_use]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        self.forward.apply_vector(v)
    }

    /// Maps a displacement from `Dst` back to `Src`, ignoring translation.
    #[must_use]
    pub fn invtransform_vector(&self, v: Vec2) -> Vec2 {
        self.inverse.apply_vector(v)
    }
}

// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::marker::PhantomData;

use kurbo::{Rect, Size, Vec2};

use crate::position::Position;
use crate::space::{Normalized, Screen, Space};

/// Slack used when comparing rectangle edges.
const EDGE_EPSILON: f64 = 1e-9;

/// An axis-aligned box `(x, y, width, height)` tagged with its space.
///
/// Width and height are never negative: every constructor normalizes
/// corner order, so drag gestures in any direction yield the same box.
/// `Rectangle` is `Copy`; callers always work on their own value and never
/// on a shared instance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle<S: Space> {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent, `>= 0`.
    pub width: f64,
    /// Vertical extent, `>= 0`.
    pub height: f64,
    space: PhantomData<S>,
}

/// A rectangle in normalized image space.
pub type NormalizedRect = Rectangle<Normalized>;

/// A rectangle in screen (pixel) space.
pub type ScreenRect = Rectangle<Screen>;

impl Rectangle<Normalized> {
    /// The whole image, `(0, 0, 1, 1)`. As a zoom area it means "unzoomed".
    pub const FULL_AREA: Self = Self::raw(0.0, 0.0, 1.0, 1.0);

    /// Returns `true` if this is (within rounding) the full-area sentinel.
    #[must_use]
    pub fn is_full_area(&self) -> bool {
        self.x.abs() < EDGE_EPSILON
            && self.y.abs() < EDGE_EPSILON
            && (self.width - 1.0).abs() < EDGE_EPSILON
            && (self.height - 1.0).abs() < EDGE_EPSILON
    }
}

impl<S: Space> Rectangle<S> {
    const fn raw(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            space: PhantomData,
        }
    }

    /// Creates a rectangle, flipping negative sizes so that the result
    /// covers the same region with a non-negative width and height.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (x, width) = if width < 0.0 {
            (x + width, -width)
        } else {
            (x, width)
        };
        let (y, height) = if height < 0.0 {
            (y + height, -height)
        } else {
            (y, height)
        };
        Self::raw(x, y, width, height)
    }

    /// Creates the rectangle spanned by two arbitrary corner points.
    #[must_use]
    pub fn from_corners(p1: Position<S>, p2: Position<S>) -> Self {
        let x0 = p1.x.min(p2.x);
        let y0 = p1.y.min(p2.y);
        Self::raw(x0, y0, p1.x.max(p2.x) - x0, p1.y.max(p2.y) - y0)
    }

    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub fn from_origin_size(origin: Position<S>, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Tags an untyped Kurbo rectangle with this space.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::raw(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// Drops the space tag.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Position<S> {
        Position::new(self.x, self.y)
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn corner(&self) -> Position<S> {
        Position::new(self.x + self.width, self.y + self.height)
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Position<S> {
        Position::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Width and height.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns `true` if the rectangle covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.area() <= 0.0
    }

    /// Returns `true` if origin and size are all finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Inclusive containment test: points on any edge are inside.
    #[must_use]
    pub fn contains_point(&self, p: Position<S>) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }

    /// Returns `true` if `other` lies entirely inside `self`, allowing for
    /// rounding error on the edges.
    #[must_use]
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x - EDGE_EPSILON
            && other.y >= self.y - EDGE_EPSILON
            && other.x + other.width <= self.x + self.width + EDGE_EPSILON
            && other.y + other.height <= self.y + self.height + EDGE_EPSILON
    }

    /// Returns the part of `self` that lies inside `bounds`.
    ///
    /// When the two are disjoint the result has zero width and/or height and
    /// sits on the edge of `bounds` nearest to `self`.
    #[must_use]
    pub fn clip_to(&self, bounds: &Self) -> Self {
        let (bx1, by1) = (bounds.x + bounds.width, bounds.y + bounds.height);
        let x0 = self.x.max(bounds.x).min(bx1);
        let y0 = self.y.max(bounds.y).min(by1);
        let x1 = (self.x + self.width).max(bounds.x).min(bx1);
        let y1 = (self.y + self.height).max(bounds.y).min(by1);
        Self::raw(x0, y0, x1 - x0, y1 - y0)
    }

    /// Fits `self` into `max`.
    ///
    /// The size is first clamped so it does not exceed `max`, then the
    /// rectangle is moved the shortest distance that brings every edge inside
    /// `max`. An origin that is already valid is left untouched.
    #[must_use]
    pub fn fit(&self, max: &Self) -> Self {
        let width = self.width.min(max.width);
        let height = self.height.min(max.height);
        Self::raw(
            clamp_axis(self.x, width, max.x, max.width),
            clamp_axis(self.y, height, max.y, max.height),
            width,
            height,
        )
    }

    /// Moves `self` (without resizing) so that it lies inside `bounds`.
    ///
    /// On an axis where `self` is larger than `bounds` it is centered on
    /// `bounds` instead.
    #[must_use]
    pub fn stay_inside(&self, bounds: &Self) -> Self {
        let x = if self.width > bounds.width {
            bounds.x + (bounds.width - self.width) / 2.0
        } else {
            clamp_axis(self.x, self.width, bounds.x, bounds.width)
        };
        let y = if self.height > bounds.height {
            bounds.y + (bounds.height - self.height) / 2.0
        } else {
            clamp_axis(self.y, self.height, bounds.y, bounds.height)
        };
        Self::raw(x, y, self.width, self.height)
    }

    /// Same size, moved so that its center is `center`.
    #[must_use]
    pub fn with_center(&self, center: Position<S>) -> Self {
        Self::raw(
            center.x - self.width / 2.0,
            center.y - self.height / 2.0,
            self.width,
            self.height,
        )
    }

    /// Same size, moved by `delta`.
    #[must_use]
    pub fn translate(&self, delta: Vec2) -> Self {
        Self::raw(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Grows (`scale > 1`) or shrinks the rectangle around its own center.
    #[must_use]
    pub fn scaled_about_center(&self, scale: f64) -> Self {
        let center = self.center();
        Self::new(0.0, 0.0, self.width * scale, self.height * scale).with_center(center)
    }
}

impl ScreenRect {
    /// A square of side `size` centered on `center`, as used for edit handles.
    #[must_use]
    pub fn square_around(center: Position<Screen>, size: f64) -> Self {
        Self::new(0.0, 0.0, size, size).with_center(center)
    }
}

/// Moves the interval `[pos, pos + len]` into `[lo, lo + span]`, preferring
/// the lower edge when the interval does not fit.
fn clamp_axis(pos: f64, len: f64, lo: f64, span: f64) -> f64 {
    let hi = lo + span - len;
    if pos < lo {
        lo
    } else if pos > hi {
        hi.max(lo)
    } else {
        pos
    }
}

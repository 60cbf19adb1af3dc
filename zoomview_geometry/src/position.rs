// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::marker::PhantomData;
use core::ops::{Add, Sub};

use kurbo::{Point, Vec2};

use crate::rectangle::Rectangle;
use crate::space::{Normalized, Screen, Space};

/// An immutable 2D coordinate tagged with the space it lives in.
///
/// Arithmetic returns new values; there is no in-place mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position<S: Space> {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    space: PhantomData<S>,
}

/// A point in normalized image space.
pub type NormalizedPoint = Position<Normalized>;

/// A point in screen (pixel) space.
pub type ScreenPoint = Position<Screen>;

impl<S: Space> Position<S> {
    /// The origin of the space.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a position from two raw coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }

    /// Tags an untyped Kurbo point with this space.
    #[must_use]
    pub const fn from_point(pt: Point) -> Self {
        Self::new(pt.x, pt.y)
    }

    /// Drops the space tag.
    #[must_use]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Moves the position by a vector expressed in the same space.
    #[must_use]
    pub fn offset(self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }

    /// Returns the vector leading from `self` to `other`.
    #[must_use]
    pub fn delta_to(self, other: Self) -> Vec2 {
        other.to_point() - self.to_point()
    }

    /// Euclidean distance between two positions.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.to_point().distance(other.to_point())
    }

    /// Clamps the position into `bounds` (edges inclusive).
    #[must_use]
    pub fn clip_to(self, bounds: &Rectangle<S>) -> Self {
        let max = bounds.corner();
        Self::new(
            self.x.max(bounds.x).min(max.x),
            self.y.max(bounds.y).min(max.y),
        )
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<S: Space> Add for Position<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S: Space> Sub for Position<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<S: Space> From<(f64, f64)> for Position<S> {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gestures: press, move, release.
//!
//! ## Usage
//!
//! 1) Start with [`Gesture::begin`] on pointer press.
//! 2) On each move, call [`Gesture::update`] for the delta since the last
//!    move, and [`Gesture::preview_rect`] for rubber-band feedback.
//! 3) On release, [`Gesture::finish`] consumes the gesture and classifies it
//!    as a click or a drag. [`Gesture::cancel`] drops it without effect.
//!
//! Because `finish` and `cancel` take the gesture by value, a gesture can
//! end only once.
//!
//! ## Minimal example
//!
//! ```
//! use zoomview_geometry::{ScreenPoint, ScreenRect};
//! use zoomview_overlay::{Gesture, GestureEnd, GestureKind};
//!
//! let bounds = ScreenRect::new(0.0, 0.0, 100.0, 100.0);
//! let mut gesture = Gesture::begin(GestureKind::ZoomArea, ScreenPoint::new(10.0, 10.0), bounds);
//!
//! let delta = gesture.update(ScreenPoint::new(40.0, 30.0));
//! assert_eq!((delta.x, delta.y), (30.0, 20.0));
//!
//! // Released far enough from the start: a drag.
//! let end = gesture.finish(ScreenPoint::new(60.0, 50.0), 5.0);
//! assert!(matches!(end, GestureEnd::Drag { .. }));
//! ```

use kurbo::Vec2;
use zoomview_geometry::{ScreenPoint, ScreenRect};

use crate::shape::ShapeKind;

/// What a gesture does when it ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Rubber-band zoom on the main image.
    ZoomArea,
    /// Place a mark at the release point.
    Mark,
    /// Move the zoom area with the pointer.
    Pan,
    /// Drag or click the indicator in the bird's-eye view.
    BirdsEye,
    /// Draw a new shape of the given kind.
    DefineShape(ShapeKind),
}

impl GestureKind {
    /// Whether pointer positions are clamped into the gesture bounds.
    ///
    /// Rubber bands and marks must stay on the image. Pan and bird's-eye
    /// drags use the raw pointer offset and clamp the resulting zoom area
    /// instead.
    #[must_use]
    pub fn clips_to_bounds(self) -> bool {
        matches!(self, Self::ZoomArea | Self::Mark | Self::DefineShape(_))
    }
}

/// How a gesture ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEnd {
    /// Released within the click threshold of the press position.
    Click {
        /// Gesture kind.
        kind: GestureKind,
        /// Release position.
        position: ScreenPoint,
    },
    /// Released beyond the click threshold.
    Drag {
        /// Gesture kind.
        kind: GestureKind,
        /// Press position.
        start: ScreenPoint,
        /// Release position.
        end: ScreenPoint,
    },
}

/// An active pointer gesture.
#[derive(Debug)]
pub struct Gesture {
    kind: GestureKind,
    bounds: ScreenRect,
    start: ScreenPoint,
    last: ScreenPoint,
}

impl Gesture {
    /// Starts a gesture of `kind` at `position`.
    ///
    /// `bounds` is the on-screen rectangle the gesture operates on: the main
    /// image, or the overview image for [`GestureKind::BirdsEye`].
    #[must_use]
    pub fn begin(kind: GestureKind, position: ScreenPoint, bounds: ScreenRect) -> Self {
        let mut gesture = Self {
            kind,
            bounds,
            start: position,
            last: position,
        };
        gesture.start = gesture.constrain(position);
        gesture.last = gesture.start;
        gesture
    }

    /// Gesture kind.
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    /// Bounds given at the start.
    #[must_use]
    pub fn bounds(&self) -> ScreenRect {
        self.bounds
    }

    /// Press position.
    #[must_use]
    pub fn start(&self) -> ScreenPoint {
        self.start
    }

    /// Most recent pointer position.
    #[must_use]
    pub fn last(&self) -> ScreenPoint {
        self.last
    }

    /// Records a pointer move and returns the delta since the previous one.
    pub fn update(&mut self, position: ScreenPoint) -> Vec2 {
        let position = self.constrain(position);
        let delta = self.last.delta_to(position);
        self.last = position;
        delta
    }

    /// Offset from the press position to the most recent position.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.start.delta_to(self.last)
    }

    /// Rectangle spanned by the press position and the most recent position.
    #[must_use]
    pub fn preview_rect(&self) -> ScreenRect {
        ScreenRect::from_corners(self.start, self.last)
    }

    /// Ends the gesture at `position`.
    ///
    /// It is a click when the release is closer than `click_threshold`
    /// pixels to the press position.
    #[must_use]
    pub fn finish(self, position: ScreenPoint, click_threshold: f64) -> GestureEnd {
        let end = self.constrain(position);
        if self.start.distance(end) < click_threshold {
            GestureEnd::Click {
                kind: self.kind,
                position: end,
            }
        } else {
            GestureEnd::Drag {
                kind: self.kind,
                start: self.start,
                end,
            }
        }
    }

    /// Abandons the gesture.
    pub fn cancel(self) {}

    fn constrain(&self, position: ScreenPoint) -> ScreenPoint {
        if self.kind.clips_to_bounds() {
            position.clip_to(&self.bounds)
        } else {
            position
        }
    }
}

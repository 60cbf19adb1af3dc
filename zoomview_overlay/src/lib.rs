// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoomview_overlay --heading-base-level=0

//! Zoomview Overlay: marks, shapes and gestures on top of a zoomable image.
//!
//! Overlay data lives in normalized image coordinates and is projected into
//! screen pixels through the [`ViewportState`](zoomview_viewport::ViewportState)
//! transform whenever the view changes:
//! - [`MarkList`]: numbered marks, removed last-first; only marks inside the
//!   zoom area are projected.
//! - [`ShapeList`]: lines and rectangles keyed by [`ShapeId`], with per-shape
//!   style overrides and edit handles.
//! - The bird's-eye indicator, the zoom area drawn into the overview image.
//!
//! [`OverlayCoordinator`] owns all of this next to the viewport and turns
//! pointer [`Gesture`]s into state changes: rubber-band zoom, panning,
//! placing marks, drawing shapes and dragging the indicator. A release
//! closer than the configured click threshold counts as a click.
//!
//! ## Minimal example
//!
//! ```rust
//! use zoomview_geometry::{ScreenPoint, ScreenRect};
//! use zoomview_overlay::{GestureKind, GestureOutcome, OverlayCoordinator};
//!
//! let mut overlay = OverlayCoordinator::default();
//! overlay
//!     .viewport_mut()
//!     .set_image_rect(ScreenRect::new(0.0, 0.0, 800.0, 600.0));
//!
//! // Rubber-band zoom on the left half of the image.
//! let gesture = overlay
//!     .begin_gesture(GestureKind::ZoomArea, ScreenPoint::new(0.0, 0.0))
//!     .unwrap();
//! let outcome = overlay.end_gesture(gesture, ScreenPoint::new(400.0, 600.0));
//! let GestureOutcome::Zoomed(area) = outcome else {
//!     panic!("expected a zoom");
//! };
//! assert!((area.width - 0.5).abs() < 1e-9);
//!
//! // Marks are placed through the same transform.
//! let index = overlay.add_mark_at(ScreenPoint::new(400.0, 300.0)).unwrap();
//! let frame = overlay.frame().unwrap();
//! assert_eq!(frame.marks[0].label, index + 1);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `debug` events for added marks and finished gestures.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod coordinator;
pub mod gesture;
mod log;
mod marks;
mod shape;

pub use coordinator::{GestureOutcome, OverlayCoordinator, OverlayFrame};
pub use gesture::{Gesture, GestureEnd, GestureKind};
pub use marks::{MarkList, ProjectedMark};
pub use shape::{
    Primitive, ProjectedShape, Shape, ShapeGeometry, ShapeId, ShapeKind, ShapeList,
    ShapeProperties, ShapeStyle,
};

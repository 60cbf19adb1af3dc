// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoomview_geometry --heading-base-level=0

//! Zoomview Geometry: space-tagged points, rectangles and affine transforms.
//!
//! This crate holds the value types an image viewer needs to relate three
//! coordinate systems:
//! - **Normalized image space**: `[0, 1] × [0, 1]` over the whole source
//!   image, whatever its pixel size.
//! - The **zoom area**: the part of normalized space currently displayed.
//! - **Screen space**: pixel coordinates of the displayed image element.
//!
//! Points and rectangles carry their space in the type ([`NormalizedPoint`],
//! [`ScreenRect`], …), so a screen rectangle cannot be used as a zoom area by
//! accident. Every value is `Copy` and every operation returns a new value;
//! there is no shared mutable geometry.
//!
//! ## Building the view transform
//!
//! ```rust
//! use zoomview_geometry::{MirrorFlags, NormalizedPoint, NormalizedRect, ScreenRect, ViewGeometry};
//!
//! let geometry = ViewGeometry::new(
//!     NormalizedRect::FULL_AREA,
//!     ScreenRect::new(0.0, 0.0, 800.0, 600.0),
//! );
//! let trafo = geometry.image_to_screen().unwrap();
//!
//! let center = trafo.transform_point(NormalizedPoint::new(0.5, 0.5));
//! assert_eq!((center.x, center.y), (400.0, 300.0));
//!
//! // Screen clicks map back into the image.
//! let back = trafo.invtransform_point(center);
//! assert!((back.x - 0.5).abs() < 1e-12);
//!
//! // Mirroring pivots on the center of the visible area.
//! let mirrored = geometry
//!     .with_mirror(MirrorFlags::HORIZONTAL)
//!     .image_to_screen()
//!     .unwrap();
//! let p = mirrored.transform_point(NormalizedPoint::new(0.25, 0.5));
//! assert!((p.x - 600.0).abs() < 1e-9);
//! ```
//!
//! ## Rectangle policies
//!
//! - [`Rectangle::fit`] clamps the size to the bounds, then moves the
//!   rectangle the shortest distance inside, keeping a valid origin.
//! - [`Rectangle::stay_inside`] only moves, and centers on any axis where
//!   the rectangle is larger than the bounds.
//! - [`Rectangle::clip_to`] intersects; disjoint input collapses onto the
//!   nearest edge.
//!
//! This crate is `no_std`.

#![no_std]

mod crop;
mod error;
mod modes;
mod pipeline;
mod position;
mod rectangle;
mod space;
mod transform;

pub use crop::crop_float;
pub use error::GeometryError;
pub use modes::{Axis, MirrorFlags};
pub use pipeline::ViewGeometry;
pub use position::{NormalizedPoint, Position, ScreenPoint};
pub use rectangle::{NormalizedRect, Rectangle, ScreenRect};
pub use space::{Normalized, Screen, Space};
pub use transform::{AffineTransform, ImageToScreen, SpaceTransform};

pub use kurbo;

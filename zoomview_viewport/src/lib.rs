// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoomview_viewport --heading-base-level=0

//! Zoomview Viewport: the zoom/rotate/mirror state of an image view.
//!
//! [`ViewportState`] is the single owner of a view's geometric session
//! state:
//! - the **zoom area**, a [`NormalizedRect`](zoomview_geometry::NormalizedRect)
//!   inside the full image,
//! - the rotation angle and the mirror flags,
//! - the on-screen rectangle of the displayed image,
//!
//! and of the forward transform derived from them. Every change rebuilds the
//! transform from scratch. [`BirdsEye`] does the same for the overview image
//! and projects the main zoom area into it as an indicator frame.
//!
//! It does **not** own any rendering, layout or event plumbing. Callers are
//! expected to:
//! - Report the image rectangle with [`ViewportState::set_image_rect`] once
//!   the image has loaded.
//! - Use [`ViewportState::transform`] to position overlays.
//! - Persist and restore state through [`ViewParams`].
//!
//! ## Minimal example
//!
//! ```rust
//! use zoomview_geometry::{NormalizedPoint, NormalizedRect, ScreenRect};
//! use zoomview_viewport::ViewportState;
//!
//! let mut view = ViewportState::default();
//!
//! // Zoom commits work before the image has loaded...
//! view.zoom_by(2.0);
//! assert_eq!(view.zoom_area(), NormalizedRect::new(0.25, 0.25, 0.5, 0.5));
//! assert!(view.transform().is_none());
//!
//! // ...but projection needs the image rectangle.
//! view.set_image_rect(ScreenRect::new(0.0, 0.0, 800.0, 600.0));
//! let trafo = view.transform().unwrap();
//! let p = trafo.transform_point(NormalizedPoint::new(0.5, 0.5));
//! assert_eq!((p.x, p.y), (400.0, 300.0));
//! ```
//!
//! ## Persistence
//!
//! ```rust
//! use zoomview_viewport::{ViewParams, ViewportState};
//!
//! let mut view = ViewportState::default();
//! ViewParams::parse("wx=0.5&wy=0&ww=0.5&wh=0.5&mo=hmir")
//!     .unwrap()
//!     .apply_to(&mut view);
//! assert_eq!(view.zoom_area().x, 0.5);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `debug`/`warn` events for commits, recomputes and
//!   ignored input.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod birdseye;
mod config;
mod error;
mod log;
mod params;
mod viewport;

pub use birdseye::BirdsEye;
pub use config::ViewConfig;
pub use error::ParamError;
pub use params::{ViewParams, encode_marks, parse_marks};
pub use viewport::{ViewportDebugInfo, ViewportState};

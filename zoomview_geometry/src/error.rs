// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors from building or inverting transforms.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeometryError {
    /// The matrix has no inverse.
    #[error("transform is not invertible (determinant {determinant})")]
    SingularTransform {
        /// Determinant of the linear part.
        determinant: f64,
    },
    /// A zoom area or screen rectangle has no extent.
    #[error("rectangle of size {width}x{height} cannot span a view")]
    DegenerateRect {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
    /// An input coordinate, size or angle was NaN or infinite.
    #[error("non-finite geometry input")]
    NonFinite,
}

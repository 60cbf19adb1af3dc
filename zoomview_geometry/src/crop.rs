// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Number of decimal digits kept by [`crop_float`] is the base-10 log of this.
const CROP_SCALE: f64 = 10_000.0;

/// Fractions this close to the next integer are snapped up to it, so that a
/// value like `0.1234` (stored as `1233.999…` after scaling) keeps its last
/// digit.
const CROP_SNAP: f64 = 1e-7;

/// Truncates `x` toward zero to four decimal digits.
///
/// This is the precision every serialized coordinate is stored with. The
/// function is idempotent: `crop_float(crop_float(x)) == crop_float(x)`.
/// NaN and infinities are returned unchanged.
///
/// ```rust
/// use zoomview_geometry::crop_float;
///
/// assert_eq!(crop_float(0.123_456), 0.1234);
/// assert_eq!(crop_float(-0.987_65), -0.9876);
/// assert_eq!(crop_float(crop_float(0.1234)), 0.1234);
/// ```
#[must_use]
pub fn crop_float(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scaled = x * CROP_SCALE;
    let fraction = scaled % 1.0;
    let truncated = scaled - fraction;
    let truncated = if 1.0 - fraction.abs() < CROP_SNAP {
        if scaled >= 0.0 {
            truncated + 1.0
        } else {
            truncated - 1.0
        }
    } else {
        truncated
    };
    truncated / CROP_SCALE
}

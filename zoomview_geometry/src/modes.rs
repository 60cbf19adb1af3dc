// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Mirror axis.
///
/// [`Axis::X`] is a horizontal mirror (x coordinates flip, y is kept);
/// [`Axis::Y`] is a vertical mirror.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Flip horizontally.
    X,
    /// Flip vertically.
    Y,
}

bitflags::bitflags! {
    /// Mirror state of a view.
    ///
    /// Both flags may be set at once, which is equivalent to a rotation by
    /// 180 degrees.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MirrorFlags: u8 {
        /// Mirrored horizontally (about the vertical center line).
        const HORIZONTAL = 0b0000_0001;
        /// Mirrored vertically (about the horizontal center line).
        const VERTICAL   = 0b0000_0010;
    }
}

impl MirrorFlags {
    /// The flag controlling mirroring along `axis`.
    #[must_use]
    pub const fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::HORIZONTAL,
            Axis::Y => Self::VERTICAL,
        }
    }
}

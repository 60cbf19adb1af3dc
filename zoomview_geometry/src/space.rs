// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::hash::Hash;

/// Marker for the coordinate space a [`crate::Position`] or
/// [`crate::Rectangle`] lives in.
///
/// The tag is zero-sized and only exists at the type level, so a rectangle
/// in normalized image space cannot be handed to an API expecting screen
/// pixels.
pub trait Space: Copy + Clone + Debug + Default + PartialEq + Eq + Hash + 'static {
    /// Human-readable name, used in debug output.
    const NAME: &'static str;
}

/// Normalized image space: `[0, 1] × [0, 1]` over the full source image,
/// independent of its pixel dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Normalized;

impl Space for Normalized {
    const NAME: &'static str = "normalized";
}

/// Screen space: pixel coordinates of the rendered view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Screen;

impl Space for Screen {
    const NAME: &'static str = "screen";
}

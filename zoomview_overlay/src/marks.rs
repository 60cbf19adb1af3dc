// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use zoomview_geometry::{ImageToScreen, NormalizedPoint, NormalizedRect, ScreenPoint};
use zoomview_viewport::{encode_marks, parse_marks};

/// Numbered marks placed on the image, in placement order.
///
/// Marks are stored in normalized coordinates and removed last-in,
/// first-out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkList {
    marks: Vec<NormalizedPoint>,
}

/// A mark positioned on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedMark {
    /// Index into the [`MarkList`].
    pub index: usize,
    /// Number shown to the user (`index + 1`).
    pub label: usize,
    /// Screen position.
    pub position: ScreenPoint,
}

impl MarkList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the `mk` parameter value.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        Self {
            marks: parse_marks(value),
        }
    }

    /// Encodes the list as an `mk` parameter value.
    #[must_use]
    pub fn to_param(&self) -> String {
        encode_marks(&self.marks)
    }

    /// Appends a mark and returns its index.
    pub fn push(&mut self, mark: NormalizedPoint) -> usize {
        self.marks.push(mark);
        self.marks.len() - 1
    }

    /// Removes the most recently added mark.
    pub fn pop(&mut self) -> Option<NormalizedPoint> {
        self.marks.pop()
    }

    /// Removes every mark.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Replaces the list contents.
    pub fn replace(&mut self, marks: impl IntoIterator<Item = NormalizedPoint>) {
        self.marks.clear();
        self.marks.extend(marks);
    }

    /// The mark at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<NormalizedPoint> {
        self.marks.get(index).copied()
    }

    /// Number of marks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if there are no marks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// All marks in placement order.
    #[must_use]
    pub fn as_slice(&self) -> &[NormalizedPoint] {
        &self.marks
    }

    /// Iterates marks in placement order.
    pub fn iter(&self) -> impl Iterator<Item = NormalizedPoint> + '_ {
        self.marks.iter().copied()
    }

    /// Projects the marks that fall inside `zoom_area`.
    #[must_use]
    pub fn project(&self, zoom_area: &NormalizedRect, trafo: &ImageToScreen) -> Vec<ProjectedMark> {
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, mark)| zoom_area.contains_point(**mark))
            .map(|(index, mark)| ProjectedMark {
                index,
                label: index + 1,
                position: trafo.transform_point(*mark),
            })
            .collect()
    }
}

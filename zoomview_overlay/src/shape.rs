// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vector shapes drawn on top of the image.
//!
//! Shapes are defined by two normalized points. A [`ShapeList`] owns them
//! under string ids; projecting a shape yields a [`ProjectedShape`] holding
//! only screen coordinates and resolved style, ready for a renderer.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use smallvec::{SmallVec, smallvec};
use zoomview_geometry::{ImageToScreen, NormalizedPoint, ScreenPoint, ScreenRect};

/// The kind of primitive a shape draws.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A straight line from start to end.
    Line,
    /// An axis-aligned rectangle spanned by start and end.
    Rectangle,
}

/// Identifier of a shape inside a [`ShapeList`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(String);

impl ShapeId {
    /// Wraps a caller-chosen id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShapeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Where a shape is, in normalized image coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeGeometry {
    /// Line or rectangle.
    pub kind: ShapeKind,
    /// First defining point.
    pub start: NormalizedPoint,
    /// Second defining point.
    pub end: NormalizedPoint,
}

/// Per-shape style overrides. Unset values fall back to [`ShapeStyle`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeProperties {
    /// Stroke color, in whatever notation the renderer understands.
    pub stroke: Option<String>,
    /// Stroke width in screen pixels.
    pub stroke_width: Option<f64>,
    /// Fill color, or `"none"`.
    pub fill: Option<String>,
    /// Whether the shape shows edit handles.
    pub editable: bool,
}

/// A shape: geometry plus style overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// Geometry in normalized coordinates.
    pub geometry: ShapeGeometry,
    /// Style overrides.
    pub properties: ShapeProperties,
}

impl Shape {
    /// A shape of `kind` between two points with default properties.
    #[must_use]
    pub fn new(kind: ShapeKind, start: NormalizedPoint, end: NormalizedPoint) -> Self {
        Self {
            geometry: ShapeGeometry { kind, start, end },
            properties: ShapeProperties::default(),
        }
    }

    /// A line from `start` to `end`.
    #[must_use]
    pub fn line(start: NormalizedPoint, end: NormalizedPoint) -> Self {
        Self::new(ShapeKind::Line, start, end)
    }

    /// A rectangle with opposite corners `start` and `end`.
    #[must_use]
    pub fn rectangle(start: NormalizedPoint, end: NormalizedPoint) -> Self {
        Self::new(ShapeKind::Rectangle, start, end)
    }

    /// Replaces the style overrides.
    #[must_use]
    pub fn with_properties(mut self, properties: ShapeProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Projects the shape to screen space.
    ///
    /// Editable shapes get a square handle on each defining point.
    #[must_use]
    pub fn project(&self, id: &ShapeId, trafo: &ImageToScreen, style: &ShapeStyle) -> ProjectedShape {
        let start = trafo.transform_point(self.geometry.start);
        let end = trafo.transform_point(self.geometry.end);
        let primitive = match self.geometry.kind {
            ShapeKind::Line => Primitive::Line { start, end },
            // Under rotation the corners may swap; from_corners keeps the size positive.
            ShapeKind::Rectangle => Primitive::Rect(ScreenRect::from_corners(start, end)),
        };
        let handles = if self.properties.editable {
            smallvec![
                ScreenRect::square_around(start, style.handle_size),
                ScreenRect::square_around(end, style.handle_size),
            ]
        } else {
            SmallVec::new()
        };
        let props = &self.properties;
        ProjectedShape {
            id: id.clone(),
            primitive,
            stroke: props.stroke.clone().unwrap_or_else(|| style.stroke.clone()),
            stroke_width: props.stroke_width.unwrap_or(style.stroke_width),
            fill: props.fill.clone().unwrap_or_else(|| style.fill.clone()),
            handles,
        }
    }
}

/// Default look of shapes that do not override it.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
    stroke: String,
    stroke_width: f64,
    fill: String,
    handle_size: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke: "red".to_string(),
            stroke_width: 2.0,
            fill: "none".to_string(),
            handle_size: 10.0,
        }
    }
}

impl ShapeStyle {
    /// Default stroke color.
    #[must_use]
    pub fn stroke(&self) -> &str {
        &self.stroke
    }

    /// Default stroke width.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Default fill.
    #[must_use]
    pub fn fill(&self) -> &str {
        &self.fill
    }

    /// Side length of edit handles in screen pixels.
    #[must_use]
    pub fn handle_size(&self) -> f64 {
        self.handle_size
    }

    /// Sets the default stroke color.
    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Sets the default stroke width; non-positive or non-finite widths are ignored.
    #[must_use]
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        if width.is_finite() && width > 0.0 {
            self.stroke_width = width;
        }
        self
    }

    /// Sets the default fill.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the handle size; non-positive or non-finite sizes are ignored.
    #[must_use]
    pub fn with_handle_size(mut self, size: f64) -> Self {
        if size.is_finite() && size > 0.0 {
            self.handle_size = size;
        }
        self
    }
}

/// Screen-space primitive of a projected shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A line segment.
    Line {
        /// Start point.
        start: ScreenPoint,
        /// End point.
        end: ScreenPoint,
    },
    /// A rectangle.
    Rect(ScreenRect),
}

/// A shape in screen coordinates with its style resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedShape {
    /// Id of the source shape.
    pub id: ShapeId,
    /// What to draw.
    pub primitive: Primitive,
    /// Stroke color.
    pub stroke: String,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill.
    pub fill: String,
    /// Edit handles, empty unless the shape is editable.
    pub handles: SmallVec<[ScreenRect; 2]>,
}

/// Shapes keyed by id, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct ShapeList {
    entries: Vec<(ShapeId, Shape)>,
    next_id: u64,
}

impl ShapeList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shape under a fresh `shape-N` id.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = self.fresh_id();
        self.entries.push((id.clone(), shape));
        id
    }

    /// Adds a shape under `id`, replacing a shape with the same id in place.
    pub fn insert(&mut self, id: ShapeId, shape: Shape) -> Option<Shape> {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(key, _)| *key == id) {
            return Some(core::mem::replace(existing, shape));
        }
        self.entries.push((id, shape));
        None
    }

    /// Replaces all shapes. Shapes without an id get a generated one.
    pub fn set_shapes(&mut self, shapes: impl IntoIterator<Item = (Option<ShapeId>, Shape)>) {
        self.entries.clear();
        for (id, shape) in shapes {
            match id {
                Some(id) => {
                    self.insert(id, shape);
                }
                None => {
                    self.add(shape);
                }
            }
        }
    }

    /// The shape with `id`.
    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.entries
            .iter()
            .find_map(|(key, shape)| (key == id).then_some(shape))
    }

    /// Mutable access to the shape with `id`.
    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.entries
            .iter_mut()
            .find_map(|(key, shape)| (*key == *id).then_some(shape))
    }

    /// Removes and returns the shape with `id`.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        let index = self.entries.iter().position(|(key, _)| key == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Removes every shape. Generated ids keep counting up.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(id, shape)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ShapeId, &Shape)> + '_ {
        self.entries.iter().map(|(id, shape)| (id, shape))
    }

    /// Projects every shape.
    #[must_use]
    pub fn project(&self, trafo: &ImageToScreen, style: &ShapeStyle) -> Vec<ProjectedShape> {
        self.entries
            .iter()
            .map(|(id, shape)| shape.project(id, trafo, style))
            .collect()
    }

    fn fresh_id(&mut self) -> ShapeId {
        loop {
            self.next_id += 1;
            let id = ShapeId(format!("shape-{}", self.next_id));
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

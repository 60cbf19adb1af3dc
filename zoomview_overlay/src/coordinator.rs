// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Size;
use zoomview_geometry::{NormalizedPoint, NormalizedRect, ScreenPoint, ScreenRect};
use zoomview_viewport::{BirdsEye, ParamError, ViewParams, ViewportState};

use crate::gesture::{Gesture, GestureEnd, GestureKind};
use crate::log::debug;
use crate::marks::{MarkList, ProjectedMark};
use crate::shape::{ProjectedShape, Shape, ShapeId, ShapeKind, ShapeList, ShapeStyle};

/// Everything an overlay renderer needs for one frame, in screen pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayFrame {
    /// Viewport revision the frame was projected at.
    pub revision: u64,
    /// Visible marks.
    pub marks: Vec<ProjectedMark>,
    /// All shapes.
    pub shapes: Vec<ProjectedShape>,
    /// The bird's-eye indicator frame, if the overview is laid out.
    pub indicator: Option<ScreenRect>,
}

/// Effect of a finished gesture.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureOutcome {
    /// A click that carries no action of its own; the host decides.
    Tap(ScreenPoint),
    /// The zoom area changed to the given rectangle.
    Zoomed(NormalizedRect),
    /// The zoom area moved to the given rectangle.
    Panned(NormalizedRect),
    /// A mark was added at the given index.
    MarkAdded(usize),
    /// A shape was added under the given id.
    ShapeAdded(ShapeId),
    /// Nothing happened, typically because a transform was missing.
    Ignored,
}

/// Keeps marks, shapes and the bird's-eye indicator in step with a
/// [`ViewportState`] and turns pointer gestures into state changes.
///
/// All overlay data is stored in normalized coordinates and projected on
/// demand through the current transform. Projection returns `None` (or
/// nothing) until the image rectangle is known.
#[derive(Clone, Debug, Default)]
pub struct OverlayCoordinator {
    viewport: ViewportState,
    birds_eye: BirdsEye,
    marks: MarkList,
    shapes: ShapeList,
    style: ShapeStyle,
}

impl OverlayCoordinator {
    /// Wraps an existing viewport.
    #[must_use]
    pub fn new(viewport: ViewportState) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Sets the default shape style.
    #[must_use]
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Mutable access to the viewport, for zoom buttons, rotation and layout.
    pub fn viewport_mut(&mut self) -> &mut ViewportState {
        &mut self.viewport
    }

    /// The bird's-eye overview.
    #[must_use]
    pub fn birds_eye(&self) -> &BirdsEye {
        &self.birds_eye
    }

    /// Mutable access to the overview, for layout.
    pub fn birds_eye_mut(&mut self) -> &mut BirdsEye {
        &mut self.birds_eye
    }

    /// The marks.
    #[must_use]
    pub fn marks(&self) -> &MarkList {
        &self.marks
    }

    /// Mutable access to the marks.
    pub fn marks_mut(&mut self) -> &mut MarkList {
        &mut self.marks
    }

    /// The shapes.
    #[must_use]
    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    /// Mutable access to the shapes.
    pub fn shapes_mut(&mut self) -> &mut ShapeList {
        &mut self.shapes
    }

    /// Default shape style.
    #[must_use]
    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    /// Normalized image point to screen pixels.
    #[must_use]
    pub fn project_point(&self, pt: NormalizedPoint) -> Option<ScreenPoint> {
        Some(self.viewport.transform()?.transform_point(pt))
    }

    /// Screen pixels to normalized image point.
    #[must_use]
    pub fn unproject_point(&self, pt: ScreenPoint) -> Option<NormalizedPoint> {
        Some(self.viewport.transform()?.invtransform_point(pt))
    }

    /// Marks inside the zoom area, in screen pixels.
    #[must_use]
    pub fn project_marks(&self) -> Vec<ProjectedMark> {
        match self.viewport.transform() {
            Some(trafo) => self.marks.project(&self.viewport.zoom_area(), trafo),
            None => Vec::new(),
        }
    }

    /// All shapes, in screen pixels.
    #[must_use]
    pub fn project_shapes(&self) -> Vec<ProjectedShape> {
        match self.viewport.transform() {
            Some(trafo) => self.shapes.project(trafo, &self.style),
            None => Vec::new(),
        }
    }

    /// The current zoom area drawn into the overview.
    #[must_use]
    pub fn birds_eye_indicator(&self) -> Option<ScreenRect> {
        self.birds_eye.indicator(&self.viewport.zoom_area())
    }

    /// Size to lay the overview image out at, for an image of `aspect`
    /// (`width / height`), bounded by the configured bird's-eye box.
    #[must_use]
    pub fn birds_eye_size(&self, aspect: f64) -> Size {
        BirdsEye::fit_size(self.viewport.config(), aspect)
    }

    /// Projects everything at once, or `None` before the image is laid out.
    #[must_use]
    pub fn frame(&self) -> Option<OverlayFrame> {
        if !self.viewport.is_ready() {
            return None;
        }
        Some(OverlayFrame {
            revision: self.viewport.revision(),
            marks: self.project_marks(),
            shapes: self.project_shapes(),
            indicator: self.birds_eye_indicator(),
        })
    }

    /// Adds a mark under a screen position and returns its index.
    pub fn add_mark_at(&mut self, pt: ScreenPoint) -> Option<usize> {
        let mark = self.unproject_point(pt)?;
        let index = self.marks.push(mark);
        debug!(index, x = mark.x, y = mark.y, "mark added");
        Some(index)
    }

    /// Removes the most recently added mark.
    pub fn remove_last_mark(&mut self) -> Option<NormalizedPoint> {
        self.marks.pop()
    }

    /// Current view state and marks in persistable form.
    #[must_use]
    pub fn params(&self) -> ViewParams {
        ViewParams::from_viewport(&self.viewport, self.marks.as_slice())
    }

    /// Restores view state and marks from a `key=value&…` string.
    ///
    /// # Errors
    ///
    /// Whatever [`ViewParams::parse`] rejects; nothing is changed then.
    pub fn restore(&mut self, query: &str) -> Result<(), ParamError> {
        let params = ViewParams::parse(query)?;
        params.apply_to(&mut self.viewport);
        self.marks.replace(params.marks);
        Ok(())
    }

    /// Starts a gesture of `kind` at `position`.
    ///
    /// Bird's-eye gestures are bounded by the overview image, all others by
    /// the main image. Returns `None` while the relevant image is not laid
    /// out.
    #[must_use]
    pub fn begin_gesture(&self, kind: GestureKind, position: ScreenPoint) -> Option<Gesture> {
        let bounds = match kind {
            GestureKind::BirdsEye => self.birds_eye.image_rect()?,
            _ => {
                self.viewport.transform()?;
                self.viewport.image_rect()?
            }
        };
        Some(Gesture::begin(kind, position, bounds))
    }

    /// Ends `gesture` at `position` and applies its effect.
    pub fn end_gesture(&mut self, gesture: Gesture, position: ScreenPoint) -> GestureOutcome {
        let threshold = self.viewport.config().click_threshold();
        let outcome = match gesture.finish(position, threshold) {
            GestureEnd::Click { kind, position } => self.apply_click(kind, position),
            GestureEnd::Drag { kind, start, end } => self.apply_drag(kind, start, end),
        };
        debug!(?outcome, "gesture finished");
        outcome
    }

    fn apply_click(&mut self, kind: GestureKind, position: ScreenPoint) -> GestureOutcome {
        match kind {
            GestureKind::Mark => self.mark_outcome(position),
            GestureKind::BirdsEye => match self.birds_eye.point_to_image(position) {
                Some(center) => {
                    self.viewport.center_on(center);
                    GestureOutcome::Zoomed(self.viewport.zoom_area())
                }
                None => GestureOutcome::Ignored,
            },
            GestureKind::ZoomArea | GestureKind::Pan | GestureKind::DefineShape(_) => {
                GestureOutcome::Tap(position)
            }
        }
    }

    fn apply_drag(&mut self, kind: GestureKind, start: ScreenPoint, end: ScreenPoint) -> GestureOutcome {
        match kind {
            GestureKind::ZoomArea => {
                let band = ScreenRect::from_corners(start, end);
                // A band too thin on either axis is a click that wobbled.
                let threshold = self.viewport.config().click_threshold();
                if band.width < threshold || band.height < threshold {
                    return GestureOutcome::Tap(end);
                }
                self.viewport
                    .zoom_to_screen_rect(band)
                    .map_or(GestureOutcome::Ignored, GestureOutcome::Zoomed)
            }
            GestureKind::Mark => self.mark_outcome(end),
            GestureKind::Pan => {
                if !self.viewport.is_ready() {
                    return GestureOutcome::Ignored;
                }
                // Dragging the content right shows what lies to the left.
                self.viewport.pan_by(-start.delta_to(end));
                GestureOutcome::Panned(self.viewport.zoom_area())
            }
            GestureKind::BirdsEye => {
                let Some(indicator) = self.birds_eye_indicator() else {
                    return GestureOutcome::Ignored;
                };
                let moved = indicator.translate(start.delta_to(end));
                let Some(area) = self.birds_eye.zoom_area_for_indicator(&moved) else {
                    return GestureOutcome::Ignored;
                };
                self.viewport.zoom_to_rect(area);
                GestureOutcome::Zoomed(self.viewport.zoom_area())
            }
            GestureKind::DefineShape(shape_kind) => self.define_shape(shape_kind, start, end),
        }
    }

    fn mark_outcome(&mut self, position: ScreenPoint) -> GestureOutcome {
        self.add_mark_at(position)
            .map_or(GestureOutcome::Ignored, GestureOutcome::MarkAdded)
    }

    fn define_shape(&mut self, kind: ShapeKind, start: ScreenPoint, end: ScreenPoint) -> GestureOutcome {
        let (Some(trafo), Some(image)) = (self.viewport.transform(), self.viewport.image_rect())
        else {
            return GestureOutcome::Ignored;
        };
        let start = trafo.invtransform_point(start.clip_to(&image));
        let end = trafo.invtransform_point(end.clip_to(&image));
        GestureOutcome::ShapeAdded(self.shapes.add(Shape::new(kind, start, end)))
    }
}

#[cfg(test)]
mod tests {
    use zoomview_geometry::{NormalizedPoint, NormalizedRect, ScreenPoint, ScreenRect};
    use kurbo::Size;
    use zoomview_viewport::{ViewConfig, ViewportState};

    use super::{GestureOutcome, OverlayCoordinator};
    use crate::gesture::GestureKind;

    fn ready() -> OverlayCoordinator {
        let mut overlay = OverlayCoordinator::new(ViewportState::default());
        overlay
            .viewport_mut()
            .set_image_rect(ScreenRect::new(0.0, 0.0, 800.0, 600.0));
        overlay
    }

    #[test]
    fn nothing_projects_before_layout() {
        let mut overlay = OverlayCoordinator::default();
        assert!(overlay.project_point(NormalizedPoint::new(0.5, 0.5)).is_none());
        assert!(overlay.frame().is_none());
        assert!(overlay.add_mark_at(ScreenPoint::new(1.0, 1.0)).is_none());
        assert!(overlay.begin_gesture(GestureKind::Pan, ScreenPoint::ZERO).is_none());
        assert!(overlay.begin_gesture(GestureKind::BirdsEye, ScreenPoint::ZERO).is_none());
    }

    #[test]
    fn project_and_unproject() {
        let overlay = ready();
        let p = overlay.project_point(NormalizedPoint::new(0.5, 0.5)).unwrap();
        assert_eq!(p, ScreenPoint::new(400.0, 300.0));
        let q = overlay.unproject_point(ScreenPoint::new(200.0, 150.0)).unwrap();
        assert!((q.x - 0.25).abs() < 1e-12 && (q.y - 0.25).abs() < 1e-12);
    }

    #[test]
    fn restore_replaces_marks_and_view() {
        let mut overlay = ready();
        overlay.add_mark_at(ScreenPoint::new(80.0, 60.0));
        overlay.restore("wx=0&wy=0&ww=0.5&wh=0.5&mk=0.2/0.2,0.3/0.3").unwrap();
        assert_eq!(overlay.marks().len(), 2);
        assert_eq!(overlay.viewport().zoom_area(), NormalizedRect::new(0.0, 0.0, 0.5, 0.5));
        assert_eq!(overlay.params().marks.len(), 2);

        assert!(overlay.restore("ww=oops").is_err());
        assert_eq!(overlay.marks().len(), 2);
    }

    #[test]
    fn birds_eye_size_uses_viewport_config() {
        let config = ViewConfig::default().with_bird_max(Size::new(160.0, 100.0));
        let overlay = OverlayCoordinator::new(ViewportState::new(config));
        assert_eq!(overlay.birds_eye_size(4.0), Size::new(160.0, 40.0));
        assert_eq!(overlay.birds_eye_size(0.5), Size::new(50.0, 100.0));
    }

    #[test]
    fn define_shape_click_is_a_tap() {
        let mut overlay = ready();
        let g = overlay
            .begin_gesture(GestureKind::DefineShape(crate::ShapeKind::Line), ScreenPoint::new(10.0, 10.0))
            .unwrap();
        assert_eq!(
            overlay.end_gesture(g, ScreenPoint::new(11.0, 10.0)),
            GestureOutcome::Tap(ScreenPoint::new(11.0, 10.0))
        );
        assert!(overlay.shapes().is_empty());
    }
}

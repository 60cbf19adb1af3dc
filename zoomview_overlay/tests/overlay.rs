// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `zoomview_overlay` crate.
//!
//! These drive [`OverlayCoordinator`] the way a viewer would: lay out the
//! image, run gestures, and check what ends up on screen.

use zoomview_geometry::{Axis, NormalizedPoint, NormalizedRect, ScreenPoint, ScreenRect};
use zoomview_overlay::{
    GestureKind, GestureOutcome, OverlayCoordinator, Primitive, Shape, ShapeId, ShapeKind,
    ShapeProperties,
};
use zoomview_viewport::ViewportState;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn overlay(width: f64, height: f64) -> OverlayCoordinator {
    let mut overlay = OverlayCoordinator::new(ViewportState::default());
    overlay
        .viewport_mut()
        .set_image_rect(ScreenRect::new(0.0, 0.0, width, height));
    overlay
}

#[test]
fn center_projects_to_screen_center() {
    let overlay = overlay(800.0, 600.0);
    assert_eq!(
        overlay.project_point(NormalizedPoint::new(0.5, 0.5)),
        Some(ScreenPoint::new(400.0, 300.0))
    );
}

#[test]
fn short_zoom_drag_is_a_tap_and_keeps_the_view() {
    let mut overlay = overlay(800.0, 600.0);
    let revision = overlay.viewport().revision();
    let gesture = overlay
        .begin_gesture(GestureKind::ZoomArea, ScreenPoint::new(10.0, 10.0))
        .unwrap();
    let outcome = overlay.end_gesture(gesture, ScreenPoint::new(12.0, 11.0));
    assert_eq!(outcome, GestureOutcome::Tap(ScreenPoint::new(12.0, 11.0)));
    assert_eq!(overlay.viewport().zoom_area(), NormalizedRect::FULL_AREA);
    assert_eq!(overlay.viewport().revision(), revision);
}

#[test]
fn flat_zoom_band_is_a_tap() {
    let mut overlay = overlay(800.0, 600.0);
    let revision = overlay.viewport().revision();
    let gesture = overlay
        .begin_gesture(GestureKind::ZoomArea, ScreenPoint::new(10.0, 10.0))
        .unwrap();
    let outcome = overlay.end_gesture(gesture, ScreenPoint::new(110.0, 10.0));
    assert_eq!(outcome, GestureOutcome::Tap(ScreenPoint::new(110.0, 10.0)));
    assert_eq!(overlay.viewport().zoom_area(), NormalizedRect::FULL_AREA);
    assert_eq!(overlay.viewport().revision(), revision);

    // Tall but narrower than the click threshold.
    let gesture = overlay
        .begin_gesture(GestureKind::ZoomArea, ScreenPoint::new(300.0, 100.0))
        .unwrap();
    let outcome = overlay.end_gesture(gesture, ScreenPoint::new(303.0, 400.0));
    assert_eq!(outcome, GestureOutcome::Tap(ScreenPoint::new(303.0, 400.0)));
    assert_eq!(overlay.viewport().zoom_area(), NormalizedRect::FULL_AREA);
}

#[test]
fn zoom_drag_commits_the_rubber_band() {
    let mut overlay = overlay(800.0, 600.0);
    let mut gesture = overlay
        .begin_gesture(GestureKind::ZoomArea, ScreenPoint::new(600.0, 450.0))
        .unwrap();
    gesture.update(ScreenPoint::new(300.0, 200.0));
    assert_eq!(gesture.preview_rect(), ScreenRect::new(300.0, 200.0, 300.0, 250.0));

    // Released outside the image: the band stops at the edge.
    let outcome = overlay.end_gesture(gesture, ScreenPoint::new(200.0, -40.0));
    let GestureOutcome::Zoomed(area) = outcome else {
        panic!("expected a zoom, got {outcome:?}");
    };
    assert!(close(area.x, 0.25));
    assert!(close(area.y, 0.0));
    assert!(close(area.width, 0.5));
    assert!(close(area.height, 0.75));
}

#[test]
fn mirrored_mark_lands_on_the_other_side() {
    let mut overlay = overlay(100.0, 100.0);
    overlay.viewport_mut().set_mirror(Axis::X, true);
    overlay.marks_mut().push(NormalizedPoint::new(0.1, 0.5));

    let marks = overlay.project_marks();
    assert_eq!(marks.len(), 1);
    assert!(close(marks[0].position.x, 90.0));
    assert!(close(marks[0].position.y, 50.0));
}

#[test]
fn mark_gesture_and_undo() {
    let mut overlay = overlay(800.0, 600.0);
    overlay.viewport_mut().zoom_by(2.0);

    let gesture = overlay
        .begin_gesture(GestureKind::Mark, ScreenPoint::new(400.0, 300.0))
        .unwrap();
    assert_eq!(
        overlay.end_gesture(gesture, ScreenPoint::new(401.0, 300.0)),
        GestureOutcome::MarkAdded(0)
    );
    let mark = overlay.marks().get(0).unwrap();
    assert!(close(mark.x, 0.500_625));
    assert!(close(mark.y, 0.5));

    // Zooming into a corner hides the mark but keeps it stored.
    overlay
        .viewport_mut()
        .zoom_to_rect(NormalizedRect::new(0.0, 0.0, 0.2, 0.2));
    assert!(overlay.project_marks().is_empty());
    assert_eq!(overlay.marks().len(), 1);

    assert_eq!(overlay.remove_last_mark(), Some(mark));
    assert!(overlay.remove_last_mark().is_none());
}

#[test]
fn pan_drag_moves_the_window_against_the_pointer() {
    let mut overlay = overlay(800.0, 600.0);
    overlay.viewport_mut().zoom_by(2.0);
    let gesture = overlay
        .begin_gesture(GestureKind::Pan, ScreenPoint::new(400.0, 300.0))
        .unwrap();
    let outcome = overlay.end_gesture(gesture, ScreenPoint::new(480.0, 300.0));
    let GestureOutcome::Panned(area) = outcome else {
        panic!("expected a pan, got {outcome:?}");
    };
    // 80 px at 1600 px per image width is 0.05, to the left.
    assert!(close(area.x, 0.2));
    assert!(close(area.y, 0.25));
    assert!(close(area.width, 0.5));
}

#[test]
fn birds_eye_drag_and_click() {
    let mut overlay = overlay(800.0, 600.0);
    overlay.viewport_mut().zoom_by(2.0);
    assert!(overlay.birds_eye_indicator().is_none());

    overlay
        .birds_eye_mut()
        .set_image_rect(ScreenRect::new(0.0, 0.0, 200.0, 150.0));
    let indicator = overlay.birds_eye_indicator().unwrap();
    assert!(close(indicator.x, 50.0) && close(indicator.width, 100.0));

    let gesture = overlay
        .begin_gesture(GestureKind::BirdsEye, ScreenPoint::new(100.0, 75.0))
        .unwrap();
    let outcome = overlay.end_gesture(gesture, ScreenPoint::new(120.0, 75.0));
    let GestureOutcome::Zoomed(area) = outcome else {
        panic!("expected a zoom, got {outcome:?}");
    };
    assert!(close(area.x, 0.35));
    assert!(close(area.y, 0.25));

    // Clicking recenters the window, clamped to the image.
    let gesture = overlay
        .begin_gesture(GestureKind::BirdsEye, ScreenPoint::new(190.0, 10.0))
        .unwrap();
    let outcome = overlay.end_gesture(gesture, ScreenPoint::new(190.0, 10.0));
    let GestureOutcome::Zoomed(area) = outcome else {
        panic!("expected a zoom, got {outcome:?}");
    };
    assert!(close(area.x, 0.5) && close(area.y, 0.0));
    assert!(close(area.width, 0.5) && close(area.height, 0.5));
}

#[test]
fn drawn_shapes_follow_the_view() {
    let mut overlay = overlay(800.0, 600.0);
    let gesture = overlay
        .begin_gesture(
            GestureKind::DefineShape(ShapeKind::Rectangle),
            ScreenPoint::new(200.0, 150.0),
        )
        .unwrap();
    let outcome = overlay.end_gesture(gesture, ScreenPoint::new(900.0, 450.0));
    assert_eq!(outcome, GestureOutcome::ShapeAdded(ShapeId::new("shape-1")));

    let shape = overlay.shapes().get(&ShapeId::new("shape-1")).unwrap();
    let (start, end) = (shape.geometry.start, shape.geometry.end);
    assert!(close(start.x, 0.25) && close(start.y, 0.25));
    assert!(close(end.x, 1.0) && close(end.y, 0.75));

    overlay.viewport_mut().zoom_by(2.0);
    let shapes = overlay.project_shapes();
    assert_eq!(shapes.len(), 1);
    let Primitive::Rect(rect) = shapes[0].primitive else {
        panic!("expected a rectangle");
    };
    assert!(close(rect.x, 0.0) && close(rect.y, 0.0));
    assert!(close(rect.width, 1200.0) && close(rect.height, 600.0));
}

#[test]
fn frame_collects_everything_at_the_current_revision() {
    let mut overlay = overlay(800.0, 600.0);
    overlay.marks_mut().push(NormalizedPoint::new(0.5, 0.5));
    overlay.shapes_mut().insert(
        ShapeId::new("edge"),
        Shape::line(NormalizedPoint::new(0.0, 0.0), NormalizedPoint::new(1.0, 1.0)).with_properties(
            ShapeProperties {
                editable: true,
                ..ShapeProperties::default()
            },
        ),
    );
    overlay.viewport_mut().set_rotation(90.0);

    let frame = overlay.frame().unwrap();
    assert_eq!(frame.revision, overlay.viewport().revision());
    assert_eq!(frame.marks.len(), 1);
    assert!(close(frame.marks[0].position.x, 400.0));
    assert_eq!(frame.shapes[0].handles.len(), 2);
    assert!(frame.indicator.is_none());

    overlay.viewport_mut().clear_image_rect();
    assert!(overlay.frame().is_none());
}

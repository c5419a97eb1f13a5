//! End-to-end coverage of the viewport store driving a real scene surface.

use fresco_core::{Editor, SurfaceConfig, ViewportStore};
use fresco_render::{Geometry, Node, SceneEngine, SceneSurface};
use kurbo::{Point, Rect};

fn surface_with_three_nodes() -> SceneSurface {
    let engine = SceneEngine::new();
    let mut surface = engine
        .create_offscreen(&SurfaceConfig {
            width: 800,
            height: 600,
            background_color: fresco_core::Rgba::white(),
            selection_enabled: true,
            preserve_stacking: true,
            batched_rendering: true,
        })
        .expect("valid dimensions");

    // Three objects whose union box is 400x300 at offset (100, 100).
    surface.add(Node::new(Geometry::Rect(Rect::new(100.0, 100.0, 300.0, 250.0))));
    surface.add(Node::new(Geometry::Rect(Rect::new(250.0, 150.0, 450.0, 400.0))));
    surface.add(Node::new(Geometry::Rect(Rect::new(400.0, 350.0, 500.0, 400.0))));
    surface
}

#[test]
fn zoom_to_fit_scales_content_with_margin() {
    let mut viewport = ViewportStore::new();
    viewport.bind_surface(Box::new(surface_with_three_nodes()));

    viewport.zoom_to_fit();

    // min(800/400, 600/300, 1) * 0.9
    assert!((viewport.zoom() - 0.9).abs() < 1e-12);
}

#[test]
fn measurement_grouping_does_not_persist_in_the_scene() {
    let mut viewport = ViewportStore::new();
    viewport.bind_surface(Box::new(surface_with_three_nodes()));

    viewport.zoom_to_fit();

    let surface = viewport.surface().expect("surface stays bound");
    let ids = surface.object_ids();
    assert_eq!(ids.len(), 3);
    let bounds = surface.measure_group_bounds(&ids);
    assert_eq!(bounds, Rect::new(100.0, 100.0, 500.0, 400.0));
}

#[test]
fn zoom_to_fit_on_an_empty_surface_changes_nothing() {
    let engine = SceneEngine::new();
    let mut viewport = ViewportStore::new();
    viewport.initialize(&engine);

    viewport.zoom_to_fit();

    assert!((viewport.zoom() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn initialize_builds_a_surface_from_store_state() {
    let engine = SceneEngine::new();
    let mut viewport = ViewportStore::new();
    viewport.set_dimensions(640, 480);

    let surface = viewport.initialize(&engine);

    assert_eq!(surface.geometric_center(), Point::new(320.0, 240.0));
}

#[test]
fn destroy_twice_is_a_no_op() {
    let engine = SceneEngine::new();
    let mut viewport = ViewportStore::new();
    viewport.initialize(&engine);

    viewport.destroy();
    viewport.destroy();

    assert!(!viewport.is_bound());
}

#[test]
fn editor_routes_gestures_into_the_bound_surface() {
    let engine = SceneEngine::new();
    let mut editor = Editor::new();
    editor.viewport_mut().initialize(&engine);

    editor.handle_zoom_gesture(1.0, Point::new(400.0, 300.0));
    editor.handle_zoom_gesture(1.0, Point::new(400.0, 300.0));

    let expected = 1.0 * fresco_core::ZOOM_STEP * fresco_core::ZOOM_STEP;
    assert!((editor.viewport().zoom() - expected).abs() < 1e-12);

    assert!(editor.handle_key_press("KeyP"));
    assert_eq!(editor.tools().active_tool(), fresco_core::Tool::Pen);
}

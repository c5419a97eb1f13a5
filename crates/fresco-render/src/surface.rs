//! Offscreen scene surface implementing the core surface contract.

use fresco_core::{ObjectId, RenderingSurface, Rgba, SurfaceConfig, SurfaceFactory};
use kurbo::{Affine, Point, Rect, Vec2};
use thiserror::Error;

use crate::scene::{Node, Scene};

/// Surface construction errors.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("invalid surface dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),
}

/// Pan/zoom transform from scene coordinates to surface coordinates.
#[derive(Debug, Clone, Copy)]
struct ViewTransform {
    offset: Vec2,
    zoom: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl ViewTransform {
    fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    fn screen_to_scene(&self, screen_point: Point) -> Point {
        (Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)) * screen_point
    }

    fn scene_to_screen(&self, scene_point: Point) -> Point {
        self.transform() * scene_point
    }

    /// Set the zoom level, keeping `anchor` (surface coordinates) fixed.
    fn zoom_at(&mut self, anchor: Point, zoom: f64) {
        if (zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        let scene_point = self.screen_to_scene(anchor);
        self.zoom = zoom;

        // Adjust the offset so scene_point stays under the anchor.
        let moved = self.scene_to_screen(scene_point);
        self.offset += Vec2::new(anchor.x - moved.x, anchor.y - moved.y);
    }
}

/// A draw command produced by `render()`.
#[derive(Debug, Clone)]
pub struct DrawOp {
    pub node: ObjectId,
    /// Node bounds mapped through the view transform.
    pub screen_bounds: Rect,
}

/// Retained-mode rendering surface over a [`Scene`].
///
/// `render()` rebuilds the display list from the scene and the view
/// transform. After `dispose()` every operation is a no-op.
#[derive(Debug)]
pub struct SceneSurface {
    scene: Scene,
    view: ViewTransform,
    width: u32,
    height: u32,
    background: Rgba,
    selection_enabled: bool,
    preserve_stacking: bool,
    batched_rendering: bool,
    display_list: Vec<DrawOp>,
    frames: u64,
    disposed: bool,
}

impl SceneSurface {
    pub fn new(config: &SurfaceConfig) -> Self {
        Self {
            scene: Scene::new(),
            view: ViewTransform::default(),
            width: config.width,
            height: config.height,
            background: config.background_color,
            selection_enabled: config.selection_enabled,
            preserve_stacking: config.preserve_stacking,
            batched_rendering: config.batched_rendering,
            display_list: Vec::new(),
            frames: 0,
            disposed: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Add a node to the scene, on top of the stack.
    pub fn add(&mut self, node: Node) -> ObjectId {
        let id = self.scene.add(node);
        self.maybe_autorender();
        id
    }

    /// Remove a node from the scene.
    pub fn remove(&mut self, id: ObjectId) -> Option<Node> {
        let node = self.scene.remove(id);
        self.maybe_autorender();
        node
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw commands from the most recent `render()`.
    pub fn display_list(&self) -> &[DrawOp] {
        &self.display_list
    }

    pub fn zoom(&self) -> f64 {
        self.view.zoom
    }

    pub fn offset(&self) -> Vec2 {
        self.view.offset
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn selection_enabled(&self) -> bool {
        self.selection_enabled
    }

    pub fn preserve_stacking(&self) -> bool {
        self.preserve_stacking
    }

    /// Background resolved to a renderer color.
    pub fn background_color(&self) -> peniko::Color {
        self.background.into()
    }

    fn render_frame(&mut self) {
        let transform = self.view.transform();
        self.display_list.clear();
        for node in self.scene.nodes_ordered() {
            self.display_list.push(DrawOp {
                node: node.id(),
                screen_bounds: transform.transform_rect_bbox(node.bounds()),
            });
        }
        self.frames += 1;
    }

    fn maybe_autorender(&mut self) {
        if !self.batched_rendering && !self.disposed {
            self.render_frame();
        }
    }
}

impl RenderingSurface for SceneSurface {
    fn resize(&mut self, width: u32, height: u32) {
        if self.disposed {
            return;
        }
        self.width = width;
        self.height = height;
        self.maybe_autorender();
    }

    fn render(&mut self) {
        if self.disposed {
            return;
        }
        self.render_frame();
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.scene.clear();
        self.display_list.clear();
        self.disposed = true;
        log::debug!("scene surface disposed");
    }

    fn pan_by(&mut self, delta: Vec2) {
        if self.disposed {
            return;
        }
        self.view.offset += delta;
        self.maybe_autorender();
    }

    fn pan_to(&mut self, position: Point) {
        if self.disposed {
            return;
        }
        self.view.offset = position.to_vec2();
        self.maybe_autorender();
    }

    fn zoom_at(&mut self, center: Point, zoom: f64) {
        if self.disposed {
            return;
        }
        self.view.zoom_at(center, zoom);
        self.maybe_autorender();
    }

    fn set_background(&mut self, color: Rgba) {
        if self.disposed {
            return;
        }
        self.background = color;
        self.maybe_autorender();
    }

    fn object_ids(&self) -> Vec<ObjectId> {
        self.scene.ids().to_vec()
    }

    fn measure_group_bounds(&self, objects: &[ObjectId]) -> Rect {
        // Pure measurement over the existing nodes; nothing is grouped in
        // the scene itself.
        self.scene.union_bounds(objects).unwrap_or(Rect::ZERO)
    }

    fn center_on(&mut self, bounds: Rect) {
        if self.disposed {
            return;
        }
        let viewport_center = self.geometric_center();
        let content_center = bounds.center();
        self.view.offset = Vec2::new(
            viewport_center.x - content_center.x * self.view.zoom,
            viewport_center.y - content_center.y * self.view.zoom,
        );
        self.maybe_autorender();
    }

    fn geometric_center(&self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Factory for offscreen scene surfaces.
///
/// Stands in for a concrete drawing target; the viewport store asks it for a
/// surface during `initialize`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneEngine;

impl SceneEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build a surface, rejecting degenerate dimensions.
    pub fn create_offscreen(&self, config: &SurfaceConfig) -> Result<SceneSurface, SurfaceError> {
        if config.width == 0 || config.height == 0 {
            return Err(SurfaceError::InvalidDimensions(config.width, config.height));
        }
        Ok(SceneSurface::new(config))
    }
}

impl SurfaceFactory for SceneEngine {
    fn create_surface(&self, config: &SurfaceConfig) -> Box<dyn RenderingSurface> {
        match self.create_offscreen(config) {
            Ok(surface) => Box::new(surface),
            Err(err) => {
                // Degrade to a minimal surface instead of failing the caller.
                log::warn!("surface creation degraded: {err}");
                Box::new(SceneSurface::new(&SurfaceConfig {
                    width: config.width.max(1),
                    height: config.height.max(1),
                    ..*config
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Geometry;

    fn test_config() -> SurfaceConfig {
        SurfaceConfig {
            width: 800,
            height: 600,
            background_color: Rgba::white(),
            selection_enabled: true,
            preserve_stacking: true,
            batched_rendering: true,
        }
    }

    #[test]
    fn test_zoom_at_keeps_the_anchor_fixed() {
        let mut surface = SceneSurface::new(&test_config());
        let anchor = Point::new(200.0, 150.0);
        let scene_point = surface.view.screen_to_scene(anchor);

        surface.zoom_at(anchor, 2.5);

        let back = surface.view.scene_to_screen(scene_point);
        assert!((back.x - anchor.x).abs() < 1e-9);
        assert!((back.y - anchor.y).abs() < 1e-9);
    }

    #[test]
    fn test_pan_by_is_relative_and_pan_to_is_absolute() {
        let mut surface = SceneSurface::new(&test_config());

        surface.pan_by(Vec2::new(10.0, 5.0));
        surface.pan_by(Vec2::new(10.0, 5.0));
        assert_eq!(surface.offset(), Vec2::new(20.0, 10.0));

        surface.pan_to(Point::new(400.0, 300.0));
        assert_eq!(surface.offset(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_render_builds_the_display_list_in_z_order() {
        let mut surface = SceneSurface::new(&test_config());
        let a = surface.add(Node::new(Geometry::Rect(Rect::new(0.0, 0.0, 10.0, 10.0))));
        let b = surface.add(Node::new(Geometry::Rect(Rect::new(5.0, 5.0, 15.0, 15.0))));

        // Batched rendering: nothing presented yet.
        assert_eq!(surface.frames(), 0);

        surface.render();

        assert_eq!(surface.frames(), 1);
        let ops: Vec<ObjectId> = surface.display_list().iter().map(|op| op.node).collect();
        assert_eq!(ops, vec![a, b]);
    }

    #[test]
    fn test_display_list_applies_the_view_transform() {
        let mut surface = SceneSurface::new(&test_config());
        surface.add(Node::new(Geometry::Rect(Rect::new(0.0, 0.0, 10.0, 10.0))));
        surface.zoom_at(Point::ZERO, 2.0);
        surface.render();

        assert_eq!(
            surface.display_list()[0].screen_bounds,
            Rect::new(0.0, 0.0, 20.0, 20.0)
        );
    }

    #[test]
    fn test_unbatched_surface_renders_on_mutation() {
        let mut surface = SceneSurface::new(&SurfaceConfig {
            batched_rendering: false,
            ..test_config()
        });

        surface.add(Node::new(Geometry::Rect(Rect::new(0.0, 0.0, 10.0, 10.0))));
        surface.pan_by(Vec2::new(1.0, 0.0));

        assert_eq!(surface.frames(), 2);
    }

    #[test]
    fn test_measure_group_bounds_does_not_alter_the_scene() {
        let mut surface = SceneSurface::new(&test_config());
        surface.add(Node::new(Geometry::Rect(Rect::new(0.0, 0.0, 10.0, 10.0))));
        surface.add(Node::new(Geometry::Rect(Rect::new(20.0, 20.0, 40.0, 50.0))));

        let ids = surface.object_ids();
        let bounds = surface.measure_group_bounds(&ids);

        assert_eq!(bounds, Rect::new(0.0, 0.0, 40.0, 50.0));
        assert_eq!(surface.object_ids(), ids);
        assert_eq!(surface.scene().len(), 2);
    }

    #[test]
    fn test_center_on_centers_content_at_the_current_zoom() {
        let mut surface = SceneSurface::new(&test_config());
        surface.center_on(Rect::new(100.0, 100.0, 500.0, 400.0));

        // Content center (300, 250) lands on the viewport center (400, 300).
        assert_eq!(surface.offset(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_dispose_is_terminal_and_idempotent() {
        let mut surface = SceneSurface::new(&test_config());
        surface.add(Node::new(Geometry::Rect(Rect::new(0.0, 0.0, 10.0, 10.0))));

        surface.dispose();
        surface.dispose();

        assert!(surface.is_disposed());
        assert!(surface.scene().is_empty());

        surface.render();
        surface.pan_by(Vec2::new(1.0, 1.0));
        assert_eq!(surface.frames(), 0);
        assert_eq!(surface.offset(), Vec2::ZERO);
    }

    #[test]
    fn test_engine_rejects_degenerate_dimensions() {
        let engine = SceneEngine::new();
        let result = engine.create_offscreen(&SurfaceConfig {
            width: 0,
            ..test_config()
        });
        assert!(matches!(result, Err(SurfaceError::InvalidDimensions(0, 600))));
    }

    #[test]
    fn test_factory_degrades_instead_of_failing() {
        let engine = SceneEngine::new();
        let surface = engine.create_surface(&SurfaceConfig {
            width: 0,
            height: 0,
            ..test_config()
        });
        assert_eq!(surface.geometric_center(), Point::new(0.5, 0.5));
    }
}

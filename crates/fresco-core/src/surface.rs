//! Rendering-surface capability contract.
//!
//! The viewport store drives an opaque scene-graph engine through this trait.
//! Implementations can be GPU-backed, canvas-backed, or purely retained (see
//! the `fresco-render` crate for the reference implementation).

use kurbo::{Point, Rect, Vec2};
use uuid::Uuid;

use crate::color::Rgba;

/// Handle to an object living inside a rendering surface.
pub type ObjectId = Uuid;

/// Construction parameters for a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Initial background color.
    pub background_color: Rgba,
    /// Whether interactive object selection is enabled.
    pub selection_enabled: bool,
    /// Keep object stacking order stable across mutations.
    pub preserve_stacking: bool,
    /// When true the surface never renders on its own; the caller triggers
    /// `render()` explicitly after each batch of mutations.
    pub batched_rendering: bool,
}

/// The capability set the viewport store consumes.
///
/// All operations are synchronous. Mutating calls after `dispose()` must be
/// no-ops rather than errors.
pub trait RenderingSurface {
    /// Resize the surface to the given pixel dimensions.
    fn resize(&mut self, width: u32, height: u32);

    /// Present the current scene. With batched rendering this is the only
    /// way pixels change.
    fn render(&mut self);

    /// Release the surface's resources. Safe to call more than once.
    fn dispose(&mut self);

    /// Pan by a delta, relative to the current position.
    fn pan_by(&mut self, delta: Vec2);

    /// Pan so the scene origin sits at `position` in surface coordinates.
    fn pan_to(&mut self, position: Point);

    /// Set the zoom level, keeping `center` (surface coordinates) fixed.
    fn zoom_at(&mut self, center: Point, zoom: f64);

    /// Change the background color.
    fn set_background(&mut self, color: Rgba);

    /// Handles of all objects currently in the scene, back to front.
    fn object_ids(&self) -> Vec<ObjectId>;

    /// Union bounding box of the given objects, in scene coordinates.
    ///
    /// Measurement only: any grouping used internally must not persist in
    /// the scene afterwards.
    fn measure_group_bounds(&self, objects: &[ObjectId]) -> Rect;

    /// Pan so the center of `bounds` (scene coordinates) lands on the
    /// viewport midpoint at the current zoom.
    fn center_on(&mut self, bounds: Rect);

    /// Midpoint of the surface in surface coordinates.
    fn geometric_center(&self) -> Point;
}

/// Constructs rendering surfaces bound to some drawing target.
///
/// The factory stands in for the drawing target itself: a DOM canvas, an
/// offscreen buffer, a window. `ViewportStore::initialize` asks it for a
/// surface built from the store's current dimensions and background.
pub trait SurfaceFactory {
    fn create_surface(&self, config: &SurfaceConfig) -> Box<dyn RenderingSurface>;
}

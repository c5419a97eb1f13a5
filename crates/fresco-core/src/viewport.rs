//! Viewport state for the canvas surface.
//!
//! The store owns the canvas dimensions, the clamped zoom factor, the pan
//! offset, the background color, and the live rendering surface. Every
//! mutating operation pushes its change into the surface (when one is bound)
//! and triggers exactly one re-render; surfaces are created with batched
//! rendering, so nothing repaints on its own.

use kurbo::{Point, Vec2};

use crate::color::Rgba;
use crate::event::{EditorEvent, EventBus};
use crate::surface::{RenderingSurface, SurfaceConfig, SurfaceFactory};

/// Lower zoom bound, enforced on every write.
pub const MIN_ZOOM: f64 = 0.1;
/// Upper zoom bound, enforced on every write.
pub const MAX_ZOOM: f64 = 5.0;
/// Multiplier applied by `zoom_in` / `zoom_out`.
pub const ZOOM_STEP: f64 = 1.1;
/// Margin left around content by `zoom_to_fit`.
const FIT_MARGIN: f64 = 0.9;

/// Owns the canvas viewport and the rendering surface bound to it.
pub struct ViewportStore {
    width: u32,
    height: u32,
    zoom: f64,
    offset: Vec2,
    background_color: Rgba,
    surface: Option<Box<dyn RenderingSurface>>,
    events: EventBus,
}

impl std::fmt::Debug for ViewportStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportStore")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("zoom", &self.zoom)
            .field("offset", &self.offset)
            .field("background_color", &self.background_color)
            .field("surface", &self.surface.as_ref().map(|_| "<bound>"))
            .finish()
    }
}

impl Default for ViewportStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportStore {
    /// Create a store with an 800x600 canvas, unit zoom, and no surface.
    pub fn new() -> Self {
        Self {
            width: 800,
            height: 600,
            zoom: 1.0,
            offset: Vec2::ZERO,
            background_color: Rgba::white(),
            surface: None,
            events: EventBus::new(),
        }
    }

    /// The bus this store emits change events on.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn background_color(&self) -> Rgba {
        self.background_color
    }

    /// Whether a rendering surface is currently bound.
    pub fn is_bound(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&dyn RenderingSurface> {
        self.surface.as_deref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut (dyn RenderingSurface + 'static)> {
        self.surface.as_deref_mut()
    }

    /// Resize the canvas. Values are used as given; a zero dimension is
    /// accepted with a diagnostic warning.
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("canvas resized to a zero dimension: {width}x{height}");
        }
        self.width = width;
        self.height = height;
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.resize(width, height);
            surface.render();
        }
        self.events.emit(EditorEvent::ViewportResized { width, height });
    }

    /// Set the zoom factor, clamped into `[MIN_ZOOM, MAX_ZOOM]`.
    ///
    /// When a surface is bound the zoom is anchored at `center` (surface
    /// coordinates), or at the surface's geometric center if none is given.
    /// Without a surface the stored value still updates.
    pub fn set_zoom(&mut self, zoom: f64, center: Option<Point>) {
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.zoom = zoom;
        if let Some(surface) = self.surface.as_deref_mut() {
            let anchor = match center {
                Some(point) => point,
                None => surface.geometric_center(),
            };
            surface.zoom_at(anchor, zoom);
            surface.render();
        }
        self.events.emit(EditorEvent::ZoomChanged { zoom });
    }

    /// Store the pan offset and apply it to the surface.
    ///
    /// The surface pan is relative: repeated calls accumulate on the surface
    /// even though the stored value is replaced. Callers that want an
    /// absolute position must pass the difference from the previous offset.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.pan_by(offset);
            surface.render();
        }
        self.events.emit(EditorEvent::OffsetChanged { offset });
    }

    /// Change the canvas background color.
    pub fn set_background_color(&mut self, color: Rgba) {
        self.background_color = color;
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.set_background(color);
            surface.render();
        }
        self.events.emit(EditorEvent::BackgroundChanged { color });
    }

    /// Adopt an externally constructed surface as the owned instance,
    /// disposing any previously bound one first.
    pub fn bind_surface(&mut self, surface: Box<dyn RenderingSurface>) {
        self.release_surface();
        self.surface = Some(surface);
        self.events.emit(EditorEvent::SurfaceBound);
    }

    /// Construct a surface from the store's current state and adopt it.
    ///
    /// Any existing surface is disposed before the new one is created, so
    /// re-initializing never leaks the old instance. The surface is created
    /// with selection enabled, stacking preserved, and batched rendering;
    /// each store operation triggers its own re-render.
    pub fn initialize(&mut self, factory: &dyn SurfaceFactory) -> &mut dyn RenderingSurface {
        self.release_surface();
        let config = SurfaceConfig {
            width: self.width,
            height: self.height,
            background_color: self.background_color,
            selection_enabled: true,
            preserve_stacking: true,
            batched_rendering: true,
        };
        let surface = self.surface.insert(factory.create_surface(&config));
        self.events.emit(EditorEvent::SurfaceBound);
        &mut **surface
    }

    /// Release the surface's resources and clear the reference. No-op when
    /// already unbound; calling it twice is safe.
    pub fn destroy(&mut self) {
        self.release_surface();
    }

    fn release_surface(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.dispose();
            self.events.emit(EditorEvent::SurfaceReleased);
        }
    }

    /// Zoom so all current content fits the canvas with a 10% margin, never
    /// upscaling past 1x, then center the content.
    ///
    /// No-op when unbound or when the surface holds no objects: no state
    /// change and no render.
    pub fn zoom_to_fit(&mut self) {
        let (width, height) = (self.width, self.height);
        let Some(surface) = self.surface.as_deref_mut() else {
            log::debug!("zoom_to_fit skipped: no surface bound");
            return;
        };
        let objects = surface.object_ids();
        if objects.is_empty() {
            return;
        }

        let bounds = surface.measure_group_bounds(&objects);
        let scale = (f64::from(width) / bounds.width())
            .min(f64::from(height) / bounds.height())
            .min(1.0)
            * FIT_MARGIN;
        let zoom = scale.clamp(MIN_ZOOM, MAX_ZOOM);

        let center = surface.geometric_center();
        surface.zoom_at(center, zoom);
        surface.center_on(bounds);
        surface.render();

        self.zoom = zoom;
        self.events.emit(EditorEvent::ZoomChanged { zoom });
    }

    /// Zoom in by one step, with the usual clamping and anchoring.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP, None);
    }

    /// Zoom out by one step, with the usual clamping and anchoring.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP, None);
    }

    /// Return to unit zoom and re-center the canvas, as a single render.
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
        let midpoint = self.midpoint();
        if let Some(surface) = self.surface.as_deref_mut() {
            let center = surface.geometric_center();
            surface.zoom_at(center, 1.0);
            surface.pan_to(midpoint);
            surface.render();
        }
        self.events.emit(EditorEvent::ZoomChanged { zoom: 1.0 });
    }

    /// Pan the surface so its origin aligns with the canvas midpoint. This
    /// is an absolute pan; no-op when unbound.
    pub fn center_canvas(&mut self) {
        let midpoint = self.midpoint();
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.pan_to(midpoint);
            surface.render();
        }
    }

    fn midpoint(&self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

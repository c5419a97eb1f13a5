//! Editor facade composing the viewport and tool stores.
//!
//! The two stores stay independent; this type only forwards UI events to the
//! right store and gives the UI layer a single value to inject.

use kurbo::Point;

use crate::tools::ToolStore;
use crate::viewport::{ViewportStore, ZOOM_STEP};

/// Owns the editor's state stores and routes UI events into them.
#[derive(Debug, Default)]
pub struct Editor {
    viewport: ViewportStore,
    tools: ToolStore,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            viewport: ViewportStore::new(),
            tools: ToolStore::new(),
        }
    }

    pub fn viewport(&self) -> &ViewportStore {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportStore {
        &mut self.viewport
    }

    pub fn tools(&self) -> &ToolStore {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolStore {
        &mut self.tools
    }

    /// Handle a physical key press, e.g. `"KeyB"`. Returns true when the key
    /// activated a tool.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        match self.tools.tool_for_shortcut(key) {
            Some(tool) => {
                self.tools.set_active_tool(tool);
                true
            }
            None => false,
        }
    }

    /// Handle a wheel/pinch zoom gesture anchored at `center` (surface
    /// coordinates). Positive deltas zoom in.
    pub fn handle_zoom_gesture(&mut self, delta: f64, center: Point) {
        if delta == 0.0 {
            return;
        }
        let factor = if delta > 0.0 {
            ZOOM_STEP
        } else {
            1.0 / ZOOM_STEP
        };
        let zoom = self.viewport.zoom() * factor;
        self.viewport.set_zoom(zoom, Some(center));
    }
}

//! Change notification for the editor stores.
//!
//! The stores are plain owned objects injected into the UI layer; interested
//! parties subscribe to a store's bus instead of watching a global.

use std::cell::RefCell;

use kurbo::Vec2;

use crate::color::Rgba;
use crate::tools::Tool;

/// A state change emitted by one of the editor stores.
#[derive(Debug, Clone)]
pub enum EditorEvent {
    ViewportResized { width: u32, height: u32 },
    ZoomChanged { zoom: f64 },
    OffsetChanged { offset: Vec2 },
    BackgroundChanged { color: Rgba },
    SurfaceBound,
    SurfaceReleased,
    ToolChanged { old: Tool, new: Tool },
    ToolSettingsChanged { tool: Tool },
}

/// Receives events from a store's bus.
pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}

/// A simple event bus for broadcasting store events to registered handlers.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        // Handlers are not cloneable; a cloned store starts with an empty bus.
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit an event to all registered handlers.
    pub fn emit(&self, event: EditorEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Recorder {
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl EventHandler for Recorder {
        fn handle_event(&mut self, event: &EditorEvent) {
            self.seen.borrow_mut().push(format!("{event:?}"));
        }
    }

    #[test]
    fn test_emit_reaches_all_handlers() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        bus.subscribe(Box::new(Recorder { seen: Rc::clone(&seen) }));
        bus.subscribe(Box::new(Recorder { seen: Rc::clone(&seen) }));

        bus.emit(EditorEvent::ZoomChanged { zoom: 2.0 });

        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_cloned_bus_is_empty() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        bus.subscribe(Box::new(Recorder { seen: Rc::clone(&seen) }));

        let clone = bus.clone();
        clone.emit(EditorEvent::SurfaceBound);

        assert!(seen.borrow().is_empty());
    }
}

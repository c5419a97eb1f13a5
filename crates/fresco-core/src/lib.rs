//! Fresco Core Library
//!
//! Platform-agnostic viewport and tool state for the Fresco image editor.
//! The rendering surface itself lives behind the [`surface::RenderingSurface`]
//! trait; see the `fresco-render` crate for the reference implementation.

pub mod color;
pub mod editor;
pub mod event;
pub mod surface;
pub mod tools;
pub mod viewport;

pub use color::Rgba;
pub use editor::Editor;
pub use event::{EditorEvent, EventBus, EventHandler};
pub use surface::{ObjectId, RenderingSurface, SurfaceConfig, SurfaceFactory};
pub use tools::{Tool, ToolSettings, ToolStore};
pub use viewport::{MAX_ZOOM, MIN_ZOOM, ViewportStore, ZOOM_STEP};

//! Fresco reference rendering surface.
//!
//! A retained scene graph implementing the surface contract from
//! `fresco-core`: objects with explicit stacking order, a pan/zoom view
//! transform, and a display list rebuilt on every `render()` call.

pub mod scene;
pub mod surface;

pub use scene::{Geometry, Node, Paint, Scene};
pub use surface::{DrawOp, SceneEngine, SceneSurface, SurfaceError};

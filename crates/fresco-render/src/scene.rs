//! Retained scene graph backing the reference surface.

use std::collections::HashMap;

use fresco_core::{ObjectId, Rgba};
use kurbo::{BezPath, Point, Rect, Shape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Paint applied to a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub fill: Option<Rgba>,
    pub stroke: Rgba,
    pub stroke_width: f64,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: Rgba::black(),
            stroke_width: 2.0,
        }
    }
}

/// Node geometry, in scene coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Rect(Rect),
    Ellipse { center: Point, rx: f64, ry: f64 },
    Path(BezPath),
}

/// A single renderable object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: ObjectId,
    pub geometry: Geometry,
    pub paint: Paint,
}

impl Node {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            id: Uuid::new_v4(),
            geometry,
            paint: Paint::default(),
        }
    }

    pub fn with_paint(geometry: Geometry, paint: Paint) -> Self {
        Self {
            id: Uuid::new_v4(),
            geometry,
            paint,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Axis-aligned bounding box in scene coordinates.
    pub fn bounds(&self) -> Rect {
        match &self.geometry {
            Geometry::Rect(rect) => *rect,
            Geometry::Ellipse { center, rx, ry } => Rect::new(
                center.x - rx,
                center.y - ry,
                center.x + rx,
                center.y + ry,
            ),
            Geometry::Path(path) => path.bounding_box(),
        }
    }
}

/// All nodes in a surface, with an explicit z-order (back to front).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    nodes: HashMap<ObjectId, Node>,
    z_order: Vec<ObjectId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node on top of the stack, returning its handle.
    pub fn add(&mut self, node: Node) -> ObjectId {
        let id = node.id();
        self.z_order.push(id);
        self.nodes.insert(id, node);
        id
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<Node> {
        self.z_order.retain(|&node_id| node_id != id);
        self.nodes.remove(&id)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.z_order.clear();
    }

    pub fn get(&self, id: ObjectId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Node handles in z-order (back to front).
    pub fn ids(&self) -> &[ObjectId] {
        &self.z_order
    }

    /// Nodes in z-order (back to front).
    pub fn nodes_ordered(&self) -> impl Iterator<Item = &Node> {
        self.z_order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Move a node to the top of the stack.
    pub fn bring_to_front(&mut self, id: ObjectId) {
        self.z_order.retain(|&node_id| node_id != id);
        self.z_order.push(id);
    }

    /// Move a node to the bottom of the stack.
    pub fn send_to_back(&mut self, id: ObjectId) {
        self.z_order.retain(|&node_id| node_id != id);
        self.z_order.insert(0, id);
    }

    /// Union bounding box of the given nodes. Unknown handles are skipped.
    pub fn union_bounds(&self, ids: &[ObjectId]) -> Option<Rect> {
        let mut result: Option<Rect> = None;
        for id in ids {
            if let Some(node) = self.nodes.get(id) {
                let bounds = node.bounds();
                result = Some(match result {
                    Some(acc) => acc.union(bounds),
                    None => bounds,
                });
            }
        }
        result
    }

    /// Union bounding box of every node in the scene.
    pub fn bounds(&self) -> Option<Rect> {
        self.union_bounds(&self.z_order)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

//! Tool selection and per-tool configuration.

use std::collections::HashMap;

use kurbo::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::event::{EditorEvent, EventBus};

/// Maximum number of entries kept in the recently-used list.
const MAX_RECENT_TOOLS: usize = 5;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tool {
    #[default]
    Select,
    Brush,
    Rectangle,
    Circle,
    Text,
    Line,
    Crop,
    Fill,
    Erase,
    Clone,
    ColorPick,
    Pen,
}

impl Tool {
    /// All tools, in toolbar order.
    pub const ALL: [Tool; 12] = [
        Tool::Select,
        Tool::Brush,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Text,
        Tool::Line,
        Tool::Crop,
        Tool::Fill,
        Tool::Erase,
        Tool::Clone,
        Tool::ColorPick,
        Tool::Pen,
    ];

    /// Display name for this tool.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Brush => "Brush",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Text => "Text",
            Tool::Line => "Line",
            Tool::Crop => "Crop",
            Tool::Fill => "Fill",
            Tool::Erase => "Erase",
            Tool::Clone => "Clone",
            Tool::ColorPick => "Color picker",
            Tool::Pen => "Pen",
        }
    }
}

/// Physical-key shortcuts, built once and never mutated.
const SHORTCUTS: [(&str, Tool); 12] = [
    ("KeyV", Tool::Select),
    ("KeyB", Tool::Brush),
    ("KeyR", Tool::Rectangle),
    ("KeyO", Tool::Circle),
    ("KeyT", Tool::Text),
    ("KeyL", Tool::Line),
    ("KeyC", Tool::Crop),
    ("KeyG", Tool::Fill),
    ("KeyE", Tool::Erase),
    ("KeyS", Tool::Clone),
    ("KeyI", Tool::ColorPick),
    ("KeyP", Tool::Pen),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectSettings {
    /// Hit-test tolerance in screen pixels.
    pub hit_tolerance: f64,
}

impl Default for SelectSettings {
    fn default() -> Self {
        Self { hit_tolerance: 4.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSettings {
    pub color: Rgba,
    pub size: f64,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f64,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: Rgba::black(),
            size: 10.0,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleSettings {
    pub stroke_color: Rgba,
    pub fill_color: Rgba,
    pub stroke_width: f64,
    /// 0 = sharp corners.
    pub corner_radius: f64,
}

impl Default for RectangleSettings {
    fn default() -> Self {
        Self {
            stroke_color: Rgba::black(),
            fill_color: Rgba::transparent(),
            stroke_width: 2.0,
            corner_radius: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleSettings {
    pub stroke_color: Rgba,
    pub fill_color: Rgba,
    pub stroke_width: f64,
}

impl Default for CircleSettings {
    fn default() -> Self {
        Self {
            stroke_color: Rgba::black(),
            fill_color: Rgba::transparent(),
            stroke_width: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSettings {
    pub color: Rgba,
    pub font_family: String,
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            color: Rgba::black(),
            font_family: "Arial".to_string(),
            font_size: 24.0,
            bold: false,
            italic: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSettings {
    pub stroke_color: Rgba,
    pub stroke_width: f64,
}

impl Default for LineSettings {
    fn default() -> Self {
        Self {
            stroke_color: Rgba::black(),
            stroke_width: 2.0,
        }
    }
}

/// Aspect-ratio constraint applied while cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CropAspect {
    #[default]
    Free,
    Square,
    Ratio4x3,
    Ratio16x9,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropSettings {
    pub aspect: CropAspect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillSettings {
    pub color: Rgba,
    /// Per-channel color distance treated as "same region" by the flood fill.
    pub tolerance: f64,
}

impl Default for FillSettings {
    fn default() -> Self {
        Self {
            color: Rgba::black(),
            tolerance: 32.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EraseSettings {
    pub size: f64,
}

impl Default for EraseSettings {
    fn default() -> Self {
        Self { size: 20.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloneSettings {
    /// Offset from the sample point to the paint point.
    pub offset: Vec2,
    pub size: f64,
}

impl Default for CloneSettings {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            size: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPickSettings {
    /// Edge length in pixels of the square averaged around the sample point.
    pub sample_size: u32,
}

impl Default for ColorPickSettings {
    fn default() -> Self {
        Self { sample_size: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenSettings {
    pub stroke_color: Rgba,
    pub stroke_width: f64,
    /// 0.0 (raw input) to 1.0 (heavy smoothing).
    pub smoothing: f64,
}

impl Default for PenSettings {
    fn default() -> Self {
        Self {
            stroke_color: Rgba::black(),
            stroke_width: 2.0,
            smoothing: 0.5,
        }
    }
}

/// Per-tool configuration. One variant per tool, so a record can never be
/// attached to the wrong tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolSettings {
    Select(SelectSettings),
    Brush(BrushSettings),
    Rectangle(RectangleSettings),
    Circle(CircleSettings),
    Text(TextSettings),
    Line(LineSettings),
    Crop(CropSettings),
    Fill(FillSettings),
    Erase(EraseSettings),
    Clone(CloneSettings),
    ColorPick(ColorPickSettings),
    Pen(PenSettings),
}

impl ToolSettings {
    /// The tool this record belongs to.
    pub fn tool(&self) -> Tool {
        match self {
            ToolSettings::Select(_) => Tool::Select,
            ToolSettings::Brush(_) => Tool::Brush,
            ToolSettings::Rectangle(_) => Tool::Rectangle,
            ToolSettings::Circle(_) => Tool::Circle,
            ToolSettings::Text(_) => Tool::Text,
            ToolSettings::Line(_) => Tool::Line,
            ToolSettings::Crop(_) => Tool::Crop,
            ToolSettings::Fill(_) => Tool::Fill,
            ToolSettings::Erase(_) => Tool::Erase,
            ToolSettings::Clone(_) => Tool::Clone,
            ToolSettings::ColorPick(_) => Tool::ColorPick,
            ToolSettings::Pen(_) => Tool::Pen,
        }
    }

    /// Default configuration for `tool`.
    pub fn default_for(tool: Tool) -> Self {
        match tool {
            Tool::Select => ToolSettings::Select(SelectSettings::default()),
            Tool::Brush => ToolSettings::Brush(BrushSettings::default()),
            Tool::Rectangle => ToolSettings::Rectangle(RectangleSettings::default()),
            Tool::Circle => ToolSettings::Circle(CircleSettings::default()),
            Tool::Text => ToolSettings::Text(TextSettings::default()),
            Tool::Line => ToolSettings::Line(LineSettings::default()),
            Tool::Crop => ToolSettings::Crop(CropSettings::default()),
            Tool::Fill => ToolSettings::Fill(FillSettings::default()),
            Tool::Erase => ToolSettings::Erase(EraseSettings::default()),
            Tool::Clone => ToolSettings::Clone(CloneSettings::default()),
            Tool::ColorPick => ToolSettings::ColorPick(ColorPickSettings::default()),
            Tool::Pen => ToolSettings::Pen(PenSettings::default()),
        }
    }
}

/// Owns the active tool, per-tool configuration, and the recency list.
///
/// The settings map is total over [`Tool::ALL`] from construction onward;
/// every entry's variant tag matches its key.
#[derive(Debug, Clone)]
pub struct ToolStore {
    active_tool: Tool,
    settings: HashMap<Tool, ToolSettings>,
    recent: Vec<Tool>,
    shortcuts: HashMap<&'static str, Tool>,
    events: EventBus,
}

impl Default for ToolStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolStore {
    /// Create a store with every tool at its default configuration.
    pub fn new() -> Self {
        let settings = Tool::ALL
            .iter()
            .map(|&tool| (tool, ToolSettings::default_for(tool)))
            .collect();
        Self {
            active_tool: Tool::default(),
            settings,
            recent: Vec::new(),
            shortcuts: SHORTCUTS.iter().copied().collect(),
            events: EventBus::new(),
        }
    }

    /// The bus this store emits change events on.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    /// Most-recently-activated tools, newest first, no duplicates.
    pub fn recent_tools(&self) -> &[Tool] {
        &self.recent
    }

    /// Switch the active tool and move it to the front of the recency list.
    pub fn set_active_tool(&mut self, tool: Tool) {
        let old = self.active_tool;
        self.active_tool = tool;

        self.recent.retain(|&recent| recent != tool);
        self.recent.insert(0, tool);
        self.recent.truncate(MAX_RECENT_TOOLS);

        if old != tool {
            log::debug!("active tool: {} -> {}", old.name(), tool.name());
            self.events.emit(EditorEvent::ToolChanged { old, new: tool });
        }
    }

    /// Current settings record for `tool`.
    ///
    /// The map is total by construction; the default is a defensive fallback
    /// only.
    pub fn settings(&self, tool: Tool) -> ToolSettings {
        self.settings
            .get(&tool)
            .cloned()
            .unwrap_or_else(|| ToolSettings::default_for(tool))
    }

    /// Settings record for the active tool.
    pub fn active_settings(&self) -> ToolSettings {
        self.settings(self.active_tool)
    }

    /// Mutate the settings record for `tool` in place.
    ///
    /// The closure receives the tool's current record. An update that swaps
    /// the record for another tool's variant is rejected and the previous
    /// record restored, keeping the settings map correctly tagged.
    pub fn update_settings<F>(&mut self, tool: Tool, f: F)
    where
        F: FnOnce(&mut ToolSettings),
    {
        let entry = self
            .settings
            .entry(tool)
            .or_insert_with(|| ToolSettings::default_for(tool));
        let before = entry.clone();
        f(entry);
        if entry.tool() != tool {
            log::warn!(
                "rejected settings update for {}: record variant changed to {}",
                tool.name(),
                entry.tool().name()
            );
            *entry = before;
            return;
        }
        self.events.emit(EditorEvent::ToolSettingsChanged { tool });
    }

    /// Restore `tool` to its default configuration.
    pub fn reset_settings(&mut self, tool: Tool) {
        self.settings.insert(tool, ToolSettings::default_for(tool));
        self.events.emit(EditorEvent::ToolSettingsChanged { tool });
    }

    /// Restore every tool to its default configuration.
    pub fn reset_all_settings(&mut self) {
        for &tool in &Tool::ALL {
            self.settings.insert(tool, ToolSettings::default_for(tool));
            self.events.emit(EditorEvent::ToolSettingsChanged { tool });
        }
    }

    /// Look up the tool bound to a physical key, e.g. `"KeyV"`.
    pub fn tool_for_shortcut(&self, key: &str) -> Option<Tool> {
        self.shortcuts.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_total_over_tool_set() {
        let store = ToolStore::new();
        for &tool in &Tool::ALL {
            assert_eq!(store.settings(tool).tool(), tool);
        }
    }

    #[test]
    fn test_recency_moves_to_front_without_duplicates() {
        let mut store = ToolStore::new();
        store.set_active_tool(Tool::Brush);
        store.set_active_tool(Tool::Select);
        store.set_active_tool(Tool::Brush);

        assert_eq!(store.active_tool(), Tool::Brush);
        assert_eq!(store.recent_tools(), &[Tool::Brush, Tool::Select]);
    }

    #[test]
    fn test_recency_is_bounded() {
        let mut store = ToolStore::new();
        for &tool in &[
            Tool::Brush,
            Tool::Rectangle,
            Tool::Circle,
            Tool::Text,
            Tool::Line,
            Tool::Crop,
            Tool::Fill,
        ] {
            store.set_active_tool(tool);
        }

        assert_eq!(store.recent_tools().len(), MAX_RECENT_TOOLS);
        assert_eq!(
            store.recent_tools(),
            &[Tool::Fill, Tool::Crop, Tool::Line, Tool::Text, Tool::Circle]
        );
    }

    #[test]
    fn test_update_touches_only_the_named_field() {
        let mut store = ToolStore::new();
        store.update_settings(Tool::Brush, |settings| {
            if let ToolSettings::Brush(brush) = settings {
                brush.size = 18.0;
            }
        });

        let ToolSettings::Brush(brush) = store.settings(Tool::Brush) else {
            panic!("brush entry lost its variant");
        };
        assert_eq!(brush.size, 18.0);
        assert_eq!(brush.opacity, BrushSettings::default().opacity);
        assert_eq!(brush.color, BrushSettings::default().color);

        // Every other tool is untouched.
        for &tool in Tool::ALL.iter().filter(|&&t| t != Tool::Brush) {
            assert_eq!(store.settings(tool), ToolSettings::default_for(tool));
        }
    }

    #[test]
    fn test_update_rejects_variant_swap() {
        let mut store = ToolStore::new();
        store.update_settings(Tool::Brush, |settings| {
            *settings = ToolSettings::Pen(PenSettings::default());
        });

        assert_eq!(
            store.settings(Tool::Brush),
            ToolSettings::Brush(BrushSettings::default())
        );
    }

    #[test]
    fn test_reset_restores_the_default_record() {
        let mut store = ToolStore::new();
        store.update_settings(Tool::Brush, |settings| {
            if let ToolSettings::Brush(brush) = settings {
                brush.size = 42.0;
                brush.opacity = 0.25;
            }
        });

        store.reset_settings(Tool::Brush);

        assert_eq!(
            store.settings(Tool::Brush),
            ToolSettings::Brush(BrushSettings::default())
        );
    }

    #[test]
    fn test_reset_leaves_other_tools_alone() {
        let mut store = ToolStore::new();
        store.update_settings(Tool::Pen, |settings| {
            if let ToolSettings::Pen(pen) = settings {
                pen.smoothing = 0.9;
            }
        });

        store.reset_settings(Tool::Brush);

        let ToolSettings::Pen(pen) = store.settings(Tool::Pen) else {
            panic!("pen entry lost its variant");
        };
        assert_eq!(pen.smoothing, 0.9);
    }

    #[test]
    fn test_reset_all_restores_every_tool() {
        let mut store = ToolStore::new();
        store.update_settings(Tool::Brush, |settings| {
            if let ToolSettings::Brush(brush) = settings {
                brush.size = 99.0;
            }
        });
        store.update_settings(Tool::Text, |settings| {
            if let ToolSettings::Text(text) = settings {
                text.font_size = 7.0;
            }
        });

        store.reset_all_settings();

        for &tool in &Tool::ALL {
            assert_eq!(store.settings(tool), ToolSettings::default_for(tool));
        }
    }

    #[test]
    fn test_shortcut_lookup() {
        let store = ToolStore::new();
        assert_eq!(store.tool_for_shortcut("KeyV"), Some(Tool::Select));
        assert_eq!(store.tool_for_shortcut("KeyB"), Some(Tool::Brush));
        assert_eq!(store.tool_for_shortcut("KeyC"), Some(Tool::Crop));
        assert_eq!(store.tool_for_shortcut("KeyX"), None);
    }

    #[test]
    fn test_active_settings_follows_the_active_tool() {
        let mut store = ToolStore::new();
        store.set_active_tool(Tool::Line);
        assert_eq!(
            store.active_settings(),
            ToolSettings::Line(LineSettings::default())
        );
    }
}

//! Reusable egui widget components for the Fresco editor UI.
//!
//! Stateless presentation wrappers: the caller owns all values and open
//! flags, the widgets only draw and report interactions.
//!
//! - **Buttons**: toolbar tool buttons, dialog text buttons
//! - **Dropdown**: value binding over a closed option list
//! - **Inputs**: labeled text and numeric fields
//! - **Modal**: centered dialog with an open flag

pub mod buttons;
pub mod dropdown;
pub mod inputs;
pub mod modal;

pub use buttons::{TextButton, ToolButton};
pub use dropdown::Dropdown;
pub use inputs::{labeled_numeric_input, labeled_text_input};
pub use modal::Modal;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Toolbar tool button size
    pub const TOOL_BUTTON: f32 = 32.0;
    /// Dialog/menu row height
    pub const ROW_HEIGHT: f32 = 24.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}

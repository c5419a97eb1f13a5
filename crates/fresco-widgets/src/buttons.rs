//! Button components: toolbar tool buttons and dialog text buttons.

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, FontId, Pos2, Sense, Stroke, StrokeKind, Ui, vec2,
};

use crate::{sizing, theme};

/// A toolbar button showing a single glyph, with a tooltip and an optional
/// shortcut hint.
pub struct ToolButton<'a> {
    glyph: &'a str,
    tooltip: &'a str,
    shortcut: Option<&'a str>,
    selected: bool,
}

impl<'a> ToolButton<'a> {
    /// Create a new tool button.
    pub fn new(glyph: &'a str, tooltip: &'a str) -> Self {
        Self {
            glyph,
            tooltip,
            shortcut: None,
            selected: false,
        }
    }

    /// Add a shortcut hint to the tooltip, e.g. `"B"`.
    pub fn shortcut(mut self, shortcut: &'a str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    /// Set whether the button is selected/active.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = vec2(sizing::TOOL_BUTTON, sizing::TOOL_BUTTON);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::TRANSPARENT
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            let glyph_color = if self.selected {
                Color32::WHITE
            } else {
                Color32::from_gray(80)
            };

            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.glyph,
                FontId::proportional(16.0),
                glyph_color,
            );
        }

        let tooltip = match self.shortcut {
            Some(shortcut) => format!("{} ({})", self.tooltip, shortcut),
            None => self.tooltip.to_string(),
        };
        let response = response.on_hover_text(tooltip);

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// A dialog text button. Primary buttons are filled with the accent color,
/// secondary buttons are outlined.
pub struct TextButton<'a> {
    label: &'a str,
    primary: bool,
}

impl<'a> TextButton<'a> {
    /// Create a new secondary (outlined) text button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            primary: false,
        }
    }

    /// Fill the button with the accent color.
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let text_width = self.label.len() as f32 * 7.0 + 24.0;
        let size = vec2(text_width, sizing::ROW_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            if self.primary {
                let bg_color = if response.hovered() {
                    theme::ACCENT.gamma_multiply(0.9)
                } else {
                    theme::ACCENT
                };
                ui.painter().rect_filled(rect, radius, bg_color);
            } else {
                let bg_color = if response.hovered() {
                    theme::HOVER_BG
                } else {
                    Color32::TRANSPARENT
                };
                ui.painter().rect_filled(rect, radius, bg_color);
                ui.painter().rect_stroke(
                    rect,
                    radius,
                    Stroke::new(1.0, theme::BORDER),
                    StrokeKind::Inside,
                );
            }

            let text_color = if self.primary {
                Color32::WHITE
            } else {
                theme::TEXT
            };
            ui.painter().text(
                Pos2::new(rect.center().x, rect.center().y),
                Align2::CENTER_CENTER,
                self.label,
                FontId::proportional(12.0),
                text_color,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

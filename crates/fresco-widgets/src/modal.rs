//! Centered modal dialog.

use egui::{
    Align2, Color32, Context, CornerRadius, CursorIcon, FontId, Frame, Id, Margin, Pos2, Sense,
    Stroke, Ui, vec2,
};

use crate::{sizing, theme};

/// A centered dialog over a dimmed background.
///
/// The caller owns the open flag; the modal clears it when the user clicks
/// the close button or presses Escape.
pub struct Modal<'a> {
    title: &'a str,
    width: f32,
}

impl<'a> Modal<'a> {
    /// Create a new modal with the given title.
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            width: 360.0,
        }
    }

    /// Set the dialog width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Show the modal while `open` is true.
    pub fn show(self, ctx: &Context, open: &mut bool, add_contents: impl FnOnce(&mut Ui)) {
        if !*open {
            return;
        }

        // Dim everything underneath the dialog.
        let dim_layer = egui::LayerId::new(egui::Order::Middle, Id::new("fresco_modal_dim"));
        ctx.layer_painter(dim_layer)
            .rect_filled(ctx.screen_rect(), 0.0, Color32::from_black_alpha(80));

        let mut close_requested = false;
        egui::Area::new(Id::new(self.title))
            .order(egui::Order::Foreground)
            .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .show(ctx, |ui| {
                Frame::new()
                    .fill(theme::PANEL_BG)
                    .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
                    .stroke(Stroke::new(1.0, theme::BORDER))
                    .shadow(egui::epaint::Shadow {
                        spread: 0,
                        blur: 8,
                        offset: [0, 2],
                        color: Color32::from_black_alpha(15),
                    })
                    .inner_margin(Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_width(self.width);

                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(self.title)
                                    .size(14.0)
                                    .strong()
                                    .color(theme::TEXT),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if close_button(ui) {
                                        close_requested = true;
                                    }
                                },
                            );
                        });
                        ui.add_space(8.0);

                        add_contents(ui);
                    });
            });

        if close_requested || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            *open = false;
        }
    }
}

/// Small hand-drawn close button for the dialog header.
fn close_button(ui: &mut Ui) -> bool {
    let size = vec2(20.0, 20.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let bg_color = if response.hovered() {
            theme::HOVER_BG
        } else {
            Color32::TRANSPARENT
        };
        ui.painter()
            .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
        ui.painter().text(
            Pos2::new(rect.center().x, rect.center().y),
            Align2::CENTER_CENTER,
            "✕",
            FontId::proportional(12.0),
            theme::TEXT_MUTED,
        );
    }

    let clicked = response.clicked();
    response.on_hover_cursor(CursorIcon::PointingHand);
    clicked
}

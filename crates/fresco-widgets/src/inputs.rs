//! Labeled input fields.

use std::ops::RangeInclusive;

use egui::{RichText, Ui};

use crate::theme;

/// Single-line text input with a muted leading label. Returns true when the
/// value changed this frame.
pub fn labeled_text_input(ui: &mut Ui, label: &str, value: &mut String) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).size(12.0).color(theme::TEXT_MUTED));
        changed = ui.text_edit_singleline(value).changed();
    });
    changed
}

/// Numeric drag input with a muted leading label and an inclusive range.
/// Returns true when the value changed this frame.
pub fn labeled_numeric_input(
    ui: &mut Ui,
    label: &str,
    value: &mut f64,
    range: RangeInclusive<f64>,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).size(12.0).color(theme::TEXT_MUTED));
        changed = ui
            .add(egui::DragValue::new(value).range(range).speed(0.1))
            .changed();
    });
    changed
}

//! Dropdown bound to a value from a closed option list.

use egui::{RichText, Ui};

use crate::theme;

/// A labeled dropdown over `(value, display name)` pairs.
pub struct Dropdown<'a, T: PartialEq + Copy> {
    id_salt: &'a str,
    label: Option<&'a str>,
    options: &'a [(T, &'a str)],
}

impl<'a, T: PartialEq + Copy> Dropdown<'a, T> {
    /// Create a new dropdown. `id_salt` must be unique within the parent Ui.
    pub fn new(id_salt: &'a str, options: &'a [(T, &'a str)]) -> Self {
        Self {
            id_salt,
            label: None,
            options,
        }
    }

    /// Add a muted leading label.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Show the dropdown and return true when `value` changed.
    pub fn show(self, ui: &mut Ui, value: &mut T) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            if let Some(label) = self.label {
                ui.label(RichText::new(label).size(12.0).color(theme::TEXT_MUTED));
            }

            let current = self
                .options
                .iter()
                .find(|(option, _)| *option == *value)
                .map(|(_, name)| *name)
                .unwrap_or("—");

            egui::ComboBox::from_id_salt(self.id_salt)
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for (option, name) in self.options {
                        if ui.selectable_value(value, *option, *name).changed() {
                            changed = true;
                        }
                    }
                });
        });
        changed
    }
}

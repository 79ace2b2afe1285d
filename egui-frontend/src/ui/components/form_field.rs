//! # Form Field Widget
//!
//! Renders one labelled signup input with its required marker and the
//! helper/error line underneath.

use eframe::egui;
use shared::FieldDefinition;

use crate::ui::components::theme::CURRENT_THEME;

/// What the field should show besides its value
pub struct FieldDisplay<'a> {
    pub helper: Option<&'a str>,
    pub has_error: bool,
    pub enabled: bool,
}

/// Stable widget id so focus requests can target a field
pub fn field_widget_id(def: &FieldDefinition) -> egui::Id {
    egui::Id::new(("signup_field", def.id.as_str()))
}

/// Render a labelled text input and return the text edit's response
pub fn render_form_field(
    ui: &mut egui::Ui,
    def: &FieldDefinition,
    value: &mut String,
    display: FieldDisplay<'_>,
    width: f32,
) -> egui::Response {
    ui.vertical(|ui| {
        ui.set_width(width);

        // Label with required marker
        ui.horizontal(|ui| {
            let label_color = if display.has_error {
                CURRENT_THEME.feedback.error
            } else {
                CURRENT_THEME.typography.primary
            };
            ui.label(egui::RichText::new(def.label).strong().color(label_color));
            if def.required {
                ui.label(egui::RichText::new("*").color(CURRENT_THEME.feedback.error));
            }
        });

        let text_edit = egui::TextEdit::singleline(value)
            .id(field_widget_id(def))
            .password(def.is_password())
            .desired_width(width);

        let response = ui
            .scope(|ui| {
                if display.has_error {
                    let error_stroke = egui::Stroke::new(1.5, CURRENT_THEME.feedback.error);
                    let visuals = ui.visuals_mut();
                    visuals.widgets.inactive.bg_stroke = error_stroke;
                    visuals.widgets.hovered.bg_stroke = error_stroke;
                    visuals.selection.stroke = error_stroke;
                }
                ui.add_enabled(display.enabled, text_edit)
            })
            .inner;

        // Helper or error text
        match display.helper {
            Some(helper) => {
                let color = if display.has_error {
                    CURRENT_THEME.feedback.error
                } else {
                    CURRENT_THEME.typography.secondary
                };
                ui.label(egui::RichText::new(helper).size(12.0).color(color));
            }
            None => {
                // Keep rows aligned whether or not a message is shown
                ui.add_space(16.0);
            }
        }

        response
    })
    .inner
}

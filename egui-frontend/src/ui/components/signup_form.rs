//! # Signup Form
//!
//! Renders the signup card: header with close icon, the field grid and the
//! submit button.
//!
//! ## Responsibilities:
//! - Lay out fields in rows of 12 grid units
//! - Forward change and blur events to `shared::SignupForm`
//! - Apply the form's focus request after a rejected submit
//! - Report submit and close clicks back to the shell as a `FormAction`
//!
//! All validation decisions live in the `shared` crate; this module only maps
//! form state to widgets.

use eframe::egui;
use shared::{layout_rows, FIELDS, GRID_COLUMNS};

use crate::ui::app_state::SignupApp;
use crate::ui::components::form_field::{render_form_field, FieldDisplay};
use crate::ui::components::theme::CURRENT_THEME;

/// Requests the form makes to its host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Close,
}

/// Width of a field spanning `grid_size` units in a row of `fields_in_row` fields
pub fn column_width(total_width: f32, grid_size: u8, fields_in_row: usize, spacing: f32) -> f32 {
    let gaps = fields_in_row.saturating_sub(1) as f32 * spacing;
    let usable = (total_width - gaps).max(0.0);
    usable * f32::from(grid_size.min(GRID_COLUMNS)) / f32::from(GRID_COLUMNS)
}

impl SignupApp {
    /// Render the form contents; returns the action the user requested, if any
    pub fn render_signup_form(&mut self, ui: &mut egui::Ui) -> Option<FormAction> {
        let mut action = None;

        // Header
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Sign Up")
                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(CURRENT_THEME.typography.heading),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let close = egui::Button::new(egui::RichText::new("✖").size(16.0)).frame(false);
                if ui.add(close).on_hover_text("Close").clicked() {
                    action = Some(FormAction::Close);
                }
            });
        });

        ui.add_space(12.0);

        let focus = self.form.take_focus_request();
        let enabled = !self.form.is_disabled();
        let spacing = ui.spacing().item_spacing.x;
        let total_width = ui.available_width();

        for row in layout_rows(&FIELDS) {
            ui.horizontal_top(|ui| {
                for def in &row {
                    let width = column_width(total_width, def.grid_size, row.len(), spacing);
                    let mut buffer = self.form.value(def.id).to_owned();
                    let helper = self.form.helper_text(def.id);
                    let display = FieldDisplay {
                        helper: helper.as_deref(),
                        has_error: self.form.has_error(def.id),
                        enabled,
                    };

                    let response = render_form_field(ui, def, &mut buffer, display, width);

                    if focus == Some(def.id) {
                        log::debug!("🎯 Focusing {}", def.id);
                        response.request_focus();
                    }
                    if response.changed() {
                        self.form.change(def.id, buffer);
                    }
                    if response.lost_focus() {
                        self.form.blur(def.id);
                    }
                }
            });
            ui.add_space(4.0);
        }

        ui.add_space(8.0);

        // Submit button
        let fill = if enabled {
            CURRENT_THEME.interactive.primary
        } else {
            CURRENT_THEME.interactive.primary_disabled
        };
        let button = egui::Button::new(
            egui::RichText::new(self.form.submit_label())
                .strong()
                .color(CURRENT_THEME.typography.white),
        )
        .fill(fill)
        .min_size(egui::vec2(total_width, 40.0));

        if ui.add_enabled(enabled, button).clicked() {
            action = Some(FormAction::Submit);
        }

        action
    }
}

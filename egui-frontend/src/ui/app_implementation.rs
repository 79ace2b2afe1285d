use eframe::egui;
use std::time::Instant;

use crate::ui::app_state::SignupApp;
use crate::ui::components::theme::CURRENT_THEME;

impl eframe::App for SignupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.notifications.tick(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_shell(ui);
        });

        self.render_signup_modal(ctx);
        self.render_notification_banner(ctx);

        // Wake up again when the notification is due to hide
        if let Some(remaining) = self.notifications.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

impl SignupApp {
    /// Render the landing view with the trigger button
    fn render_shell(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space((ui.available_height() / 2.0 - 60.0).max(24.0));

            ui.label(
                egui::RichText::new("Signup Form Demo")
                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(CURRENT_THEME.typography.heading),
            );

            ui.add_space(24.0);

            let button = egui::Button::new(
                egui::RichText::new("Sign up")
                    .strong()
                    .color(CURRENT_THEME.typography.white),
            )
            .fill(CURRENT_THEME.interactive.primary)
            .min_size(egui::vec2(240.0, 40.0));

            if ui.add_enabled(!self.modal.is_open(), button).clicked() {
                self.open_signup();
            }
        });
    }
}

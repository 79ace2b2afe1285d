//! # Notification Banner
//!
//! Top-centred, filled banner for the current notification with a close
//! button. Expiry is handled by `NotificationSlot::tick` in the frame update.

use eframe::egui;
use shared::Severity;

use crate::ui::app_state::SignupApp;
use crate::ui::components::theme::CURRENT_THEME;

pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✔",
        Severity::Info => "ℹ",
        Severity::Warning => "⚠",
        Severity::Error => "❌",
    }
}

impl SignupApp {
    pub fn render_notification_banner(&mut self, ctx: &egui::Context) {
        let Some(notification) = self.notifications.current() else {
            return;
        };

        let fill = CURRENT_THEME.severity_color(notification.severity);
        let icon = severity_icon(notification.severity);
        let message = notification.message.clone();
        let text_color = CURRENT_THEME.typography.white;
        let mut close_clicked = false;

        egui::Area::new(egui::Id::new("notification_banner"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(fill)
                    .rounding(egui::Rounding::same(6.0))
                    .inner_margin(egui::Margin::symmetric(16.0, 10.0))
                    .shadow(egui::Shadow {
                        offset: egui::vec2(0.0, 4.0),
                        blur: 12.0,
                        spread: 0.0,
                        color: CURRENT_THEME.layout.card_shadow,
                    })
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(icon).color(text_color));
                            ui.label(egui::RichText::new(message).strong().color(text_color));
                            ui.add_space(12.0);
                            let close = egui::Button::new(egui::RichText::new("✖").color(text_color))
                                .frame(false);
                            if ui.add(close).on_hover_text("Close").clicked() {
                                close_clicked = true;
                            }
                        });
                    });
            });

        if close_clicked {
            self.notifications.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_icon() {
        assert_eq!(severity_icon(Severity::Success), "✔");
        assert_eq!(severity_icon(Severity::default()), "✔");
    }
}

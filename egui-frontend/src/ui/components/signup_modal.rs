//! # Signup Modal
//!
//! Hosts the signup form in a centred dialog over a dimmed backdrop.
//!
//! ## Responsibilities:
//! - Paint the backdrop and route its clicks through `ModalState::dismiss`,
//!   which ignores them
//! - Close on Escape or on the form's close action
//! - Hand submit requests to the shell

use eframe::egui;
use shared::DismissReason;
use std::time::Instant;

use crate::ui::app_state::SignupApp;
use crate::ui::components::theme::CURRENT_THEME;

/// Styling for the signup dialog frame
pub struct SignupModalStyle {
    pub modal_width: f32,
    pub border_color: egui::Color32,
    pub background_color: egui::Color32,
    pub rounding: f32,
    pub margin: f32,
}

impl SignupModalStyle {
    pub fn default_style() -> Self {
        Self {
            modal_width: 460.0,
            border_color: CURRENT_THEME.layout.card_border,
            background_color: CURRENT_THEME.layout.card_background,
            rounding: 10.0,
            margin: 24.0,
        }
    }

    pub fn apply_frame_styling(&self) -> egui::Frame {
        egui::Frame::window(&egui::Style::default())
            .fill(self.background_color)
            .stroke(egui::Stroke::new(1.0, self.border_color))
            .rounding(egui::Rounding::same(self.rounding))
            .inner_margin(egui::Margin::same(self.margin))
            .shadow(egui::Shadow {
                offset: egui::vec2(0.0, 8.0),
                blur: 24.0,
                spread: 0.0,
                color: CURRENT_THEME.layout.card_shadow,
            })
    }
}

impl SignupApp {
    /// Render the signup dialog if it is open
    pub fn render_signup_modal(&mut self, ctx: &egui::Context) {
        if !self.modal.is_open() {
            return;
        }

        // Dimmed backdrop covering the shell
        let backdrop = egui::Area::new(egui::Id::new("signup_modal_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.painter()
                    .rect_filled(screen_rect, egui::Rounding::ZERO, CURRENT_THEME.layout.backdrop);
                ui.allocate_rect(screen_rect, egui::Sense::click())
            })
            .inner;

        if backdrop.clicked() {
            self.dismiss_signup(DismissReason::BackdropClick);
        }

        let style = SignupModalStyle::default_style();
        let mut action = None;

        egui::Area::new(egui::Id::new("signup_modal"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                style.apply_frame_styling().show(ui, |ui| {
                    ui.set_width(style.modal_width);
                    action = self.render_signup_form(ui);
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dismiss_signup(DismissReason::EscapeKey);
        }

        if let Some(action) = action {
            self.handle_form_action(action, Instant::now());
        }
    }
}

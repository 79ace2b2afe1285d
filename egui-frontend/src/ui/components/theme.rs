//! # Theme Configuration
//!
//! Centralized colors for the signup app. Visual styling should use these
//! constants rather than inline colors.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::CURRENT_THEME;
//!
//! let color = CURRENT_THEME.feedback.error;
//! ```

use eframe::egui::{self, Color32};
use shared::Severity;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Buttons and focused inputs
    pub interactive: InteractiveColors,
    /// Backgrounds, cards and the modal backdrop
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
    /// Validation and notification colors
    pub feedback: FeedbackColors,
}

#[derive(Debug, Clone)]
pub struct InteractiveColors {
    pub primary: Color32,
    pub primary_disabled: Color32,
    pub input_background: Color32,
    pub input_border: Color32,
}

#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub app_background: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    pub card_shadow: Color32,
    pub backdrop: Color32,
}

#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub heading: Color32,
    pub white: Color32,
}

#[derive(Debug, Clone)]
pub struct FeedbackColors {
    pub error: Color32,
    pub success: Color32,
    pub info: Color32,
    pub warning: Color32,
}

/// The current active theme
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        primary: Color32::from_rgb(25, 118, 210),
        primary_disabled: Color32::from_rgb(200, 200, 200),
        input_background: Color32::from_rgb(250, 250, 250),
        input_border: Color32::from_rgb(190, 190, 190),
    },
    layout: LayoutColors {
        app_background: Color32::from_rgb(245, 246, 250),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(220, 220, 220),
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 60),
        backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 128),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(40, 40, 40),
        secondary: Color32::from_rgb(110, 110, 110),
        heading: Color32::from_rgb(30, 30, 30),
        white: Color32::WHITE,
    },
    feedback: FeedbackColors {
        error: Color32::from_rgb(211, 47, 47),
        success: Color32::from_rgb(46, 125, 50),
        info: Color32::from_rgb(2, 136, 209),
        warning: Color32::from_rgb(237, 108, 2),
    },
};

impl Theme {
    /// Filled background for a notification of the given severity
    pub fn severity_color(&self, severity: Severity) -> Color32 {
        match severity {
            Severity::Success => self.feedback.success,
            Severity::Info => self.feedback.info,
            Severity::Warning => self.feedback.warning,
            Severity::Error => self.feedback.error,
        }
    }
}

/// Apply the app-wide egui style
pub fn setup_signup_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = CURRENT_THEME.layout.app_background;
        // In egui 0.28, text edits use extreme_bg_color
        style.visuals.extreme_bg_color = CURRENT_THEME.interactive.input_background;
        style.visuals.widgets.inactive.bg_stroke =
            egui::Stroke::new(1.0, CURRENT_THEME.interactive.input_border);
        style.visuals.selection.stroke = egui::Stroke::new(1.5, CURRENT_THEME.interactive.primary);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);

        style
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors_are_distinct() {
        let colors = [
            CURRENT_THEME.severity_color(Severity::Success),
            CURRENT_THEME.severity_color(Severity::Info),
            CURRENT_THEME.severity_color(Severity::Warning),
            CURRENT_THEME.severity_color(Severity::Error),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}

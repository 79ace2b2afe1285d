//! # UI Components Module
//!
//! ## Module Organization:
//! - `theme` - Colors and the app-wide egui style
//! - `form_field` - Labelled input with helper/error text
//! - `signup_form` - Field grid and submit button
//! - `signup_modal` - Dialog host and backdrop handling
//! - `notification_banner` - Auto-hiding notification banner

pub mod form_field;
pub mod notification_banner;
pub mod signup_form;
pub mod signup_modal;
pub mod theme;

pub use signup_form::FormAction;
pub use theme::*;

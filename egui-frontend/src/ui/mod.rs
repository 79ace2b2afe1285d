//! # UI Module
//!
//! Everything egui-specific: the application state, the `eframe::App`
//! implementation and the rendering components.

pub mod app_implementation;
pub mod app_state;
pub mod components;

pub use app_state::*;
pub use components::*;

//! # App State Module
//!
//! Central state of the signup app and the shell-level transitions between
//! the trigger button, the dialog and the notification.
//!
//! ## Key Types:
//! - `SignupApp` - Main application struct
//!
//! ## Key Functions:
//! - `open_signup()` / `close_signup()` - Dialog visibility
//! - `dismiss_signup()` - Dismiss attempts (backdrop clicks are ignored)
//! - `handle_form_action()` - Requests coming back from the form
//!
//! Closing the dialog drops the form state, so reopening starts from an
//! empty form. The notification lives at app level and outlives the dialog.

use log::info;
use shared::{DismissReason, ModalState, NotificationSlot, SignupForm, SubmitOutcome};
use std::time::Instant;

use crate::config::AppConfig;
use crate::ui::components::FormAction;

/// Main application struct for the egui signup app
pub struct SignupApp {
    pub config: AppConfig,
    pub modal: ModalState,
    pub form: SignupForm,
    pub notifications: NotificationSlot,
}

impl SignupApp {
    pub fn new(config: AppConfig) -> Self {
        info!("🚀 Initializing SignupApp");
        let form = SignupForm::with_settings(&config.form);
        let notifications = NotificationSlot::new(config.notification.auto_hide());
        Self {
            config,
            modal: ModalState::new(),
            form,
            notifications,
        }
    }

    pub fn open_signup(&mut self) {
        self.modal.open();
    }

    pub fn close_signup(&mut self) {
        self.modal.close();
        self.reset_form();
    }

    pub fn dismiss_signup(&mut self, reason: DismissReason) {
        if self.modal.dismiss(reason) {
            self.reset_form();
        }
    }

    pub fn handle_form_action(&mut self, action: FormAction, now: Instant) {
        match action {
            FormAction::Close => self.close_signup(),
            FormAction::Submit => {
                self.submit_signup(now);
            }
        }
    }

    /// Submit the form; a successful signup raises the success notification
    pub fn submit_signup(&mut self, now: Instant) -> SubmitOutcome {
        let outcome = self.form.submit();
        if outcome == SubmitOutcome::Accepted {
            let message = self.config.form.success_message.clone();
            self.notifications.open(message, None, now);
        }
        outcome
    }

    fn reset_form(&mut self) {
        self.form = SignupForm::with_settings(&self.config.form);
    }
}

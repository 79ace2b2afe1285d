//! # Modal State
//!
//! Visibility of the signup dialog. Backdrop clicks never close it; only a
//! deliberate close action (close icon, the form's close request or Escape)
//! does.

use log::{debug, info};

/// Why the dialog was asked to close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    BackdropClick,
    EscapeKey,
    CloseButton,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        info!("📋 Opening signup dialog");
        self.open = true;
    }

    pub fn close(&mut self) {
        if self.open {
            info!("📋 Closing signup dialog");
        }
        self.open = false;
    }

    /// Handle a dismiss attempt. Returns true if the dialog closed.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if !self.open {
            return false;
        }
        match reason {
            DismissReason::BackdropClick => {
                debug!("📋 Ignoring backdrop click on signup dialog");
                false
            }
            DismissReason::EscapeKey | DismissReason::CloseButton => {
                self.close();
                true
            }
        }
    }
}

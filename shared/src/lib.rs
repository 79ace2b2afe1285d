//! Domain model for the signup dialog: the static field table, per-field
//! validators, the form state machine, the notification slot and the modal
//! visibility state. Nothing in this crate renders anything.

pub mod error;
pub mod fields;
pub mod form;
pub mod modal;
pub mod notification;
pub mod settings;
pub mod validators;

pub use error::{ErrorKind, ValidationError};
pub use fields::{layout_rows, FieldDefinition, FieldId, FieldValues, InputKind, FIELDS, GRID_COLUMNS};
pub use form::{SignupForm, SubmitOutcome, DEPENDENCIES};
pub use modal::{DismissReason, ModalState};
pub use notification::{Notification, NotificationSlot, Severity, DEFAULT_AUTO_HIDE};
pub use settings::{FormSettings, InputTransform, NotificationSettings};

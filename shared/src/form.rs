//! # Signup Form State Machine
//!
//! Owns field values, per-field errors and the success flag, and runs the
//! validators in response to change, blur and submit events.
//!
//! ## Key Types:
//! - `SignupForm` - The form state and its event handlers
//! - `SubmitOutcome` - Result of a submit attempt
//! - `DEPENDENCIES` - Cross-field revalidation edges
//!
//! ## Event Rules:
//! - blur: revalidate the field, then its touched dependents
//! - change: store the value; revalidate the field only if it already shows
//!   an error; always revalidate touched dependents
//! - submit: validate every field in declaration order, requiring values
//!   for required fields, and either reject (focusing the first invalid
//!   field) or mark the signup as successful
//!
//! Rendering is not involved here, so every rule is testable on its own.

use log::{debug, info, warn};
use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::fields::{FieldId, FieldValues, FIELDS};
use crate::settings::{FormSettings, InputTransform};

/// Revalidation edges: when the first field is revalidated, the second is
/// revalidated too if it has been touched.
pub static DEPENDENCIES: &[(FieldId, FieldId)] = &[(FieldId::UserPw, FieldId::UserPwConfirm)];

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid; the form is now in its success state
    Accepted,
    /// At least one field has an error; focus belongs on `first_invalid`
    Rejected { first_invalid: FieldId },
    /// The form was already submitted successfully
    Ignored,
}

#[derive(Debug, Clone, Default)]
struct Values(BTreeMap<FieldId, String>);

impl FieldValues for Values {
    fn value(&self, field: FieldId) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }
}

/// Signup form state
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    values: Values,
    errors: BTreeMap<FieldId, ValidationError>,
    succeeded: bool,
    focus_request: Option<FieldId>,
    transform: InputTransform,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &FormSettings) -> Self {
        Self {
            transform: settings.input_transform,
            ..Self::default()
        }
    }

    /// Current value of a field (empty if never written)
    pub fn value(&self, field: FieldId) -> &str {
        self.values.value(field)
    }

    /// Current error of a field, if any
    pub fn error(&self, field: FieldId) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn has_error(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    /// Fields with an error, in declaration order
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        FIELDS
            .iter()
            .map(|def| def.id)
            .filter(|id| self.has_error(*id))
            .collect()
    }

    /// A field counts as touched while it holds a value
    pub fn is_touched(&self, field: FieldId) -> bool {
        !self.value(field).is_empty()
    }

    pub fn is_succeeded(&self) -> bool {
        self.succeeded
    }

    /// Inputs and the submit button are disabled once the signup succeeded
    pub fn is_disabled(&self) -> bool {
        self.succeeded
    }

    pub fn submit_label(&self) -> &'static str {
        if self.succeeded {
            "Signed up"
        } else {
            "Sign up"
        }
    }

    /// Text shown under a field: its error, else its default helper text
    pub fn helper_text(&self, field: FieldId) -> Option<String> {
        match self.error(field) {
            Some(error) => Some(error.to_string()),
            None => field.definition().default_msg.map(str::to_owned),
        }
    }

    /// Hand the pending focus target to the renderer. Returns it only once.
    pub fn take_focus_request(&mut self) -> Option<FieldId> {
        self.focus_request.take()
    }

    /// Handle a keystroke-level change of a field value
    pub fn change(&mut self, field: FieldId, value: impl Into<String>) {
        if self.succeeded {
            debug!("✋ Ignoring change of {} after successful signup", field);
            return;
        }

        let value = self.transform.apply(value.into());
        self.values.0.insert(field, value);

        if self.has_error(field) {
            self.validate_field(field);
        } else {
            self.revalidate_dependents(field);
        }
    }

    /// Handle a field losing focus
    pub fn blur(&mut self, field: FieldId) {
        if self.succeeded {
            return;
        }
        self.validate_field(field);
    }

    /// Validate every field and either reject or accept the signup
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.succeeded {
            debug!("✋ Ignoring submit after successful signup");
            return SubmitOutcome::Ignored;
        }

        let mut errors = BTreeMap::new();
        for def in FIELDS.iter() {
            let value = self.value(def.id);
            if value.is_empty() {
                if def.required {
                    errors.insert(def.id, ValidationError::required(def.id));
                }
                continue;
            }
            if let Some(error) = (def.validator)(value, &self.values) {
                errors.insert(def.id, error);
            }
        }
        self.errors = errors;

        let first_invalid = FIELDS.iter().map(|def| def.id).find(|id| self.has_error(*id));
        match first_invalid {
            Some(first_invalid) => {
                warn!(
                    "📝 Signup rejected: {} invalid field(s), focusing {}",
                    self.errors.len(),
                    first_invalid
                );
                self.focus_request = Some(first_invalid);
                SubmitOutcome::Rejected { first_invalid }
            }
            None => {
                info!("✅ Signup accepted");
                self.succeeded = true;
                SubmitOutcome::Accepted
            }
        }
    }

    /// Recompute the error for one field, then cascade to its dependents
    fn validate_field(&mut self, field: FieldId) {
        self.store_error(field);
        self.revalidate_dependents(field);
    }

    fn revalidate_dependents(&mut self, field: FieldId) {
        let dependents: Vec<FieldId> = DEPENDENCIES
            .iter()
            .filter(|(source, _)| *source == field)
            .map(|(_, dependent)| *dependent)
            .filter(|dependent| self.is_touched(*dependent))
            .collect();

        for dependent in dependents {
            debug!("🔗 {} changed, revalidating {}", field, dependent);
            self.validate_field(dependent);
        }
    }

    fn store_error(&mut self, field: FieldId) {
        let value = self.value(field);
        let error = if value.is_empty() {
            None
        } else {
            (field.definition().validator)(value, &self.values)
        };

        match error {
            Some(error) => {
                debug!("❌ {}: {}", field, error);
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn error_kind(form: &SignupForm, field: FieldId) -> Option<ErrorKind> {
        form.error(field).map(|e| e.kind)
    }

    fn filled_form() -> SignupForm {
        let mut form = SignupForm::new();
        form.change(FieldId::UserId, "user1");
        form.change(FieldId::UserPw, "abc123!@");
        form.change(FieldId::UserPwConfirm, "abc123!@");
        form
    }

    #[test]
    fn test_blur_validates_field() {
        let mut form = SignupForm::new();
        form.change(FieldId::UserId, "abc");
        assert!(!form.has_error(FieldId::UserId), "no error before the first blur");

        form.blur(FieldId::UserId);
        assert_eq!(error_kind(&form, FieldId::UserId), Some(ErrorKind::InvalidLength));
    }

    #[test]
    fn test_blur_on_empty_field_clears_error() {
        let mut form = SignupForm::new();
        form.blur(FieldId::UserId);
        assert!(!form.has_error(FieldId::UserId));
    }

    #[test]
    fn test_change_revalidates_only_fields_with_errors() {
        let mut form = SignupForm::new();
        form.change(FieldId::UserEmail, "a@b");
        assert!(!form.has_error(FieldId::UserEmail));

        form.blur(FieldId::UserEmail);
        assert_eq!(error_kind(&form, FieldId::UserEmail), Some(ErrorKind::InvalidFormat));

        form.change(FieldId::UserEmail, "a@b.com");
        assert!(!form.has_error(FieldId::UserEmail));

        form.change(FieldId::UserEmail, "a@b.co@");
        assert!(!form.has_error(FieldId::UserEmail), "valid field is not re-nagged on change");
    }

    #[test]
    fn test_password_change_revalidates_touched_confirm() {
        let mut form = SignupForm::new();
        form.change(FieldId::UserPw, "abc123!@");
        form.change(FieldId::UserPwConfirm, "abc123!@");
        form.blur(FieldId::UserPwConfirm);
        assert!(!form.has_error(FieldId::UserPwConfirm));

        form.change(FieldId::UserPw, "abc123!#");
        assert_eq!(
            error_kind(&form, FieldId::UserPwConfirm),
            Some(ErrorKind::PasswordMismatch)
        );
        assert!(!form.has_error(FieldId::UserPw));

        form.change(FieldId::UserPw, "abc123!@");
        assert!(!form.has_error(FieldId::UserPwConfirm));
    }

    #[test]
    fn test_password_change_skips_untouched_confirm() {
        let mut form = SignupForm::new();
        form.change(FieldId::UserPw, "abc123!@");
        form.blur(FieldId::UserPw);
        assert!(!form.is_touched(FieldId::UserPwConfirm));
        assert!(!form.has_error(FieldId::UserPwConfirm));
    }

    #[test]
    fn test_password_blur_cascades_to_confirm() {
        let mut form = SignupForm::new();
        form.change(FieldId::UserPwConfirm, "abc123!@");
        form.change(FieldId::UserPw, "short");
        form.blur(FieldId::UserPw);

        assert_eq!(error_kind(&form, FieldId::UserPw), Some(ErrorKind::InvalidFormat));
        assert_eq!(
            error_kind(&form, FieldId::UserPwConfirm),
            Some(ErrorKind::PasswordMismatch)
        );
    }

    #[test]
    fn test_submit_all_empty_rejected() {
        let mut form = SignupForm::new();
        let outcome = form.submit();

        assert_eq!(outcome, SubmitOutcome::Rejected { first_invalid: FieldId::UserId });
        assert_eq!(
            form.invalid_fields(),
            vec![FieldId::UserId, FieldId::UserPw, FieldId::UserPwConfirm]
        );
        assert_eq!(error_kind(&form, FieldId::UserId), Some(ErrorKind::Required));
        assert!(!form.has_error(FieldId::UserEmail));
        assert_eq!(form.take_focus_request(), Some(FieldId::UserId));
        assert_eq!(form.take_focus_request(), None);
        assert!(!form.is_succeeded());
        assert_eq!(form.submit_label(), "Sign up");
    }

    #[test]
    fn test_submit_focuses_first_invalid_in_declaration_order() {
        let mut form = SignupForm::new();
        form.change(FieldId::UserId, "user1");
        form.change(FieldId::UserPw, "abc123!@");
        form.change(FieldId::UserPwConfirm, "abc123!#");
        form.change(FieldId::UserEmail, "nope");

        let outcome = form.submit();
        assert_eq!(outcome, SubmitOutcome::Rejected { first_invalid: FieldId::UserPwConfirm });
        assert_eq!(form.invalid_fields(), vec![FieldId::UserPwConfirm, FieldId::UserEmail]);
    }

    #[test]
    fn test_submit_format_error_overrides_required() {
        let mut form = SignupForm::new();
        form.change(FieldId::UserId, "ab");
        form.submit();
        assert_eq!(error_kind(&form, FieldId::UserId), Some(ErrorKind::InvalidLength));
    }

    #[test]
    fn test_submit_valid_form_accepted() {
        let mut form = filled_form();
        let outcome = form.submit();

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert!(form.is_succeeded());
        assert!(form.is_disabled());
        assert!(form.invalid_fields().is_empty());
        assert_eq!(form.submit_label(), "Signed up");
        assert_eq!(form.take_focus_request(), None);
    }

    #[test]
    fn test_events_after_success_are_ignored() {
        let mut form = filled_form();
        assert_eq!(form.submit(), SubmitOutcome::Accepted);

        form.change(FieldId::UserId, "x");
        form.blur(FieldId::UserId);
        assert_eq!(form.value(FieldId::UserId), "user1");
        assert!(!form.has_error(FieldId::UserId));
        assert_eq!(form.submit(), SubmitOutcome::Ignored);
    }

    #[test]
    fn test_helper_text_prefers_error_over_default() {
        let mut form = SignupForm::new();
        assert_eq!(
            form.helper_text(FieldId::UserPw).as_deref(),
            Some("8+ characters including letters, numbers and symbols.")
        );
        assert_eq!(form.helper_text(FieldId::UserId), None);

        form.submit();
        assert_eq!(form.helper_text(FieldId::UserId).as_deref(), Some("User ID is required."));
    }

    #[test]
    fn test_values_kept_verbatim_by_default() {
        let mut form = SignupForm::new();
        form.change(FieldId::UserEmail, "Mixed@Case.com");
        assert_eq!(form.value(FieldId::UserEmail), "Mixed@Case.com");
    }

    #[test]
    fn test_uppercase_transform_opt_in() {
        let settings = FormSettings {
            input_transform: InputTransform::Uppercase,
            ..FormSettings::default()
        };
        let mut form = SignupForm::with_settings(&settings);
        form.change(FieldId::UserId, "user1");
        assert_eq!(form.value(FieldId::UserId), "USER1");
    }
}

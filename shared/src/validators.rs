//! # Field Validators
//!
//! One pure function per field. Each returns `None` when the value is valid
//! or empty; required-ness is enforced by the form at submit time.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ErrorKind, ValidationError};
use crate::fields::FieldId;

pub const USER_ID_MIN_LEN: usize = 5;
pub const USER_PW_MIN_LEN: usize = 8;

/// Line terminators; a password must stay on one line
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

static USER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid user id regex"));

static LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("valid letter regex"));

static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("valid digit regex"));

// Anything that is neither an ASCII word character nor whitespace
static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("valid symbol regex"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// User id: at least 5 characters, ASCII letters and digits only
pub fn validate_user_id(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return None;
    }
    if value.chars().count() < USER_ID_MIN_LEN {
        return Some(ValidationError::new(FieldId::UserId, ErrorKind::InvalidLength));
    }
    if !USER_ID_RE.is_match(value) {
        return Some(ValidationError::new(FieldId::UserId, ErrorKind::InvalidFormat));
    }
    None
}

/// Password: at least 8 characters with a letter, a digit and a symbol
pub fn validate_user_pw(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return None;
    }
    let strong = value.chars().count() >= USER_PW_MIN_LEN
        && !value.contains(LINE_TERMINATORS)
        && LETTER_RE.is_match(value)
        && DIGIT_RE.is_match(value)
        && SYMBOL_RE.is_match(value);

    if strong {
        None
    } else {
        Some(ValidationError::new(FieldId::UserPw, ErrorKind::InvalidFormat))
    }
}

/// Password confirmation: must equal the current password exactly
pub fn validate_user_pw_confirm(value: &str, user_pw: &str) -> Option<ValidationError> {
    if value.is_empty() || value == user_pw {
        return None;
    }
    Some(ValidationError::new(FieldId::UserPwConfirm, ErrorKind::PasswordMismatch))
}

/// Email: `local@domain.tld` with a dotted domain and a TLD of 2+ letters
pub fn validate_user_email(value: &str) -> Option<ValidationError> {
    if value.is_empty() || EMAIL_RE.is_match(value) {
        return None;
    }
    Some(ValidationError::new(FieldId::UserEmail, ErrorKind::InvalidFormat))
}

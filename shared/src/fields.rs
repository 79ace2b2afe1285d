//! # Field Definitions
//!
//! Static table describing every input of the signup form.
//!
//! ## Key Types:
//! - `FieldId` - Identifier of one form input
//! - `InputKind` - Plain text or masked password input
//! - `FieldDefinition` - Label, kind, required flag, layout weight and validator
//!
//! ## Purpose:
//! The field list is declarative data. Adding or removing an input only
//! touches `FIELDS`; the orchestration in `form.rs` iterates this table and
//! never names individual fields.

use std::fmt;

use crate::error::ValidationError;
use crate::validators;

/// Number of layout units in one form row
pub const GRID_COLUMNS: u8 = 12;

/// Identifier of a signup form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    UserId,
    UserPw,
    UserPwConfirm,
    UserEmail,
}

impl FieldId {
    /// Stable name used in logs and widget ids
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::UserId => "userId",
            FieldId::UserPw => "userPw",
            FieldId::UserPwConfirm => "userPwConfirm",
            FieldId::UserEmail => "userEmail",
        }
    }

    /// Position of this field in `FIELDS`
    pub fn index(&self) -> usize {
        match self {
            FieldId::UserId => 0,
            FieldId::UserPw => 1,
            FieldId::UserPwConfirm => 2,
            FieldId::UserEmail => 3,
        }
    }

    /// Look up the static definition of this field
    pub fn definition(&self) -> &'static FieldDefinition {
        &FIELDS[self.index()]
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an input renders its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
}

/// Validator signature: the field's own value plus read access to the whole form
pub type Validator = fn(&str, &dyn FieldValues) -> Option<ValidationError>;

/// Read-only view of the current form values, used by cross-field validators
pub trait FieldValues {
    fn value(&self, field: FieldId) -> &str;
}

/// Static descriptor of one form input
#[derive(Clone, Copy)]
pub struct FieldDefinition {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
    /// Width in grid units out of `GRID_COLUMNS`
    pub grid_size: u8,
    /// Helper text shown while the field has no error
    pub default_msg: Option<&'static str>,
    pub validator: Validator,
}

impl fmt::Debug for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("grid_size", &self.grid_size)
            .finish_non_exhaustive()
    }
}

impl FieldDefinition {
    pub fn is_password(&self) -> bool {
        self.kind == InputKind::Password
    }
}

/// Every form input, in declaration order
pub static FIELDS: [FieldDefinition; 4] = [
    FieldDefinition {
        id: FieldId::UserId,
        label: "User ID",
        kind: InputKind::Text,
        required: true,
        grid_size: 12,
        default_msg: None,
        validator: |value, _| validators::validate_user_id(value),
    },
    FieldDefinition {
        id: FieldId::UserPw,
        label: "Password",
        kind: InputKind::Password,
        required: true,
        grid_size: 6,
        default_msg: Some("8+ characters including letters, numbers and symbols."),
        validator: |value, _| validators::validate_user_pw(value),
    },
    FieldDefinition {
        id: FieldId::UserPwConfirm,
        label: "Confirm Password",
        kind: InputKind::Password,
        required: true,
        grid_size: 6,
        default_msg: None,
        validator: |value, values| {
            validators::validate_user_pw_confirm(value, values.value(FieldId::UserPw))
        },
    },
    FieldDefinition {
        id: FieldId::UserEmail,
        label: "Email",
        kind: InputKind::Text,
        required: false,
        grid_size: 12,
        default_msg: None,
        validator: |value, _| validators::validate_user_email(value),
    },
];

/// Group field definitions into rows of at most `GRID_COLUMNS` units,
/// filling rows in declaration order.
pub fn layout_rows(fields: &[FieldDefinition]) -> Vec<Vec<&FieldDefinition>> {
    let mut rows: Vec<Vec<&FieldDefinition>> = Vec::new();
    let mut used = 0u8;

    for field in fields {
        let size = field.grid_size.clamp(1, GRID_COLUMNS);
        match rows.last_mut() {
            Some(row) if used + size <= GRID_COLUMNS => {
                row.push(field);
                used += size;
            }
            _ => {
                rows.push(vec![field]);
                used = size;
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_table_order_and_flags() {
        let ids: Vec<FieldId> = FIELDS.iter().map(|f| f.id).collect();
        assert_eq!(
            ids,
            vec![FieldId::UserId, FieldId::UserPw, FieldId::UserPwConfirm, FieldId::UserEmail]
        );

        assert!(FieldId::UserId.definition().required);
        assert!(FieldId::UserPwConfirm.definition().required);
        assert!(!FieldId::UserEmail.definition().required);
        assert!(FieldId::UserPw.definition().is_password());
        assert!(!FieldId::UserEmail.definition().is_password());
    }

    #[test]
    fn test_definition_lookup_matches_id() {
        for def in FIELDS.iter() {
            assert_eq!(def.id.definition().id, def.id);
        }
    }

    #[test]
    fn test_layout_rows_pairs_password_fields() {
        let rows = layout_rows(&FIELDS);
        let ids: Vec<Vec<FieldId>> = rows
            .iter()
            .map(|row| row.iter().map(|f| f.id).collect())
            .collect();

        assert_eq!(
            ids,
            vec![
                vec![FieldId::UserId],
                vec![FieldId::UserPw, FieldId::UserPwConfirm],
                vec![FieldId::UserEmail],
            ]
        );
    }

    #[test]
    fn test_field_id_names_are_camel_case() {
        assert_eq!(FieldId::UserPwConfirm.as_str(), "userPwConfirm");
        assert_eq!(FieldId::UserEmail.to_string(), "userEmail");
    }
}

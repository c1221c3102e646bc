//! Whole-form check reports

use serde::Serialize;

use crate::core::ErrorRecord;
use crate::field::FieldId;

/// One field's result within a [`FormReport`].
#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    /// Canonical field id.
    pub id: FieldId,
    /// All collected errors, required first. Empty when the field passed.
    pub errors: Vec<ErrorRecord>,
}

impl FieldReport {
    /// The headline error — the one a single-message UI slot shows.
    #[must_use]
    pub fn headline(&self) -> Option<&ErrorRecord> {
        self.errors.first()
    }
}

/// The outcome of a whole-form check.
#[derive(Debug, Clone, Serialize)]
pub struct FormReport {
    /// Per-field results, in check order.
    pub fields: Vec<FieldReport>,
    /// True when no field and no global predicate recorded an error.
    pub form_valid: bool,
    /// The first field (in check order) carrying an error, for UI focus.
    pub first_invalid: Option<FieldId>,
}

impl FormReport {
    /// Looks up one field's errors by canonical id.
    #[must_use]
    pub fn errors_for(&self, id: &str) -> Option<&[ErrorRecord]> {
        self.fields
            .iter()
            .find(|field| field.id.as_str() == id)
            .map(|field| field.errors.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn headline_is_first_error() {
        let report = FieldReport {
            id: FieldId::resolve("email"),
            errors: vec![
                ErrorRecord::new(ErrorKind::Required, "Please fill out this field"),
                ErrorRecord::new(ErrorKind::Email, "Please enter a valid email address"),
            ],
        };
        assert_eq!(report.headline().unwrap().kind, ErrorKind::Required);
    }

    #[test]
    fn errors_for_finds_fields_by_id() {
        let report = FormReport {
            fields: vec![FieldReport {
                id: FieldId::resolve("user.email"),
                errors: vec![],
            }],
            form_valid: true,
            first_invalid: None,
        };
        assert!(report.errors_for("userEmail").unwrap().is_empty());
        assert!(report.errors_for("missing").is_none());
    }
}

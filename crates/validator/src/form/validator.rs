//! The form validator
//!
//! One `FormValidator` per form instance: it owns the message table, the
//! custom-validator registry, the optional global predicate and the error
//! state. All methods are synchronous and non-blocking; the engine is
//! driven by explicit calls from whatever event model the embedding UI
//! uses.

use std::collections::HashMap;
use std::fmt;

use smallvec::smallvec;
use tracing::debug;

use super::report::{FieldReport, FormReport};
use super::state::ErrorState;
use crate::checks;
use crate::core::{ErrorKind, ErrorRecord, MessageTable};
use crate::field::{FieldDescriptor, FieldId};

/// Optional per-field validator: called with the field and the errors
/// collected so far; a returned non-empty string is appended as a
/// `custom` error.
type CustomValidator = Box<dyn Fn(&FieldDescriptor, &[ErrorRecord]) -> Option<String> + Send + Sync>;

/// Optional whole-form predicate, consulted on top of the per-field
/// verdicts. Defaults to always-true.
type GlobalPredicate = Box<dyn Fn(&ErrorState) -> bool + Send + Sync>;

/// Aggregates per-field checks into a form-validity verdict.
///
/// # Examples
///
/// ```rust
/// use proforma_validator::prelude::*;
///
/// let mut form = FormValidator::new();
/// let name = FieldDescriptor::new(
///     "name",
///     FieldType::Text,
///     FieldValue::Missing,
///     Attributes::new().required(),
/// )?;
///
/// let report = form.check_all(&[name]);
/// assert!(!report.form_valid);
/// assert_eq!(report.first_invalid.as_ref().unwrap().as_str(), "name");
/// # Ok::<(), proforma_validator::field::DescriptorError>(())
/// ```
#[derive(Default)]
pub struct FormValidator {
    messages: MessageTable,
    custom: HashMap<FieldId, CustomValidator>,
    predicate: Option<GlobalPredicate>,
    state: ErrorState,
}

impl FormValidator {
    /// Creates a validator with the default English messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom message table.
    #[must_use]
    pub fn with_messages(messages: MessageTable) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// The active message table.
    #[must_use]
    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    /// Mutable access to the message table, for per-key overrides.
    pub fn messages_mut(&mut self) -> &mut MessageTable {
        &mut self.messages
    }

    /// Registers a custom validator for the field named `raw_name`
    /// (resolved to its canonical id), replacing any previous one.
    pub fn set_custom_validator<F>(&mut self, raw_name: &str, validator: F)
    where
        F: Fn(&FieldDescriptor, &[ErrorRecord]) -> Option<String> + Send + Sync + 'static,
    {
        self.custom
            .insert(FieldId::resolve(raw_name), Box::new(validator));
    }

    /// Installs the global validity predicate (default: always true).
    pub fn set_global_predicate<F>(&mut self, predicate: F)
    where
        F: Fn(&ErrorState) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(predicate));
    }

    /// Checks one field: runs the full pipeline, appends the field's
    /// custom error (if a registered validator returns one), records the
    /// verdict in the error state and returns the collected errors.
    ///
    /// Checking the same field twice with an unchanged snapshot yields
    /// identical results.
    pub fn check_field(&mut self, field: &FieldDescriptor) -> Vec<ErrorRecord> {
        let mut errors = checks::run_checks(field, &self.messages);

        if let Some(validator) = self.custom.get(field.id()) {
            if let Some(message) = validator(field, &errors) {
                if !message.is_empty() {
                    errors.push(
                        self.messages
                            .build(ErrorKind::Custom, smallvec![("message".into(), message.into())]),
                    );
                }
            }
        }

        debug!(field = %field.id(), errors = errors.len(), "field checked");
        self.state.set(field.id().clone(), !errors.is_empty());
        errors
    }

    /// Checks every field, evaluates the global predicate, records its
    /// verdict under the reserved pseudo-key and reports the outcome.
    pub fn check_all(&mut self, fields: &[FieldDescriptor]) -> FormReport {
        let mut reports = Vec::with_capacity(fields.len());
        let mut first_invalid = None;

        for field in fields {
            let errors = self.check_field(field);
            if first_invalid.is_none() && !errors.is_empty() {
                first_invalid = Some(field.id().clone());
            }
            reports.push(FieldReport {
                id: field.id().clone(),
                errors,
            });
        }

        // The predicate sees the fresh per-field verdicts, never its own
        // previous answer.
        self.state.set(FieldId::resolve(ErrorState::GLOBAL), false);
        let predicate_ok = self.predicate.as_ref().is_none_or(|p| p(&self.state));
        self.state
            .set(FieldId::resolve(ErrorState::GLOBAL), !predicate_ok);

        let form_valid = !self.state.has_errors();
        debug!(
            fields = fields.len(),
            form_valid, "form checked"
        );

        FormReport {
            fields: reports,
            form_valid,
            first_invalid,
        }
    }

    /// True iff every recorded verdict is error-free and the global
    /// predicate accepts the current state. Pure query: recomputed from
    /// the error state, nothing is mutated.
    #[must_use]
    pub fn is_form_valid(&self) -> bool {
        let predicate_ok = self.predicate.as_ref().is_none_or(|p| p(&self.state));
        predicate_ok && !self.state.has_errors()
    }

    /// The current error state.
    #[must_use]
    pub fn state(&self) -> &ErrorState {
        &self.state
    }

    /// A field's last recorded verdict.
    #[must_use]
    pub fn field_has_error(&self, id: &str) -> Option<bool> {
        self.state.get(id)
    }

    /// Drops all recorded verdicts, returning the aggregator to its clean
    /// state. Clearing field *values* is the UI adapter's job — the engine
    /// never owns them.
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// Builds display-only `server` error records from a field-name →
    /// message mapping (e.g. an HTTP 400 body). Never feeds back into the
    /// error state or `is_form_valid`.
    pub fn server_errors<I, K, V>(&self, entries: I) -> Vec<(FieldId, ErrorRecord)>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        entries
            .into_iter()
            .map(|(name, message)| {
                let record = self.messages.build(
                    ErrorKind::Server,
                    smallvec![("message".into(), message.into().into())],
                );
                (FieldId::resolve(name.as_ref()), record)
            })
            .collect()
    }

    /// [`server_errors`](Self::server_errors) over a JSON object payload.
    /// Non-object payloads yield no records; non-string member values are
    /// rendered through their JSON representation.
    pub fn server_errors_from_json(&self, payload: &serde_json::Value) -> Vec<(FieldId, ErrorRecord)> {
        match payload.as_object() {
            Some(map) => self.server_errors(map.iter().map(|(name, value)| {
                let message = match value {
                    serde_json::Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                (name.as_str(), message)
            })),
            None => Vec::new(),
        }
    }
}

impl fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValidator")
            .field("custom", &self.custom.len())
            .field("predicate", &self.predicate.is_some())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

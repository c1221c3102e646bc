//! Per-field check dispatch
//!
//! One field, one ordered pipeline: the required check runs first, then
//! the type-specific structural checks. The pipeline never short-circuits —
//! every applicable check runs and every failure is collected, with the
//! required error (if any) reported ahead of the rest. The first entry of
//! the resulting list is the headline message for single-slot UIs.
//!
//! Dispatch is an exhaustive `match` over [`FieldType`]: checkbox, radio
//! and select have no structural checks, unknown types route through the
//! generic text routine.

mod email;
mod number;
mod temporal;
mod text;
mod url;

use smallvec::smallvec;

use crate::core::{ErrorKind, ErrorRecord, MessageTable};
use crate::field::{FieldDescriptor, FieldType};

/// Runs the required and structural checks for one field.
///
/// Custom per-field validators are the aggregator's concern; it appends
/// their `custom` error after this list.
#[must_use]
pub fn run_checks(field: &FieldDescriptor, messages: &MessageTable) -> Vec<ErrorRecord> {
    let mut errors = Vec::new();

    if field.constraints().required && field.value().is_empty() {
        errors.push(messages.build(ErrorKind::Required, smallvec![]));
    }

    let structural = match field.field_type() {
        FieldType::Text | FieldType::Password | FieldType::Textarea | FieldType::Generic => {
            text::check(field, messages)
        }
        FieldType::Email => email::check(field, messages),
        FieldType::Url => url::check(field, messages),
        FieldType::Number | FieldType::Range => number::check(field, messages),
        FieldType::Checkbox | FieldType::Radio | FieldType::Select => Vec::new(),
        FieldType::Date => temporal::check_date(field, messages, temporal::Granularity::Day),
        FieldType::Month => temporal::check_date(field, messages, temporal::Granularity::Month),
        FieldType::Time => temporal::check_time(field, messages),
    };
    errors.extend(structural);

    errors
}

// ============================================================================
// TESTS
// ============================================================================

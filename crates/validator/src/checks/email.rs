//! Email checks
//!
//! Runs the text checks first, then validates each comma-separated segment
//! of the raw value against the email grammar. Any number of bad segments
//! produces a single `email` error. More than one segment without the
//! `multiple` attribute produces an `emailMultiple` error.

use smallvec::smallvec;

use super::text;
use crate::core::{ErrorKind, ErrorRecord, MessageTable};
use crate::field::FieldDescriptor;
use crate::primitives::patterns;

pub(crate) fn check(field: &FieldDescriptor, messages: &MessageTable) -> Vec<ErrorRecord> {
    let mut errors = text::check(field, messages);
    let raw = field.value().as_text();

    // Segments are split on the raw value; each non-empty segment is
    // trimmed before matching, so "a@x.com, b@x.com" is two good segments.
    let segments: Vec<&str> = raw.split(',').collect();
    let any_invalid = segments.iter().any(|segment| {
        let trimmed = segment.trim();
        !trimmed.is_empty() && !patterns::is_valid_email(trimmed)
    });
    if any_invalid {
        errors.push(messages.build(ErrorKind::Email, smallvec![]));
    }

    if !field.constraints().multiple && segments.len() > 1 {
        errors.push(messages.build(ErrorKind::EmailMultiple, smallvec![]));
    }

    errors
}

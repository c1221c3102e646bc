//! URL checks
//!
//! Runs the text checks first, then matches the trimmed, non-empty value
//! against the URL grammar.

use smallvec::smallvec;

use super::text;
use crate::core::{ErrorKind, ErrorRecord, MessageTable};
use crate::field::FieldDescriptor;
use crate::primitives::patterns;

pub(crate) fn check(field: &FieldDescriptor, messages: &MessageTable) -> Vec<ErrorRecord> {
    let mut errors = text::check(field, messages);
    let trimmed = field.value().trimmed();

    if !trimmed.is_empty() && !patterns::is_valid_url(trimmed) {
        errors.push(messages.build(ErrorKind::Url, smallvec![]));
    }

    errors
}

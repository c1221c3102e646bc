//! Text checks: length bounds, pattern, same-as
//!
//! Shared by the text family (text, password, textarea, generic) and run
//! as the first structural stage for email and url fields.

use smallvec::smallvec;

use crate::core::{ErrorKind, ErrorRecord, MessageTable};
use crate::field::FieldDescriptor;

/// Length bounds and pattern apply to the trimmed value; the same-as
/// comparison uses the raw, untrimmed value of both sides.
///
/// Both length errors can fire at once when the constraints are
/// misconfigured with `min > max`; nothing here deduplicates a bad setup.
pub(crate) fn check(field: &FieldDescriptor, messages: &MessageTable) -> Vec<ErrorRecord> {
    let mut errors = Vec::new();
    let constraints = field.constraints();
    let raw = field.value().as_text();
    let trimmed = raw.trim();
    let length = trimmed.chars().count();

    if length < constraints.min_length {
        errors.push(messages.build(
            ErrorKind::MinLength,
            smallvec![("min".into(), constraints.min_length.to_string().into())],
        ));
    }

    if let Some(max) = constraints.max_length {
        if length > max {
            errors.push(messages.build(
                ErrorKind::MaxLength,
                smallvec![("max".into(), max.to_string().into())],
            ));
        }
    }

    if let Some(pattern) = &constraints.pattern {
        if !pattern.is_match(trimmed) {
            errors.push(messages.build(ErrorKind::Pattern, smallvec![]));
        }
    }

    if let Some(reference) = &constraints.same_as {
        if raw != reference.value {
            errors.push(messages.build(
                ErrorKind::SameAs,
                smallvec![("title".into(), reference.title.clone().into())],
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Attributes, FieldType, SameAsRef};

    fn text_errors(value: &str, attributes: Attributes) -> Vec<ErrorRecord> {
        let field = FieldDescriptor::new("field", FieldType::Text, value, attributes).unwrap();
        check(&field, &MessageTable::new())
    }

    #[test]
    fn length_within_bounds_passes() {
        let errors = text_errors("hello", Attributes::new().min_length("3").max_length("10"));
        assert!(errors.is_empty());
    }

    #[test]
    fn short_value_fails_min_length() {
        let errors = text_errors("hi", Attributes::new().min_length("3"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::MinLength);
        assert_eq!(errors[0].param("min"), Some("3"));
    }

    #[test]
    fn long_value_fails_max_length() {
        let errors = text_errors("overlong", Attributes::new().max_length("5"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::MaxLength);
        assert_eq!(errors[0].param("max"), Some("5"));
    }

    #[test]
    fn length_uses_trimmed_value() {
        // "  ab  " trims to 2 chars.
        let errors = text_errors("  ab  ", Attributes::new().min_length("3"));
        assert_eq!(errors[0].kind, ErrorKind::MinLength);

        let errors = text_errors("  abcd  ", Attributes::new().max_length("4"));
        assert!(errors.is_empty());
    }

    #[test]
    fn misconfigured_bounds_fire_both() {
        let errors = text_errors("abc", Attributes::new().min_length("5").max_length("2"));
        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ErrorKind::MinLength, ErrorKind::MaxLength]);
    }

    #[test]
    fn pattern_must_match_entire_trimmed_value() {
        let attributes = || Attributes::new().pattern("[a-z]+");
        assert!(text_errors("abc", attributes()).is_empty());
        assert!(text_errors("  abc  ", attributes()).is_empty());

        let errors = text_errors("abc1", attributes());
        assert_eq!(errors[0].kind, ErrorKind::Pattern);
    }

    #[test]
    fn explicit_pattern_rejects_empty_value() {
        // Only the default (absent) pattern matches everything.
        let errors = text_errors("", Attributes::new().pattern("[0-9]+"));
        assert_eq!(errors[0].kind, ErrorKind::Pattern);
    }

    #[test]
    fn same_as_compares_untrimmed_values() {
        let attributes =
            Attributes::new().same_as(SameAsRef::new("Password", "secret "));
        let errors = text_errors("secret", attributes);
        assert_eq!(errors[0].kind, ErrorKind::SameAs);
        assert_eq!(errors[0].param("title"), Some("Password"));
        assert_eq!(errors[0].message, "Value must match Password");

        let attributes =
            Attributes::new().same_as(SameAsRef::new("Password", "secret "));
        let errors = text_errors("secret ", attributes);
        assert!(errors.is_empty());
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let errors = text_errors("héllo", Attributes::new().max_length("5"));
        assert!(errors.is_empty());
    }
}

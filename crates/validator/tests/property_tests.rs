//! Property-based tests for proforma-validator.

use proforma_validator::prelude::*;
use proptest::prelude::*;

fn text_field(value: &str, attributes: Attributes) -> FieldDescriptor {
    FieldDescriptor::new("field", FieldType::Text, FieldValue::text(value), attributes).unwrap()
}

// ============================================================================
// IDEMPOTENCE: checking an unchanged snapshot twice changes nothing
// ============================================================================

proptest! {
    #[test]
    fn check_field_is_idempotent(value in ".*") {
        let mut form = FormValidator::new();
        let field = text_field(&value, Attributes::new().required().min_length("3").max_length("10"));

        let first = form.check_field(&field);
        let valid_after_first = form.is_form_valid();
        let second = form.check_field(&field);

        prop_assert_eq!(first, second);
        prop_assert_eq!(valid_after_first, form.is_form_valid());
    }

    #[test]
    fn number_check_is_idempotent(value in ".*") {
        let mut form = FormValidator::new();
        let field = FieldDescriptor::new(
            "amount",
            FieldType::Number,
            FieldValue::text(value.as_str()),
            Attributes::new().min("0").max("100"),
        ).unwrap();

        prop_assert_eq!(form.check_field(&field), form.check_field(&field));
    }
}

// ============================================================================
// MONOTONIC AGGREGATION
// ============================================================================

proptest! {
    #[test]
    fn any_field_error_fails_the_form(values in proptest::collection::vec(".*", 1..6)) {
        let mut form = FormValidator::new();
        let fields: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(i, value)| text_field_named(&format!("field-{i}"), value))
            .collect();

        let report = form.check_all(&fields);

        let any_error = report.fields.iter().any(|f| !f.errors.is_empty());
        prop_assert_eq!(report.form_valid, !any_error);
        prop_assert_eq!(form.is_form_valid(), !any_error);

        // first_invalid is the first reported field with errors.
        let expected_first = report
            .fields
            .iter()
            .find(|f| !f.errors.is_empty())
            .map(|f| f.id.clone());
        prop_assert_eq!(report.first_invalid, expected_first);
    }
}

fn text_field_named(name: &str, value: &str) -> FieldDescriptor {
    FieldDescriptor::new(
        name,
        FieldType::Text,
        FieldValue::text(value),
        Attributes::new().required(),
    )
    .unwrap()
}

// ============================================================================
// REQUIRED EMPTINESS RULE
// ============================================================================

proptest! {
    #[test]
    fn whitespace_only_required_text_leads_with_required(value in "[ \t\r\n]*") {
        let mut form = FormValidator::new();
        let field = text_field(&value, Attributes::new().required());

        let errors = form.check_field(&field);
        prop_assert_eq!(errors.first().map(|e| e.kind), Some(ErrorKind::Required));
    }

    #[test]
    fn non_empty_text_never_reports_required(value in ".*[^ \t\r\n].*") {
        let mut form = FormValidator::new();
        let field = text_field(&value, Attributes::new().required());

        let errors = form.check_field(&field);
        prop_assert!(errors.iter().all(|e| e.kind != ErrorKind::Required));
    }
}

// ============================================================================
// LENGTH BOUND PARTITION
// ============================================================================

proptest! {
    #[test]
    fn length_bounds_partition_correctly(value in ".*", min in 0usize..8, span in 0usize..8) {
        let max = min + span;
        let field = text_field(
            &value,
            Attributes::new()
                .min_length(min.to_string())
                .max_length(max.to_string()),
        );
        let mut form = FormValidator::new();
        let errors = form.check_field(&field);
        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();

        let length = value.trim().chars().count();
        if length < min {
            prop_assert!(kinds.contains(&ErrorKind::MinLength));
            prop_assert!(!kinds.contains(&ErrorKind::MaxLength));
        } else if length > max {
            prop_assert!(kinds.contains(&ErrorKind::MaxLength));
            prop_assert!(!kinds.contains(&ErrorKind::MinLength));
        } else {
            prop_assert!(errors.is_empty());
        }
    }
}

// ============================================================================
// UNPARSEABLE NUMBERS PASS RANGE CHECKS (pinned behavior)
// ============================================================================

proptest! {
    #[test]
    fn non_numeric_values_pass_number_ranges(value in "[a-zA-Z]+") {
        let mut form = FormValidator::new();
        let field = FieldDescriptor::new(
            "amount",
            FieldType::Number,
            FieldValue::text(value.as_str()),
            Attributes::new().min("0").max("10"),
        ).unwrap();

        // Rust's float grammar accepts a few alphabetic spellings.
        prop_assume!(value.parse::<f64>().is_err());
        prop_assert!(form.check_field(&field).is_empty());
    }
}

// ============================================================================
// CALENDAR VALIDITY AGREES WITH A DAYS-IN-MONTH ORACLE
// ============================================================================

proptest! {
    #[test]
    fn calendar_validity_matches_oracle(year in 1i32..3000, month in 1u32..=12, day in 1u32..=31) {
        use proforma_validator::primitives::is_calendar_date_valid;

        let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
        let days_in_month = match month {
            2 => if leap { 29 } else { 28 },
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        };
        prop_assert_eq!(is_calendar_date_valid(year, month, day), day <= days_in_month);
    }
}

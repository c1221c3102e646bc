//! Basic usage example for proforma-validator
//!
//! Checks a small signup form and prints the headline error per field,
//! the way a UI adapter would drive the engine on blur/submit.

use proforma_validator::prelude::*;

fn main() -> Result<(), DescriptorError> {
    let mut form = FormValidator::new();

    let fields = vec![
        FieldDescriptor::new(
            "user.name",
            FieldType::Text,
            FieldValue::text("Ada"),
            Attributes::new().required().min_length("2").max_length("40"),
        )?,
        FieldDescriptor::new(
            "user.email",
            FieldType::Email,
            FieldValue::text("ada@"),
            Attributes::new().required(),
        )?,
        FieldDescriptor::new(
            "user.password",
            FieldType::Password,
            FieldValue::text("hunter2"),
            Attributes::new().required().min_length("8"),
        )?,
        FieldDescriptor::new(
            "user.confirm-password",
            FieldType::Password,
            FieldValue::text("hunter"),
            Attributes::new().same_as(SameAsRef::new("Password", "hunter2")),
        )?,
    ];

    let report = form.check_all(&fields);

    for field in &report.fields {
        match field.headline() {
            Some(error) => println!("✗ {}: {}", field.id, error.message),
            None => println!("✓ {}", field.id),
        }
    }

    println!(
        "\nform valid: {} (focus: {})",
        report.form_valid,
        report
            .first_invalid
            .map_or_else(|| "-".to_string(), |id| id.to_string()),
    );

    Ok(())
}

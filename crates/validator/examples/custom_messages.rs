//! Message-table overrides and custom validators
//!
//! Localizes two templates, registers a per-field custom validator and a
//! global predicate, then walks one check cycle.

use proforma_validator::prelude::*;

fn main() -> Result<(), DescriptorError> {
    let messages = MessageTable::from_overrides([
        (ErrorKind::Required, "Champ obligatoire"),
        (ErrorKind::MinLength, "Au moins {{min}} caractères"),
    ]);

    let mut form = FormValidator::with_messages(messages);

    // A custom validator runs after the structural checks and may consult
    // the errors collected so far.
    form.set_custom_validator("user.name", |field, _errors| {
        (field.value().trimmed() == "admin").then(|| "Ce nom est réservé".to_string())
    });

    // The global predicate gates the whole form on the terms checkbox.
    form.set_global_predicate(|state| state.get("terms") == Some(false));

    let name = FieldDescriptor::new(
        "user.name",
        FieldType::Text,
        FieldValue::text("admin"),
        Attributes::new().required().min_length("3"),
    )?;
    let terms = FieldDescriptor::new(
        "terms",
        FieldType::Checkbox,
        FieldValue::Checked(false),
        Attributes::new().required(),
    )?;

    let report = form.check_all(&[name, terms]);
    for field in &report.fields {
        for error in &field.errors {
            println!("{} [{}] {}", field.id, error.kind, error.message);
        }
    }
    println!("form valid: {}", report.form_valid);

    Ok(())
}

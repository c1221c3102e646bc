//! # proforma-validator
//!
//! A declarative field-validation engine for form-like UIs.
//!
//! Each input field is described by a [`FieldDescriptor`](field::FieldDescriptor):
//! a value snapshot plus constraint metadata (required, length bounds,
//! pattern, numeric/date/time range, cross-field equality). The engine runs
//! an ordered pipeline of checks per field, turns every failed constraint
//! into a structured, localizable [`ErrorRecord`](core::ErrorRecord), and
//! aggregates per-field verdicts into an overall form-validity answer.
//!
//! ## Quick Start
//!
//! ```rust
//! use proforma_validator::prelude::*;
//!
//! let mut form = FormValidator::new();
//!
//! let email = FieldDescriptor::new(
//!     "user.email",
//!     FieldType::Email,
//!     FieldValue::text("not-an-email"),
//!     Attributes::new().required(),
//! )?;
//!
//! let errors = form.check_field(&email);
//! assert_eq!(errors[0].kind, ErrorKind::Email);
//! assert!(!form.is_form_valid());
//! # Ok::<(), proforma_validator::field::DescriptorError>(())
//! ```
//!
//! ## Design
//!
//! - The engine performs no I/O and owns no field values: a descriptor is a
//!   per-call snapshot supplied by the UI layer, and the only state kept
//!   between calls is the per-field error map inside
//!   [`FormValidator`](form::FormValidator).
//! - All applicable checks run per field; errors are collected, not
//!   short-circuited. The first entry of the returned list is the headline
//!   message for single-slot UIs, the full list stays available.
//! - Validation failure is data, never a panic or an `Err`: only a
//!   malformed `pattern` attribute is a hard error, and it is reported at
//!   descriptor construction time, not during checks.

pub mod checks;
pub mod core;
pub mod field;
pub mod form;
pub mod prelude;
pub mod primitives;

//! Prelude module for convenient imports.
//!
//! Provides a single `use proforma_validator::prelude::*;` import that
//! brings in everything a typical consumer touches.
//!
//! # Examples
//!
//! ```rust
//! use proforma_validator::prelude::*;
//!
//! let field = FieldDescriptor::new(
//!     "age",
//!     FieldType::Number,
//!     FieldValue::text("17"),
//!     Attributes::new().min("18"),
//! )
//! .unwrap();
//!
//! let mut form = FormValidator::new();
//! assert_eq!(form.check_field(&field)[0].kind, ErrorKind::Min);
//! ```

// ============================================================================
// CORE: taxonomy, records, messages
// ============================================================================

pub use crate::core::{ErrorKind, ErrorRecord, MessageTable, Params};

// ============================================================================
// FIELDS: descriptors and constraints
// ============================================================================

pub use crate::field::{
    Attributes, Constraints, DescriptorError, FieldDescriptor, FieldId, FieldType, FieldValue,
    SameAsRef,
};

// ============================================================================
// FORM: aggregation
// ============================================================================

pub use crate::form::{ErrorState, FieldReport, FormReport, FormValidator};

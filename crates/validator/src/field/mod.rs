//! Field descriptors and constraint resolution
//!
//! A [`FieldDescriptor`] is the engine's view of one input: a canonical
//! [`FieldId`], a [`FieldType`], a [`FieldValue`] snapshot, and the
//! [`Constraints`] resolved from the raw [`Attributes`] the UI layer read
//! off the input. Descriptors are created (or refreshed) per check call;
//! the engine never reads live UI state itself.

pub mod descriptor;
pub mod name;

pub use descriptor::{
    Attributes, Constraints, DescriptorError, FieldDescriptor, FieldType, FieldValue, SameAsRef,
};
pub use name::FieldId;

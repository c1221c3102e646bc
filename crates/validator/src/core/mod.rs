//! Core error model and message building
//!
//! This module contains the building blocks every check routine produces
//! and every consumer reads:
//!
//! - **Taxonomy**: [`ErrorKind`] — the closed set of failure tags.
//! - **Records**: [`ErrorRecord`] — one failed constraint, fully rendered.
//! - **Messages**: [`MessageTable`] — kind → template lookup with
//!   `{{param}}` substitution, overridable for localization.
//!
//! # Architecture
//!
//! Validation failure is the *expected, modeled outcome* of a check, so it
//! is represented as plain data rather than `Err`. A record carries both
//! the interpolated English message and the raw parameters it was built
//! from, so a localizing consumer can ignore `message` entirely and render
//! `kind` + `params` through its own catalog.

pub mod error;
pub mod messages;

pub use error::{ErrorKind, ErrorRecord, Params};
pub use messages::MessageTable;

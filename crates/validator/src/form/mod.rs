//! Form aggregation
//!
//! [`FormValidator`] owns the canonical error state for a whole form:
//! every [`check_field`](FormValidator::check_field) call runs the
//! per-field pipeline, records the field's verdict, and the aggregate
//! answer is recomputed on demand. The aggregator is reusable indefinitely
//! across check cycles — there is no terminal state.

pub mod report;
pub mod state;
pub mod validator;

pub use report::{FieldReport, FormReport};
pub use state::ErrorState;
pub use validator::FormValidator;

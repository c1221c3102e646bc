//! Primitive validators
//!
//! Stateless pure functions over already-extracted values: calendar-date
//! validity, clock-time validity and seconds conversion, and the compiled
//! format patterns for email / URL / date / month / time. No side effects,
//! no field objects — the check routines in [`crate::checks`] extract the
//! primitives' inputs from descriptors.

pub mod calendar;
pub mod clock;
pub mod patterns;

pub use calendar::is_calendar_date_valid;
pub use clock::{is_clock_time_valid, parse_clock_time, time_bound_seconds, time_to_seconds};

//! Date, month and time checks
//!
//! Structural validity gates the range comparison: a value that fails the
//! format pattern or the calendar/clock validity check reports a single
//! `date`/`time` error and skips the min/max comparison entirely.
//!
//! Bounds are permissive: a malformed min/max attribute disables that
//! bound. Month-only bounds (7 characters) are normalized to the first of
//! the month before comparison; min/max error messages carry the original
//! bound string.

use chrono::NaiveDate;
use smallvec::smallvec;

use crate::core::{ErrorKind, ErrorRecord, MessageTable};
use crate::field::FieldDescriptor;
use crate::primitives::patterns;
use crate::primitives::{
    is_calendar_date_valid, is_clock_time_valid, parse_clock_time, time_bound_seconds,
    time_to_seconds,
};

/// Whether a field takes full dates or year-month values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Granularity {
    Day,
    Month,
}

pub(crate) fn check_date(
    field: &FieldDescriptor,
    messages: &MessageTable,
    granularity: Granularity,
) -> Vec<ErrorRecord> {
    let trimmed = field.value().trimmed();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut errors = Vec::new();
    let pattern = match granularity {
        Granularity::Day => &patterns::FULL_DATE,
        Granularity::Month => &patterns::FULL_MONTH,
    };
    if !pattern.is_match(trimmed) {
        errors.push(messages.build(ErrorKind::Date, smallvec![]));
        return errors;
    }

    // Pattern failure and calendar invalidity surface as the same kind;
    // the caller is not told which of the two it was.
    let Some(date) = parse_date_value(trimmed) else {
        errors.push(messages.build(ErrorKind::Date, smallvec![]));
        return errors;
    };

    let constraints = field.constraints();
    if let Some(raw) = &constraints.min {
        if let Some(min) = parse_date_bound(raw) {
            if date < min {
                errors.push(messages.build(
                    ErrorKind::Min,
                    smallvec![("min".into(), raw.trim().to_string().into())],
                ));
            }
        }
    }
    if let Some(raw) = &constraints.max {
        if let Some(max) = parse_date_bound(raw) {
            if date > max {
                errors.push(messages.build(
                    ErrorKind::Max,
                    smallvec![("max".into(), raw.trim().to_string().into())],
                ));
            }
        }
    }

    errors
}

pub(crate) fn check_time(field: &FieldDescriptor, messages: &MessageTable) -> Vec<ErrorRecord> {
    let trimmed = field.value().trimmed();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut errors = Vec::new();
    if !patterns::TIME.is_match(trimmed) {
        errors.push(messages.build(ErrorKind::Time, smallvec![]));
        return errors;
    }

    let Some((hour, minute, second)) = parse_clock_time(trimmed) else {
        errors.push(messages.build(ErrorKind::Time, smallvec![]));
        return errors;
    };
    if !is_clock_time_valid(hour, minute, second) {
        errors.push(messages.build(ErrorKind::Time, smallvec![]));
        return errors;
    }

    let seconds = time_to_seconds(hour, minute, second);
    let constraints = field.constraints();
    if let Some(raw) = &constraints.min {
        if let Some(min) = time_bound_seconds(raw) {
            if seconds < min {
                errors.push(messages.build(
                    ErrorKind::Min,
                    smallvec![("min".into(), raw.trim().to_string().into())],
                ));
            }
        }
    }
    if let Some(raw) = &constraints.max {
        if let Some(max) = time_bound_seconds(raw) {
            if seconds > max {
                errors.push(messages.build(
                    ErrorKind::Max,
                    smallvec![("max".into(), raw.trim().to_string().into())],
                ));
            }
        }
    }

    errors
}

/// Decomposes a pattern-valid date or month value; the day defaults to the
/// first of the month. Returns `None` when the triple is not a real date.
fn parse_date_value(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = match parts.next() {
        Some(raw) => raw.parse().ok()?,
        None => 1,
    };

    if !is_calendar_date_valid(year, month, day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a min/max date bound; a 7-character month bound gets `-01`
/// appended first. An unparseable bound yields `None` (no bound).
fn parse_date_bound(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.len() == 7 {
        parse_date_value(&format!("{trimmed}-01"))
    } else {
        parse_date_value(trimmed)
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Error taxonomy and structured error records
//!
//! Every failed constraint becomes an [`ErrorRecord`]: a stable
//! machine-readable tag plus the interpolated, human-readable message.
//! Records also keep the ordered `(key, value)` parameters they were built
//! from, for consumers that localize from `kind` + `params` instead of the
//! pre-rendered English `message`.
//!
//! String fields use `Cow<'static, str>` for zero-allocation in the common
//! case of static template parameters.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The closed taxonomy of validation failures.
///
/// Each variant corresponds to exactly one constraint a field can violate.
/// The wire tag (used as the message-table key and in serialized output) is
/// available via [`ErrorKind::as_str`].
///
/// Making the taxonomy an enum (rather than free-form strings) turns the
/// "unknown error kind" programming mistake into a compile error: there is
/// no way to request a message for a kind the table does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// A required field is empty.
    Required,
    /// The value does not match the field's declared pattern.
    Pattern,
    /// The trimmed value is shorter than the minimum length.
    #[serde(rename = "minlength")]
    MinLength,
    /// The trimmed value is longer than the maximum length.
    #[serde(rename = "maxlength")]
    MaxLength,
    /// The value is below the field's lower bound.
    Min,
    /// The value is above the field's upper bound.
    Max,
    /// The value differs from the referenced field's value.
    #[serde(rename = "sameAs")]
    SameAs,
    /// A value segment is not a well-formed email address.
    Email,
    /// Several comma-separated emails were given but only one is allowed.
    #[serde(rename = "emailMultiple")]
    EmailMultiple,
    /// The value is not a well-formed URL.
    Url,
    /// The value is not a well-formed or valid calendar date.
    Date,
    /// The value is not a well-formed or valid clock time.
    Time,
    /// A custom per-field validator rejected the value.
    Custom,
    /// A server-side validation message ingested for display.
    Server,
}

impl ErrorKind {
    /// Every kind, in pipeline-reporting order.
    pub const ALL: [ErrorKind; 14] = [
        ErrorKind::Required,
        ErrorKind::Pattern,
        ErrorKind::MinLength,
        ErrorKind::MaxLength,
        ErrorKind::Min,
        ErrorKind::Max,
        ErrorKind::SameAs,
        ErrorKind::Email,
        ErrorKind::EmailMultiple,
        ErrorKind::Url,
        ErrorKind::Date,
        ErrorKind::Time,
        ErrorKind::Custom,
        ErrorKind::Server,
    ];

    /// Returns the stable wire tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::Pattern => "pattern",
            ErrorKind::MinLength => "minlength",
            ErrorKind::MaxLength => "maxlength",
            ErrorKind::Min => "min",
            ErrorKind::Max => "max",
            ErrorKind::SameAs => "sameAs",
            ErrorKind::Email => "email",
            ErrorKind::EmailMultiple => "emailMultiple",
            ErrorKind::Url => "url",
            ErrorKind::Date => "date",
            ErrorKind::Time => "time",
            ErrorKind::Custom => "custom",
            ErrorKind::Server => "server",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ERROR RECORD
// ============================================================================

/// Parameter list attached to an error record.
///
/// Most records carry zero to two parameters (a bound and a display title),
/// so the inline capacity avoids a heap allocation on the check path.
pub type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// One failed constraint: a taxonomy tag plus the rendered message.
///
/// Immutable once constructed. Records are built by
/// [`MessageTable::build`](crate::core::MessageTable::build), which
/// interpolates the parameters into the kind's template.
///
/// # Examples
///
/// ```rust
/// use proforma_validator::core::{ErrorKind, MessageTable};
/// use smallvec::smallvec;
///
/// let messages = MessageTable::default();
/// let error = messages.build(
///     ErrorKind::Min,
///     smallvec![("min".into(), "0".into())],
/// );
///
/// assert_eq!(error.kind, ErrorKind::Min);
/// assert_eq!(error.message, "Value must be greater than or equal to 0");
/// assert_eq!(error.param("min"), Some("0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    /// Stable taxonomy tag for programmatic handling and i18n.
    pub kind: ErrorKind,

    /// Fully interpolated, human-readable message.
    pub message: String,

    /// Ordered parameters the message was built from.
    ///
    /// Kept for localization; example: `[("min", "5")]`.
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub params: Params,
}

impl ErrorRecord {
    /// Creates a record from already-rendered parts.
    ///
    /// Check routines normally go through
    /// [`MessageTable::build`](crate::core::MessageTable::build) instead.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            params: Params::new(),
        }
    }

    /// Adds a parameter to the record.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_wire_tags_are_stable() {
        assert_eq!(ErrorKind::Required.as_str(), "required");
        assert_eq!(ErrorKind::MinLength.as_str(), "minlength");
        assert_eq!(ErrorKind::MaxLength.as_str(), "maxlength");
        assert_eq!(ErrorKind::SameAs.as_str(), "sameAs");
        assert_eq!(ErrorKind::EmailMultiple.as_str(), "emailMultiple");
        assert_eq!(ErrorKind::Server.as_str(), "server");
    }

    #[test]
    fn kind_serde_tags_match_as_str() {
        for kind in ErrorKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn record_param_lookup() {
        let record = ErrorRecord::new(ErrorKind::Min, "too small")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(record.param("min"), Some("5"));
        assert_eq!(record.param("actual"), Some("3"));
        assert_eq!(record.param("max"), None);
    }

    #[test]
    fn record_display() {
        let record = ErrorRecord::new(ErrorKind::Url, "Please enter a valid URL");
        assert_eq!(record.to_string(), "url: Please enter a valid URL");
    }

    #[test]
    fn record_serializes_without_empty_params() {
        let record = ErrorRecord::new(ErrorKind::Required, "Please fill out this field");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "required");
        assert!(json.get("params").is_none());
    }

    #[test]
    fn zero_alloc_static_params() {
        let record = ErrorRecord::new(ErrorKind::Min, "too small").with_param("min", "5");
        let (key, value) = &record.params[0];
        assert!(matches!(key, Cow::Borrowed(_)));
        assert!(matches!(value, Cow::Borrowed(_)));
    }
}

//! Message templates and error-record building
//!
//! Maps an [`ErrorKind`] to a user-facing template with `{{param}}`
//! placeholders, substitutes the supplied parameters, and returns the
//! finished [`ErrorRecord`]. The default table carries English templates
//! modeled on the browser-native constraint-validation messages; consumers
//! override them wholesale or per key for localization.
//!
//! Placeholders without a matching parameter are left verbatim, so a
//! template may reference params a future caller will supply without
//! breaking older call sites.

use std::borrow::Cow;
use std::collections::HashMap;

use super::error::{ErrorKind, ErrorRecord, Params};

/// Default English template for a kind.
const fn default_template(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Required => "Please fill out this field",
        ErrorKind::Pattern => "Please match the requested format",
        ErrorKind::MinLength => "Please lengthen this text to {{min}} characters or more",
        ErrorKind::MaxLength => "Please shorten this text to {{max}} characters or less",
        ErrorKind::Min => "Value must be greater than or equal to {{min}}",
        ErrorKind::Max => "Value must be less than or equal to {{max}}",
        ErrorKind::SameAs => "Value must match {{title}}",
        ErrorKind::Email => "Please enter a valid email address",
        ErrorKind::EmailMultiple => "Multiple email addresses are not allowed",
        ErrorKind::Url => "Please enter a valid URL",
        ErrorKind::Date => "Please enter a valid date",
        ErrorKind::Time => "Please enter a valid time",
        ErrorKind::Custom => "{{message}}",
        ErrorKind::Server => "{{message}}",
    }
}

// ============================================================================
// MESSAGE TABLE
// ============================================================================

/// Configurable kind → template lookup.
///
/// # Examples
///
/// ```rust
/// use proforma_validator::core::{ErrorKind, MessageTable};
/// use smallvec::smallvec;
///
/// let mut messages = MessageTable::default();
/// messages.set(ErrorKind::Required, "Champ obligatoire");
///
/// let error = messages.build(ErrorKind::Required, smallvec![]);
/// assert_eq!(error.message, "Champ obligatoire");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
    overrides: HashMap<ErrorKind, Cow<'static, str>>,
}

impl MessageTable {
    /// Creates a table with the default English templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from per-key overrides on top of the defaults.
    pub fn from_overrides<I, T>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (ErrorKind, T)>,
        T: Into<Cow<'static, str>>,
    {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(kind, template)| (kind, template.into()))
                .collect(),
        }
    }

    /// Overrides the template for one kind.
    pub fn set(&mut self, kind: ErrorKind, template: impl Into<Cow<'static, str>>) {
        self.overrides.insert(kind, template.into());
    }

    /// Returns the effective template for a kind.
    #[must_use]
    pub fn template(&self, kind: ErrorKind) -> &str {
        self.overrides
            .get(&kind)
            .map_or_else(|| default_template(kind), |template| template.as_ref())
    }

    /// Builds an error record: looks up the template, substitutes every
    /// `{{param}}` placeholder, and attaches the raw params for i18n.
    #[must_use]
    pub fn build(&self, kind: ErrorKind, params: Params) -> ErrorRecord {
        let mut message = self.template(kind).to_string();
        for (key, value) in &params {
            let placeholder = format!("{{{{{key}}}}}");
            if message.contains(&placeholder) {
                message = message.replace(&placeholder, value);
            }
        }

        ErrorRecord {
            kind,
            message,
            params,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn default_required_message() {
        let messages = MessageTable::new();
        let error = messages.build(ErrorKind::Required, smallvec![]);
        assert_eq!(error.message, "Please fill out this field");
    }

    #[test]
    fn substitutes_params() {
        let messages = MessageTable::new();
        let error = messages.build(ErrorKind::MinLength, smallvec![("min".into(), "8".into())]);
        assert_eq!(
            error.message,
            "Please lengthen this text to 8 characters or more"
        );
    }

    #[test]
    fn unresolved_placeholder_left_verbatim() {
        let mut messages = MessageTable::new();
        messages.set(ErrorKind::Min, "At least {{min}} (was {{actual}})");
        let error = messages.build(ErrorKind::Min, smallvec![("min".into(), "2".into())]);
        assert_eq!(error.message, "At least 2 (was {{actual}})");
    }

    #[test]
    fn override_wins_over_default() {
        let messages =
            MessageTable::from_overrides([(ErrorKind::Url, "Not a link"), (ErrorKind::Date, "Bad date")]);
        assert_eq!(messages.template(ErrorKind::Url), "Not a link");
        assert_eq!(messages.template(ErrorKind::Date), "Bad date");
        // Untouched kinds keep their defaults.
        assert_eq!(
            messages.template(ErrorKind::Required),
            "Please fill out this field"
        );
    }

    #[test]
    fn custom_kind_passes_message_through() {
        let messages = MessageTable::new();
        let error = messages.build(
            ErrorKind::Custom,
            smallvec![("message".into(), "Username already taken".into())],
        );
        assert_eq!(error.message, "Username already taken");
    }

    #[test]
    fn every_kind_has_a_template() {
        let messages = MessageTable::new();
        for kind in ErrorKind::ALL {
            assert!(!messages.template(kind).is_empty());
        }
    }

    #[test]
    fn record_keeps_raw_params() {
        let messages = MessageTable::new();
        let error = messages.build(ErrorKind::Max, smallvec![("max".into(), "10".into())]);
        assert_eq!(error.param("max"), Some("10"));
    }
}

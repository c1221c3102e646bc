//! Field descriptors, attribute snapshots and constraint resolution

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::name::FieldId;

// ============================================================================
// FIELD TYPE
// ============================================================================

/// The resolved type of a field, driving check dispatch.
///
/// Unknown type strings resolve to [`FieldType::Generic`], which runs the
/// plain text checks — the explicit fallback branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Password,
    Email,
    Url,
    Number,
    Range,
    Checkbox,
    Radio,
    Select,
    Date,
    Month,
    Time,
    Textarea,
    Generic,
}

impl FieldType {
    /// Resolves a raw type string; unknown types fall back to `Generic`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "text" => FieldType::Text,
            "password" => FieldType::Password,
            "email" => FieldType::Email,
            "url" => FieldType::Url,
            "number" => FieldType::Number,
            "range" => FieldType::Range,
            "checkbox" => FieldType::Checkbox,
            "radio" => FieldType::Radio,
            "select" => FieldType::Select,
            "date" => FieldType::Date,
            "month" => FieldType::Month,
            "time" => FieldType::Time,
            "textarea" => FieldType::Textarea,
            _ => FieldType::Generic,
        }
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// Current value snapshot of a field.
///
/// Supplied fresh on every check call; the engine does not keep it beyond
/// the duration of one check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// No value at all (an unset input).
    #[default]
    Missing,
    /// A single string value.
    Text(String),
    /// A checkbox's checked state.
    Checked(bool),
    /// A grouped radio/checkbox selection: the selected members' values.
    Group(Vec<String>),
}

impl FieldValue {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// The raw, untrimmed text of this value (`""` for non-text variants).
    ///
    /// Same-as comparisons use this untrimmed form.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(value) => value,
            _ => "",
        }
    }

    /// The trimmed text of this value.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.as_text().trim()
    }

    /// Whether this value counts as empty for the required check:
    /// missing, whitespace-only text, an unchecked checkbox, or a group
    /// with no selected member.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Missing => true,
            FieldValue::Text(value) => value.trim().is_empty(),
            FieldValue::Checked(checked) => !checked,
            FieldValue::Group(selected) => selected.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Checked(checked)
    }
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

/// Cross-field equality reference: the referenced field's display title
/// (used in the error message) and its current raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameAsRef {
    /// Display title of the referenced field.
    pub title: String,
    /// The referenced field's current, untrimmed value.
    pub value: String,
}

impl SameAsRef {
    /// Creates a same-as reference.
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Raw constraint attributes as read off the input by the UI layer.
///
/// Numeric attributes stay strings here; [`Attributes::resolve`] parses
/// them with permissive fallbacks (an unparseable bound is no bound).
/// For grouped radios, `required` is set when *any* member of the group
/// carries the attribute.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    pub required: bool,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub pattern: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub same_as: Option<SameAsRef>,
    pub multiple: bool,
}

impl Attributes {
    /// Creates an empty attribute snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field required.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the raw min-length attribute.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, raw: impl Into<String>) -> Self {
        self.min_length = Some(raw.into());
        self
    }

    /// Sets the raw max-length attribute.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, raw: impl Into<String>) -> Self {
        self.max_length = Some(raw.into());
        self
    }

    /// Sets the raw pattern attribute (compiled as a full match).
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(mut self, raw: impl Into<String>) -> Self {
        self.pattern = Some(raw.into());
        self
    }

    /// Sets the raw min attribute (number, date or time, per field type).
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, raw: impl Into<String>) -> Self {
        self.min = Some(raw.into());
        self
    }

    /// Sets the raw max attribute (number, date or time, per field type).
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, raw: impl Into<String>) -> Self {
        self.max = Some(raw.into());
        self
    }

    /// Sets the same-as reference.
    #[must_use = "builder methods must be chained or built"]
    pub fn same_as(mut self, reference: SameAsRef) -> Self {
        self.same_as = Some(reference);
        self
    }

    /// Allows multiple comma-separated values (email fields).
    #[must_use = "builder methods must be chained or built"]
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Resolves the effective constraint set.
    ///
    /// Unparseable numeric attributes degrade to their permissive default
    /// (min-length 0, max-length unbounded). The one hard failure is an
    /// invalid `pattern` source: that is a configuration mistake, reported
    /// at setup time rather than turned into a per-check error.
    pub fn resolve(&self) -> Result<Constraints, DescriptorError> {
        let pattern = match &self.pattern {
            Some(source) => Some(compile_full_match(source)?),
            None => None,
        };

        Ok(Constraints {
            required: self.required,
            min_length: parse_or_default(self.min_length.as_deref(), 0),
            max_length: self
                .max_length
                .as_deref()
                .and_then(|raw| raw.trim().parse().ok()),
            pattern,
            min: self.min.clone(),
            max: self.max.clone(),
            same_as: self.same_as.clone(),
            multiple: self.multiple,
        })
    }
}

fn parse_or_default(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Compiles a pattern attribute so it must match the entire value,
/// mirroring how browsers treat the `pattern` attribute.
fn compile_full_match(source: &str) -> Result<Regex, DescriptorError> {
    Regex::new(&format!("^(?:{source})$")).map_err(|error| DescriptorError::InvalidPattern {
        pattern: source.to_string(),
        source: error,
    })
}

// ============================================================================
// CONSTRAINTS
// ============================================================================

/// The resolved, effective constraint set for one field.
#[derive(Debug, Clone)]
pub struct Constraints {
    /// Whether the field must be non-empty.
    pub required: bool,
    /// Minimum trimmed length (0 when absent).
    pub min_length: usize,
    /// Maximum trimmed length (`None` = unbounded).
    pub max_length: Option<usize>,
    /// Full-match pattern (`None` = match anything).
    pub pattern: Option<Regex>,
    /// Raw lower bound, interpreted per field type.
    pub min: Option<String>,
    /// Raw upper bound, interpreted per field type.
    pub max: Option<String>,
    /// Cross-field equality reference.
    pub same_as: Option<SameAsRef>,
    /// Whether multiple comma-separated emails are allowed.
    pub multiple: bool,
}

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// Configuration error raised while resolving a descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The `pattern` attribute is not a valid regular expression.
    #[error("invalid pattern attribute `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern source.
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// One validatable input: canonical id, type, value snapshot and resolved
/// constraints.
///
/// The id is computed from the raw name once, here, and never recomputed.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    id: FieldId,
    field_type: FieldType,
    value: FieldValue,
    constraints: Constraints,
}

impl FieldDescriptor {
    /// Builds a descriptor from the UI layer's snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::InvalidPattern`] when the `pattern`
    /// attribute does not compile.
    pub fn new(
        raw_name: &str,
        field_type: FieldType,
        value: impl Into<FieldValue>,
        attributes: Attributes,
    ) -> Result<Self, DescriptorError> {
        Ok(Self {
            id: FieldId::resolve(raw_name),
            field_type,
            value: value.into(),
            constraints: attributes.resolve()?,
        })
    }

    /// The canonical field id.
    #[must_use]
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// The resolved field type.
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// The current value snapshot.
    #[must_use]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// The resolved constraints.
    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Returns the descriptor with a refreshed value snapshot, keeping the
    /// settled id and constraints.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = value.into();
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

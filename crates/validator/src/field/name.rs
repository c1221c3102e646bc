//! Canonical field identifiers

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Canonical, camel-cased key derived from a field's raw name.
///
/// Resolution flattens the raw name in two passes — dot segments first,
/// then hyphen segments — capitalizing the first letter of every segment
/// after the first: `user.first-name` becomes `userFirstName`. The id is
/// computed once at descriptor construction and settled for the field's
/// lifetime; it is the key under which error state is recorded.
///
/// # Examples
///
/// ```rust
/// use proforma_validator::field::FieldId;
///
/// assert_eq!(FieldId::resolve("user.first-name").as_str(), "userFirstName");
/// assert_eq!(FieldId::resolve("email").as_str(), "email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    /// Resolves a raw field name into its canonical id.
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        let dots_joined = camel_join(raw, '.');
        Self(camel_join(&dots_joined, '-'))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for FieldId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<FieldId> for String {
    fn from(id: FieldId) -> Self {
        id.0
    }
}

/// Joins `sep`-separated segments, capitalizing every segment after the
/// first.
fn camel_join(input: &str, sep: char) -> String {
    let mut segments = input.split(sep);
    let mut out = String::with_capacity(input.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        push_capitalized(&mut out, segment);
    }
    out
}

fn push_capitalized(out: &mut String, segment: &str) {
    let mut chars = segment.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

//! Per-field error state

use indexmap::IndexMap;
use serde::Serialize;

use crate::field::FieldId;

/// Insertion-ordered map from canonical field id to "has at least one
/// error".
///
/// The map always reflects the most recent check result for each field;
/// entries for fields that are no longer checked remain until
/// [`clear`](ErrorState::clear) — their lifecycle is tied to the
/// aggregator, not to any one check cycle.
///
/// The reserved [`ErrorState::GLOBAL`] pseudo-key records the global
/// custom predicate's verdict so it participates in the any-error rule
/// without being tied to a real field.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ErrorState {
    entries: IndexMap<FieldId, bool>,
}

impl ErrorState {
    /// Pseudo-key for the global custom predicate. The `$` prefix cannot
    /// appear in a camel-cased field id derived from a real input name.
    pub const GLOBAL: &'static str = "$form";

    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the verdict for a field, replacing any previous entry.
    pub fn set(&mut self, id: FieldId, has_error: bool) {
        self.entries.insert(id, has_error);
    }

    /// Returns a field's last recorded verdict, if it was ever checked.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<bool> {
        self.entries.get(id).copied()
    }

    /// True when any entry (including the pseudo-key) records an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.entries.values().any(|has_error| *has_error)
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no field has been checked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, bool)> {
        self.entries.iter().map(|(id, has_error)| (id, *has_error))
    }

    /// Drops every recorded entry (engine/session teardown).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_replaces_verdicts() {
        let mut state = ErrorState::new();
        state.set(FieldId::resolve("user.email"), true);
        assert_eq!(state.get("userEmail"), Some(true));
        assert!(state.has_errors());

        state.set(FieldId::resolve("user.email"), false);
        assert_eq!(state.get("userEmail"), Some(false));
        assert!(!state.has_errors());
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn unchecked_fields_have_no_entry() {
        let state = ErrorState::new();
        assert_eq!(state.get("anything"), None);
        assert!(!state.has_errors());
        assert!(state.is_empty());
    }

    #[test]
    fn stale_entries_persist_until_cleared() {
        let mut state = ErrorState::new();
        state.set(FieldId::resolve("old-field"), true);
        state.set(FieldId::resolve("new-field"), false);
        assert!(state.has_errors());

        state.clear();
        assert!(state.is_empty());
        assert!(!state.has_errors());
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut state = ErrorState::new();
        state.set(FieldId::resolve("b"), false);
        state.set(FieldId::resolve("a"), true);
        let ids: Vec<_> = state.iter().map(|(id, _)| id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn global_key_cannot_collide_with_resolved_ids() {
        // Resolution never introduces a '$'.
        assert_eq!(FieldId::resolve(ErrorState::GLOBAL).as_str(), "$form");
        assert_ne!(FieldId::resolve("form").as_str(), ErrorState::GLOBAL);
    }
}

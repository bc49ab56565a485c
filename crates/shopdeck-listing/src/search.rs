//! Free-text search over a chosen set of string fields.

use crate::traits::Tabular;
use crate::value::Value;

/// A free-text search: one term matched case-insensitively as a substring
/// against each of the listed fields, ORed together.
///
/// A blank term (empty or whitespace-only) is a no-op that keeps every
/// record, so UI code can pass the search box's contents through unchanged.
/// Non-string fields in the list never match; they are simply skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    term: String,
    fields: Vec<String>,
}

impl Search {
    /// Creates a search for `term` over the given fields.
    pub fn new<I, S>(term: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Search {
            term: term.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The raw search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The fields this search probes.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns `true` if the term is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.term.trim().is_empty()
    }

    /// Tests a single record against this search.
    pub fn matches<T: Tabular>(&self, record: &T) -> bool {
        self.matches_lowered(record, &self.needle())
    }

    /// The lower-cased term, computed once per run by the executor.
    pub(crate) fn needle(&self) -> String {
        self.term.to_lowercase()
    }

    pub(crate) fn matches_lowered<T: Tabular>(&self, record: &T, needle: &str) -> bool {
        if self.is_blank() {
            return true;
        }
        self.fields.iter().any(|field| match record.field(field) {
            Value::Str(s) => s.to_lowercase().contains(needle),
            _ => false,
        })
    }
}

//! Exact-match field filters.
//!
//! A [`FilterSet`] holds one constraint per field, combined with logical AND.
//! Each constraint is either [`FieldFilter::Any`] — the "all" option of a
//! dropdown, no constraint — or an exact [`FilterValue`]. Equality is exact,
//! never substring.

use crate::traits::Tabular;
use crate::value::{Number, Timestamp, Value};

/// An owned value a field is required to equal.
///
/// Unlike [`Value`], which borrows from a record, `FilterValue` owns its data
/// so it can live in caller-held filter state across renders.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// String equality.
    Str(String),
    /// Numeric equality (mixed-width numbers compare by value).
    Number(Number),
    /// Timestamp equality.
    Timestamp(Timestamp),
    /// Boolean equality.
    Bool(bool),
}

impl FilterValue {
    /// Exact-equality test against a record's field value.
    ///
    /// A [`Value::None`] field or a type mismatch never matches.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        match (self, value) {
            (FilterValue::Str(want), Value::Str(have)) => want == have,
            (FilterValue::Number(want), Value::Number(have)) => {
                want.compare(*have) == Some(std::cmp::Ordering::Equal)
            }
            (FilterValue::Timestamp(want), Value::Timestamp(have)) => want == have,
            (FilterValue::Bool(want), Value::Bool(have)) => want == have,
            _ => false,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Str(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Str(s)
    }
}

impl From<Number> for FilterValue {
    fn from(n: Number) -> Self {
        FilterValue::Number(n)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Number(Number::I64(n))
    }
}

impl From<u64> for FilterValue {
    fn from(n: u64) -> Self {
        FilterValue::Number(Number::U64(n))
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Number(Number::F64(n))
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Bool(b)
    }
}

impl From<Timestamp> for FilterValue {
    fn from(t: Timestamp) -> Self {
        FilterValue::Timestamp(t)
    }
}

/// One field's constraint inside a [`FilterSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldFilter {
    /// No constraint — the dropdown's "all" option.
    Any,
    /// The field must equal this value exactly.
    Exact(FilterValue),
}

impl FieldFilter {
    /// Returns `true` for the unconstrained variant.
    pub fn is_any(&self) -> bool {
        matches!(self, FieldFilter::Any)
    }

    /// Tests a field value against this constraint.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        match self {
            FieldFilter::Any => true,
            FieldFilter::Exact(want) => want.matches(value),
        }
    }
}

/// A set of per-field constraints, ANDed together.
///
/// Entries keep insertion order and there is at most one per field:
/// re-setting a field replaces its previous constraint, mirroring a dropdown
/// changing value.
///
/// # Example
///
/// ```
/// use shopdeck_listing::FilterSet;
///
/// let filters = FilterSet::new()
///     .exact("paymentMethod", "UPI")
///     .any("city");
///
/// assert_eq!(filters.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    entries: Vec<(String, FieldFilter)>,
}

impl FilterSet {
    /// Creates an empty filter set (matches every record).
    pub fn new() -> Self {
        FilterSet::default()
    }

    /// Adds or replaces an exact-match constraint.
    pub fn exact(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.set(field, FieldFilter::Exact(value.into()));
        self
    }

    /// Adds or replaces an explicit "all" entry for a field.
    ///
    /// Equivalent to having no entry at all; kept so UI state can hold a slot
    /// per dropdown.
    pub fn any(mut self, field: impl Into<String>) -> Self {
        self.set(field, FieldFilter::Any);
        self
    }

    /// Sets a field's constraint, replacing any existing entry for it.
    pub fn set(&mut self, field: impl Into<String>, filter: FieldFilter) {
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = filter,
            None => self.entries.push((field, filter)),
        }
    }

    /// The entries, in insertion order.
    pub fn entries(&self) -> &[(String, FieldFilter)] {
        &self.entries
    }

    /// Number of entries (including `Any` ones).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tests a record against every non-`Any` constraint.
    pub fn matches<T: Tabular>(&self, record: &T) -> bool {
        self.entries
            .iter()
            .all(|(field, filter)| filter.matches(&record.field(field)))
    }
}

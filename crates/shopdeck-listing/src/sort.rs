//! Single-column sorting.

use std::cmp::Ordering;

use crate::traits::Tabular;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending (smallest first).
    #[default]
    Asc,
    /// Descending (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction: `Desc` reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Flips the direction.
    pub fn flipped(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Display name ("asc" / "desc").
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sort key: one field plus a direction.
///
/// The engine requires a stable sort — records comparing equal keep their
/// input order — so repeated identical runs are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub dir: Dir,
}

impl Sort {
    /// Creates a sort with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        Sort {
            field: field.into(),
            dir,
        }
    }

    /// Ascending sort on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Sort::new(field, Dir::Asc)
    }

    /// Descending sort on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Sort::new(field, Dir::Desc)
    }

    /// Click-to-sort state transition for a sortable column header.
    ///
    /// Clicking the column already sorted on flips its direction; clicking a
    /// different column starts an ascending sort there.
    pub fn toggle(current: Option<&Sort>, field: impl Into<String>) -> Self {
        let field = field.into();
        match current {
            Some(sort) if sort.field == field => Sort::new(field, sort.dir.flipped()),
            _ => Sort::asc(field),
        }
    }

    /// Compares two records by this sort key.
    ///
    /// Incomparable values (type mismatch, NaN) are treated as equal so the
    /// stable sort leaves them in input order.
    pub fn compare<T: Tabular>(&self, a: &T, b: &T) -> Ordering {
        compare_values(&a.field(&self.field), &b.field(&self.field))
            .map(|ordering| self.dir.apply(ordering))
            .unwrap_or(Ordering::Equal)
    }
}

/// Compares two field values of the same type.
///
/// Strings compare lexicographically, numbers numerically, timestamps and
/// bools by their natural order. `None` sorts after everything. Returns
/// `None` for a type mismatch or NaN.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::None, Value::None) => Some(Ordering::Equal),
        (Value::None, _) => Some(Ordering::Greater),
        (_, Value::None) => Some(Ordering::Less),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Number, Timestamp};

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn toggle_same_column_flips() {
        let price_asc = Sort::asc("price");
        let toggled = Sort::toggle(Some(&price_asc), "price");
        assert_eq!(toggled, Sort::desc("price"));

        let toggled_again = Sort::toggle(Some(&toggled), "price");
        assert_eq!(toggled_again, Sort::asc("price"));
    }

    #[test]
    fn toggle_new_column_starts_ascending() {
        let price_desc = Sort::desc("price");
        assert_eq!(Sort::toggle(Some(&price_desc), "name"), Sort::asc("name"));
        assert_eq!(Sort::toggle(None, "name"), Sort::asc("name"));
    }

    #[test]
    fn compare_strings_lexicographic() {
        assert_eq!(
            compare_values(&Value::Str("apple"), &Value::Str("banana")),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn compare_none_sorts_last() {
        assert_eq!(
            compare_values(&Value::None, &Value::Str("x")),
            Some(Ordering::Greater)
        );
        assert_eq!(
            compare_values(&Value::Str("x"), &Value::None),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn compare_mismatch_is_incomparable() {
        assert_eq!(
            compare_values(&Value::Str("5"), &Value::Number(Number::I64(5))),
            None
        );
    }

    #[test]
    fn compare_timestamps() {
        assert_eq!(
            compare_values(
                &Value::Timestamp(Timestamp(1000)),
                &Value::Timestamp(Timestamp(2000))
            ),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn dir_display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
    }
}

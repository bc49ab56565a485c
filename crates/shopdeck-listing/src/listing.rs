//! Listing builder and executor.
//!
//! A [`Listing`] bundles the four stages of the pipeline — search, filter,
//! sort, paginate — and [`Listing::run`] executes them in that order against
//! a record slice, producing one [`ListingPage`].

use crate::error::{ListingError, Result};
use crate::filter::{FilterSet, FilterValue};
use crate::page::Page;
use crate::search::Search;
use crate::sort::{Dir, Sort};
use crate::traits::Tabular;

/// One screen's worth of list state: search, filters, sort, page.
///
/// A `Listing` is a pure description; running it never mutates the records or
/// the listing itself, so callers rebuild or tweak it on every input change
/// and re-run. Debouncing, caching and everything else stateful stays with
/// the caller.
///
/// # Example
///
/// ```
/// use shopdeck_listing::{Dir, Listing, Number, Tabular, Value};
///
/// struct Product {
///     id: String,
///     name: String,
///     price: f64,
/// }
///
/// impl Tabular for Product {
///     const FIELDS: &'static [&'static str] = &["id", "name", "price"];
///
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "id" => Value::Str(&self.id),
///             "name" => Value::Str(&self.name),
///             "price" => Value::Number(Number::F64(self.price)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let products = vec![
///     Product { id: "P-1".into(), name: "Notebook".into(), price: 29.99 },
///     Product { id: "P-2".into(), name: "Pen Set".into(), price: 89.99 },
///     Product { id: "P-3".into(), name: "Art Kit".into(), price: 199.99 },
/// ];
///
/// let page = Listing::new()
///     .search("e", ["name", "id"])
///     .sort("price", Dir::Desc)
///     .per_page(10)
///     .run(&products)
///     .unwrap();
///
/// assert_eq!(page.total_matching, 2);
/// assert_eq!(page.rows[0].name, "Pen Set");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Listing {
    search: Option<Search>,
    filters: FilterSet,
    sort: Option<Sort>,
    page: Page,
}

impl Listing {
    /// Creates an empty listing: no search, no filters, input order,
    /// first page of ten.
    pub fn new() -> Self {
        Listing::default()
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Sets the free-text search: a term matched case-insensitively as a
    /// substring over the given fields. A blank term keeps every record.
    pub fn search<I, S>(mut self, term: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search = Some(Search::new(term, fields));
        self
    }

    /// Adds or replaces an exact-match filter on a field.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filters = self.filters.exact(field, value);
        self
    }

    /// Adds or replaces an explicit "all" (no-constraint) entry for a field.
    pub fn filter_any(mut self, field: impl Into<String>) -> Self {
        self.filters = self.filters.any(field);
        self
    }

    /// Replaces the whole filter set.
    pub fn filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Sorts by a field. Without this, input order is preserved.
    pub fn sort(mut self, field: impl Into<String>, dir: Dir) -> Self {
        self.sort = Some(Sort::new(field, dir));
        self
    }

    /// Sets or clears the sort key.
    pub fn sort_by(mut self, sort: Option<Sort>) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the page size. Must be at least 1; [`run`](Listing::run) rejects 0.
    pub fn per_page(mut self, size: usize) -> Self {
        self.page.size = size;
        self
    }

    /// Sets the requested 1-based page number. Out-of-range pages are clamped
    /// at read time, never written back.
    pub fn page(mut self, number: usize) -> Self {
        self.page.number = number;
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// The search spec, if any.
    pub fn get_search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    /// The filter set.
    pub fn get_filters(&self) -> &FilterSet {
        &self.filters
    }

    /// The sort key, if any.
    pub fn get_sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// The page spec.
    pub fn get_page(&self) -> Page {
        self.page
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests whether a single record passes the search and filter stages.
    pub fn matches<T: Tabular>(&self, record: &T) -> bool {
        let search_ok = self
            .search
            .as_ref()
            .map_or(true, |search| search.matches(record));
        search_ok && self.filters.matches(record)
    }

    /// Counts the records that pass search and filters, ignoring pagination.
    pub fn count<T: Tabular>(&self, records: &[T]) -> usize {
        let needle = self.search.as_ref().map(Search::needle);
        records
            .iter()
            .filter(|record| self.passes(*record, needle.as_deref()))
            .count()
    }

    /// Runs the full pipeline and returns the visible page.
    ///
    /// Stages run in order — search, filter, sort, paginate — each over the
    /// previous stage's output. Only the sort stage reorders records, and it
    /// is stable, so identical runs yield identical pages.
    ///
    /// # Errors
    ///
    /// [`ListingError::InvalidPageSize`] if the page size is 0, and
    /// [`ListingError::UnknownSortField`] if the sort field is not one of
    /// `T::FIELDS`. Zero matches is not an error: the result is a well-formed
    /// empty page 1 of 1.
    pub fn run<'a, T: Tabular>(&self, records: &'a [T]) -> Result<ListingPage<'a, T>> {
        if self.page.size < 1 {
            return Err(ListingError::InvalidPageSize(self.page.size));
        }
        if let Some(sort) = &self.sort {
            if !T::FIELDS.contains(&sort.field.as_str()) {
                return Err(ListingError::UnknownSortField(sort.field.clone()));
            }
        }

        let needle = self.search.as_ref().map(Search::needle);
        let mut matched: Vec<&'a T> = records
            .iter()
            .filter(|record| self.passes(*record, needle.as_deref()))
            .collect();

        if let Some(sort) = &self.sort {
            // sort_by is stable: ties keep their input order
            matched.sort_by(|a, b| sort.compare(*a, *b));
        }

        let total_matching = matched.len();
        let window = self.page.window(total_matching);

        Ok(ListingPage {
            rows: matched[window.start..window.end].to_vec(),
            total_matching,
            total_pages: window.total_pages,
            page: window.page,
            start: window.start,
            end: window.end,
        })
    }

    fn passes<T: Tabular>(&self, record: &T, needle: Option<&str>) -> bool {
        let search_ok = match (&self.search, needle) {
            (Some(search), Some(needle)) => search.matches_lowered(record, needle),
            _ => true,
        };
        search_ok && self.filters.matches(record)
    }
}

/// The visible page plus the pagination metadata the controls need.
#[derive(Debug, Clone)]
pub struct ListingPage<'a, T> {
    /// The records on this page, in pipeline order.
    pub rows: Vec<&'a T>,
    /// Matching record count after search and filters, before pagination.
    pub total_matching: usize,
    /// Total page count, at least 1.
    pub total_pages: usize,
    /// Effective 1-based page number after clamping.
    pub page: usize,
    /// Zero-based slice start into the filtered records.
    pub start: usize,
    /// Zero-based slice end (exclusive).
    pub end: usize,
}

impl<'a, T> ListingPage<'a, T> {
    /// Number of rows on this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Returns `true` if a further page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based "showing X to Y" bounds for the footer label.
    ///
    /// `(0, 0)` when there are no matches.
    pub fn shown_bounds(&self) -> (usize, usize) {
        if self.total_matching == 0 {
            (0, 0)
        } else {
            (self.start + 1, self.end)
        }
    }
}

//! Shopdeck listing — search, filter, sort and paginate in-memory collections.
//!
//! One admin table is one [`Listing`]: a free-text [`Search`] over chosen
//! fields, a [`FilterSet`] of exact-match dropdowns with an "all" sentinel, an
//! optional stable [`Sort`], and a clamped 1-based [`Page`]. Running a listing
//! is a pure function of its inputs — no I/O, no mutation, no caching — so UI
//! code re-runs it on every keystroke or dropdown change and renders the
//! returned [`ListingPage`].
//!
//! # Quick start
//!
//! ```rust
//! use shopdeck_listing::{Dir, Listing, Number, Tabular, Value};
//!
//! struct User {
//!     name: String,
//!     email: String,
//!     provider: &'static str,
//! }
//!
//! impl Tabular for User {
//!     const FIELDS: &'static [&'static str] = &["name", "email", "provider"];
//!
//!     fn field(&self, name: &str) -> Value<'_> {
//!         match name {
//!             "name" => Value::Str(&self.name),
//!             "email" => Value::Str(&self.email),
//!             "provider" => Value::Str(self.provider),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let users = vec![
//!     User { name: "John Doe".into(), email: "john@example.com".into(), provider: "google" },
//!     User { name: "Jane Smith".into(), email: "jane@company.com".into(), provider: "credentials" },
//!     User { name: "Mike Johnson".into(), email: "mike@email.com".into(), provider: "google" },
//! ];
//!
//! let page = Listing::new()
//!     .search("j", ["name", "email"])
//!     .filter("provider", "google")
//!     .sort("name", Dir::Asc)
//!     .per_page(10)
//!     .run(&users)
//!     .unwrap();
//!
//! assert_eq!(page.total_matching, 2);
//! assert_eq!(page.rows[0].name, "John Doe");
//! assert_eq!(page.total_pages, 1);
//! ```
//!
//! # Pipeline semantics
//!
//! Stages run in a fixed order, each over the previous stage's output:
//!
//! 1. **Search** — keep a record iff the term is blank, or the lower-cased
//!    term is a substring of at least one listed field's lower-cased string
//!    value (OR across fields).
//! 2. **Filter** — keep a record iff every non-"all" entry equals the
//!    record's field exactly (AND across entries; never substring).
//! 3. **Sort** — stable single-column sort when a key is set; otherwise input
//!    order is preserved. Ties keep their input order, so identical runs are
//!    deterministic.
//! 4. **Paginate** — clamp the requested page into `1..=total_pages`
//!    (`total_pages` has a floor of 1) and slice.
//!
//! Misconfiguration — a zero page size or a sort field the record type does
//! not have — is a synchronous [`ListingError`], never a silent fallback.
//! Empty input and zero matches are normal results, not errors.

mod error;
mod filter;
mod listing;
mod page;
mod search;
mod sort;
mod traits;
mod value;

pub use error::{ListingError, Result};
pub use filter::{FieldFilter, FilterSet, FilterValue};
pub use listing::{Listing, ListingPage};
pub use page::{Page, PageWindow};
pub use search::Search;
pub use sort::{compare_values, Dir, Sort};
pub use traits::Tabular;
pub use value::{Number, Timestamp, Value};

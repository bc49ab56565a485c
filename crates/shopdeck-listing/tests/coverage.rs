//! Worked examples and edge cases for the listing pipeline.

use shopdeck_listing::{
    Dir, FilterSet, Listing, ListingError, Number, Sort, Tabular, Value,
};

// ============================================================================
// Test records
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: u32,
    name: String,
    price: f64,
    category: String,
}

impl Tabular for Item {
    const FIELDS: &'static [&'static str] = &["id", "name", "price", "category"];

    fn field(&self, name: &str) -> Value<'_> {
        match name {
            "id" => Value::Number(Number::U64(self.id as u64)),
            "name" => Value::Str(&self.name),
            "price" => Value::Number(Number::F64(self.price)),
            "category" => Value::Str(&self.category),
            _ => Value::None,
        }
    }
}

fn item(id: u32, name: &str, price: f64, category: &str) -> Item {
    Item {
        id,
        name: name.to_string(),
        price,
        category: category.to_string(),
    }
}

fn sequential_items(count: u32) -> Vec<Item> {
    (1..=count)
        .map(|id| item(id, &format!("Item {id}"), id as f64, "misc"))
        .collect()
}

// ============================================================================
// Pagination examples
// ============================================================================

#[test]
fn twenty_five_items_page_three_of_ten() {
    let items = sequential_items(25);
    let page = Listing::new().per_page(10).page(3).run(&items).unwrap();

    assert_eq!(page.total_matching, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 3);
    assert_eq!(page.rows.len(), 5);

    let ids: Vec<u32> = page.rows.iter().map(|i| i.id).collect();
    assert_eq!(ids, [21, 22, 23, 24, 25]);
    assert_eq!(page.shown_bounds(), (21, 25));
}

#[test]
fn page_ninety_nine_of_two_clamps_to_last() {
    let items = sequential_items(15);
    let page = Listing::new().per_page(10).page(99).run(&items).unwrap();

    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page, 2);
    let ids: Vec<u32> = page.rows.iter().map(|i| i.id).collect();
    assert_eq!(ids, [11, 12, 13, 14, 15]);
}

#[test]
fn empty_collection_yields_one_empty_page() {
    let items: Vec<Item> = vec![];
    let page = Listing::new().run(&items).unwrap();

    assert_eq!(page.total_matching, 0);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page, 1);
    assert!(page.is_empty());
    assert!(!page.has_prev());
    assert!(!page.has_next());
}

// ============================================================================
// Sort examples
// ============================================================================

#[test]
fn price_desc_keeps_input_order_among_equal_prices() {
    // Prices [35, 28, 50, 50, 35]: both 50s and both 35s must keep their
    // original relative order under the descending sort.
    let items = vec![
        item(1, "a", 35.0, "misc"),
        item(2, "b", 28.0, "misc"),
        item(3, "c", 50.0, "misc"),
        item(4, "d", 50.0, "misc"),
        item(5, "e", 35.0, "misc"),
    ];

    let page = Listing::new().sort("price", Dir::Desc).run(&items).unwrap();

    let ids: Vec<u32> = page.rows.iter().map(|i| i.id).collect();
    assert_eq!(ids, [3, 4, 1, 5, 2]);
}

#[test]
fn sort_asc_on_strings() {
    let items = vec![
        item(1, "banana", 1.0, "fruit"),
        item(2, "apple", 2.0, "fruit"),
        item(3, "cherry", 3.0, "fruit"),
    ];

    let page = Listing::new().sort("name", Dir::Asc).run(&items).unwrap();
    let names: Vec<&str> = page.rows.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["apple", "banana", "cherry"]);
}

#[test]
fn click_to_sort_toggle_sequence() {
    let items = vec![
        item(1, "b", 2.0, "misc"),
        item(2, "a", 1.0, "misc"),
    ];

    // First click on "price": ascending
    let sort = Sort::toggle(None, "price");
    let page = Listing::new()
        .sort_by(Some(sort.clone()))
        .run(&items)
        .unwrap();
    assert_eq!(page.rows[0].id, 2);

    // Second click on the same column: descending
    let sort = Sort::toggle(Some(&sort), "price");
    let page = Listing::new()
        .sort_by(Some(sort.clone()))
        .run(&items)
        .unwrap();
    assert_eq!(page.rows[0].id, 1);

    // Click on another column: back to ascending there
    let sort = Sort::toggle(Some(&sort), "name");
    assert_eq!(sort, Sort::asc("name"));
}

// ============================================================================
// Search and filter examples
// ============================================================================

#[test]
fn unmatched_search_term_matches_nothing() {
    let items = sequential_items(10);
    let page = Listing::new()
        .search("zzz-not-there", ["name", "category"])
        .run(&items)
        .unwrap();

    assert_eq!(page.total_matching, 0);
    assert!(page.is_empty());
}

#[test]
fn all_on_every_field_equals_no_filtering() {
    let items = vec![
        item(1, "Notebook", 29.99, "Stationery"),
        item(2, "Pen Set", 89.99, "Stationery"),
        item(3, "Art Kit", 199.99, "Art"),
    ];

    let with_alls = Listing::new()
        .filters(FilterSet::new().any("category").any("price").any("name"))
        .run(&items)
        .unwrap();
    let without = Listing::new().run(&items).unwrap();

    assert_eq!(with_alls.total_matching, without.total_matching);
    let a: Vec<u32> = with_alls.rows.iter().map(|i| i.id).collect();
    let b: Vec<u32> = without.rows.iter().map(|i| i.id).collect();
    assert_eq!(a, b);
}

#[test]
fn filter_is_exact_equality_not_substring() {
    let items = vec![
        item(1, "Notebook", 29.99, "Stationery"),
        item(2, "Art Kit", 199.99, "Art"),
    ];

    let page = Listing::new().filter("category", "Art").run(&items).unwrap();

    // "Art" must not match "Stationery"-adjacent categories by substring;
    // only the exact "Art" record survives.
    assert_eq!(page.total_matching, 1);
    assert_eq!(page.rows[0].id, 2);
}

#[test]
fn filter_narrows_search_results() {
    let items = vec![
        item(1, "Premium Notebook", 29.99, "Stationery"),
        item(2, "Premium Pen", 89.99, "Stationery"),
        item(3, "Premium Paint", 19.99, "Art"),
    ];

    let page = Listing::new()
        .search("premium", ["name"])
        .filter("category", "Art")
        .run(&items)
        .unwrap();

    assert_eq!(page.total_matching, 1);
    assert_eq!(page.rows[0].id, 3);
}

// ============================================================================
// Error surface
// ============================================================================

#[test]
fn invalid_page_size_surfaces() {
    let items = sequential_items(3);
    let err = Listing::new().per_page(0).run(&items).unwrap_err();
    assert_eq!(err, ListingError::InvalidPageSize(0));
    assert_eq!(err.to_string(), "page size must be at least 1, got 0");
}

#[test]
fn unknown_sort_field_surfaces() {
    let items = sequential_items(3);
    let err = Listing::new()
        .sort("weight", Dir::Asc)
        .run(&items)
        .unwrap_err();
    assert_eq!(err, ListingError::UnknownSortField("weight".to_string()));
    assert_eq!(err.to_string(), "unknown sort field 'weight'");
}

#[test]
fn error_precedence_page_size_before_sort_field() {
    let items = sequential_items(3);
    let err = Listing::new()
        .per_page(0)
        .sort("weight", Dir::Asc)
        .run(&items)
        .unwrap_err();
    assert_eq!(err, ListingError::InvalidPageSize(0));
}

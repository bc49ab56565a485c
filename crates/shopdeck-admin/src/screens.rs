//! Listing state for the three admin dashboard screens.
//!
//! Each screen struct mirrors the controls the page exposes (search box,
//! filter dropdowns, sortable headers, pager) and knows how to turn that
//! state into a [`Listing`]. Dropdowns use `None` for their "all" option,
//! so an unset filter never narrows the result.

use shopdeck_listing::{Listing, ListingPage, Result, Sort};

use crate::order::{Order, PaymentMethod, PaymentStatus};
use crate::product::{PageType, Product};
use crate::user::{Provider, User};

/// Rows shown per page on every dashboard table.
pub const ROWS_PER_PAGE: usize = 10;

/// Fields the orders search box scans.
pub const ORDER_SEARCH_FIELDS: [&str; 4] = ["firstName", "lastName", "email", "id"];

/// Fields the products search box scans.
pub const PRODUCT_SEARCH_FIELDS: [&str; 2] = ["name", "id"];

/// Fields the users search box scans.
pub const USER_SEARCH_FIELDS: [&str; 2] = ["name", "email"];

/// Control state of the orders screen.
#[derive(Debug, Clone, Default)]
pub struct OrdersScreen {
    pub search: String,
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: Option<PaymentStatus>,
    pub city: Option<String>,
    pub page: usize,
}

impl OrdersScreen {
    pub fn new() -> Self {
        OrdersScreen {
            page: 1,
            ..OrdersScreen::default()
        }
    }

    /// The listing this screen's controls currently describe.
    pub fn listing(&self) -> Listing {
        let mut listing = Listing::new()
            .search(&self.search, ORDER_SEARCH_FIELDS)
            .per_page(ROWS_PER_PAGE)
            .page(self.page);
        if let Some(method) = self.payment_method {
            listing = listing.filter("paymentMethod", method.as_str());
        }
        if let Some(status) = self.payment_status {
            listing = listing.filter("paymentStatus", status.as_str());
        }
        if let Some(city) = &self.city {
            listing = listing.filter("city", city.as_str());
        }
        listing
    }

    pub fn run<'a>(&self, orders: &'a [Order]) -> Result<ListingPage<'a, Order>> {
        self.listing().run(orders)
    }
}

/// Control state of the products screen.
#[derive(Debug, Clone, Default)]
pub struct ProductsScreen {
    pub search: String,
    /// `None` renders as "All Categories".
    pub category: Option<String>,
    /// `None` renders as "All Types".
    pub page_type: Option<PageType>,
    pub sort: Option<Sort>,
    pub page: usize,
}

impl ProductsScreen {
    pub fn new() -> Self {
        ProductsScreen {
            page: 1,
            ..ProductsScreen::default()
        }
    }

    /// A click on a sortable column header: first click sorts ascending,
    /// a second click on the same column flips the direction.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(Sort::toggle(self.sort.as_ref(), field));
        self.page = 1;
    }

    pub fn listing(&self) -> Listing {
        let mut listing = Listing::new()
            .search(&self.search, PRODUCT_SEARCH_FIELDS)
            .per_page(ROWS_PER_PAGE)
            .page(self.page);
        if let Some(category) = &self.category {
            listing = listing.filter("category1", category.as_str());
        }
        if let Some(page_type) = self.page_type {
            listing = listing.filter("pageType", page_type.as_str());
        }
        listing.sort_by(self.sort.clone())
    }

    pub fn run<'a>(&self, products: &'a [Product]) -> Result<ListingPage<'a, Product>> {
        self.listing().run(products)
    }
}

/// Control state of the users screen.
///
/// Unlike the other two tables, this one lets the admin pick the page size.
#[derive(Debug, Clone, Default)]
pub struct UsersScreen {
    pub search: String,
    pub provider: Option<Provider>,
    pub rows_per_page: usize,
    pub page: usize,
}

impl UsersScreen {
    pub fn new() -> Self {
        UsersScreen {
            rows_per_page: ROWS_PER_PAGE,
            page: 1,
            ..UsersScreen::default()
        }
    }

    pub fn listing(&self) -> Listing {
        let mut listing = Listing::new()
            .search(&self.search, USER_SEARCH_FIELDS)
            .per_page(self.rows_per_page)
            .page(self.page);
        if let Some(provider) = self.provider {
            listing = listing.filter("provider", provider.as_str());
        }
        listing
    }

    pub fn run<'a>(&self, users: &'a [User]) -> Result<ListingPage<'a, User>> {
        self.listing().run(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdeck_listing::Dir;

    #[test]
    fn unset_dropdowns_add_no_filters() {
        let screen = OrdersScreen::new();
        assert!(screen.listing().get_filters().is_empty());

        let screen = UsersScreen::new();
        assert!(screen.listing().get_filters().is_empty());
    }

    #[test]
    fn set_dropdowns_become_exact_filters() {
        let screen = OrdersScreen {
            payment_method: Some(PaymentMethod::Upi),
            payment_status: Some(PaymentStatus::Failed),
            ..OrdersScreen::new()
        };
        assert_eq!(screen.listing().get_filters().len(), 2);
    }

    #[test]
    fn header_clicks_toggle_direction() {
        let mut screen = ProductsScreen::new();
        screen.page = 3;

        screen.toggle_sort("price");
        assert_eq!(screen.sort.as_ref().unwrap().dir, Dir::Asc);
        assert_eq!(screen.page, 1);

        screen.toggle_sort("price");
        assert_eq!(screen.sort.as_ref().unwrap().dir, Dir::Desc);

        screen.toggle_sort("name");
        let sort = screen.sort.as_ref().unwrap();
        assert_eq!(sort.field, "name");
        assert_eq!(sort.dir, Dir::Asc);
    }
}

//! Admin dashboard tables for the shopdeck storefront.
//!
//! Three screens — orders, products, users — each a [`shopdeck_listing`]
//! pipeline over its own record type. This crate supplies the record shapes,
//! their field schemas, the per-screen listing state, the orders summary
//! cards, CSV export, and the mock fixtures the screens render today.
//!
//! ```
//! use shopdeck_admin::fixtures;
//! use shopdeck_admin::screens::UsersScreen;
//!
//! let users = fixtures::sample_users();
//! let mut screen = UsersScreen::new();
//! screen.search = "jane".to_string();
//!
//! let page = screen.run(&users).unwrap();
//! assert_eq!(page.total_matching, 1);
//! assert_eq!(page.rows[0].email, "jane.smith@company.com");
//! ```

pub mod export;
pub mod fixtures;
pub mod order;
pub mod product;
pub mod screens;
pub mod summary;
pub mod user;

pub use export::{orders_csv_string, write_orders_csv, ExportError};
pub use order::{Address, Customer, LineItem, Order, PaymentMethod, PaymentStatus};
pub use product::{InfoPage, PageType, Product};
pub use screens::{OrdersScreen, ProductsScreen, UsersScreen};
pub use summary::OrderSummary;
pub use user::{Provider, Role, User};

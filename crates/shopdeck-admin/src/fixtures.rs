//! Mock data backing the admin screens and their tests.
//!
//! These are the sample rows the dashboard renders until a real backend is
//! wired in; dates are epoch milliseconds (UTC).

use shopdeck_listing::Timestamp;

use crate::order::{Address, Customer, LineItem, Order, PaymentMethod, PaymentStatus};
use crate::product::{InfoPage, PageType, Product};
use crate::user::{Provider, Role, User};

/// Three sample orders: John Doe, Jane Smith, Mike Johnson.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-2024-001".to_string(),
            merchant_order_id: "MERCH-001".to_string(),
            customer: Customer {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                phone: "+1-555-0123".to_string(),
                email: "john.doe@email.com".to_string(),
                address: Address {
                    street: "123 Main St".to_string(),
                    landmark: "Near Central Park".to_string(),
                    city: "New York".to_string(),
                    state: "NY".to_string(),
                    postal_code: "10001".to_string(),
                    full: "123 Main St, Near Central Park, New York, NY 10001".to_string(),
                },
            },
            line_items: vec![
                LineItem {
                    product_id: "PROD-001".to_string(),
                    name: "Premium Notebook".to_string(),
                    quantity: 2,
                    price: 29.99,
                    pages: 200,
                    category1: "Stationery".to_string(),
                    category2: "Notebooks".to_string(),
                    stock: 150,
                },
                LineItem {
                    product_id: "PROD-002".to_string(),
                    name: "Luxury Pen Set".to_string(),
                    quantity: 1,
                    price: 89.99,
                    pages: 0,
                    category1: "Stationery".to_string(),
                    category2: "Pens".to_string(),
                    stock: 75,
                },
            ],
            total_price: 149.97,
            payment_method: PaymentMethod::Upi,
            payment_status: PaymentStatus::Success,
            // 2024-01-15T10:30:00Z
            order_date: Timestamp::from_millis(1_705_314_600_000),
            status: "confirmed".to_string(),
        },
        Order {
            id: "ORD-2024-002".to_string(),
            merchant_order_id: "MERCH-002".to_string(),
            customer: Customer {
                first_name: "Jane".to_string(),
                last_name: "Smith".to_string(),
                phone: "+1-555-0124".to_string(),
                email: "jane.smith@email.com".to_string(),
                address: Address {
                    street: "456 Oak Ave".to_string(),
                    landmark: "Opposite Mall".to_string(),
                    city: "Los Angeles".to_string(),
                    state: "CA".to_string(),
                    postal_code: "90210".to_string(),
                    full: "456 Oak Ave, Opposite Mall, Los Angeles, CA 90210".to_string(),
                },
            },
            line_items: vec![LineItem {
                product_id: "PROD-003".to_string(),
                name: "Art Supplies Kit".to_string(),
                quantity: 1,
                price: 199.99,
                pages: 0,
                category1: "Art".to_string(),
                category2: "Supplies".to_string(),
                stock: 25,
            }],
            total_price: 199.99,
            payment_method: PaymentMethod::Cod,
            payment_status: PaymentStatus::Failed,
            // 2024-01-14T14:20:00Z
            order_date: Timestamp::from_millis(1_705_242_000_000),
            status: "confirmed".to_string(),
        },
        Order {
            id: "ORD-2024-003".to_string(),
            merchant_order_id: "MERCH-003".to_string(),
            customer: Customer {
                first_name: "Mike".to_string(),
                last_name: "Johnson".to_string(),
                phone: "+1-555-0125".to_string(),
                email: "mike.johnson@email.com".to_string(),
                address: Address {
                    street: "789 Pine St".to_string(),
                    landmark: "Near School".to_string(),
                    city: "Chicago".to_string(),
                    state: "IL".to_string(),
                    postal_code: "60601".to_string(),
                    full: "789 Pine St, Near School, Chicago, IL 60601".to_string(),
                },
            },
            line_items: vec![LineItem {
                product_id: "PROD-004".to_string(),
                name: "Office Organizer".to_string(),
                quantity: 3,
                price: 45.99,
                pages: 0,
                category1: "Office".to_string(),
                category2: "Organization".to_string(),
                stock: 100,
            }],
            total_price: 137.97,
            payment_method: PaymentMethod::CreditCard,
            payment_status: PaymentStatus::Success,
            // 2024-01-13T09:15:00Z
            order_date: Timestamp::from_millis(1_705_137_300_000),
            status: "confirmed".to_string(),
        },
    ]
}

/// Five sample products across four top-level categories.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "PRD-001".to_string(),
            name: "Wireless Bluetooth Headphones with Noise Cancellation".to_string(),
            price: 199.99,
            images: vec![
                "/placeholder.svg?height=200&width=200".to_string(),
                "/placeholder.svg?height=200&width=200".to_string(),
            ],
            stock: 45,
            category1: "Electronics".to_string(),
            category2: "Audio".to_string(),
            page_type: PageType::Simple,
            pages: vec![
                InfoPage {
                    title: "Product Overview".to_string(),
                    content: "High-quality wireless headphones...".to_string(),
                },
                InfoPage {
                    title: "Specifications".to_string(),
                    content: "Battery: 30 hours, Range: 30ft...".to_string(),
                },
            ],
        },
        Product {
            id: "PRD-002".to_string(),
            name: "Organic Cotton T-Shirt".to_string(),
            price: 29.99,
            images: vec!["/placeholder.svg?height=200&width=200".to_string()],
            stock: 0,
            category1: "Clothing".to_string(),
            category2: "Shirts".to_string(),
            page_type: PageType::Grouped,
            pages: vec![InfoPage {
                title: "Material Info".to_string(),
                content: "100% organic cotton...".to_string(),
            }],
        },
        Product {
            id: "PRD-003".to_string(),
            name: "JavaScript: The Definitive Guide".to_string(),
            price: 49.99,
            images: vec![
                "/placeholder.svg?height=200&width=200".to_string(),
                "/placeholder.svg?height=200&width=200".to_string(),
                "/placeholder.svg?height=200&width=200".to_string(),
            ],
            stock: 23,
            category1: "Books".to_string(),
            category2: "Programming".to_string(),
            page_type: PageType::Simple,
            pages: vec![
                InfoPage {
                    title: "Table of Contents".to_string(),
                    content: "Chapter 1: Introduction...".to_string(),
                },
                InfoPage {
                    title: "Author Bio".to_string(),
                    content: "David Flanagan is a programmer...".to_string(),
                },
            ],
        },
        Product {
            id: "PRD-004".to_string(),
            name: "Stainless Steel Water Bottle".to_string(),
            price: 24.99,
            images: vec!["/placeholder.svg?height=200&width=200".to_string()],
            stock: 156,
            category1: "Home".to_string(),
            category2: "Kitchen".to_string(),
            page_type: PageType::Simple,
            pages: vec![InfoPage {
                title: "Care Instructions".to_string(),
                content: "Hand wash recommended...".to_string(),
            }],
        },
        Product {
            id: "PRD-005".to_string(),
            name: "Gaming Mechanical Keyboard".to_string(),
            price: 129.99,
            images: vec![
                "/placeholder.svg?height=200&width=200".to_string(),
                "/placeholder.svg?height=200&width=200".to_string(),
            ],
            stock: 12,
            category1: "Electronics".to_string(),
            category2: "Computers".to_string(),
            page_type: PageType::Grouped,
            pages: vec![
                InfoPage {
                    title: "Key Specifications".to_string(),
                    content: "Cherry MX switches...".to_string(),
                },
                InfoPage {
                    title: "RGB Lighting".to_string(),
                    content: "16.7 million colors...".to_string(),
                },
            ],
        },
    ]
}

/// The category dropdown's options, minus the "All Categories" sentinel.
pub const PRODUCT_CATEGORIES: [&str; 4] = ["Electronics", "Clothing", "Books", "Home"];

/// Eight sample users, a mix of providers and roles.
pub fn sample_users() -> Vec<User> {
    fn user(
        id: &str,
        name: &str,
        email: &str,
        provider: Provider,
        role: Role,
        created_at_millis: i64,
    ) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            provider,
            role,
            created_at: Timestamp::from_millis(created_at_millis),
        }
    }

    vec![
        // 2024-01-15
        user(
            "1",
            "John Doe",
            "john.doe@example.com",
            Provider::Google,
            Role::Admin,
            1_705_276_800_000,
        ),
        // 2024-02-20
        user(
            "2",
            "Jane Smith",
            "jane.smith@company.com",
            Provider::Credentials,
            Role::User,
            1_708_387_200_000,
        ),
        // 2024-03-10
        user(
            "3",
            "Michael Johnson",
            "michael.johnson@email.com",
            Provider::Google,
            Role::User,
            1_710_028_800_000,
        ),
        // 2024-01-05
        user(
            "4",
            "Sarah Wilson",
            "sarah.wilson@domain.com",
            Provider::Credentials,
            Role::Admin,
            1_704_412_800_000,
        ),
        // 2024-04-12
        user(
            "5",
            "David Brown",
            "david.brown@service.com",
            Provider::Google,
            Role::User,
            1_712_880_000_000,
        ),
        // 2024-03-25
        user(
            "6",
            "Emily Davis",
            "emily.davis@platform.com",
            Provider::Credentials,
            Role::User,
            1_711_324_800_000,
        ),
        // 2024-02-08
        user(
            "7",
            "Robert Miller",
            "robert.miller@organization.com",
            Provider::Google,
            Role::Admin,
            1_707_350_400_000,
        ),
        // 2024-04-01
        user(
            "8",
            "Lisa Anderson",
            "lisa.anderson@business.com",
            Provider::Credentials,
            Role::User,
            1_711_929_600_000,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_counts() {
        assert_eq!(sample_orders().len(), 3);
        assert_eq!(sample_products().len(), 5);
        assert_eq!(sample_users().len(), 8);
    }

    #[test]
    fn order_totals_match_line_items() {
        let orders = sample_orders();

        for order in &orders {
            let computed: f64 = order
                .line_items
                .iter()
                .map(|li| li.price * li.quantity as f64)
                .sum();
            assert!((computed - order.total_price).abs() < 0.005, "{}", order.id);
        }
    }

    #[test]
    fn user_ids_are_unique() {
        let users = sample_users();
        let mut ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), users.len());
    }
}

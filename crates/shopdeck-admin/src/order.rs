//! The orders table's record shape.

use serde::Serialize;
use shopdeck_listing::{Number, Tabular, Timestamp, Value};

/// A customer order as the admin orders screen sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Public order id, e.g. `ORD-2024-001`.
    pub id: String,
    /// The payment gateway's order id.
    pub merchant_order_id: String,
    pub customer: Customer,
    pub line_items: Vec<LineItem>,
    pub total_price: f64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    /// When the order was placed.
    pub order_date: Timestamp,
    /// Fulfilment status, e.g. `confirmed`.
    pub status: String,
}

/// Customer identity and shipping details attached to an order.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub landmark: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    /// Pre-joined single-line form for display.
    pub full: String,
}

/// One purchased product line inside an order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub pages: u32,
    pub category1: String,
    pub category2: String,
    pub stock: u32,
}

/// How the customer paid.
///
/// Serializes as the table label (see [`as_str`](PaymentMethod::as_str)),
/// which the CSV export relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentMethod {
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "COD")]
    Cod,
    #[serde(rename = "Credit Card")]
    CreditCard,
}

impl PaymentMethod {
    /// Every method, in dropdown order.
    pub const ALL: [PaymentMethod; 3] =
        [PaymentMethod::Upi, PaymentMethod::Cod, PaymentMethod::CreditCard];

    /// The label the screen's dropdown and table cells show.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Cod => "COD",
            PaymentMethod::CreditCard => "Credit Card",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the payment went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Tabular for Order {
    // Nested customer and address fields are flattened into the order's
    // field namespace; the screen searches and filters on these names.
    const FIELDS: &'static [&'static str] = &[
        "id",
        "merchantOrderId",
        "firstName",
        "lastName",
        "phone",
        "email",
        "street",
        "city",
        "state",
        "postalCode",
        "paymentMethod",
        "paymentStatus",
        "totalPrice",
        "items",
        "orderDate",
        "status",
    ];

    fn field(&self, name: &str) -> Value<'_> {
        match name {
            "id" => Value::Str(&self.id),
            "merchantOrderId" => Value::Str(&self.merchant_order_id),
            "firstName" => Value::Str(&self.customer.first_name),
            "lastName" => Value::Str(&self.customer.last_name),
            "phone" => Value::Str(&self.customer.phone),
            "email" => Value::Str(&self.customer.email),
            "street" => Value::Str(&self.customer.address.street),
            "city" => Value::Str(&self.customer.address.city),
            "state" => Value::Str(&self.customer.address.state),
            "postalCode" => Value::Str(&self.customer.address.postal_code),
            "paymentMethod" => Value::Str(self.payment_method.as_str()),
            "paymentStatus" => Value::Str(self.payment_status.as_str()),
            "totalPrice" => Value::Number(Number::F64(self.total_price)),
            "items" => Value::Number(Number::U64(self.line_items.len() as u64)),
            "orderDate" => Value::Timestamp(self.order_date),
            "status" => Value::Str(&self.status),
            _ => Value::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn flattened_fields_resolve() {
        let orders = fixtures::sample_orders();
        let order = &orders[0];

        assert_eq!(order.field("id"), Value::Str("ORD-2024-001"));
        assert_eq!(order.field("firstName"), Value::Str("John"));
        assert_eq!(order.field("city"), Value::Str("New York"));
        assert_eq!(order.field("paymentMethod"), Value::Str("UPI"));
        assert_eq!(order.field("items"), Value::Number(Number::U64(2)));
        assert_eq!(order.field("nope"), Value::None);
    }

    #[test]
    fn payment_labels_match_the_dropdowns() {
        assert_eq!(PaymentMethod::Upi.to_string(), "UPI");
        assert_eq!(PaymentMethod::CreditCard.to_string(), "Credit Card");
        assert_eq!(PaymentStatus::Success.to_string(), "success");
        assert_eq!(PaymentStatus::Failed.to_string(), "failed");
    }
}

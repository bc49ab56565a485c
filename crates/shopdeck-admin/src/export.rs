//! CSV export for the orders screen's download button.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::order::{Order, PaymentMethod, PaymentStatus};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Column headers, in the order [`OrderRow`]'s fields serialize.
const COLUMNS: [&str; 12] = [
    "orderId",
    "merchantOrderId",
    "customer",
    "email",
    "phone",
    "city",
    "items",
    "totalPrice",
    "paymentMethod",
    "paymentStatus",
    "orderDate",
    "status",
];

/// One exported row: the order flattened to the columns the table shows.
///
/// The payment enums serialize through their renamed variants, so the CSV
/// carries the same labels the table cells do ("UPI", "Credit Card", ...).
#[derive(Debug, Serialize)]
struct OrderRow<'a> {
    order_id: &'a str,
    merchant_order_id: &'a str,
    customer: String,
    email: &'a str,
    phone: &'a str,
    city: &'a str,
    items: usize,
    total_price: f64,
    payment_method: PaymentMethod,
    payment_status: PaymentStatus,
    /// Epoch milliseconds, UTC.
    order_date: i64,
    status: &'a str,
}

impl<'a> From<&'a Order> for OrderRow<'a> {
    fn from(order: &'a Order) -> Self {
        OrderRow {
            order_id: &order.id,
            merchant_order_id: &order.merchant_order_id,
            customer: format!(
                "{} {}",
                order.customer.first_name, order.customer.last_name
            ),
            email: &order.customer.email,
            phone: &order.customer.phone,
            city: &order.customer.address.city,
            items: order.line_items.len(),
            total_price: order.total_price,
            payment_method: order.payment_method,
            payment_status: order.payment_status,
            order_date: order.order_date.as_millis(),
            status: &order.status,
        }
    }
}

/// Writes the given orders as CSV, one row per order, header row first.
///
/// The header is written unconditionally, so exporting an empty filtered
/// view still yields a well-formed file. Takes `&[&Order]` so a page's rows
/// can be exported directly.
pub fn write_orders_csv<W: Write>(orders: &[&Order], writer: W) -> Result<(), ExportError> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    out.write_record(COLUMNS)?;
    for order in orders {
        out.serialize(OrderRow::from(*order))?;
    }
    out.flush()?;
    Ok(())
}

/// Renders the given orders to a CSV string.
pub fn orders_csv_string(orders: &[&Order]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_orders_csv(orders, &mut buf)?;
    // serialized fields are all UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

//! Summary cards shown above the orders table.

use shopdeck_listing::Timestamp;

use crate::order::{Order, PaymentMethod};

/// The four headline numbers on the orders screen.
///
/// Computed over the full order set, not the filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub total_orders: usize,
    pub total_revenue: f64,
    /// Most frequent payment method; latest-seen wins a tie.
    pub top_payment_method: Option<PaymentMethod>,
    /// Orders placed on the same UTC day as `today`.
    pub orders_today: usize,
}

impl OrderSummary {
    pub fn compute(orders: &[Order], today: Timestamp) -> Self {
        let total_revenue = orders.iter().map(|order| order.total_price).sum();

        let mut counts: Vec<(PaymentMethod, usize)> = Vec::new();
        for order in orders {
            match counts.iter_mut().find(|(m, _)| *m == order.payment_method) {
                Some((_, n)) => *n += 1,
                None => counts.push((order.payment_method, 1)),
            }
        }
        // max_by_key returns the last maximum: the latest-seen method wins
        // a tie, matching the dashboard card
        let top_payment_method = counts
            .iter()
            .max_by_key(|(_, n)| *n)
            .map(|(method, _)| *method);

        let day = today.utc_day();
        let orders_today = orders
            .iter()
            .filter(|order| order.order_date.utc_day() == day)
            .count();

        OrderSummary {
            total_orders: orders.len(),
            total_revenue,
            top_payment_method,
            orders_today,
        }
    }
}

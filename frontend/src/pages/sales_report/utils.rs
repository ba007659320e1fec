use crate::api::Order;

pub fn total_revenue(orders: &[Order]) -> f64 {
    orders.iter().map(|order| order.total_price).sum()
}

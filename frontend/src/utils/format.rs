use chrono::NaiveDateTime;

pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_order_date(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

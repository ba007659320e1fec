use crate::api::{OrderItemRequest, Product};

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i64,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// Quantities stay within `1..=stock` of the product snapshot taken when the
/// line was added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit. Returns false when the product is out of stock or the
    /// cart already holds all of it.
    pub fn add(&mut self, product: &Product) -> bool {
        match self.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) if line.quantity < line.product.stock => {
                line.quantity += 1;
                true
            }
            Some(_) => false,
            None if product.stock > 0 => {
                self.lines.push(CartLine {
                    product: product.clone(),
                    quantity: 1,
                });
                true
            }
            None => false,
        }
    }

    /// Clamps to the available stock; zero or less drops the line.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == product_id) {
            line.quantity = quantity.min(line.product.stock);
        }
    }

    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn order_items(&self) -> Vec<OrderItemRequest> {
        self.lines
            .iter()
            .map(|line| OrderItemRequest {
                product_id: line.product.id,
                quantity: line.quantity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, stock: i64) -> Product {
        Product {
            id,
            name: format!("p{}", id),
            price,
            stock,
            image: None,
        }
    }

    #[test]
    fn add_stops_at_stock() {
        let mut cart = Cart::default();
        let cafe = product(1, 2.5, 2);
        assert!(cart.add(&cafe));
        assert!(cart.add(&cafe));
        assert!(!cart.add(&cafe));
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn out_of_stock_products_are_rejected() {
        let mut cart = Cart::default();
        assert!(!cart.add(&product(1, 2.5, 0)));
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_clamps_and_removes() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2.5, 3));
        cart.set_quantity(1, 10);
        assert_eq!(cart.lines()[0].quantity, 3);
        cart.set_quantity(1, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn total_sums_line_totals() {
        let mut cart = Cart::default();
        let cafe = product(1, 2.5, 5);
        cart.add(&cafe);
        cart.add(&cafe);
        cart.add(&product(2, 1.25, 5));
        assert_eq!(cart.lines()[0].line_total(), 5.0);
        assert_eq!(cart.total(), 6.25);
    }

    #[test]
    fn order_items_mirror_lines() {
        let mut cart = Cart::default();
        cart.add(&product(4, 1.0, 5));
        cart.set_quantity(4, 3);
        assert_eq!(
            cart.order_items(),
            vec![OrderItemRequest {
                product_id: 4,
                quantity: 3
            }]
        );
        cart.clear();
        assert!(cart.order_items().is_empty());
    }
}

//! Shared state for the storefront pages.
//!
//! The config is provided at launch; the cart signal by [`crate::app::App`].

use dioxus::prelude::*;
use storefront_core::StorefrontConfig;
use storefront_ui::Product;

/// A product in the cart
#[derive(Clone, PartialEq, Debug)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    /// Beverage container subject to the CRV fee
    pub crv_eligible: bool,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

pub fn use_config() -> StorefrontConfig {
    use_context::<StorefrontConfig>()
}

/// Hook to access the cart lines.
pub fn use_cart() -> Signal<Vec<CartLine>> {
    use_context::<Signal<Vec<CartLine>>>()
}

pub fn cart_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|l| l.quantity).sum()
}

pub fn cart_total(lines: &[CartLine]) -> f64 {
    lines.iter().map(CartLine::line_total).sum()
}

/// Quantity of `product_id` in the cart, 0 when absent
pub fn quantity_of(lines: &[CartLine], product_id: &str) -> u32 {
    lines
        .iter()
        .find(|l| l.product.id == product_id)
        .map(|l| l.quantity)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: f64, quantity: u32) -> CartLine {
        CartLine {
            product: Product {
                id: id.to_string(),
                price,
                ..Default::default()
            },
            quantity,
            crv_eligible: false,
        }
    }

    #[test]
    fn totals_sum_over_lines() {
        let lines = vec![line("a", 2.5, 2), line("b", 1.0, 3)];
        assert_eq!(cart_count(&lines), 5);
        assert_eq!(cart_total(&lines), 8.0);
        assert_eq!(quantity_of(&lines, "b"), 3);
        assert_eq!(quantity_of(&lines, "c"), 0);
    }
}

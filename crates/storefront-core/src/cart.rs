//! Cart header copy.

use crate::pricing::format_price;

/// "1 item" / "3 items"
pub fn item_count_label(count: u32) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

/// Accessible summary, e.g. "Cart with 1 item, total $10.50"
pub fn cart_aria_label(count: u32, total: f64, symbol: &str) -> String {
    format!(
        "Cart with {}, total {}",
        item_count_label(count),
        format_price(total, symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_and_plural() {
        assert_eq!(item_count_label(0), "0 items");
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(12), "12 items");
    }

    #[test]
    fn aria_label() {
        assert_eq!(cart_aria_label(1, 10.5, "$"), "Cart with 1 item, total $10.50");
    }
}

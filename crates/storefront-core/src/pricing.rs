//! Currency formatting.
//!
//! Two fraction digits, half away from zero, no locale logic.

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Round to cents, half away from zero
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// `symbol` followed by the amount with exactly two decimals.
///
/// Negative amounts keep their sign after the symbol (`$-5.00`).
pub fn format_price(amount: f64, symbol: &str) -> String {
    let rounded = round_cents(amount);
    // Avoid "-0.00" for tiny negatives that round to zero
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{symbol}{rounded:.2}")
}

pub fn format_price_default(amount: f64) -> String {
    format_price(amount, DEFAULT_CURRENCY_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimals() {
        assert_eq!(format_price_default(10.5), "$10.50");
        assert_eq!(format_price_default(9.99), "$9.99");
        assert_eq!(format_price_default(0.0), "$0.00");
        assert_eq!(format_price_default(3.0 * 0.10), "$0.30");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_price_default(0.125), "$0.13");
        assert_eq!(format_price_default(2.675_1), "$2.68");
    }

    #[test]
    fn negative_keeps_sign() {
        assert_eq!(format_price_default(-5.0), "$-5.00");
        assert_eq!(format_price_default(-0.001), "$0.00");
    }

    #[test]
    fn symbol_overridable() {
        assert_eq!(format_price(4.2, "\u{20AC}"), "\u{20AC}4.20");
        assert_eq!(format_price(4.2, ""), "4.20");
    }
}

//! Demo catalogue, loyalty data and store pricing rules for the preview
//! shell.

use chrono::{DateTime, Duration, Utc};
use storefront_core::pricing::round_cents;
use storefront_core::{OrderSummaryInput, PointsDatum};
use storefront_ui::{Product, RewardData};

use crate::context::CartLine;

pub const CRV_PER_ITEM: f64 = 0.10;
pub const BAG_FEE: f64 = 0.10;
pub const ITEMS_PER_BAG: u32 = 5;
pub const TAX_RATE: f64 = 0.0725;

fn product(id: &str, name: &str, price: f64, unit: &str, rating: f64, reviews: u32) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("/products/{id}.png"),
        price,
        unit: Some(unit.to_string()),
        rating: Some(rating),
        review_count: Some(reviews),
        badge: None,
    }
}

pub fn catalog() -> Vec<Product> {
    let mut sparkling = product("sparkling-water", "Sparkling Water", 4.99, "12 x 12 oz", 4.5, 212);
    sparkling.badge = Some("Sale".to_string());
    vec![
        sparkling,
        product("cold-brew", "Cold Brew Coffee", 5.49, "32 oz", 4.2, 87),
        product("sourdough", "Sourdough Loaf", 6.99, "24 oz", 4.8, 341),
        product("avocados", "Hass Avocados", 3.99, "4 ct", 3.9, 58),
        product("oat-milk", "Oat Milk", 4.29, "64 oz", 4.6, 190),
        product("granola", "Maple Granola", 7.49, "16 oz", 4.4, 73),
    ]
}

fn is_beverage(id: &str) -> bool {
    matches!(id, "sparkling-water" | "cold-brew" | "oat-milk")
}

pub fn cart_line(product: Product, quantity: u32) -> CartLine {
    let crv_eligible = is_beverage(&product.id);
    CartLine {
        product,
        quantity,
        crv_eligible,
    }
}

pub fn starting_cart() -> Vec<CartLine> {
    catalog()
        .into_iter()
        .take(2)
        .map(|p| cart_line(p, 1))
        .collect()
}

/// Order summary for `lines` under the store's fee and tax rules
pub fn order_summary(lines: &[CartLine], bring_own_bags: bool, savings: f64) -> OrderSummaryInput {
    let subtotal = round_cents(lines.iter().map(CartLine::line_total).sum());
    let crv_fee_quantity: u32 = lines
        .iter()
        .filter(|l| l.crv_eligible)
        .map(|l| l.quantity)
        .sum();
    let items: u32 = lines.iter().map(|l| l.quantity).sum();
    let bag_fee_quantity = items.div_ceil(ITEMS_PER_BAG);
    let estimated_tax = round_cents((subtotal - savings).max(0.0) * TAX_RATE);

    let crv = f64::from(crv_fee_quantity) * CRV_PER_ITEM;
    let bags = if bring_own_bags {
        0.0
    } else {
        f64::from(bag_fee_quantity) * BAG_FEE
    };
    let total = round_cents(subtotal - savings + crv + bags + estimated_tax);

    OrderSummaryInput {
        subtotal,
        crv_fee_quantity,
        crv_fee_per_item: CRV_PER_ITEM,
        bag_fee_quantity,
        bag_fee_per_item: BAG_FEE,
        estimated_tax,
        savings,
        total,
    }
}

pub fn rewards(now: DateTime<Utc>) -> Vec<RewardData> {
    vec![
        RewardData {
            id: "five-off".to_string(),
            dollar: Some(5.0),
            description: Some("On your next order of $25 or more".to_string()),
            expiration: Some(now + Duration::days(3)),
            ..Default::default()
        },
        RewardData {
            id: "produce-pct".to_string(),
            percentage: Some(10),
            description: Some("Fresh produce".to_string()),
            expiration: Some(now + Duration::days(24)),
            ..Default::default()
        },
        RewardData {
            id: "birthday".to_string(),
            is_birthday: true,
            description: Some("A free treat from the bakery".to_string()),
            expiration: Some(now + Duration::days(12)),
            ..Default::default()
        },
    ]
}

pub fn points_history() -> Vec<PointsDatum> {
    let months = [
        ("Nov", 420.0),
        ("Dec", 1310.0),
        ("Jan", 280.0),
        ("Feb", 390.0),
        ("Mar", 615.0),
        ("Apr", 505.0),
        ("May", 730.0),
        ("Jun", 460.0),
        ("Jul", 890.0),
        ("Aug", 540.0),
        ("Sep", 675.0),
        ("Oct", 310.0),
    ];
    months
        .into_iter()
        .map(|(label, points)| PointsDatum::new(label, points))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_charges_crv_on_beverages_only() {
        let catalog = catalog();
        let lines = vec![
            cart_line(catalog[0].clone(), 2),
            cart_line(catalog[2].clone(), 1),
        ];
        let summary = order_summary(&lines, false, 0.0);
        assert_eq!(summary.crv_fee_quantity, 2);
        assert_eq!(summary.bag_fee_quantity, 1);
        assert_eq!(summary.subtotal, 16.97);
    }

    #[test]
    fn own_bags_drop_the_bag_fee_from_the_total() {
        let lines = starting_cart();
        let with_bags = order_summary(&lines, false, 0.0);
        let own_bags = order_summary(&lines, true, 0.0);
        assert!((with_bags.total - own_bags.total - BAG_FEE).abs() < 1e-9);
    }

    #[test]
    fn history_covers_a_year() {
        assert_eq!(points_history().len(), 12);
    }
}

//! Order summary line items.
//!
//! Fees are derived from quantity and per-item rate; the grand total is
//! supplied by the caller and never recomputed here.

use serde::{Deserialize, Serialize};

use crate::pricing::format_price;

/// Amounts feeding the OrderSummary organism
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct OrderSummaryInput {
    pub subtotal: f64,
    pub crv_fee_quantity: u32,
    pub crv_fee_per_item: f64,
    pub bag_fee_quantity: u32,
    pub bag_fee_per_item: f64,
    pub estimated_tax: f64,
    #[serde(default)]
    pub savings: f64,
    pub total: f64,
}

/// Which row a line item is, for styling and keys
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineKind {
    Subtotal,
    Savings,
    CrvFee,
    BagFee,
    Tax,
}

impl LineKind {
    pub fn class(&self) -> &'static str {
        match self {
            LineKind::Subtotal => "summary-line subtotal",
            LineKind::Savings => "summary-line savings",
            LineKind::CrvFee => "summary-line crv-fee",
            LineKind::BagFee => "summary-line bag-fee",
            LineKind::Tax => "summary-line tax",
        }
    }
}

/// A rendered label/value pair
#[derive(Clone, PartialEq, Debug)]
pub struct LineItem {
    pub kind: LineKind,
    pub label: String,
    pub value: String,
}

pub fn crv_fee(input: &OrderSummaryInput) -> f64 {
    f64::from(input.crv_fee_quantity) * input.crv_fee_per_item
}

pub fn bag_fee(input: &OrderSummaryInput) -> f64 {
    f64::from(input.bag_fee_quantity) * input.bag_fee_per_item
}

/// Line items above the total. The bag fee line is omitted entirely when
/// the shopper brings their own bags.
pub fn line_items(input: &OrderSummaryInput, bring_own_bags: bool, symbol: &str) -> Vec<LineItem> {
    let mut lines = vec![LineItem {
        kind: LineKind::Subtotal,
        label: "Subtotal:".to_string(),
        value: format_price(input.subtotal, symbol),
    }];

    if input.savings > 0.0 {
        lines.push(LineItem {
            kind: LineKind::Savings,
            label: "Savings:".to_string(),
            value: format_price(-input.savings, symbol),
        });
    }

    lines.push(LineItem {
        kind: LineKind::CrvFee,
        label: format!(
            "CA CRV Fee {} @ {}:",
            input.crv_fee_quantity,
            format_price(input.crv_fee_per_item, symbol)
        ),
        value: format_price(crv_fee(input), symbol),
    });

    if !bring_own_bags {
        lines.push(LineItem {
            kind: LineKind::BagFee,
            label: format!(
                "Bag Fee {} @ {}:",
                input.bag_fee_quantity,
                format_price(input.bag_fee_per_item, symbol)
            ),
            value: format_price(bag_fee(input), symbol),
        });
    }

    lines.push(LineItem {
        kind: LineKind::Tax,
        label: "Estimated Tax:".to_string(),
        value: format_price(input.estimated_tax, symbol),
    });

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> OrderSummaryInput {
        OrderSummaryInput {
            subtotal: 24.97,
            crv_fee_quantity: 3,
            crv_fee_per_item: 0.10,
            bag_fee_quantity: 2,
            bag_fee_per_item: 0.10,
            estimated_tax: 1.25,
            savings: 0.0,
            total: 26.72,
        }
    }

    #[test]
    fn crv_line_reads_quantity_and_rate() {
        let lines = line_items(&input(), false, "$");
        let crv = lines.iter().find(|l| l.kind == LineKind::CrvFee).unwrap();
        assert_eq!(crv.label, "CA CRV Fee 3 @ $0.10:");
        assert_eq!(crv.value, "$0.30");
    }

    #[test]
    fn own_bags_removes_bag_line() {
        let with_bags = line_items(&input(), false, "$");
        assert!(with_bags.iter().any(|l| l.kind == LineKind::BagFee));

        let own_bags = line_items(&input(), true, "$");
        assert!(own_bags.iter().all(|l| l.kind != LineKind::BagFee));
        assert_eq!(own_bags.len(), with_bags.len() - 1);
    }

    #[test]
    fn savings_line_only_when_positive() {
        assert!(line_items(&input(), false, "$")
            .iter()
            .all(|l| l.kind != LineKind::Savings));

        let mut discounted = input();
        discounted.savings = 2.0;
        let lines = line_items(&discounted, false, "$");
        let savings = lines.iter().find(|l| l.kind == LineKind::Savings).unwrap();
        assert_eq!(savings.value, "$-2.00");
    }
}

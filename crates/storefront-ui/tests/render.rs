//! Server-side render tests
//!
//! Renders components to HTML with dioxus-ssr and checks the markup that
//! assistive technology and styling depend on.

use chrono::{Duration, TimeZone, Utc};
use dioxus::prelude::*;
use storefront_core::{DropdownOption, OrderSummaryInput};
use storefront_ui::{
    Button, CartHeader, Checkbox, Dropdown, LoyaltyProgressBar, OrderSummary, QuantitySelector,
    ReviewStars, Reward, TextField,
};

fn summary() -> OrderSummaryInput {
    OrderSummaryInput {
        subtotal: 24.5,
        crv_fee_quantity: 3,
        crv_fee_per_item: 0.1,
        bag_fee_quantity: 2,
        bag_fee_per_item: 0.1,
        estimated_tax: 1.25,
        savings: 0.0,
        total: 26.25,
    }
}

#[test]
fn multiline_button_joins_labels_for_screen_readers() {
    let html = dioxus_ssr::render_element(rsx! {
        Button {
            label: "$9.99".to_string(),
            label_top: "Add to Cart".to_string(),
            multiline: true,
        }
    });
    assert!(html.contains(r#"aria-label="Add to Cart $9.99""#), "{html}");
    assert!(html.contains("Add to Cart"));
    assert!(html.contains("$9.99"));
}

#[test]
fn cart_header_without_handler_is_a_status_region() {
    let html = dioxus_ssr::render_element(rsx! {
        CartHeader { item_count: 1, total_price: 10.5 }
    });
    assert!(html.contains(r#"role="status""#), "{html}");
    assert!(html.contains("1 item"));
    assert!(html.contains("$10.50"));
    assert!(html.contains(r#"aria-label="Cart with 1 item, total $10.50""#));
}

#[test]
fn order_summary_lists_fees() {
    let html = dioxus_ssr::render_element(rsx! {
        OrderSummary { summary: summary() }
    });
    assert!(html.contains("CA CRV Fee 3 @ $0.10:"), "{html}");
    assert!(html.contains("$0.30"));
    assert!(html.contains("Bag Fee 2 @ $0.10:"));
    assert!(html.contains("$26.25"));
}

#[test]
fn order_summary_omits_bag_fee_with_own_bags() {
    let html = dioxus_ssr::render_element(rsx! {
        OrderSummary { summary: summary(), default_bring_own_bags: true }
    });
    assert!(!html.contains("Bag Fee"), "{html}");
    assert!(html.contains("CA CRV Fee"));
}

#[test]
fn review_stars_gradient_tracks_rating() {
    let html = dioxus_ssr::render_element(rsx! {
        ReviewStars { rating: 3.5 }
    });
    assert!(html.contains(r#"offset="70%""#), "{html}");
    assert!(html.contains("Rated 3.5 out of 5 stars"));
}

#[test]
fn loyalty_bar_reports_raw_points_with_clamped_indicator() {
    let html = dioxus_ssr::render_element(rsx! {
        LoyaltyProgressBar { points: 150.0, max_points: 100.0 }
    });
    assert!(html.contains(r#"aria-valuenow="150""#), "{html}");
    assert!(html.contains("left: 100%"));
}

#[test]
fn controlled_text_field_shows_supplied_value() {
    let html = dioxus_ssr::render_element(rsx! {
        TextField { value: "SAVE10".to_string(), label: "Promo code".to_string() }
    });
    assert!(html.contains(r#"value="SAVE10""#), "{html}");
    assert!(html.contains("Promo code"));
}

#[test]
fn text_field_error_marks_input_invalid() {
    let html = dioxus_ssr::render_element(rsx! {
        TextField { error: "Invalid code".to_string() }
    });
    assert!(html.contains(r#"aria-invalid="true""#), "{html}");
    assert!(html.contains("Invalid code"));
}

#[test]
fn checkbox_reflects_checked_prop() {
    let checked = dioxus_ssr::render_element(rsx! {
        Checkbox { label: "Bring my own bags".to_string(), checked: true }
    });
    assert!(checked.contains(r#"aria-checked="true""#), "{checked}");

    let unchecked = dioxus_ssr::render_element(rsx! {
        Checkbox { label: "Bring my own bags".to_string() }
    });
    assert!(unchecked.contains(r#"aria-checked="false""#));
}

#[test]
fn closed_dropdown_shows_selected_label() {
    let html = dioxus_ssr::render_element(rsx! {
        Dropdown {
            options: vec![
                DropdownOption::new("12oz", "12 oz"),
                DropdownOption::new("24oz", "24 oz"),
            ],
            value: "24oz".to_string(),
        }
    });
    assert!(html.contains(r#"aria-expanded="false""#), "{html}");
    assert!(html.contains("24 oz"));
    assert!(!html.contains(r#"role="listbox""#));
    // Nothing to point at while the list is closed
    assert!(!html.contains("aria-controls"));
}

#[test]
fn dropdown_without_selection_shows_placeholder() {
    let html = dioxus_ssr::render_element(rsx! {
        Dropdown {
            options: vec![DropdownOption::new("12oz", "12 oz")],
            placeholder: "Size".to_string(),
        }
    });
    assert!(html.contains("Size"), "{html}");
    assert!(!html.contains("12 oz"));
}

#[test]
fn quantity_selector_at_minimum_offers_removal() {
    let html = dioxus_ssr::render_element(rsx! {
        QuantitySelector { quantity: 1 }
    });
    assert!(html.contains("Remove item"), "{html}");
}

#[test]
fn quantity_selector_at_maximum_disables_increment() {
    let html = dioxus_ssr::render_element(rsx! {
        QuantitySelector { quantity: 5, max_quantity: 5 }
    });
    assert!(html.contains("Decrease quantity"), "{html}");
    assert!(html.contains(r#"aria-disabled="true""#));
}

#[test]
fn reward_close_to_expiry_counts_down() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let html = dioxus_ssr::render_element(rsx! {
        Reward {
            dollar: 5.0,
            expiration: now + Duration::days(3),
            now: now,
        }
    });
    assert!(html.contains("$5 off"), "{html}");
    assert!(html.contains("Expires in 3 days"));
}

#[test]
fn reward_far_from_expiry_shows_date() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let html = dioxus_ssr::render_element(rsx! {
        Reward {
            percentage: 10u32,
            expiration: now + Duration::days(30),
            now: now,
        }
    });
    assert!(html.contains("10% off"), "{html}");
    assert!(html.contains("Valid through Mar 31, 2024"));
}

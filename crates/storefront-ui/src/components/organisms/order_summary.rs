//! Order Summary Component
//!
//! Cart totals with a bring-your-own-bags toggle and a promo code field.
//! Fee lines are derived from quantity and rate; the grand total is taken
//! as given.

use dioxus::prelude::*;
use storefront_core::order::line_items;
use storefront_core::{format_price, OrderSummaryInput, DEFAULT_CURRENCY_SYMBOL};

use crate::components::atoms::{Button, Checkbox, TextField};

/// Properties for the OrderSummary component
#[derive(Clone, PartialEq, Props)]
pub struct OrderSummaryProps {
    pub summary: OrderSummaryInput,
    #[props(default = DEFAULT_CURRENCY_SYMBOL.to_string())]
    pub currency_symbol: String,
    /// Initial state of the bring-your-own-bags checkbox
    #[props(default = false)]
    pub default_bring_own_bags: bool,
    #[props(default)]
    pub on_bring_own_bags_change: Option<EventHandler<bool>>,
    #[props(default = "Checkout".to_string())]
    pub checkout_label: String,
    #[props(default = false)]
    pub checkout_disabled: bool,
    #[props(default)]
    pub on_checkout: Option<EventHandler<()>>,
}

/// Order totals panel
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     OrderSummary {
///         summary: OrderSummaryInput {
///             subtotal: 24.97,
///             crv_fee_quantity: 3,
///             crv_fee_per_item: 0.10,
///             ..Default::default()
///         },
///         on_checkout: move |_| navigator.push(Route::Checkout {}),
///     }
/// }
/// ```
#[component]
pub fn OrderSummary(props: OrderSummaryProps) -> Element {
    let default_bags = props.default_bring_own_bags;
    let mut own_bags = use_signal(move || default_bags);
    let on_bags_change = props.on_bring_own_bags_change;
    let on_checkout = props.on_checkout;

    let lines = line_items(&props.summary, own_bags(), &props.currency_symbol);
    let total = format_price(props.summary.total, &props.currency_symbol);

    rsx! {
        section { class: "order-summary", "aria-label": "Order summary",
            h2 { class: "order-summary-title", "Order Summary" }
            Checkbox {
                label: "I'll bring my own bags".to_string(),
                checked: own_bags(),
                on_change: move |checked: bool| {
                    own_bags.set(checked);
                    if let Some(handler) = &on_bags_change {
                        handler.call(checked);
                    }
                },
            }
            TextField {
                label: "Promo code".to_string(),
                placeholder: "Enter code".to_string(),
                action_label: "Apply".to_string(),
                on_action: move |code: String| {
                    // Promo codes are not validated client-side
                    tracing::info!(code = %code.trim(), "promo code apply requested");
                },
            }
            dl { class: "order-summary-lines",
                for line in lines.iter() {
                    div { key: "{line.label}", class: line.kind.class(),
                        dt { class: "summary-label", "{line.label}" }
                        dd { class: "summary-value", "{line.value}" }
                    }
                }
                div { class: "summary-line total",
                    dt { class: "summary-label", "Total:" }
                    dd { class: "summary-value", "{total}" }
                }
            }
            Button {
                label: props.checkout_label.clone(),
                full_width: true,
                disabled: props.checkout_disabled,
                onclick: move |_| {
                    if let Some(handler) = &on_checkout {
                        handler.call(());
                    }
                },
            }
        }
    }
}

//! Cart Header Component
//!
//! Compact cart summary: item count and running total.

use dioxus::prelude::*;
use storefront_core::{cart_aria_label, format_price, item_count_label, DEFAULT_CURRENCY_SYMBOL};

/// Properties for the CartHeader component
#[derive(Clone, PartialEq, Props)]
pub struct CartHeaderProps {
    pub item_count: u32,
    pub total_price: f64,
    #[props(default = DEFAULT_CURRENCY_SYMBOL.to_string())]
    pub currency_symbol: String,
    /// When set the header becomes a button opening the cart
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
}

/// Cart summary
///
/// Without `onclick` the summary is a live `status` region so count
/// changes are announced; with `onclick` it is a button.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CartHeader { item_count: 1, total_price: 10.5 }
/// }
/// ```
#[component]
pub fn CartHeader(props: CartHeaderProps) -> Element {
    let count = item_count_label(props.item_count);
    let total = format_price(props.total_price, &props.currency_symbol);
    let aria_label = cart_aria_label(props.item_count, props.total_price, &props.currency_symbol);

    let contents = rsx! {
        img { class: "cart-header-icon", src: "/cart.svg", alt: "" }
        span { class: "cart-header-count", "{count}" }
        span { class: "cart-header-total", "{total}" }
    };

    match props.onclick {
        Some(handler) => rsx! {
            button {
                class: "cart-header clickable",
                r#type: "button",
                "aria-label": "{aria_label}",
                onclick: move |_| handler.call(()),
                {contents}
            }
        },
        None => rsx! {
            div {
                class: "cart-header",
                role: "status",
                "aria-label": "{aria_label}",
                {contents}
            }
        },
    }
}

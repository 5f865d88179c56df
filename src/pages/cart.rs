//! Cart page - products, order summary and related products.

use dioxus::prelude::*;
use storefront_ui::{FulfillmentCard, OrderSummary, PointsEarnedCart, ProductCard, RelatedProducts};

use crate::context::{cart_count, quantity_of, use_cart, use_config};
use crate::sample;

/// Points earned per whole currency unit of subtotal
const POINTS_PER_UNIT: f64 = 10.0;

#[component]
pub fn Cart() -> Element {
    let config = use_config();
    let mut cart = use_cart();
    let mut own_bags = use_signal(|| false);
    let catalog = use_hook(sample::catalog);
    let max_quantity = config.max_quantity;

    let lookup = catalog.clone();
    let add_to_cart = use_callback(move |id: String| {
        let mut lines = cart.write();
        if let Some(line) = lines.iter_mut().find(|l| l.product.id == id) {
            line.quantity = (line.quantity + 1).min(max_quantity);
        } else if let Some(product) = lookup.iter().find(|p| p.id == id) {
            lines.push(sample::cart_line(product.clone(), 1));
        } else {
            tracing::warn!(%id, "add for unknown product");
            return;
        }
        tracing::info!(%id, "added to cart");
    });

    let set_quantity = use_callback(move |(id, quantity): (String, u32)| {
        if let Some(line) = cart.write().iter_mut().find(|l| l.product.id == id) {
            line.quantity = quantity;
        }
        tracing::debug!(%id, quantity, "cart quantity changed");
    });

    let remove = use_callback(move |id: String| {
        cart.write().retain(|l| l.product.id != id);
        tracing::info!(%id, "removed from cart");
    });

    let lines = cart.read().clone();
    let summary = sample::order_summary(&lines, own_bags(), 0.0);
    let points_earned = (summary.subtotal.max(0.0).floor() * POINTS_PER_UNIT) as u32;
    let symbol = config.currency_symbol.clone();

    rsx! {
        div { class: "page cart-page",
            section { class: "cart-products",
                h1 { class: "page-title", "Shop" }
                div { class: "product-grid",
                    for product in catalog.iter() {
                        ProductCard {
                            key: "{product.id}",
                            product: product.clone(),
                            cart_quantity: quantity_of(&lines, &product.id),
                            max_quantity: max_quantity,
                            currency_symbol: symbol.clone(),
                            on_add: add_to_cart,
                            on_quantity_change: set_quantity,
                            on_remove: remove,
                        }
                    }
                }
                RelatedProducts {
                    products: catalog.clone(),
                    currency_symbol: symbol.clone(),
                    on_add: add_to_cart,
                }
            }
            aside { class: "cart-sidebar",
                FulfillmentCard {
                    address: config.store_name.clone(),
                    window: "Today, 4-5pm".to_string(),
                }
                PointsEarnedCart { points: points_earned }
                OrderSummary {
                    summary: summary,
                    currency_symbol: symbol.clone(),
                    on_bring_own_bags_change: move |checked: bool| own_bags.set(checked),
                    checkout_disabled: lines.is_empty(),
                    on_checkout: move |_| {
                        tracing::info!(items = cart_count(&cart.read()), "checkout requested");
                    },
                }
            }
        }
    }
}

//! Product Card Components
//!
//! Full-size and mini product tiles. The full card swaps its add-to-cart
//! button for a QuantitySelector once the product is in the cart.

use dioxus::prelude::*;
use storefront_core::quantity::DEFAULT_MAX_QUANTITY;
use storefront_core::{format_price, DEFAULT_CURRENCY_SYMBOL};

use crate::components::atoms::{Button, Chip, ChipVariant, ReviewStars};
use crate::components::molecules::QuantitySelector;

/// Catalogue entry shown by the product cards
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: f64,
    /// Size/unit line, e.g. "12 oz"
    pub unit: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    /// Tag chip, e.g. "Sale"
    pub badge: Option<String>,
}

/// Properties for the ProductCard component
#[derive(Clone, PartialEq, Props)]
pub struct ProductCardProps {
    pub product: Product,
    /// Quantity already in the cart; 0 shows the add button
    #[props(default = 0)]
    pub cart_quantity: u32,
    /// Upper bound for the in-cart stepper
    #[props(default = DEFAULT_MAX_QUANTITY)]
    pub max_quantity: u32,
    #[props(default = DEFAULT_CURRENCY_SYMBOL.to_string())]
    pub currency_symbol: String,
    #[props(default)]
    pub on_add: Option<EventHandler<String>>,
    #[props(default)]
    pub on_quantity_change: Option<EventHandler<(String, u32)>>,
    #[props(default)]
    pub on_remove: Option<EventHandler<String>>,
    #[props(default)]
    pub onclick: Option<EventHandler<String>>,
}

/// Product tile with rating, price and cart controls
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProductCard {
///         product: product.clone(),
///         cart_quantity: cart.quantity_of(&product.id),
///         on_add: move |id| cart.add(id),
///     }
/// }
/// ```
#[component]
pub fn ProductCard(props: ProductCardProps) -> Element {
    let product = props.product.clone();
    let price = format_price(product.price, &props.currency_symbol);
    let id = product.id.clone();
    let (id_add, id_inc, id_dec, id_del, id_open) =
        (id.clone(), id.clone(), id.clone(), id.clone(), id);
    let on_add = props.on_add;
    let on_quantity_change = props.on_quantity_change;
    let on_remove = props.on_remove;
    let onclick = props.onclick;

    rsx! {
        article { class: "product-card",
            button {
                class: "product-card-media",
                r#type: "button",
                "aria-label": "View {product.name}",
                onclick: move |_| {
                    if let Some(handler) = &onclick {
                        handler.call(id_open.clone());
                    }
                },
                img { class: "product-card-image", src: "{product.image}", alt: "{product.name}" }
            }
            if let Some(badge) = &product.badge {
                Chip { label: badge.clone(), variant: ChipVariant::Promo }
            }
            h3 { class: "product-card-name", "{product.name}" }
            if let Some(unit) = &product.unit {
                span { class: "product-card-unit", "{unit}" }
            }
            if let Some(rating) = product.rating {
                ReviewStars { rating: rating, review_count: product.review_count }
            }
            div { class: "product-card-actions",
                if props.cart_quantity == 0 {
                    Button {
                        multiline: true,
                        label_top: "Add to Cart".to_string(),
                        label: price.clone(),
                        full_width: true,
                        onclick: move |_| {
                            if let Some(handler) = &on_add {
                                handler.call(id_add.clone());
                            }
                        },
                    }
                } else {
                    span { class: "product-card-price", "{price}" }
                    // The stepper owns its count after mount, so remount it when the
                    // cart quantity changes from outside
                    {
                        let stepper_key = format!("{}-{}", product.id, props.cart_quantity);
                        rsx! {
                            QuantitySelector {
                                key: "{stepper_key}",
                                quantity: props.cart_quantity,
                                max_quantity: props.max_quantity,
                                on_increment: move |q| {
                                    if let Some(handler) = &on_quantity_change {
                                        handler.call((id_inc.clone(), q));
                                    }
                                },
                                on_decrement: move |q| {
                                    if let Some(handler) = &on_quantity_change {
                                        handler.call((id_dec.clone(), q));
                                    }
                                },
                                on_delete: move |_| {
                                    if let Some(handler) = &on_remove {
                                        handler.call(id_del.clone());
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Properties for the MiniProductCard component
#[derive(Clone, PartialEq, Props)]
pub struct MiniProductCardProps {
    pub product: Product,
    #[props(default = DEFAULT_CURRENCY_SYMBOL.to_string())]
    pub currency_symbol: String,
    #[props(default)]
    pub on_add: Option<EventHandler<String>>,
}

/// Compact tile for carousels
#[component]
pub fn MiniProductCard(props: MiniProductCardProps) -> Element {
    let price = format_price(props.product.price, &props.currency_symbol);
    let id = props.product.id.clone();
    let on_add = props.on_add;

    rsx! {
        article { class: "mini-product-card",
            img { class: "mini-product-image", src: "{props.product.image}", alt: "{props.product.name}" }
            span { class: "mini-product-name", "{props.product.name}" }
            span { class: "mini-product-price", "{price}" }
            Button {
                label: "Add".to_string(),
                size: crate::components::atoms::ButtonSize::Small,
                onclick: move |_| {
                    if let Some(handler) = &on_add {
                        handler.call(id.clone());
                    }
                },
            }
        }
    }
}

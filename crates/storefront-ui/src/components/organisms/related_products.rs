//! Related Products Component
//!
//! Paged carousel of MiniProductCards.

use dioxus::prelude::*;
use storefront_core::{CarouselPager, DEFAULT_CURRENCY_SYMBOL};

use crate::components::atoms::IconButton;
use crate::components::molecules::{MiniProductCard, Product};

/// Properties for the RelatedProducts component
#[derive(Clone, PartialEq, Props)]
pub struct RelatedProductsProps {
    #[props(default = "You may also like".to_string())]
    pub title: String,
    pub products: Vec<Product>,
    /// Cards per page
    #[props(default = 4)]
    pub page_size: usize,
    #[props(default = DEFAULT_CURRENCY_SYMBOL.to_string())]
    pub currency_symbol: String,
    #[props(default)]
    pub on_add: Option<EventHandler<String>>,
}

#[component]
pub fn RelatedProducts(props: RelatedProductsProps) -> Element {
    let (count, page_size) = (props.products.len(), props.page_size);
    let mut pager = use_signal(move || CarouselPager::new(count, page_size));

    use_effect(use_reactive((&count,), move |(count,)| {
        if pager.peek().item_count() != count {
            pager.write().resize(count);
        }
    }));

    let range = pager.read().visible_range();
    let visible: Vec<Product> = props
        .products
        .get(range)
        .map(<[Product]>::to_vec)
        .unwrap_or_default();
    let can_prev = pager.read().can_prev();
    let can_next = pager.read().can_next();
    let on_add = props.on_add;

    if props.products.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "related-products", "aria-roledescription": "carousel",
            header { class: "related-products-header",
                h2 { class: "related-products-title", "{props.title}" }
                div { class: "related-products-nav",
                    IconButton {
                        icon: "/chevron-left.svg".to_string(),
                        aria_label: "Previous products".to_string(),
                        disabled: !can_prev,
                        onclick: move |_| {
                            pager.write().prev();
                        },
                    }
                    IconButton {
                        icon: "/chevron-right.svg".to_string(),
                        aria_label: "Next products".to_string(),
                        disabled: !can_next,
                        onclick: move |_| {
                            pager.write().next();
                        },
                    }
                }
            }
            div { class: "related-products-track",
                for product in visible {
                    MiniProductCard {
                        key: "{product.id}",
                        product: product.clone(),
                        currency_symbol: props.currency_symbol.clone(),
                        on_add: move |id: String| {
                            if let Some(handler) = &on_add {
                                handler.call(id);
                            }
                        },
                    }
                }
            }
        }
    }
}

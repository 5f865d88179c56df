//! Header Template
//!
//! Site header: brand, primary navigation, search and the cart summary.

use dioxus::prelude::*;
use storefront_core::DEFAULT_CURRENCY_SYMBOL;

use crate::components::atoms::{CartHeader, TextField};

/// A navigation link
#[derive(Clone, PartialEq, Debug)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Properties for the Header component
#[derive(Clone, PartialEq, Props)]
pub struct HeaderProps {
    pub store_name: String,
    #[props(default)]
    pub links: Vec<NavLink>,
    /// Href of the current page, highlighted in the nav
    #[props(default)]
    pub current: Option<String>,
    #[props(default = 0)]
    pub cart_count: u32,
    #[props(default = 0.0)]
    pub cart_total: f64,
    #[props(default = DEFAULT_CURRENCY_SYMBOL.to_string())]
    pub currency_symbol: String,
    /// Called with a link's href instead of following it
    #[props(default)]
    pub on_navigate: Option<EventHandler<String>>,
    #[props(default)]
    pub on_search: Option<EventHandler<String>>,
    #[props(default)]
    pub on_cart_click: Option<EventHandler<()>>,
}

#[component]
pub fn Header(props: HeaderProps) -> Element {
    let on_search = props.on_search;
    let on_navigate = props.on_navigate;
    let current = props.current.clone().unwrap_or_default();

    rsx! {
        header { class: "site-header",
            a {
                class: "site-header-brand",
                href: "/",
                onclick: move |e: MouseEvent| {
                    if let Some(handler) = &on_navigate {
                        e.prevent_default();
                        handler.call("/".to_string());
                    }
                },
                img { class: "site-header-logo", src: "/logo.svg", alt: "" }
                span { class: "site-header-name", "{props.store_name}" }
            }
            nav { class: "site-header-nav", "aria-label": "Primary",
                ul {
                    {props.links.iter().map(|link| {
                        let active = link.href == current;
                        let href = link.href.clone();
                        rsx! {
                            li { key: "{link.href}",
                                a {
                                    class: if active { "site-nav-link active" } else { "site-nav-link" },
                                    href: "{link.href}",
                                    "aria-current": if active { "page" } else { "false" },
                                    onclick: move |e: MouseEvent| {
                                        if let Some(handler) = &on_navigate {
                                            e.prevent_default();
                                            handler.call(href.clone());
                                        }
                                    },
                                    "{link.label}"
                                }
                            }
                        }
                    })}
                }
            }
            div { class: "site-header-search",
                TextField {
                    input_type: "search".to_string(),
                    placeholder: "Search products".to_string(),
                    action_label: "Search".to_string(),
                    on_action: move |query: String| {
                        let query = query.trim().to_string();
                        if query.is_empty() {
                            return;
                        }
                        if let Some(handler) = &on_search {
                            handler.call(query);
                        }
                    },
                }
            }
            CartHeader {
                item_count: props.cart_count,
                total_price: props.cart_total,
                currency_symbol: props.currency_symbol.clone(),
                onclick: props.on_cart_click,
            }
        }
    }
}

//! Shell layout - header and footer around every route.

use chrono::{Datelike, Utc};
use dioxus::prelude::*;
use storefront_ui::{Footer, FooterColumn, Header, NavLink};

use crate::app::Route;
use crate::context::{cart_count, cart_total, use_cart, use_config};

fn footer_columns() -> Vec<FooterColumn> {
    vec![
        FooterColumn {
            title: "Shop".to_string(),
            links: vec![
                NavLink::new("Cart", "/"),
                NavLink::new("Rewards", "/rewards"),
            ],
        },
        FooterColumn {
            title: "Help".to_string(),
            links: vec![
                NavLink::new("Store locator", "https://example.com/stores"),
                NavLink::new("Contact us", "https://example.com/contact"),
            ],
        },
    ]
}

#[component]
pub fn Shell() -> Element {
    let config = use_config();
    let cart = use_cart();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let columns = use_hook(footer_columns);

    let (count, total) = {
        let lines = cart.read();
        (cart_count(&lines), cart_total(&lines))
    };
    let year = Utc::now().year();

    rsx! {
        Header {
            store_name: config.store_name.clone(),
            links: vec![NavLink::new("Cart", "/"), NavLink::new("Rewards", "/rewards")],
            current: route.to_string(),
            cart_count: count,
            cart_total: total,
            currency_symbol: config.currency_symbol.clone(),
            on_navigate: move |href: String| match href.parse::<Route>() {
                Ok(target) => {
                    navigator.push(target);
                }
                Err(_) => tracing::warn!(%href, "no route for link"),
            },
            on_search: move |query: String| {
                tracing::info!(%query, "product search");
            },
            on_cart_click: move |_| {
                navigator.push(Route::Cart {});
            },
        }
        main { class: "site-main",
            Outlet::<Route> {}
        }
        Footer {
            store_name: config.store_name.clone(),
            columns: columns,
            year: year,
        }
    }
}

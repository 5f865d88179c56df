use dioxus::prelude::*;
use storefront_core::OutsideClickRegistry;

use crate::context::CartLine;
use crate::pages::{Cart, Rewards, Shell};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Cart page: product grid, order summary, related products
/// - `/rewards` - Loyalty status, rewards dial and points history
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Cart {},
        #[route("/rewards")]
        Rewards {},
}

/// Root application component.
///
/// Provides global styles, the shared cart, the outside-click registry and
/// routing. The config arrives as launch context.
#[component]
pub fn App() -> Element {
    let cart: Signal<Vec<CartLine>> = use_signal(crate::sample::starting_cart);
    use_context_provider(|| cart);
    use_context_provider(OutsideClickRegistry::new);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

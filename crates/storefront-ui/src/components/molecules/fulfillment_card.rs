//! Fulfillment Card Component
//!
//! Shows how an order will be fulfilled (pickup or delivery) and lets the
//! shopper change it.

use dioxus::prelude::*;

use crate::components::atoms::{Button, ButtonSize, ButtonVariant};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FulfillmentMethod {
    #[default]
    Pickup,
    Delivery,
}

impl FulfillmentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            FulfillmentMethod::Pickup => "Pickup",
            FulfillmentMethod::Delivery => "Delivery",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FulfillmentMethod::Pickup => "/store.svg",
            FulfillmentMethod::Delivery => "/truck.svg",
        }
    }
}

/// Properties for the FulfillmentCard component
#[derive(Clone, PartialEq, Props)]
pub struct FulfillmentCardProps {
    #[props(default)]
    pub method: FulfillmentMethod,
    /// Store or delivery address
    pub address: String,
    /// Time window, e.g. "Today, 4-5pm"
    #[props(default)]
    pub window: Option<String>,
    #[props(default)]
    pub on_change: Option<EventHandler<()>>,
}

#[component]
pub fn FulfillmentCard(props: FulfillmentCardProps) -> Element {
    let on_change = props.on_change;
    let method_label = props.method.label();

    rsx! {
        section { class: "fulfillment-card",
            img { class: "fulfillment-icon", src: props.method.icon(), alt: "" }
            div { class: "fulfillment-details",
                h3 { class: "fulfillment-method", "{method_label}" }
                p { class: "fulfillment-address", "{props.address}" }
                if let Some(window) = &props.window {
                    p { class: "fulfillment-window", "{window}" }
                }
            }
            Button {
                label: "Change".to_string(),
                variant: ButtonVariant::Text,
                size: ButtonSize::Small,
                onclick: move |_| {
                    if let Some(handler) = &on_change {
                        handler.call(());
                    }
                },
            }
        }
    }
}

//! Quantity Selector Component
//!
//! Cart stepper. At the minimum the left button turns into "remove" and
//! fires `on_delete` instead of `on_decrement`; at the maximum the right
//! button is disabled.

use dioxus::prelude::*;
use storefront_core::quantity::{DEFAULT_MAX_QUANTITY, DEFAULT_MIN_QUANTITY};
use storefront_core::{LeftAction, QuantityStepper, StepOutcome};

/// Properties for the QuantitySelector component
#[derive(Clone, PartialEq, Props)]
pub struct QuantitySelectorProps {
    /// Starting quantity; the selector owns the count afterwards
    #[props(default = DEFAULT_MIN_QUANTITY)]
    pub quantity: u32,
    #[props(default = DEFAULT_MIN_QUANTITY)]
    pub min_quantity: u32,
    #[props(default = DEFAULT_MAX_QUANTITY)]
    pub max_quantity: u32,
    /// Called with the new quantity
    #[props(default)]
    pub on_increment: Option<EventHandler<u32>>,
    /// Called with the new quantity
    #[props(default)]
    pub on_decrement: Option<EventHandler<u32>>,
    /// Called when the left button is pressed at the minimum
    #[props(default)]
    pub on_delete: Option<EventHandler<()>>,
}

#[component]
pub fn QuantitySelector(props: QuantitySelectorProps) -> Element {
    let (initial, min, max) = (props.quantity, props.min_quantity, props.max_quantity);
    let mut stepper = use_signal(move || QuantityStepper::new(initial, min, max));

    let quantity = stepper.read().quantity();
    let left = stepper.read().left_action();
    let can_increment = stepper.read().can_increment();
    let left_class = match left {
        LeftAction::Remove => "quantity-btn quantity-remove",
        LeftAction::Decrement => "quantity-btn quantity-decrement",
    };
    let on_increment = props.on_increment;
    let on_decrement = props.on_decrement;
    let on_delete = props.on_delete;

    rsx! {
        div {
            class: "quantity-selector",
            role: "group",
            "aria-label": "Quantity",
            button {
                class: left_class,
                r#type: "button",
                "aria-label": left.aria_label(),
                onclick: move |_| {
                    let outcome = stepper.write().press_left();
                    match outcome {
                        StepOutcome::Delete => {
                            if let Some(handler) = &on_delete {
                                handler.call(());
                            }
                        }
                        StepOutcome::Decrement(q) => {
                            if let Some(handler) = &on_decrement {
                                handler.call(q);
                            }
                        }
                        StepOutcome::Increment(_) => {}
                    }
                },
                img { src: left.icon(), alt: "" }
            }
            span { class: "quantity-value", "aria-live": "polite", "{quantity}" }
            button {
                class: "quantity-btn quantity-increment",
                r#type: "button",
                "aria-label": "Increase quantity",
                disabled: !can_increment,
                "aria-disabled": if can_increment { "false" } else { "true" },
                onclick: move |_| {
                    let outcome = stepper.write().press_right();
                    if let (Some(StepOutcome::Increment(q)), Some(handler)) = (outcome, &on_increment) {
                        handler.call(q);
                    }
                },
                img { src: "/plus.svg", alt: "" }
            }
        }
    }
}

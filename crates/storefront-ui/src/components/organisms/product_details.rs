//! Product Details Component
//!
//! Two-tab panel: description and specifications. The active tab is not
//! remembered across remounts.

use dioxus::prelude::*;
use storefront_core::TabSwitcher;

/// A label/value row in the specifications tab
#[derive(Clone, PartialEq, Debug)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

impl Specification {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Properties for the ProductDetails component
#[derive(Clone, PartialEq, Props)]
pub struct ProductDetailsProps {
    pub description: String,
    #[props(default)]
    pub specifications: Vec<Specification>,
    #[props(default = "Description".to_string())]
    pub description_tab: String,
    #[props(default = "Details".to_string())]
    pub specifications_tab: String,
}

#[component]
pub fn ProductDetails(props: ProductDetailsProps) -> Element {
    let mut tabs = use_signal(|| TabSwitcher::new(2));
    let labels = [props.description_tab.clone(), props.specifications_tab.clone()];
    let active = tabs.read().active();

    rsx! {
        section { class: "product-details",
            div { class: "product-details-tabs", role: "tablist",
                for (index, label) in labels.iter().enumerate() {
                    button {
                        key: "{index}",
                        id: "product-tab-{index}",
                        class: if index == active { "product-tab active" } else { "product-tab" },
                        r#type: "button",
                        role: "tab",
                        "aria-selected": if index == active { "true" } else { "false" },
                        "aria-controls": "product-panel-{index}",
                        onclick: move |_| {
                            tabs.write().select(index);
                        },
                        "{label}"
                    }
                }
            }
            div {
                id: "product-panel-{active}",
                class: "product-details-panel",
                role: "tabpanel",
                "aria-labelledby": "product-tab-{active}",
                if active == 0 {
                    p { class: "product-description", "{props.description}" }
                } else {
                    dl { class: "product-specifications",
                        for spec in props.specifications.iter() {
                            div { key: "{spec.label}", class: "product-specification",
                                dt { "{spec.label}" }
                                dd { "{spec.value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

//! Product Options Component
//!
//! Size dropdown plus colour swatches. Selections are local to the
//! component and reset when it unmounts.

use dioxus::prelude::*;
use storefront_core::DropdownOption;

use crate::class::with_modifiers;
use crate::components::atoms::Dropdown;

/// A colour choice rendered as a swatch
#[derive(Clone, PartialEq, Debug)]
pub struct ColorSwatch {
    pub value: String,
    pub label: String,
    /// CSS colour, e.g. "#b22222"
    pub color: String,
    pub disabled: bool,
}

impl ColorSwatch {
    pub fn new(value: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            color: color.into(),
            disabled: false,
        }
    }
}

/// Current size and colour picks
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ProductSelection {
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Properties for the ProductOptions component
#[derive(Clone, PartialEq, Props)]
pub struct ProductOptionsProps {
    #[props(default)]
    pub sizes: Vec<DropdownOption>,
    #[props(default)]
    pub colors: Vec<ColorSwatch>,
    #[props(default)]
    pub default_size: Option<String>,
    #[props(default)]
    pub default_color: Option<String>,
    /// Called with the full selection after either pick changes
    #[props(default)]
    pub on_change: Option<EventHandler<ProductSelection>>,
}

#[component]
pub fn ProductOptions(props: ProductOptionsProps) -> Element {
    let initial = ProductSelection {
        size: props.default_size.clone(),
        color: props.default_color.clone(),
    };
    let mut selection = use_signal(move || initial);
    let on_change = props.on_change;

    let current_color = selection.read().color.clone();
    let color_label = current_color
        .as_deref()
        .and_then(|v| props.colors.iter().find(|c| c.value == v))
        .map(|c| c.label.clone());

    rsx! {
        div { class: "product-options",
            if !props.sizes.is_empty() {
                Dropdown {
                    label: "Size".to_string(),
                    placeholder: "Select size".to_string(),
                    options: props.sizes.clone(),
                    default_value: props.default_size.clone(),
                    on_change: move |size: String| {
                        selection.write().size = Some(size);
                        if let Some(handler) = &on_change {
                            handler.call(selection.peek().clone());
                        }
                    },
                }
            }
            if !props.colors.is_empty() {
                div { class: "product-options-colors",
                    span { class: "product-options-label",
                        "Color"
                        if let Some(label) = &color_label {
                            span { class: "product-options-value", ": {label}" }
                        }
                    }
                    div { class: "swatch-list", role: "radiogroup", "aria-label": "Color",
                        for swatch in props.colors.iter() {
                            {
                                let selected = current_color.as_deref() == Some(swatch.value.as_str());
                                let disabled = swatch.disabled;
                                let value = swatch.value.clone();
                                rsx! {
                                    button {
                                        key: "{swatch.value}",
                                        class: with_modifiers(
                                            "swatch",
                                            &[("selected", selected), ("disabled", disabled)],
                                        ),
                                        r#type: "button",
                                        role: "radio",
                                        title: "{swatch.label}",
                                        disabled: disabled,
                                        "aria-label": "{swatch.label}",
                                        "aria-checked": if selected { "true" } else { "false" },
                                        style: "background-color: {swatch.color}",
                                        onclick: move |_| {
                                            if disabled {
                                                return;
                                            }
                                            selection.write().color = Some(value.clone());
                                            if let Some(handler) = &on_change {
                                                handler.call(selection.peek().clone());
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
    }
}

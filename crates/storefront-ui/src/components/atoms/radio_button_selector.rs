//! Radio Button Selector Component
//!
//! Vertical list of mutually exclusive options, e.g. pickup vs delivery.

use dioxus::prelude::*;

use crate::class::with_modifiers;
use crate::hooks::use_controlled;

pub const RADIO_SELECTED_ICON: &str = "/radio-selected.svg";
pub const RADIO_UNSELECTED_ICON: &str = "/radio-unselected.svg";

/// A single radio choice
#[derive(Clone, PartialEq, Debug)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
    pub disabled: bool,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            disabled: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Properties for the RadioButtonSelector component
#[derive(Clone, PartialEq, Props)]
pub struct RadioButtonSelectorProps {
    pub options: Vec<RadioOption>,
    /// Accessible name of the group
    pub label: String,
    /// Externally owned selection; `None` leaves the group uncontrolled
    #[props(default)]
    pub value: Option<String>,
    #[props(default)]
    pub default_value: Option<String>,
    /// Disables the whole group
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub on_change: Option<EventHandler<String>>,
}

#[component]
pub fn RadioButtonSelector(props: RadioButtonSelectorProps) -> Element {
    let default_value = props.default_value.clone();
    let mut state = use_controlled(props.value.clone(), move || default_value.unwrap_or_default());
    let current = state.read().current().clone();
    let group_disabled = props.disabled;
    let on_change = props.on_change;

    rsx! {
        div {
            class: "radio-selector",
            role: "radiogroup",
            "aria-label": "{props.label}",
            "aria-disabled": if group_disabled { "true" } else { "false" },
            for option in props.options.iter() {
                {
                    let selected = option.value == current;
                    let disabled = group_disabled || option.disabled;
                    let value = option.value.clone();
                    rsx! {
                        button {
                            key: "{option.value}",
                            class: with_modifiers(
                                "radio-option",
                                &[("selected", selected), ("disabled", disabled)],
                            ),
                            r#type: "button",
                            role: "radio",
                            disabled: disabled,
                            "aria-checked": if selected { "true" } else { "false" },
                            "aria-disabled": if disabled { "true" } else { "false" },
                            onclick: move |_| {
                                if *state.peek().current() == value {
                                    return;
                                }
                                let committed = state.write().commit(value.clone(), disabled);
                                if let (Some(v), Some(handler)) = (committed, &on_change) {
                                    handler.call(v);
                                }
                            },
                            img {
                                class: "radio-icon",
                                src: if selected { RADIO_SELECTED_ICON } else { RADIO_UNSELECTED_ICON },
                                alt: "",
                            }
                            span { class: "radio-text",
                                span { class: "radio-label", "{option.label}" }
                                if let Some(description) = &option.description {
                                    span { class: "radio-description", "{description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

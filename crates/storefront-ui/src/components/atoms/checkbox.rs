//! Checkbox Component

use dioxus::prelude::*;

use crate::class::{next_id, with_modifiers};
use crate::hooks::use_controlled;

pub const CHECK_ICON: &str = "/check.svg";

/// Properties for the Checkbox component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    /// Visible label
    pub label: String,
    /// Externally owned state; `None` leaves the checkbox uncontrolled
    #[props(default)]
    pub checked: Option<bool>,
    /// Initial state when uncontrolled
    #[props(default = false)]
    pub default_checked: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Called with the new state after every toggle
    #[props(default)]
    pub on_change: Option<EventHandler<bool>>,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Checkbox with a label
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Checkbox {
///         label: "Bring your own bags".to_string(),
///         on_change: move |checked| own_bags.set(checked),
///     }
/// }
/// ```
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let default_checked = props.default_checked;
    let mut state = use_controlled(props.checked, move || default_checked);
    let generated_id = use_hook(|| next_id("checkbox"));
    let id = props.id.clone().unwrap_or(generated_id);

    let checked = *state.read().current();
    let disabled = props.disabled;
    let on_change = props.on_change;

    let class = with_modifiers("checkbox", &[("checked", checked), ("disabled", disabled)]);

    rsx! {
        div { class: "{class}",
            button {
                id: "{id}",
                class: "checkbox-box",
                r#type: "button",
                role: "checkbox",
                disabled: disabled,
                "aria-checked": if checked { "true" } else { "false" },
                "aria-disabled": if disabled { "true" } else { "false" },
                "aria-labelledby": "{id}-label",
                onclick: move |_| {
                    let next = !*state.peek().current();
                    let committed = state.write().commit(next, disabled);
                    if let (Some(value), Some(handler)) = (committed, &on_change) {
                        handler.call(value);
                    }
                },
                if checked {
                    img { class: "checkbox-check", src: CHECK_ICON, alt: "" }
                }
            }
            span { id: "{id}-label", class: "checkbox-label", "{props.label}" }
        }
    }
}

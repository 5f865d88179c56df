//! Text Field Component
//!
//! Labelled text input with helper/error text, focus styling and an
//! optional trailing action (e.g. "Apply" for promo codes).

use dioxus::prelude::*;

use super::button::{Button, ButtonSize, ButtonVariant};
use crate::class::{next_id, with_modifiers};
use crate::hooks::use_controlled;

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Externally owned value; `None` leaves the field uncontrolled
    #[props(default)]
    pub value: Option<String>,
    /// Initial value when uncontrolled
    #[props(default)]
    pub default_value: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Hint shown below the input
    #[props(default)]
    pub helper_text: Option<String>,
    /// Error message; marks the input invalid and replaces the helper text
    #[props(default)]
    pub error: Option<String>,
    /// Input type (text, email, search, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub disabled: bool,
    /// Label of the trailing action button
    #[props(default)]
    pub action_label: Option<String>,
    /// Called with the current value when the action is pressed
    #[props(default)]
    pub on_action: Option<EventHandler<String>>,
    /// Called with the new value on every keystroke
    #[props(default)]
    pub on_change: Option<EventHandler<String>>,
    #[props(default)]
    pub on_focus: Option<EventHandler<()>>,
    #[props(default)]
    pub on_blur: Option<EventHandler<()>>,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let default_value = props.default_value.clone();
    let mut state = use_controlled(props.value.clone(), move || default_value.unwrap_or_default());
    let mut focused = use_signal(|| false);
    let generated_id = use_hook(|| next_id("textfield"));
    let id = props.id.clone().unwrap_or(generated_id);
    let helper_id = format!("{id}-helper");

    let shown = state.read().current().clone();
    let disabled = props.disabled;
    let invalid = props.error.is_some();
    let has_helper = invalid || props.helper_text.is_some();
    let on_change = props.on_change;
    let on_focus = props.on_focus;
    let on_blur = props.on_blur;
    let on_action = props.on_action;

    let class = with_modifiers(
        "text-field",
        &[
            ("focused", focused()),
            ("has-error", invalid),
            ("disabled", disabled),
            ("filled", !shown.is_empty()),
        ],
    );

    rsx! {
        div { class: "{class}",
            if let Some(label) = &props.label {
                label { class: "text-field-label", r#for: "{id}", "{label}" }
            }
            div { class: "text-field-control",
                input {
                    id: "{id}",
                    class: "text-field-input",
                    r#type: "{props.input_type}",
                    value: "{shown}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    disabled: disabled,
                    "aria-invalid": if invalid { "true" } else { "false" },
                    "aria-describedby": if has_helper { helper_id.as_str() } else { "" },
                    oninput: move |e| {
                        let committed = state.write().commit(e.value(), disabled);
                        if let (Some(value), Some(handler)) = (committed, &on_change) {
                            handler.call(value);
                        }
                    },
                    onfocus: move |_| {
                        if disabled {
                            return;
                        }
                        focused.set(true);
                        if let Some(handler) = &on_focus {
                            handler.call(());
                        }
                    },
                    onblur: move |_| {
                        focused.set(false);
                        if let Some(handler) = &on_blur {
                            handler.call(());
                        }
                    },
                }
                if let Some(action) = &props.action_label {
                    Button {
                        label: action.clone(),
                        variant: ButtonVariant::Text,
                        size: ButtonSize::Small,
                        disabled: disabled,
                        class: "text-field-action".to_string(),
                        onclick: move |_| {
                            if let Some(handler) = &on_action {
                                handler.call(state.peek().current().clone());
                            }
                        },
                    }
                }
            }
            if let Some(error) = &props.error {
                p { id: "{helper_id}", class: "text-field-error", role: "alert", "{error}" }
            }
            if !invalid {
                if let Some(helper) = &props.helper_text {
                    p { id: "{helper_id}", class: "text-field-helper", "{helper}" }
                }
            }
        }
    }
}

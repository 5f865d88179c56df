//! Dropdown Component
//!
//! Single-select listbox. Keyboard and pointer behaviour comes from
//! [`DropdownState`]; while the list is open a full-screen backdrop catches
//! outside pointer-downs, and an [`OutsideClickGuard`] is held for exactly
//! as long as that backdrop is mounted.

use std::rc::Rc;

use dioxus::prelude::*;
use storefront_core::dropdown::{label_for, reconcile_guard};
use storefront_core::{
    DropdownEvent, DropdownKey, DropdownOption, DropdownState, OutsideClickGuard,
    OutsideClickRegistry,
};

use crate::class::{next_id, with_modifiers};
use crate::hooks::use_controlled;

/// Properties for the Dropdown component
#[derive(Clone, PartialEq, Props)]
pub struct DropdownProps {
    pub options: Vec<DropdownOption>,
    /// Externally owned selected value; `None` leaves the dropdown uncontrolled
    #[props(default)]
    pub value: Option<String>,
    /// Initial selection when uncontrolled
    #[props(default)]
    pub default_value: Option<String>,
    /// Trigger text while nothing is selected
    #[props(default = "Select".to_string())]
    pub placeholder: String,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    /// Called once with the option value after each successful selection
    #[props(default)]
    pub on_change: Option<EventHandler<String>>,
    #[props(default)]
    pub id: Option<String>,
}

/// Single-select dropdown
///
/// - Opens on trigger click, Enter, Space or ArrowDown
/// - Closes on outside pointer-down, Escape (focus returns to the trigger),
///   Tab or a selection
/// - Disabled options never close the list or fire `on_change`
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Dropdown {
///         options: vec![
///             DropdownOption::new("12oz", "12 oz"),
///             DropdownOption::new("24oz", "24 oz").disabled(),
///         ],
///         placeholder: "Size".to_string(),
///         on_change: move |size| selected_size.set(size),
///     }
/// }
/// ```
#[component]
pub fn Dropdown(props: DropdownProps) -> Element {
    let default_value = props.default_value.clone();
    let mut state = use_controlled(props.value.clone(), move || default_value.unwrap_or_default());
    let mut dropdown = use_signal(DropdownState::new);
    let mut guard: Signal<Option<OutsideClickGuard>> = use_signal(|| None);
    let mut trigger: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let registry = use_hook(|| try_consume_context::<OutsideClickRegistry>().unwrap_or_default());
    let generated_id = use_hook(|| next_id("dropdown"));
    let id = props.id.clone().unwrap_or(generated_id);

    let disabled = props.disabled;
    let on_change = props.on_change;
    let options = props.options.clone();

    let dispatch = use_callback(move |event: DropdownEvent| -> bool {
        let current = state.peek().current().clone();
        let selected = (!current.is_empty()).then_some(current);
        let outcome = dropdown
            .write()
            .handle(event, &options, selected.as_deref(), disabled);
        reconcile_guard(&dropdown.peek(), &registry, &mut *guard.write());

        if let Some(value) = outcome.selected {
            let committed = state.write().commit(value, disabled);
            if let Some(value) = committed {
                tracing::debug!(%value, "dropdown selection");
                if let Some(handler) = &on_change {
                    handler.call(value);
                }
            }
        }
        if outcome.focus_trigger {
            if let Some(element) = trigger.peek().clone() {
                spawn(async move {
                    let _ = element.set_focus(true).await;
                });
            }
        }
        outcome.handled
    });

    let current = state.read().current().clone();
    let open = dropdown.read().is_open();
    let listening = dropdown.read().listening();
    let highlighted = dropdown.read().highlighted();
    let display = label_for(
        &props.options,
        (!current.is_empty()).then_some(current.as_str()),
        &props.placeholder,
    )
    .to_string();
    let has_label = props.label.is_some();
    let active_descendant = highlighted
        .map(|i| format!("{id}-option-{i}"))
        .unwrap_or_default();

    let class = with_modifiers(
        "dropdown",
        &[
            ("open", open),
            ("disabled", disabled),
            ("placeholder-shown", current.is_empty()),
        ],
    );

    rsx! {
        div { class: "{class}",
            if let Some(label) = &props.label {
                span { id: "{id}-label", class: "dropdown-label", "{label}" }
            }
            button {
                id: "{id}-trigger",
                class: "dropdown-trigger",
                r#type: "button",
                disabled: disabled,
                "aria-haspopup": "listbox",
                "aria-expanded": if open { "true" } else { "false" },
                // Only reference the listbox while it is mounted
                "aria-controls": if open { "{id}-listbox" },
                "aria-disabled": if disabled { "true" } else { "false" },
                "aria-activedescendant": "{active_descendant}",
                onmounted: move |e| trigger.set(Some(e.data())),
                onclick: move |_| {
                    dispatch.call(DropdownEvent::TriggerClick);
                },
                onkeydown: move |e: KeyboardEvent| {
                    let key = DropdownKey::from_key_name(&e.key().to_string());
                    if dispatch.call(DropdownEvent::Key(key)) {
                        e.prevent_default();
                    }
                },
                span { class: "dropdown-value", "{display}" }
                img {
                    class: "dropdown-chevron",
                    src: if open { "/chevron-up.svg" } else { "/chevron-down.svg" },
                    alt: "",
                }
            }
            if listening {
                div {
                    class: "dropdown-backdrop",
                    onpointerdown: move |_| {
                        dispatch.call(DropdownEvent::OutsidePointerDown);
                    },
                }
            }
            if open {
                ul {
                    id: "{id}-listbox",
                    class: "dropdown-list",
                    role: "listbox",
                    "aria-labelledby": if has_label { "{id}-label" },
                    for (index, option) in props.options.iter().enumerate() {
                        li {
                            key: "{option.value}",
                            id: "{id}-option-{index}",
                            class: with_modifiers(
                                "dropdown-option",
                                &[
                                    ("selected", option.value == current),
                                    ("highlighted", highlighted == Some(index)),
                                    ("disabled", option.disabled),
                                ],
                            ),
                            role: "option",
                            "aria-selected": if option.value == current { "true" } else { "false" },
                            "aria-disabled": if option.disabled { "true" } else { "false" },
                            onclick: move |_| {
                                dispatch.call(DropdownEvent::Select(index));
                            },
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

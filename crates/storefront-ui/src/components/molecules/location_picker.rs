//! Location Picker Component
//!
//! Current store with a control to change it.

use dioxus::prelude::*;

/// Properties for the LocationPicker component
#[derive(Clone, PartialEq, Props)]
pub struct LocationPickerProps {
    pub store_name: String,
    #[props(default)]
    pub address: Option<String>,
    /// e.g. "Open until 10pm"
    #[props(default)]
    pub hours: Option<String>,
    #[props(default)]
    pub on_change: Option<EventHandler<()>>,
}

#[component]
pub fn LocationPicker(props: LocationPickerProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        button {
            class: "location-picker",
            r#type: "button",
            "aria-label": "Change store, current store {props.store_name}",
            onclick: move |_| {
                if let Some(handler) = &on_change {
                    handler.call(());
                }
            },
            img { class: "location-picker-icon", src: "/location.svg", alt: "" }
            span { class: "location-picker-text",
                span { class: "location-picker-name", "{props.store_name}" }
                if let Some(address) = &props.address {
                    span { class: "location-picker-address", "{address}" }
                }
                if let Some(hours) = &props.hours {
                    span { class: "location-picker-hours", "{hours}" }
                }
            }
            img { class: "location-picker-chevron", src: "/chevron-down.svg", alt: "" }
        }
    }
}

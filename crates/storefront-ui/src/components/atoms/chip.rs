//! Chip Component
//!
//! Small pill used for filters, tags and eyebrows.

use dioxus::prelude::*;

use crate::class::with_modifiers;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ChipVariant {
    #[default]
    Filter,
    /// Non-interactive tag, e.g. "New" or "Sale"
    Tag,
    /// Promotional highlight
    Promo,
}

impl ChipVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ChipVariant::Filter => "chip-filter",
            ChipVariant::Tag => "chip-tag",
            ChipVariant::Promo => "chip-promo",
        }
    }
}

/// Properties for the Chip component
#[derive(Clone, PartialEq, Props)]
pub struct ChipProps {
    pub label: String,
    #[props(default)]
    pub variant: ChipVariant,
    /// Pressed state for filter chips
    #[props(default = false)]
    pub selected: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Leading icon path
    #[props(default)]
    pub icon: Option<String>,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
}

/// Filter/tag chip
///
/// Rendered as a `button` when clickable, otherwise as a plain `span`.
#[component]
pub fn Chip(props: ChipProps) -> Element {
    let class = with_modifiers(
        &format!("chip {}", props.variant.class()),
        &[
            ("selected", props.selected),
            ("disabled", props.disabled),
            ("with-icon", props.icon.is_some()),
        ],
    );
    let disabled = props.disabled;

    match props.onclick {
        Some(handler) => rsx! {
            button {
                class: "{class}",
                r#type: "button",
                disabled: disabled,
                "aria-pressed": if props.selected { "true" } else { "false" },
                onclick: move |_| {
                    if !disabled {
                        handler.call(());
                    }
                },
                if let Some(icon) = &props.icon {
                    img { class: "chip-icon", src: "{icon}", alt: "" }
                }
                span { class: "chip-label", "{props.label}" }
            }
        },
        None => rsx! {
            span { class: "{class}",
                if let Some(icon) = &props.icon {
                    img { class: "chip-icon", src: "{icon}", alt: "" }
                }
                span { class: "chip-label", "{props.label}" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_variant_classes() {
        assert_eq!(ChipVariant::Filter.class(), "chip-filter");
        assert_eq!(ChipVariant::Tag.class(), "chip-tag");
        assert_eq!(ChipVariant::Promo.class(), "chip-promo");
    }
}

//! Perks Bar Component
//!
//! Horizontal strip of short member perks ("Free delivery over $35", ...).

use dioxus::prelude::*;

/// A single perk
#[derive(Clone, PartialEq, Debug)]
pub struct Perk {
    pub icon: String,
    pub label: String,
}

impl Perk {
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
        }
    }
}

/// Properties for the PerksBar component
#[derive(Clone, PartialEq, Props)]
pub struct PerksBarProps {
    pub perks: Vec<Perk>,
}

#[component]
pub fn PerksBar(props: PerksBarProps) -> Element {
    rsx! {
        ul { class: "perks-bar", "aria-label": "Member perks",
            for perk in props.perks.iter() {
                li { key: "{perk.label}", class: "perk",
                    img { class: "perk-icon", src: "{perk.icon}", alt: "" }
                    span { class: "perk-label", "{perk.label}" }
                }
            }
        }
    }
}

//! Category Tile Component

use dioxus::prelude::*;

/// Properties for the CategoryTile component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryTileProps {
    pub label: String,
    pub image: String,
    /// Category key passed back to `onclick`
    pub category: String,
    #[props(default = false)]
    pub selected: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<String>>,
}

#[component]
pub fn CategoryTile(props: CategoryTileProps) -> Element {
    let category = props.category.clone();
    let onclick = props.onclick;

    rsx! {
        button {
            class: if props.selected { "category-tile selected" } else { "category-tile" },
            r#type: "button",
            "aria-pressed": if props.selected { "true" } else { "false" },
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(category.clone());
                }
            },
            img { class: "category-tile-image", src: "{props.image}", alt: "" }
            span { class: "category-tile-label", "{props.label}" }
        }
    }
}

//! Featured Content Block Component
//!
//! A ContentBlock with a highlight chip above it.

use dioxus::prelude::*;

use crate::components::atoms::{Chip, ChipVariant, ContentBlock};

/// Properties for the FeaturedContentBlock component
#[derive(Clone, PartialEq, Props)]
pub struct FeaturedContentBlockProps {
    /// Chip text, e.g. "Featured"
    #[props(default = "Featured".to_string())]
    pub highlight: String,
    pub title: String,
    #[props(default)]
    pub body: Option<String>,
    #[props(default)]
    pub image: Option<String>,
    #[props(default)]
    pub cta_label: Option<String>,
    #[props(default)]
    pub on_cta: Option<EventHandler<()>>,
}

#[component]
pub fn FeaturedContentBlock(props: FeaturedContentBlockProps) -> Element {
    let on_cta = props.on_cta;

    rsx! {
        div { class: "featured-content-block",
            Chip { label: props.highlight.clone(), variant: ChipVariant::Tag }
            ContentBlock {
                title: props.title.clone(),
                body: props.body.clone(),
                image: props.image.clone(),
                cta_label: props.cta_label.clone(),
                reversed: true,
                on_cta: move |_| {
                    if let Some(handler) = &on_cta {
                        handler.call(());
                    }
                },
            }
        }
    }
}

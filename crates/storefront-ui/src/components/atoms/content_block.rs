//! Content Block Component
//!
//! Image plus copy with an optional call to action.

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};

/// Properties for the ContentBlock component
#[derive(Clone, PartialEq, Props)]
pub struct ContentBlockProps {
    pub title: String,
    #[props(default)]
    pub eyebrow: Option<String>,
    #[props(default)]
    pub body: Option<String>,
    #[props(default)]
    pub image: Option<String>,
    #[props(default)]
    pub image_alt: Option<String>,
    #[props(default)]
    pub cta_label: Option<String>,
    #[props(default)]
    pub on_cta: Option<EventHandler<()>>,
    /// Image to the right of the copy instead of above it
    #[props(default = false)]
    pub reversed: bool,
}

#[component]
pub fn ContentBlock(props: ContentBlockProps) -> Element {
    let on_cta = props.on_cta;

    rsx! {
        section { class: if props.reversed { "content-block reversed" } else { "content-block" },
            if let Some(image) = &props.image {
                img {
                    class: "content-block-image",
                    src: "{image}",
                    alt: props.image_alt.as_deref().unwrap_or(""),
                }
            }
            div { class: "content-block-copy",
                if let Some(eyebrow) = &props.eyebrow {
                    span { class: "content-block-eyebrow", "{eyebrow}" }
                }
                h2 { class: "content-block-title", "{props.title}" }
                if let Some(body) = &props.body {
                    p { class: "content-block-body", "{body}" }
                }
                if let Some(cta) = &props.cta_label {
                    Button {
                        label: cta.clone(),
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            if let Some(handler) = &on_cta {
                                handler.call(());
                            }
                        },
                    }
                }
            }
        }
    }
}

//! Article Card Component

use dioxus::prelude::*;

/// Properties for the ArticleCard component
#[derive(Clone, PartialEq, Props)]
pub struct ArticleCardProps {
    pub title: String,
    pub href: String,
    #[props(default)]
    pub image: Option<String>,
    #[props(default)]
    pub excerpt: Option<String>,
    /// Category or reading time, e.g. "Recipes" or "5 min read"
    #[props(default)]
    pub meta: Option<String>,
}

#[component]
pub fn ArticleCard(props: ArticleCardProps) -> Element {
    rsx! {
        article { class: "article-card",
            a { class: "article-card-link", href: "{props.href}",
                if let Some(image) = &props.image {
                    img { class: "article-card-image", src: "{image}", alt: "" }
                }
                div { class: "article-card-body",
                    if let Some(meta) = &props.meta {
                        span { class: "article-card-meta", "{meta}" }
                    }
                    h3 { class: "article-card-title", "{props.title}" }
                    if let Some(excerpt) = &props.excerpt {
                        p { class: "article-card-excerpt", "{excerpt}" }
                    }
                }
            }
        }
    }
}

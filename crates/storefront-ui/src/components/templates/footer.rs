//! Footer Template

use dioxus::prelude::*;

use super::header::NavLink;

/// A titled group of footer links
#[derive(Clone, PartialEq, Debug)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<NavLink>,
}

/// Properties for the Footer component
#[derive(Clone, PartialEq, Props)]
pub struct FooterProps {
    pub store_name: String,
    #[props(default)]
    pub columns: Vec<FooterColumn>,
    /// Copyright year
    pub year: i32,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer-columns",
                for column in props.columns.iter() {
                    nav { key: "{column.title}", class: "site-footer-column", "aria-label": "{column.title}",
                        h4 { class: "site-footer-heading", "{column.title}" }
                        ul {
                            for link in column.links.iter() {
                                li { key: "{link.href}",
                                    a { class: "site-footer-link", href: "{link.href}", "{link.label}" }
                                }
                            }
                        }
                    }
                }
            }
            p { class: "site-footer-copyright",
                "\u{00A9} {props.year} {props.store_name}. All rights reserved."
            }
        }
    }
}

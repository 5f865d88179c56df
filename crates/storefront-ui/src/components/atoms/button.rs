//! Button Component
//!
//! The storefront's primary call to action. Supports a two-line layout
//! ("Add to Cart" over a price) used by product cards.

use dioxus::prelude::*;

use crate::class::with_extra;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled brand colour, main action
    #[default]
    Primary,
    /// Filled neutral
    Secondary,
    /// Outlined
    Outline,
    /// Text-only link style
    Text,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Text => "btn-text",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "btn-md",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Accessible name: both lines when multiline, otherwise the label
pub fn button_aria_label(label: &str, label_top: Option<&str>, multiline: bool) -> String {
    match label_top {
        Some(top) if multiline => format!("{top} {label}"),
        _ => label.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Main label (the bottom line when multiline)
    pub label: String,
    /// Top line, shown only with `multiline`
    #[props(default)]
    pub label_top: Option<String>,
    /// Two-line layout
    #[props(default = false)]
    pub multiline: bool,
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Leading icon path
    #[props(default)]
    pub icon: Option<String>,
    /// Stretch to the container width
    #[props(default = false)]
    pub full_width: bool,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// A disabled button never invokes `onclick`.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         multiline: true,
///         label_top: "Add to Cart".to_string(),
///         label: "$9.99".to_string(),
///         onclick: move |_| add_to_cart(),
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut class = format!("btn {} {}", props.variant.class(), props.size.class());
    if props.full_width {
        class.push_str(" btn-full");
    }
    if props.multiline {
        class.push_str(" btn-multiline");
    }
    let class = with_extra(&class, props.class.as_deref());
    let aria_label = button_aria_label(&props.label, props.label_top.as_deref(), props.multiline);
    let label_top = props.label_top.clone().unwrap_or_default();
    let disabled = props.disabled;
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{class}",
            r#type: "{props.button_type}",
            disabled: disabled,
            "aria-label": "{aria_label}",
            "aria-disabled": if disabled { "true" } else { "false" },
            onclick: move |_| {
                if disabled {
                    return;
                }
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            if let Some(icon) = &props.icon {
                img { class: "btn-icon", src: "{icon}", alt: "" }
            }
            if props.multiline {
                span { class: "btn-label-top", "{label_top}" }
                span { class: "btn-label", "{props.label}" }
            } else {
                span { class: "btn-label", "{props.label}" }
            }
        }
    }
}

/// Icon-only button for compact actions (close, carousel arrows, ...)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// Icon path
    pub icon: String,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let class = with_extra("icon-btn", props.class.as_deref());
    let disabled = props.disabled;
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: disabled,
            "aria-label": "{props.aria_label}",
            onclick: move |_| {
                if disabled {
                    return;
                }
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            img { src: "{props.icon}", alt: "" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn-secondary");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Text.class(), "btn-text");
    }

    #[test]
    fn button_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default().class(), "btn-md");
    }

    #[test]
    fn multiline_aria_label_joins_lines() {
        assert_eq!(
            button_aria_label("$9.99", Some("Add to Cart"), true),
            "Add to Cart $9.99"
        );
        assert_eq!(button_aria_label("$9.99", Some("Add to Cart"), false), "$9.99");
        assert_eq!(button_aria_label("Checkout", None, true), "Checkout");
    }
}

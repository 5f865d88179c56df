//! Loyalty Progress Bar Component

use dioxus::prelude::*;
use storefront_core::LoyaltyProgress;

/// Properties for the LoyaltyProgressBar component
#[derive(Clone, PartialEq, Props)]
pub struct LoyaltyProgressBarProps {
    pub points: f64,
    pub max_points: f64,
    /// Caption under the bar's start
    #[props(default)]
    pub start_label: Option<String>,
    /// Caption under the bar's end
    #[props(default)]
    pub end_label: Option<String>,
}

/// Three-segment progress bar with a position indicator
///
/// `aria-valuenow` carries the raw point total, while the indicator's
/// `left` offset is clamped into `[0%, 100%]`.
#[component]
pub fn LoyaltyProgressBar(props: LoyaltyProgressBarProps) -> Element {
    let progress = LoyaltyProgress::new(props.points, props.max_points);
    let offset = progress.indicator_offset();
    let segments = progress.segments();
    let value_now = progress.aria_value_now();
    let value_max = progress.aria_value_max();
    let start_label = props.start_label.clone().unwrap_or_default();
    let end_label = props.end_label.clone().unwrap_or_default();

    rsx! {
        div { class: "loyalty-progress",
            div {
                class: "loyalty-progress-track",
                role: "progressbar",
                "aria-label": "Loyalty points progress",
                "aria-valuemin": "0",
                "aria-valuemax": "{value_max}",
                "aria-valuenow": "{value_now}",
                for (i, filled) in segments.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if *filled { "loyalty-progress-segment filled" } else { "loyalty-progress-segment" },
                    }
                }
                div {
                    class: "loyalty-progress-indicator",
                    style: "left: {offset}",
                }
            }
            if props.start_label.is_some() || props.end_label.is_some() {
                div { class: "loyalty-progress-labels",
                    span { class: "loyalty-progress-start", "{start_label}" }
                    span { class: "loyalty-progress-end", "{end_label}" }
                }
            }
        }
    }
}

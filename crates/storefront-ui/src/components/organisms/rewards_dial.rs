//! Rewards Dial Component
//!
//! Circular progress toward the next reward.

use dioxus::prelude::*;
use storefront_core::dial::circumference;
use storefront_core::{DialProgress, RewardsDialVariant};

const RADIUS: f64 = 54.0;

/// Properties for the RewardsDial component
#[derive(Clone, PartialEq, Props)]
pub struct RewardsDialProps {
    pub points: f64,
    pub goal: f64,
    /// Forces a display branch; otherwise derived from the numbers
    #[props(default)]
    pub variant: Option<RewardsDialVariant>,
    #[props(default)]
    pub on_retry: Option<EventHandler<()>>,
}

#[component]
pub fn RewardsDial(props: RewardsDialProps) -> Element {
    let progress = DialProgress::new(props.points, props.goal);
    let variant = props.variant.unwrap_or_else(|| progress.variant());
    let radius = RADIUS;
    let length = circumference(radius);
    let offset = progress.dash_offset(length);
    let points = props.points.max(0.0).round() as u64;
    let goal = props.goal.max(0.0).round() as u64;
    let variant_class = variant.class();
    let on_retry = props.on_retry;

    rsx! {
        div { class: "rewards-dial {variant_class}",
            {match variant {
                RewardsDialVariant::Error => rsx! {
                    div { class: "rewards-dial-message", role: "alert",
                        p { "We couldn't load your points." }
                        if on_retry.is_some() {
                            button {
                                class: "rewards-dial-retry",
                                r#type: "button",
                                onclick: move |_| {
                                    if let Some(handler) = &on_retry {
                                        handler.call(());
                                    }
                                },
                                "Try again"
                            }
                        }
                    }
                },
                RewardsDialVariant::Progress | RewardsDialVariant::Ready => rsx! {
                    svg {
                        class: "rewards-dial-arc",
                        width: "120",
                        height: "120",
                        view_box: "0 0 120 120",
                        "role": "img",
                        "aria-label": "{points} of {goal} points",
                        circle { class: "rewards-dial-track", cx: "60", cy: "60", r: "{radius}", fill: "none" }
                        circle {
                            class: "rewards-dial-fill",
                            cx: "60",
                            cy: "60",
                            r: "{radius}",
                            fill: "none",
                            "stroke-dasharray": "{length}",
                            "stroke-dashoffset": "{offset}",
                            transform: "rotate(-90 60 60)",
                        }
                    }
                    div { class: "rewards-dial-center",
                        span { class: "rewards-dial-points", "{points}" }
                        span { class: "rewards-dial-caption",
                            if variant == RewardsDialVariant::Ready {
                                "Reward ready!"
                            } else {
                                "of {goal} pts"
                            }
                        }
                    }
                },
            }}
        }
    }
}

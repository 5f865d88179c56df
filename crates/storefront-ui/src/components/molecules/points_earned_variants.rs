//! Points Earned variants
//!
//! Badge for product cards and a cart banner, both built on the
//! PointsEarned atom's label.

use dioxus::prelude::*;

use crate::components::atoms::{points_label, PointsEarned};

/// Properties for the PointsEarnedBadge component
#[derive(Clone, PartialEq, Props)]
pub struct PointsEarnedBadgeProps {
    pub points: u32,
}

/// Small pill overlaid on product imagery
#[component]
pub fn PointsEarnedBadge(props: PointsEarnedBadgeProps) -> Element {
    let label = points_label(props.points);

    rsx! {
        span { class: "points-earned-badge", "aria-label": "Earn {props.points} points",
            "{label}"
        }
    }
}

/// Properties for the PointsEarnedCart component
#[derive(Clone, PartialEq, Props)]
pub struct PointsEarnedCartProps {
    pub points: u32,
    /// Points still needed for the next reward, if known
    #[props(default)]
    pub points_to_next_reward: Option<u32>,
}

/// Banner at the top of the cart
#[component]
pub fn PointsEarnedCart(props: PointsEarnedCartProps) -> Element {
    rsx! {
        div { class: "points-earned-cart",
            PointsEarned { points: props.points, caption: "with this order".to_string() }
            if let Some(remaining) = props.points_to_next_reward {
                if remaining == 0 {
                    p { class: "points-earned-next ready", "You've unlocked a reward!" }
                } else {
                    p { class: "points-earned-next", "{remaining} pts to your next reward" }
                }
            }
        }
    }
}

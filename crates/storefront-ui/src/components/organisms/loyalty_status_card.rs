//! Loyalty Status Card Component
//!
//! Member tier, point balance and progress to the next tier.

use dioxus::prelude::*;
use storefront_core::LoyaltyProgress;

use crate::components::atoms::LoyaltyProgressBar;

/// Properties for the LoyaltyStatusCard component
#[derive(Clone, PartialEq, Props)]
pub struct LoyaltyStatusCardProps {
    pub tier: String,
    pub points: f64,
    /// Points needed for the next tier
    pub next_tier_points: f64,
    #[props(default)]
    pub next_tier: Option<String>,
    #[props(default)]
    pub member_name: Option<String>,
}

#[component]
pub fn LoyaltyStatusCard(props: LoyaltyStatusCardProps) -> Element {
    let progress = LoyaltyProgress::new(props.points, props.next_tier_points);
    let balance = props.points.max(0.0).round() as u64;
    let to_go = progress.points_to_go().round() as u64;
    let next_tier = props.next_tier.clone().unwrap_or_else(|| "the next tier".to_string());
    let goal_label = format!("{} pts", props.next_tier_points.round() as u64);

    rsx! {
        section { class: "loyalty-status-card",
            header { class: "loyalty-status-header",
                if let Some(name) = &props.member_name {
                    span { class: "loyalty-status-member", "Hi, {name}" }
                }
                span { class: "loyalty-status-tier", "{props.tier}" }
            }
            p { class: "loyalty-status-balance",
                span { class: "loyalty-status-points", "{balance}" }
                " pts"
            }
            LoyaltyProgressBar {
                points: props.points,
                max_points: props.next_tier_points,
                start_label: "0".to_string(),
                end_label: goal_label,
            }
            if progress.is_complete() {
                p { class: "loyalty-status-next complete", "You've reached {next_tier}!" }
            } else {
                p { class: "loyalty-status-next", "{to_go} pts to {next_tier}" }
            }
        }
    }
}

//! Rewards page - loyalty status, rewards and points history.

use chrono::Utc;
use dioxus::prelude::*;
use storefront_ui::{LoyaltyMainPanel, LoyaltyStatusCard, Perk, PerksBar};

use crate::context::use_config;
use crate::sample;

#[component]
pub fn Rewards() -> Element {
    let config = use_config();
    let rewards = use_hook(|| sample::rewards(Utc::now()));
    let history = use_hook(sample::points_history);

    let perks = vec![
        Perk::new("/icons/truck.svg", "Free delivery over $35"),
        Perk::new("/icons/gift.svg", "Birthday reward"),
        Perk::new("/icons/tag.svg", "Member-only prices"),
    ];

    rsx! {
        div { class: "page rewards-page",
            h1 { class: "page-title", "Rewards" }
            LoyaltyStatusCard {
                tier: "Gold".to_string(),
                points: 1340.0,
                next_tier_points: 2000.0,
                next_tier: "Platinum".to_string(),
                member_name: "Sam".to_string(),
            }
            PerksBar { perks: perks }
            LoyaltyMainPanel {
                points: 340.0,
                reward_goal: 500.0,
                rewards: rewards,
                history: history,
                currency_symbol: config.currency_symbol.clone(),
            }
        }
    }
}

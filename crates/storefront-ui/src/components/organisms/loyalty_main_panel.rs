//! Loyalty Main Panel Component
//!
//! The rewards page body: dial, available rewards and points history.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use storefront_core::{PointsDatum, RewardsDialVariant, DEFAULT_CURRENCY_SYMBOL};

use super::{PointsChart, RewardsDial};
use crate::components::atoms::Reward;

/// One reward in the panel's list
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RewardData {
    pub id: String,
    pub dollar: Option<f64>,
    pub percentage: Option<u32>,
    pub icon: Option<String>,
    pub is_birthday: bool,
    pub is_employee: bool,
    pub description: Option<String>,
    pub expiration: Option<DateTime<Utc>>,
}

/// Properties for the LoyaltyMainPanel component
#[derive(Clone, PartialEq, Props)]
pub struct LoyaltyMainPanelProps {
    pub points: f64,
    pub reward_goal: f64,
    #[props(default)]
    pub rewards: Vec<RewardData>,
    #[props(default)]
    pub history: Vec<PointsDatum>,
    /// Points failed to load; shows the dial's error branch
    #[props(default = false)]
    pub load_failed: bool,
    #[props(default)]
    pub on_retry: Option<EventHandler<()>>,
    #[props(default = DEFAULT_CURRENCY_SYMBOL.to_string())]
    pub currency_symbol: String,
}

#[component]
pub fn LoyaltyMainPanel(props: LoyaltyMainPanelProps) -> Element {
    let variant = props.load_failed.then_some(RewardsDialVariant::Error);

    rsx! {
        div { class: "loyalty-main-panel",
            RewardsDial {
                points: props.points,
                goal: props.reward_goal,
                variant: variant,
                on_retry: props.on_retry,
            }
            section { class: "loyalty-rewards",
                h2 { class: "loyalty-rewards-title", "Your rewards" }
                if props.rewards.is_empty() {
                    p { class: "loyalty-rewards-empty", "No rewards yet. Keep shopping to earn points!" }
                }
                for reward in props.rewards.iter() {
                    Reward {
                        key: "{reward.id}",
                        dollar: reward.dollar,
                        percentage: reward.percentage,
                        icon: reward.icon.clone(),
                        is_birthday: reward.is_birthday,
                        is_employee: reward.is_employee,
                        description: reward.description.clone(),
                        expiration: reward.expiration,
                        currency_symbol: props.currency_symbol.clone(),
                    }
                }
            }
            if !props.history.is_empty() {
                PointsChart { data: props.history.clone() }
            }
        }
    }
}

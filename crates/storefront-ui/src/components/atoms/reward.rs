//! Reward Component
//!
//! A single loyalty reward: headline amount, optional icon and an
//! expiration line that turns urgent in the last five days.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use storefront_core::{RewardExpiry, RewardKind, DEFAULT_CURRENCY_SYMBOL};

use crate::class::with_modifiers;

/// Properties for the Reward component
#[derive(Clone, PartialEq, Props)]
pub struct RewardProps {
    /// Dollar amount off
    #[props(default)]
    pub dollar: Option<f64>,
    /// Percentage off
    #[props(default)]
    pub percentage: Option<u32>,
    /// Icon path shown beside the headline
    #[props(default)]
    pub icon: Option<String>,
    #[props(default = false)]
    pub is_birthday: bool,
    #[props(default = false)]
    pub is_employee: bool,
    /// Supporting copy under the headline
    #[props(default)]
    pub description: Option<String>,
    #[props(default)]
    pub expiration: Option<DateTime<Utc>>,
    /// Reference time for the expiry countdown; defaults to now
    #[props(default)]
    pub now: Option<DateTime<Utc>>,
    #[props(default = DEFAULT_CURRENCY_SYMBOL.to_string())]
    pub currency_symbol: String,
}

#[component]
pub fn Reward(props: RewardProps) -> Element {
    let kind = RewardKind::from_props(
        props.dollar,
        props.percentage,
        props.is_birthday,
        props.is_employee,
    );
    let headline = kind
        .as_ref()
        .map(|k| k.headline(&props.currency_symbol))
        .unwrap_or_else(|| "Reward".to_string());
    let kind_class = kind.as_ref().map(|k| k.class()).unwrap_or("reward-generic");

    let now = props.now.unwrap_or_else(Utc::now);
    let expiry = props.expiration.map(|at| RewardExpiry::new(at, now));
    let expiring = expiry.map(|e| e.expiring).unwrap_or(false);
    let expired = expiry.map(|e| e.days < 0).unwrap_or(false);
    let expiry_copy = expiry.map(|e| e.copy());

    let class = with_modifiers(
        &format!("reward {kind_class}"),
        &[("expiring", expiring), ("expired", expired)],
    );

    rsx! {
        article { class: "{class}",
            if let Some(icon) = &props.icon {
                img { class: "reward-icon", src: "{icon}", alt: "" }
            }
            div { class: "reward-body",
                h3 { class: "reward-headline", "{headline}" }
                if let Some(description) = &props.description {
                    p { class: "reward-description", "{description}" }
                }
                if let Some(copy) = &expiry_copy {
                    p {
                        class: if expiring { "reward-expiry urgent" } else { "reward-expiry" },
                        "{copy}"
                    }
                }
            }
        }
    }
}

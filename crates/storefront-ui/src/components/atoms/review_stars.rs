//! Review Stars Component
//!
//! Fractional star rating. All five stars are painted by one horizontal
//! gradient whose stop sits at the fill percentage.

use dioxus::prelude::*;
use storefront_core::rating::STAR_COUNT;
use storefront_core::StarRating;

use crate::class::next_id;

const STAR_PATH: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";
const STAR_WIDTH: usize = 24;

/// Properties for the ReviewStars component
#[derive(Clone, PartialEq, Props)]
pub struct ReviewStarsProps {
    /// Rating out of 5; clamped into `[0, 5]`
    pub rating: f64,
    /// Number of reviews shown after the stars
    #[props(default)]
    pub review_count: Option<u32>,
}

#[component]
pub fn ReviewStars(props: ReviewStarsProps) -> Element {
    let rating = StarRating::new(props.rating);
    let offset = rating.gradient_offset();
    let aria_label = rating.aria_label();
    let gradient_id = use_hook(|| next_id("stars-fill"));
    let width = STAR_WIDTH * STAR_COUNT;
    let height = STAR_WIDTH;

    rsx! {
        div {
            class: "review-stars",
            role: "img",
            "aria-label": "{aria_label}",
            svg {
                class: "review-stars-icons",
                width: "{width}",
                height: "{height}",
                view_box: "0 0 {width} {height}",
                "aria-hidden": "true",
                defs {
                    linearGradient {
                        id: "{gradient_id}",
                        "gradientUnits": "userSpaceOnUse",
                        x1: "0",
                        x2: "{width}",
                        y1: "0",
                        y2: "0",
                        stop { class: "star-stop-filled", "offset": "{offset}", "stop-color": "currentColor" }
                        stop { class: "star-stop-empty", "offset": "{offset}", "stop-color": "#d9d9d9" }
                    }
                }
                for i in 0..STAR_COUNT {
                    {
                        let x = i * STAR_WIDTH;
                        rsx! {
                            path {
                                key: "{i}",
                                d: STAR_PATH,
                                transform: "translate({x}, 0)",
                                fill: "url(#{gradient_id})",
                            }
                        }
                    }
                }
            }
            if let Some(count) = props.review_count {
                span { class: "review-count", "({count})" }
            }
        }
    }
}

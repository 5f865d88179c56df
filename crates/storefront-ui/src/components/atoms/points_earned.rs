//! Points Earned Component

use dioxus::prelude::*;

/// "+120 pts" style label
pub fn points_label(points: u32) -> String {
    format!("+{points} pts")
}

/// Properties for the PointsEarned component
#[derive(Clone, PartialEq, Props)]
pub struct PointsEarnedProps {
    pub points: u32,
    /// Caption after the amount
    #[props(default = "earned with this purchase".to_string())]
    pub caption: String,
}

#[component]
pub fn PointsEarned(props: PointsEarnedProps) -> Element {
    let label = points_label(props.points);

    rsx! {
        div { class: "points-earned",
            img { class: "points-earned-icon", src: "/points.svg", alt: "" }
            span { class: "points-earned-amount", "{label}" }
            span { class: "points-earned-caption", "{props.caption}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_label_has_plus_sign() {
        assert_eq!(points_label(120), "+120 pts");
        assert_eq!(points_label(0), "+0 pts");
    }
}

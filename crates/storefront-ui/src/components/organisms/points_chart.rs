//! Points Chart Component
//!
//! Monthly points bar chart with a period selector.

use dioxus::prelude::*;
use storefront_core::chart::{bar_height_percent, window};
use storefront_core::{y_axis_max, y_axis_ticks, DropdownOption, PointsDatum, PointsPeriod};

use crate::components::atoms::Dropdown;

/// Properties for the PointsChart component
#[derive(Clone, PartialEq, Props)]
pub struct PointsChartProps {
    /// Oldest first
    pub data: Vec<PointsDatum>,
    #[props(default)]
    pub default_period: PointsPeriod,
    #[props(default = "Points history".to_string())]
    pub title: String,
}

#[component]
pub fn PointsChart(props: PointsChartProps) -> Element {
    let default_period = props.default_period;
    let mut period = use_signal(move || default_period);

    let shown = window(&props.data, period());
    let axis_max = y_axis_max(shown.iter().map(|d| d.points));
    let ticks = y_axis_ticks(shown.iter().map(|d| d.points));
    let options: Vec<DropdownOption> = PointsPeriod::ALL
        .iter()
        .map(|p| DropdownOption::new(p.value(), p.label()))
        .collect();

    rsx! {
        section { class: "points-chart",
            header { class: "points-chart-header",
                h3 { class: "points-chart-title", "{props.title}" }
                Dropdown {
                    options: options,
                    default_value: default_period.value().to_string(),
                    on_change: move |value: String| {
                        if let Some(p) = PointsPeriod::from_value(&value) {
                            period.set(p);
                        }
                    },
                }
            }
            div { class: "points-chart-body", role: "img", "aria-label": "{props.title}",
                ol { class: "points-chart-axis", "aria-hidden": "true",
                    for tick in ticks.iter() {
                        li { key: "{tick}", class: "points-chart-tick", "{tick}" }
                    }
                }
                div { class: "points-chart-bars",
                    for datum in shown.iter() {
                        {
                            let height = bar_height_percent(datum.points, axis_max);
                            rsx! {
                                div { key: "{datum.label}", class: "points-chart-column",
                                    div {
                                        class: "points-chart-bar",
                                        style: "height: {height}%",
                                        title: "{datum.points}",
                                    }
                                    span { class: "points-chart-label", "{datum.label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

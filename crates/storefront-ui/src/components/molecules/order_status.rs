//! Order Status Component
//!
//! Stage tracker for an order in progress.

use dioxus::prelude::*;

/// Order lifecycle stages, in display order
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OrderStage {
    #[default]
    Placed,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStage {
    /// Stages shown in the tracker
    pub const TRACKED: [OrderStage; 4] = [
        OrderStage::Placed,
        OrderStage::Preparing,
        OrderStage::Ready,
        OrderStage::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStage::Placed => "Order placed",
            OrderStage::Preparing => "Preparing",
            OrderStage::Ready => "Ready for pickup",
            OrderStage::Completed => "Picked up",
            OrderStage::Cancelled => "Cancelled",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            OrderStage::Placed => "stage-placed",
            OrderStage::Preparing => "stage-preparing",
            OrderStage::Ready => "stage-ready",
            OrderStage::Completed => "stage-completed",
            OrderStage::Cancelled => "stage-cancelled",
        }
    }

    /// Position in [`OrderStage::TRACKED`]; `None` for cancelled orders
    pub fn step(&self) -> Option<usize> {
        Self::TRACKED.iter().position(|s| s == self)
    }
}

/// Step state relative to the current stage
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepState {
    Done,
    Current,
    Upcoming,
}

pub fn step_state(current: OrderStage, index: usize) -> StepState {
    match current.step() {
        Some(step) if index < step => StepState::Done,
        Some(step) if index == step => StepState::Current,
        _ => StepState::Upcoming,
    }
}

/// Properties for the OrderStatus component
#[derive(Clone, PartialEq, Props)]
pub struct OrderStatusProps {
    pub order_number: String,
    pub stage: OrderStage,
    #[props(default)]
    pub eta: Option<String>,
}

#[component]
pub fn OrderStatus(props: OrderStatusProps) -> Element {
    let stage_label = props.stage.label();
    let stage_class = props.stage.class();

    rsx! {
        section { class: "order-status {stage_class}",
            header { class: "order-status-header",
                h3 { class: "order-status-title", "Order #{props.order_number}" }
                span { class: "order-status-stage", role: "status", "{stage_label}" }
            }
            if props.stage != OrderStage::Cancelled {
                ol { class: "order-status-steps",
                    for (index, stage) in OrderStage::TRACKED.iter().enumerate() {
                        {
                            let state = step_state(props.stage, index);
                            let class = match state {
                                StepState::Done => "order-step done",
                                StepState::Current => "order-step current",
                                StepState::Upcoming => "order-step",
                            };
                            let label = stage.label();
                            rsx! {
                                li {
                                    key: "{index}",
                                    class: class,
                                    "aria-current": if state == StepState::Current { "step" } else { "false" },
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
            if let Some(eta) = &props.eta {
                p { class: "order-status-eta", "{eta}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_split_around_current() {
        assert_eq!(step_state(OrderStage::Preparing, 0), StepState::Done);
        assert_eq!(step_state(OrderStage::Preparing, 1), StepState::Current);
        assert_eq!(step_state(OrderStage::Preparing, 2), StepState::Upcoming);
    }

    #[test]
    fn cancelled_has_no_step() {
        assert_eq!(OrderStage::Cancelled.step(), None);
        assert_eq!(step_state(OrderStage::Cancelled, 0), StepState::Upcoming);
    }
}

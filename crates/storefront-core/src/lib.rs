//! Storefront Design System Core Library
//!
//! Renderer-independent state and display logic behind the storefront UI
//! kit. Every decision a component makes about what to show lives here as
//! plain Rust so it can be tested without a virtual DOM.
//!
//! ## Overview
//!
//! - [`controlled`]: controlled/uncontrolled value ownership
//! - [`dropdown`]: listbox state machine and outside-click guard
//! - [`quantity`]: cart quantity stepper with remove-at-minimum
//! - [`pricing`], [`cart`], [`order`]: price strings and order lines
//! - [`rating`], [`loyalty`], [`dial`], [`chart`], [`reward`]: derived
//!   display values for ratings and loyalty widgets
//! - [`navigation`]: tab switcher and carousel pager
//!
//! ## Quick Start
//!
//! ```
//! use storefront_core::{cart_aria_label, QuantityStepper, StepOutcome};
//!
//! let mut stepper = QuantityStepper::default();
//! assert_eq!(stepper.press_left(), StepOutcome::Delete);
//! assert_eq!(cart_aria_label(1, 10.5, "$"), "Cart with 1 item, total $10.50");
//! ```

pub mod cart;
pub mod chart;
pub mod config;
pub mod controlled;
pub mod dial;
pub mod dropdown;
pub mod error;
pub mod logging;
pub mod loyalty;
pub mod navigation;
pub mod order;
pub mod pricing;
pub mod quantity;
pub mod rating;
pub mod reward;

// Re-exports
pub use cart::{cart_aria_label, item_count_label};
pub use chart::{y_axis_max, y_axis_ticks, PointsDatum, PointsPeriod};
pub use config::StorefrontConfig;
pub use controlled::{ControlledValue, Ownership};
pub use dial::{DialProgress, RewardsDialVariant};
pub use dropdown::{
    DropdownEvent, DropdownKey, DropdownOption, DropdownOutcome, DropdownState,
    OutsideClickGuard, OutsideClickRegistry,
};
pub use error::{StorefrontError, StorefrontResult};
pub use logging::LoggingBuilder;
pub use loyalty::LoyaltyProgress;
pub use navigation::{CarouselPager, TabSwitcher};
pub use order::{LineItem, LineKind, OrderSummaryInput};
pub use pricing::{format_price, format_price_default, DEFAULT_CURRENCY_SYMBOL};
pub use quantity::{LeftAction, QuantityStepper, StepOutcome};
pub use rating::StarRating;
pub use reward::{RewardExpiry, RewardKind};

//! Organisms: page sections composed from molecules and atoms.

mod loyalty_main_panel;
mod loyalty_status_card;
mod order_summary;
mod points_chart;
mod product_details;
mod related_products;
mod rewards_dial;

pub use loyalty_main_panel::*;
pub use loyalty_status_card::*;
pub use order_summary::*;
pub use points_chart::*;
pub use product_details::*;
pub use related_products::*;
pub use rewards_dial::*;

//! Molecules: small compositions of atoms.

mod article_card;
mod category_tile;
mod featured_content_block;
mod fulfillment_card;
mod location_picker;
mod order_status;
mod perks_bar;
mod points_earned_variants;
mod product_card;
mod product_options;
mod quantity_selector;

pub use article_card::*;
pub use category_tile::*;
pub use featured_content_block::*;
pub use fulfillment_card::*;
pub use location_picker::*;
pub use order_status::*;
pub use perks_bar::*;
pub use points_earned_variants::*;
pub use product_card::*;
pub use product_options::*;
pub use quantity_selector::*;

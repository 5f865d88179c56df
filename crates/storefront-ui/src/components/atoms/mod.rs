//! Atoms: leaf components with no child components of their own (apart
//! from Button reuse).

mod button;
mod cart_header;
mod checkbox;
mod chip;
mod content_block;
mod dropdown;
mod loyalty_progress_bar;
mod points_earned;
mod radio_button_selector;
mod review_stars;
mod reward;
mod text_field;

pub use button::*;
pub use cart_header::*;
pub use checkbox::*;
pub use chip::*;
pub use content_block::*;
pub use dropdown::*;
pub use loyalty_progress_bar::*;
pub use points_earned::*;
pub use radio_button_selector::*;
pub use review_stars::*;
pub use reward::*;
pub use text_field::*;

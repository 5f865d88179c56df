//! Storefront components by atomic-design tier.

pub mod atoms;
pub mod molecules;
pub mod organisms;
pub mod templates;

pub use atoms::*;
pub use molecules::*;
pub use organisms::*;
pub use templates::*;

//! Visual theme for the storefront shell.

mod styles;

pub use styles::GLOBAL_STYLES;

//! Page components for the storefront shell.

mod cart;
mod rewards;
mod shell;

pub use cart::Cart;
pub use rewards::Rewards;
pub use shell::Shell;

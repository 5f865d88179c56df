//! Templates: page-level chrome.

mod footer;
mod header;

pub use footer::*;
pub use header::*;

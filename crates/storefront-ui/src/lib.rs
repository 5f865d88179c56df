//! Storefront Design System UI Components
//!
//! Dioxus components for a grocery storefront, organised by atomic-design
//! tier:
//!
//! - **Atoms**: leaf controls and displays (Button, Chip, TextField, ...)
//! - **Molecules**: small compositions of atoms (QuantitySelector, cards)
//! - **Organisms**: page sections (OrderSummary, PointsChart, ...)
//! - **Templates**: page chrome (Header, Footer)
//!
//! ## State
//!
//! Components are rendering functions over typed props. Inputs follow one
//! contract: a supplied `value`/`checked` prop is the source of truth, an
//! absent one leaves the component owning its state (see
//! [`hooks::use_controlled`]). Decisions about what to show live in
//! `storefront-core`.

pub mod class;
pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::use_controlled;

//! Extensible menu model.
//!
//! # Responsibility
//! - Define the item descriptor shape and the rank-grouped menu container.
//! - Build the specialized built-in menus of the application menu bar.
//!
//! # Invariants
//! - Visible menu order is fully determined by rank and call order.
//! - Seeded menu-specific items always precede contributed group content.

pub mod file;
pub mod item;
pub mod kernel;
pub mod main;
pub mod named;
pub mod ranked;

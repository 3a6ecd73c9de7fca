//! Inventory persistence.
//!
//! - [`Inventory`] - in-memory snapshot of the subnet forest and address
//!   registry, with JSON file load/save.

mod inventory;

pub use inventory::Inventory;

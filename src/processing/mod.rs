//! The subnet hierarchy and address-assignment engine.
//!
//! This module contains the core logic:
//! - [`tree`] - subnet forest structure and queries
//! - [`resolver`] - longest-prefix-match ownership and the reassignment sweep
//! - [`import`] - best-effort CSV reconciliation

pub mod import;
pub mod resolver;
pub mod tree;

// Re-export the engine's operation surface
pub use import::{import_addresses, ImportReport};
pub use resolver::{
    create_subnet, delete_address, register_address, resolve_owner, update_address,
};
pub use tree::{
    ancestor_chain, delete_subnet, descendant_addresses, descendants, update_subnet,
};

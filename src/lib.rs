//! Subnet hierarchy and address-assignment engine.
//!
//! Maintains a forest of subnets related by CIDR containment and registers
//! individual IP addresses within them. Resolution always picks the most
//! specific containing subnet, and inserting a more specific subnet re-homes
//! the addresses it now covers. The engine is synchronous and owns no I/O:
//! it computes over an [`Inventory`] snapshot supplied by the caller, and the
//! thin CLI shell in [`cli`] handles persistence and presentation.

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod store;

pub use error::{Error, Result};
pub use models::{AddressMeta, AddressRow, AddressView, IpRecord, Subnet};
pub use processing::{
    create_subnet, delete_address, delete_subnet, descendant_addresses, import_addresses,
    register_address, resolve_owner, update_address, update_subnet, ImportReport,
};
pub use store::Inventory;

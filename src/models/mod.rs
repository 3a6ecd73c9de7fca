//! Domain models for the IPAM engine.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`cidr`] - strict CIDR/address parsing on top of `ipnet`
//! - [`Subnet`] - a node in the subnet forest
//! - [`IpRecord`] - a registered address and its owning subnet

mod address;
mod cidr;
mod subnet;

// Re-export public types
pub use address::{AddressMeta, AddressRow, AddressView, IpRecord, CSV_HEADER};
pub use cidr::{parse_address, parse_cidr, parse_cidr_lenient};
pub use subnet::Subnet;

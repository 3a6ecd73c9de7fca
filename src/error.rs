//! Error types for the IPAM engine.
//!
//! All fallible operations in this crate return [`Result<T>`], which uses
//! the [`Error`] enum for error variants.

use thiserror::Error;

/// A specialized Result type for IPAM operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the subnet tree and address resolver.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied IP literal is not a valid IPv4/IPv6 address.
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    /// The supplied network literal is not a valid CIDR.
    ///
    /// During candidate scans a malformed *stored* CIDR only causes that
    /// candidate to be skipped; this variant is raised for operator input
    /// (subnet creation).
    #[error("Invalid CIDR: {0}")]
    InvalidCidr(String),

    /// A subnet with the exact same CIDR literal already exists.
    #[error("Subnet with CIDR {0} already exists")]
    DuplicateCidr(String),

    /// The resolved subnet already owns an address with this literal.
    #[error("Address {address} already registered in subnet '{subnet}'")]
    DuplicateAddress { address: String, subnet: String },

    /// No subnet in the candidate scope contains the address.
    #[error("No subnet in scope contains address {0}")]
    NoMatchingSubnet(String),

    /// Referenced subnet id does not exist.
    #[error("Subnet not found: {0}")]
    SubnetNotFound(u64),

    /// Referenced address record id does not exist.
    #[error("Address record not found: {0}")]
    AddressNotFound(u64),

    /// File system error while reading or writing the inventory snapshot.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error (inventory snapshot).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV read error during import.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// CSV writer failure during export.
    #[error("CSV export error: {0}")]
    Export(String),
}

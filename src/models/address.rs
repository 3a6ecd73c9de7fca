//! IP address records and the CSV exchange row shape.

use serde::{Deserialize, Serialize};

/// Field order for CSV import/export. Fixed by the exchange format.
pub const CSV_HEADER: [&str; 6] = [
    "ip_address",
    "dns_name",
    "architecture",
    "function",
    "subnet_cidr",
    "subnet_name",
];

/// A registered IP address, owned by exactly one subnet.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IpRecord {
    /// Stable identifier, never reused.
    pub id: u64,
    /// Owning subnet: the most specific subnet computed to contain the
    /// address at assignment time.
    pub subnet_id: u64,
    /// Canonical form of the address literal (v4 or v6).
    pub address: String,
    /// DNS name, free-form.
    #[serde(default)]
    pub dns_name: String,
    /// Architecture (VM, Bare Metal, etc.), free-form.
    #[serde(default)]
    pub architecture: String,
    /// Function/role, free-form.
    #[serde(default)]
    pub function: String,
}

/// Metadata fields for a registered address.
#[derive(Debug, Clone, Default)]
pub struct AddressMeta {
    pub dns_name: String,
    pub architecture: String,
    pub function: String,
}

/// One row of the CSV exchange format.
///
/// `subnet_cidr` and `subnet_name` are informational only on import; the
/// resolver recomputes true ownership by containment. Metadata fields are
/// `Option`: a column that is absent (or empty, which the CSV reader also
/// maps to `None`) leaves an existing record's metadata untouched during
/// reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AddressRow {
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub dns_name: Option<String>,
    #[serde(default)]
    pub architecture: Option<String>,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub subnet_cidr: Option<String>,
    #[serde(default)]
    pub subnet_name: Option<String>,
}

/// A flattened display view of an address together with its owning subnet.
#[derive(Debug, Clone, Serialize)]
pub struct AddressView {
    pub id: u64,
    pub ip_address: String,
    pub dns_name: String,
    pub architecture: String,
    pub function: String,
    pub subnet_name: String,
    pub subnet_cidr: String,
}

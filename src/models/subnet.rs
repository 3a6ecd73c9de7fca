//! Subnet data model.

use super::parse_cidr_lenient;
use ipnet::IpNet;
use serde::{Deserialize, Serialize};

/// A subnet node in the forest.
///
/// `parent` is an organizational hint; address assignment is decided by CIDR
/// containment, not by the declared parent/child links.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Subnet {
    /// Stable identifier, never reused.
    pub id: u64,
    /// Human-readable name.
    pub name: String,
    /// CIDR literal as supplied by the operator (e.g. "10.0.0.0/16").
    ///
    /// Kept as a string so malformed stored data stays representable; scans
    /// skip records whose CIDR no longer parses.
    pub cidr: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Parent subnet id, if any. Zero or one parent; the forest is not
    /// required to be a single tree.
    #[serde(default)]
    pub parent: Option<u64>,
}

impl Subnet {
    /// Parse the stored CIDR, returning `None` if it is malformed.
    pub fn network(&self) -> Option<IpNet> {
        parse_cidr_lenient(&self.cidr)
    }
}

impl Default for Subnet {
    fn default() -> Self {
        Subnet {
            id: 0,
            name: "".to_string(),
            cidr: "".to_string(),
            description: "".to_string(),
            parent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_parses_stored_cidr() {
        let subnet = Subnet {
            id: 1,
            name: "lab".to_string(),
            cidr: "10.0.0.0/24".to_string(),
            ..Default::default()
        };
        assert_eq!(subnet.network().unwrap().prefix_len(), 24);
    }

    #[test]
    fn test_network_malformed_is_none() {
        let subnet = Subnet {
            id: 2,
            cidr: "not-a-cidr".to_string(),
            ..Default::default()
        };
        assert!(subnet.network().is_none());
    }
}

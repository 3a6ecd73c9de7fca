//! Inventory snapshot: the persisted subnet/address state.
//!
//! The engine operates purely on an [`Inventory`] value supplied by the
//! caller; this module also provides the JSON file load/save used by the
//! command-line shell. Structural mutations must be serialized by the
//! caller (the binary is a single writer); read-only queries can run on any
//! consistent snapshot.

use crate::error::Result;
use crate::models::{IpRecord, Subnet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Complete subnet forest and address registry.
///
/// Records are keyed by id in ordered maps so every scan iterates in
/// ascending id order, which makes tie-breaks deterministic.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Inventory {
    /// All subnets, keyed by id.
    pub subnets: BTreeMap<u64, Subnet>,
    /// All registered addresses, keyed by id.
    pub addresses: BTreeMap<u64, IpRecord>,
    next_subnet_id: u64,
    next_address_id: u64,
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory {
            subnets: BTreeMap::new(),
            addresses: BTreeMap::new(),
            next_subnet_id: 1,
            next_address_id: 1,
        }
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next subnet id. Ids are monotonic and never reused.
    pub fn allocate_subnet_id(&mut self) -> u64 {
        let id = self.next_subnet_id;
        self.next_subnet_id += 1;
        id
    }

    /// Hand out the next address id. Ids are monotonic and never reused.
    pub fn allocate_address_id(&mut self) -> u64 {
        let id = self.next_address_id;
        self.next_address_id += 1;
        id
    }

    /// Addresses owned directly by one subnet, in id order.
    pub fn addresses_in(&self, subnet_id: u64) -> impl Iterator<Item = &IpRecord> {
        self.addresses
            .values()
            .filter(move |rec| rec.subnet_id == subnet_id)
    }

    /// Load an inventory snapshot from a JSON file, or start empty if the
    /// file does not exist yet.
    pub fn load(path: &Path) -> Result<Inventory> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Reading inventory snapshot: {}", path.display());
                let inventory: Inventory = serde_json::from_str(&json)?;
                log::info!(
                    "Loaded {} subnets, {} addresses",
                    inventory.subnets.len(),
                    inventory.addresses.len()
                );
                Ok(inventory)
            }
            Err(_) => {
                log::warn!(
                    "Snapshot not found, starting with empty inventory: {}",
                    path.display()
                );
                Ok(Inventory::new())
            }
        }
    }

    /// Write the inventory snapshot to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!(
            "Wrote inventory snapshot ({} subnets, {} addresses): {}",
            self.subnets.len(),
            self.addresses.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subnet;

    #[test]
    fn test_id_allocation_is_monotonic() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.allocate_subnet_id(), 1);
        assert_eq!(inventory.allocate_subnet_id(), 2);
        assert_eq!(inventory.allocate_address_id(), 1);
        assert_eq!(inventory.allocate_address_id(), 2);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.json");
        let inventory = Inventory::load(&path).expect("load should not fail");
        assert!(inventory.subnets.is_empty());
        assert!(inventory.addresses.is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("inventory.json");

        let mut inventory = Inventory::new();
        let id = inventory.allocate_subnet_id();
        inventory.subnets.insert(
            id,
            Subnet {
                id,
                name: "lab".to_string(),
                cidr: "10.0.0.0/16".to_string(),
                ..Default::default()
            },
        );
        inventory.save(&path).expect("save");

        let reloaded = Inventory::load(&path).expect("reload");
        assert_eq!(reloaded.subnets.len(), 1);
        assert_eq!(reloaded.subnets[&id].cidr, "10.0.0.0/16");
        // Counter state survives the round trip, so ids are not reused.
        let mut reloaded = reloaded;
        assert_eq!(reloaded.allocate_subnet_id(), 2);
    }
}

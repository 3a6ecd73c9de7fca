//! Subnet tree structure and queries.
//!
//! Parent/child links are stored as id references, so the forest is an
//! adjacency structure rather than live back-pointers. All traversals carry
//! a visited set: a cycle in stored data is a data error and must terminate
//! the walk, not loop forever.

use crate::error::{Error, Result};
use crate::models::{AddressView, Subnet};
use crate::store::Inventory;
use std::collections::HashSet;

/// The subnet itself plus all subnets reachable by following parent links
/// downward, to any depth. Explicit worklist traversal, cycle-safe.
pub fn descendants(inventory: &Inventory, subnet_id: u64) -> Vec<u64> {
    let mut visited: HashSet<u64> = HashSet::new();
    let mut result = Vec::new();
    let mut work = vec![subnet_id];

    while let Some(id) = work.pop() {
        if !visited.insert(id) {
            log::warn!("Parent/child cycle detected at subnet {id}");
            continue;
        }
        result.push(id);
        for (child_id, subnet) in &inventory.subnets {
            if subnet.parent == Some(id) {
                work.push(*child_id);
            }
        }
    }

    result
}

/// The subnet itself, then its parent, then its parent's parent, up to a
/// subnet with no parent. Cycle-safe.
pub fn ancestor_chain(inventory: &Inventory, subnet_id: u64) -> Vec<u64> {
    let mut visited: HashSet<u64> = HashSet::new();
    let mut chain = Vec::new();
    let mut current = Some(subnet_id);

    while let Some(id) = current {
        if !visited.insert(id) {
            log::warn!("Parent cycle detected at subnet {id}");
            break;
        }
        chain.push(id);
        current = inventory.subnets.get(&id).and_then(|s| s.parent);
    }

    chain
}

/// Find a subnet whose stored CIDR matches the literal exactly.
///
/// This is the duplicate check for inserts: an exact value match, not
/// overlap detection. Partially overlapping, non-identical CIDRs are
/// accepted by design.
pub fn find_cidr(inventory: &Inventory, cidr: &str) -> Option<u64> {
    let cidr = cidr.trim();
    inventory
        .subnets
        .values()
        .find(|s| s.cidr == cidr)
        .map(|s| s.id)
}

/// Insert a new subnet node, failing with [`Error::DuplicateCidr`] if the
/// CIDR literal already exists verbatim in the forest.
///
/// CIDR syntax validation is the caller's job ([`super::create_subnet`]
/// parses before inserting).
pub fn insert_subnet(
    inventory: &mut Inventory,
    name: &str,
    cidr: &str,
    description: &str,
    parent: Option<u64>,
) -> Result<u64> {
    let cidr = cidr.trim();
    if find_cidr(inventory, cidr).is_some() {
        return Err(Error::DuplicateCidr(cidr.to_string()));
    }

    let id = inventory.allocate_subnet_id();
    inventory.subnets.insert(
        id,
        Subnet {
            id,
            name: name.to_string(),
            cidr: cidr.to_string(),
            description: description.to_string(),
            parent,
        },
    );
    log::info!("Created subnet {id} ({name}, {cidr})");
    Ok(id)
}

/// Update a subnet's metadata. The CIDR is immutable after creation since
/// changing it would invalidate existing address assignments.
pub fn update_subnet(
    inventory: &mut Inventory,
    subnet_id: u64,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<()> {
    let subnet = inventory
        .subnets
        .get_mut(&subnet_id)
        .ok_or(Error::SubnetNotFound(subnet_id))?;
    if let Some(name) = name {
        subnet.name = name.to_string();
    }
    if let Some(description) = description {
        subnet.description = description.to_string();
    }
    Ok(())
}

/// Delete a subnet and, with it, every address it owns.
///
/// Policy: deletion always succeeds regardless of children. Child subnets
/// are re-parented to root (`parent = None`); addresses owned by other
/// subnets are untouched. Returns the number of cascaded address records.
pub fn delete_subnet(inventory: &mut Inventory, subnet_id: u64) -> Result<usize> {
    if inventory.subnets.remove(&subnet_id).is_none() {
        return Err(Error::SubnetNotFound(subnet_id));
    }

    let before = inventory.addresses.len();
    inventory.addresses.retain(|_, rec| rec.subnet_id != subnet_id);
    let removed = before - inventory.addresses.len();

    for subnet in inventory.subnets.values_mut() {
        if subnet.parent == Some(subnet_id) {
            log::warn!(
                "Subnet {} lost its parent {subnet_id}, re-parenting to root",
                subnet.id
            );
            subnet.parent = None;
        }
    }

    log::info!("Deleted subnet {subnet_id} and {removed} owned addresses");
    Ok(removed)
}

/// Flattened address view across a subnet and all its descendants, in id
/// order, with owning subnet name/cidr resolved for display.
pub fn descendant_addresses(inventory: &Inventory, subnet_id: u64) -> Result<Vec<AddressView>> {
    if !inventory.subnets.contains_key(&subnet_id) {
        return Err(Error::SubnetNotFound(subnet_id));
    }

    let scope: HashSet<u64> = descendants(inventory, subnet_id).into_iter().collect();
    let views = inventory
        .addresses
        .values()
        .filter(|rec| scope.contains(&rec.subnet_id))
        .map(|rec| {
            let subnet = inventory.subnets.get(&rec.subnet_id);
            AddressView {
                id: rec.id,
                ip_address: rec.address.clone(),
                dns_name: rec.dns_name.clone(),
                architecture: rec.architecture.clone(),
                function: rec.function.clone(),
                subnet_name: subnet.map(|s| s.name.clone()).unwrap_or_default(),
                subnet_cidr: subnet.map(|s| s.cidr.clone()).unwrap_or_default(),
            }
        })
        .collect();
    Ok(views)
}

//! Address resolver: longest-prefix-match ownership and the reassignment
//! sweep that keeps existing assignments consistent when the tree gains
//! resolution.

use crate::error::{Error, Result};
use crate::models::{parse_address, parse_cidr, AddressMeta, IpRecord, Subnet};
use crate::processing::tree;
use crate::store::Inventory;
use ipnet::IpNet;
use std::collections::HashSet;
use std::net::IpAddr;

/// Find the most specific subnet in `scope` containing `address`.
///
/// The scope is explicit: callers pass "every subnet" for a global resolve
/// or "subnet plus descendants" for a scoped one. Candidates with malformed
/// stored CIDRs are skipped, never fatal. A candidate only replaces the
/// current best on a *strictly* longer prefix, so with a scope iterated in
/// ascending id order the tie-break on equal prefix lengths is the lowest
/// subnet id, deterministically.
pub fn resolve_owner<'a, I>(address: &str, scope: I) -> Result<u64>
where
    I: IntoIterator<Item = &'a Subnet>,
{
    let ip = parse_address(address)?;

    let mut best: Option<(u64, u8)> = None;
    for subnet in scope {
        let net = match subnet.network() {
            Some(net) => net,
            None => {
                log::debug!(
                    "Skipping subnet {} with malformed CIDR {:?}",
                    subnet.id,
                    subnet.cidr
                );
                continue;
            }
        };
        if !net.contains(&ip) {
            continue;
        }
        match best {
            Some((_, prefix)) if net.prefix_len() <= prefix => {}
            _ => best = Some((subnet.id, net.prefix_len())),
        }
    }

    best.map(|(id, _)| id)
        .ok_or_else(|| Error::NoMatchingSubnet(ip.to_string()))
}

/// Create a subnet and re-home addresses the new, more specific node now
/// covers. Returns the new id and the number of re-homed addresses.
///
/// The sweep only runs when a parent is declared: candidates are the
/// addresses owned by the parent's ancestor chain, and each moves only if it
/// is contained in the new network *and* the new prefix is strictly longer
/// than its current owner's.
pub fn create_subnet(
    inventory: &mut Inventory,
    name: &str,
    cidr: &str,
    description: &str,
    parent: Option<u64>,
) -> Result<(u64, usize)> {
    let net = parse_cidr(cidr)?;
    if let Some(parent_id) = parent {
        if !inventory.subnets.contains_key(&parent_id) {
            return Err(Error::SubnetNotFound(parent_id));
        }
    }

    let id = tree::insert_subnet(inventory, name, cidr, description, parent)?;

    let reassigned = match parent {
        Some(parent_id) => reassign_addresses(inventory, id, &net, parent_id),
        None => 0,
    };
    if reassigned > 0 {
        log::info!("Re-homed {reassigned} addresses into subnet {id} ({cidr})");
    }

    Ok((id, reassigned))
}

/// Pull addresses owned by the ancestor chain down into the newly created,
/// more specific subnet.
fn reassign_addresses(
    inventory: &mut Inventory,
    new_id: u64,
    new_net: &IpNet,
    parent_id: u64,
) -> usize {
    let chain: HashSet<u64> = tree::ancestor_chain(inventory, parent_id)
        .into_iter()
        .collect();

    let mut to_move = Vec::new();
    for rec in inventory.addresses.values() {
        if !chain.contains(&rec.subnet_id) {
            continue;
        }
        let ip: IpAddr = match rec.address.parse() {
            Ok(ip) => ip,
            Err(_) => continue,
        };
        if !new_net.contains(&ip) {
            continue;
        }
        // Current owner's CIDR may be malformed; such records stay put.
        let current_prefix = inventory
            .subnets
            .get(&rec.subnet_id)
            .and_then(|s| s.network())
            .map(|n| n.prefix_len());
        if let Some(prefix) = current_prefix {
            if new_net.prefix_len() > prefix {
                to_move.push(rec.id);
            }
        }
    }

    for rec_id in &to_move {
        if let Some(rec) = inventory.addresses.get_mut(rec_id) {
            log::debug!("Re-homing address {} ({}) to subnet {new_id}", rec.id, rec.address);
            rec.subnet_id = new_id;
        }
    }
    to_move.len()
}

/// Register a single address under a subnet scope.
///
/// Ownership is resolved against the target subnet plus all its
/// descendants; the most specific containing subnet wins. The stored
/// literal is the parsed address's canonical form.
pub fn register_address(
    inventory: &mut Inventory,
    subnet_id: u64,
    address: &str,
    meta: AddressMeta,
) -> Result<u64> {
    if !inventory.subnets.contains_key(&subnet_id) {
        return Err(Error::SubnetNotFound(subnet_id));
    }

    let ip = parse_address(address)?;
    let canonical = ip.to_string();

    let mut scope_ids = tree::descendants(inventory, subnet_id);
    scope_ids.sort_unstable();
    let scope = scope_ids.iter().filter_map(|id| inventory.subnets.get(id));
    let owner = resolve_owner(&canonical, scope)?;

    if inventory
        .addresses_in(owner)
        .any(|rec| rec.address == canonical)
    {
        let subnet = inventory
            .subnets
            .get(&owner)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        return Err(Error::DuplicateAddress {
            address: canonical,
            subnet,
        });
    }

    let id = inventory.allocate_address_id();
    inventory.addresses.insert(
        id,
        IpRecord {
            id,
            subnet_id: owner,
            address: canonical.clone(),
            dns_name: meta.dns_name,
            architecture: meta.architecture,
            function: meta.function,
        },
    );
    log::info!("Registered address {canonical} as record {id} in subnet {owner}");
    Ok(id)
}

/// Update an address record's metadata. Ownership and the literal itself
/// are not editable; re-register to move an address.
pub fn update_address(
    inventory: &mut Inventory,
    address_id: u64,
    dns_name: Option<&str>,
    architecture: Option<&str>,
    function: Option<&str>,
) -> Result<()> {
    let rec = inventory
        .addresses
        .get_mut(&address_id)
        .ok_or(Error::AddressNotFound(address_id))?;
    if let Some(dns_name) = dns_name {
        rec.dns_name = dns_name.to_string();
    }
    if let Some(architecture) = architecture {
        rec.architecture = architecture.to_string();
    }
    if let Some(function) = function {
        rec.function = function.to_string();
    }
    Ok(())
}

/// Delete a single address record.
pub fn delete_address(inventory: &mut Inventory, address_id: u64) -> Result<()> {
    inventory
        .addresses
        .remove(&address_id)
        .map(|_| ())
        .ok_or(Error::AddressNotFound(address_id))
}

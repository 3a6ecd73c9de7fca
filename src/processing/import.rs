//! Bulk CSV import with best-effort reconciliation.
//!
//! Each row is resolved independently against the whole forest. Rows that
//! fail (unparsable IP, no containing subnet) are collected as diagnostics
//! and never abort the remaining rows. A row whose address already exists
//! under the resolved subnet updates that record's metadata in place instead
//! of failing; only newly created records count as successes.

use crate::error::{Error, Result};
use crate::models::{parse_address, AddressRow, IpRecord};
use crate::processing::resolver::resolve_owner;
use crate::store::Inventory;
use std::io::Read;

/// Outcome of a bulk import: how many records were created, and one
/// diagnostic message per rejected row.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub created: usize,
    pub errors: Vec<String>,
}

/// Import address rows from CSV data (header-driven, see
/// [`crate::models::CSV_HEADER`] for the canonical field order).
///
/// `subnet_cidr`/`subnet_name` in rows are informational only; ownership is
/// recomputed by containment against every subnet in the forest.
pub fn import_addresses<R: Read>(inventory: &mut Inventory, reader: R) -> Result<ImportReport> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut report = ImportReport::default();

    for row in csv_reader.deserialize::<AddressRow>() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                report.errors.push(format!("Unreadable row: {e}"));
                continue;
            }
        };
        if row.ip_address.trim().is_empty() {
            continue;
        }
        import_row(inventory, row, &mut report)?;
    }

    log::info!(
        "Import completed: {} created, {} errors",
        report.created,
        report.errors.len()
    );
    Ok(report)
}

fn import_row(
    inventory: &mut Inventory,
    row: AddressRow,
    report: &mut ImportReport,
) -> Result<()> {
    let ip = match parse_address(&row.ip_address) {
        Ok(ip) => ip,
        Err(_) => {
            report.errors.push(format!("Invalid IP: {}", row.ip_address));
            return Ok(());
        }
    };
    let canonical = ip.to_string();

    // Global scope: every subnet in the forest, in ascending id order.
    let owner = match resolve_owner(&canonical, inventory.subnets.values()) {
        Ok(owner) => owner,
        Err(Error::NoMatchingSubnet(_)) => {
            report
                .errors
                .push(format!("No subnet found for IP: {}", row.ip_address));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let existing = inventory
        .addresses_in(owner)
        .find(|rec| rec.address == canonical)
        .map(|rec| rec.id);

    match existing {
        Some(rec_id) => {
            // Reconcile: update metadata in place, keep fields whose column
            // was absent or empty in the file.
            if let Some(rec) = inventory.addresses.get_mut(&rec_id) {
                if let Some(dns_name) = row.dns_name {
                    rec.dns_name = dns_name;
                }
                if let Some(architecture) = row.architecture {
                    rec.architecture = architecture;
                }
                if let Some(function) = row.function {
                    rec.function = function;
                }
            }
            log::debug!("Updated existing record for {canonical} in subnet {owner}");
        }
        None => {
            let id = inventory.allocate_address_id();
            inventory.addresses.insert(
                id,
                IpRecord {
                    id,
                    subnet_id: owner,
                    address: canonical,
                    dns_name: row.dns_name.unwrap_or_default(),
                    architecture: row.architecture.unwrap_or_default(),
                    function: row.function.unwrap_or_default(),
                },
            );
            report.created += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::resolver::create_subnet;

    fn seeded() -> (Inventory, u64, u64) {
        let mut inventory = Inventory::new();
        let (root, _) = create_subnet(&mut inventory, "root", "10.0.0.0/16", "", None).unwrap();
        let (child, _) =
            create_subnet(&mut inventory, "child", "10.0.1.0/24", "", Some(root)).unwrap();
        (inventory, root, child)
    }

    #[test]
    fn test_import_creates_and_resolves_by_containment() {
        let (mut inventory, root, child) = seeded();
        // The stated subnet column is a lie; containment wins.
        let csv = "ip_address,dns_name,architecture,function,subnet_cidr,subnet_name\n\
                   10.0.1.5,web01,VM,frontend,192.168.0.0/16,bogus\n\
                   10.0.5.9,db01,Bare Metal,database,,\n";
        let report = import_addresses(&mut inventory, csv.as_bytes()).unwrap();
        assert_eq!(report.created, 2);
        assert!(report.errors.is_empty());

        let by_addr = |addr: &str| {
            inventory
                .addresses
                .values()
                .find(|r| r.address == addr)
                .unwrap()
                .clone()
        };
        assert_eq!(by_addr("10.0.1.5").subnet_id, child);
        assert_eq!(by_addr("10.0.1.5").dns_name, "web01");
        assert_eq!(by_addr("10.0.5.9").subnet_id, root);
    }

    #[test]
    fn test_import_updates_in_place_without_duplicating() {
        let (mut inventory, _root, _child) = seeded();
        let csv = "ip_address,dns_name,architecture,function\n10.0.1.5,old-name,VM,web\n";
        let report = import_addresses(&mut inventory, csv.as_bytes()).unwrap();
        assert_eq!(report.created, 1);

        let csv = "ip_address,dns_name,architecture,function\n10.0.1.5,new-name,VM,web\n";
        let report = import_addresses(&mut inventory, csv.as_bytes()).unwrap();
        assert_eq!(report.created, 0, "update must not count as a new row");
        assert!(report.errors.is_empty());
        assert_eq!(inventory.addresses.len(), 1);
        assert_eq!(
            inventory.addresses.values().next().unwrap().dns_name,
            "new-name"
        );
    }

    #[test]
    fn test_import_missing_column_keeps_existing_metadata() {
        let (mut inventory, _root, _child) = seeded();
        let csv = "ip_address,dns_name,architecture,function\n10.0.1.5,web01,VM,frontend\n";
        import_addresses(&mut inventory, csv.as_bytes()).unwrap();

        // No architecture/function columns at all: those fields survive.
        let csv = "ip_address,dns_name\n10.0.1.5,web01.prod\n";
        import_addresses(&mut inventory, csv.as_bytes()).unwrap();
        let rec = inventory.addresses.values().next().unwrap();
        assert_eq!(rec.dns_name, "web01.prod");
        assert_eq!(rec.architecture, "VM");
        assert_eq!(rec.function, "frontend");
    }

    #[test]
    fn test_import_is_best_effort_per_row() {
        let (mut inventory, _root, _child) = seeded();
        let csv = "ip_address,dns_name,architecture,function\n\
                   not-an-ip,x,y,z\n\
                   8.8.8.8,dns,VM,resolver\n\
                   10.0.1.7,web02,VM,frontend\n";
        let report = import_addresses(&mut inventory, csv.as_bytes()).unwrap();
        assert_eq!(report.created, 1);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("not-an-ip"));
        assert!(report.errors[1].contains("8.8.8.8"));
        assert_eq!(inventory.addresses.len(), 1);
    }

    #[test]
    fn test_import_skips_blank_ip_rows() {
        let (mut inventory, _root, _child) = seeded();
        let csv = "ip_address,dns_name,architecture,function\n,skip,me,please\n10.0.1.8,a,b,c\n";
        let report = import_addresses(&mut inventory, csv.as_bytes()).unwrap();
        assert_eq!(report.created, 1);
        assert!(report.errors.is_empty());
    }
}

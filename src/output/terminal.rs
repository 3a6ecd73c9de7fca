//! Terminal output for subnet and address listings.

use crate::models::AddressView;
use crate::store::Inventory;
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print every subnet with its parent link and owned-address count.
pub fn print_subnet_overview(inventory: &Inventory) {
    let counts = inventory
        .addresses
        .values()
        .map(|rec| rec.subnet_id)
        .counts();

    println!(
        "{}",
        r#"  "id",             "cidr",                 "name", "parent", "ips", "description""#
            .bold()
    );
    for subnet in inventory.subnets.values() {
        let parent = subnet
            .parent
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{id},{cidr},{name},{parent},{ips},{description}",
            id = format_field(subnet.id, 6),
            cidr = format_field(&subnet.cidr, 20),
            name = format_field(&subnet.name, 24),
            parent = format_field(parent, 9),
            ips = format_field(counts.get(&subnet.id).copied().unwrap_or(0), 6),
            description = format_field(&subnet.description, 14),
        );
    }
    println!(
        "# {} subnets, {} addresses",
        inventory.subnets.len().to_string().green(),
        inventory.addresses.len().to_string().green()
    );
}

/// Print a flattened descendant-address listing.
pub fn print_address_listing(rows: &[AddressView]) {
    println!(
        "{}",
        r#"  "id",        "ip_address",             "dns_name", "architecture",     "function",      "subnet_cidr", "subnet_name""#
            .bold()
    );
    for row in rows {
        println!(
            "{id},{ip},{dns},{arch},{function},{cidr},{name}",
            id = format_field(row.id, 6),
            ip = format_field(&row.ip_address, 19),
            dns = format_field(&row.dns_name, 22),
            arch = format_field(&row.architecture, 15),
            function = format_field(&row.function, 14),
            cidr = format_field(&row.subnet_cidr, 18),
            name = format_field(&row.subnet_name, 13),
        );
    }
    println!("# {} addresses", rows.len().to_string().green());
}

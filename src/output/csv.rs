//! CSV export of the address registry.

use crate::error::{Error, Result};
use crate::models::CSV_HEADER;
use crate::store::Inventory;
use csv::Writer;

/// Render every registered address as CSV in the fixed exchange field
/// order, with the owning subnet's cidr/name resolved at write time.
pub fn export_addresses(inventory: &Inventory) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;

    for rec in inventory.addresses.values() {
        let subnet = inventory.subnets.get(&rec.subnet_id);
        wtr.write_record([
            rec.address.as_str(),
            rec.dns_name.as_str(),
            rec.architecture.as_str(),
            rec.function.as_str(),
            subnet.map(|s| s.cidr.as_str()).unwrap_or(""),
            subnet.map(|s| s.name.as_str()).unwrap_or(""),
        ])?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| Error::Export(format!("CSV writer error: {e}")))?;
    String::from_utf8(data).map_err(|e| Error::Export(format!("UTF-8 conversion error: {e}")))
}

//! Command-line shell around the engine.
//!
//! Translates arguments into plain values, hands them to the engine, and
//! persists the inventory snapshot afterwards. All engine state passes
//! through here explicitly; the engine itself never touches a file.

use crate::error::Result;
use crate::models::AddressMeta;
use crate::output;
use crate::processing;
use crate::store::Inventory;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;

/// Subnet hierarchy and IP address inventory manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the inventory snapshot file
    #[arg(short, long, default_value = "ipam_inventory.json")]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a subnet (optionally under a parent) and report re-homed addresses
    CreateSubnet {
        /// CIDR block, e.g. 10.0.0.0/16
        #[arg(long)]
        cidr: String,
        /// Human-readable name
        #[arg(long)]
        name: String,
        /// Free-form description
        #[arg(long, default_value = "")]
        description: String,
        /// Parent subnet id
        #[arg(long)]
        parent: Option<u64>,
    },
    /// Rename or re-describe a subnet (CIDR is immutable)
    UpdateSubnet {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a subnet, cascading its addresses; children become roots
    DeleteSubnet { id: u64 },
    /// List all subnets with owned-address counts
    Subnets,
    /// Register an IP address under a subnet scope
    AddIp {
        /// Scope subnet id (the address may land in a more specific descendant)
        #[arg(long)]
        subnet: u64,
        /// IP literal, v4 or v6
        #[arg(long)]
        address: String,
        #[arg(long, default_value = "")]
        dns_name: String,
        #[arg(long, default_value = "")]
        architecture: String,
        #[arg(long, default_value = "")]
        function: String,
    },
    /// Update an address record's metadata
    UpdateIp {
        id: u64,
        #[arg(long)]
        dns_name: Option<String>,
        #[arg(long)]
        architecture: Option<String>,
        #[arg(long)]
        function: Option<String>,
    },
    /// Delete one address record
    DeleteIp { id: u64 },
    /// List addresses of a subnet and all its descendants
    ListIps { subnet: u64 },
    /// Import addresses from a CSV file (best-effort, reports per-row errors)
    Import { file: PathBuf },
    /// Export all addresses as CSV to stdout or a file
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Execute one command against the snapshot at `args.store`, saving it back
/// after a successful mutation.
pub fn run(args: Args) -> Result<()> {
    let mut inventory = Inventory::load(&args.store)?;

    let mutated = match args.command {
        Command::CreateSubnet {
            cidr,
            name,
            description,
            parent,
        } => {
            let (id, reassigned) =
                processing::create_subnet(&mut inventory, &name, &cidr, &description, parent)?;
            println!("Created subnet {id} ({cidr}), re-homed {reassigned} addresses");
            true
        }
        Command::UpdateSubnet {
            id,
            name,
            description,
        } => {
            processing::update_subnet(&mut inventory, id, name.as_deref(), description.as_deref())?;
            println!("Updated subnet {id}");
            true
        }
        Command::DeleteSubnet { id } => {
            let removed = processing::delete_subnet(&mut inventory, id)?;
            println!("Deleted subnet {id} and {removed} owned addresses");
            true
        }
        Command::Subnets => {
            output::print_subnet_overview(&inventory);
            false
        }
        Command::AddIp {
            subnet,
            address,
            dns_name,
            architecture,
            function,
        } => {
            let meta = AddressMeta {
                dns_name,
                architecture,
                function,
            };
            let id = processing::register_address(&mut inventory, subnet, &address, meta)?;
            let owner = inventory.addresses[&id].subnet_id;
            println!("Registered address {address} as record {id} in subnet {owner}");
            true
        }
        Command::UpdateIp {
            id,
            dns_name,
            architecture,
            function,
        } => {
            processing::update_address(
                &mut inventory,
                id,
                dns_name.as_deref(),
                architecture.as_deref(),
                function.as_deref(),
            )?;
            println!("Updated address record {id}");
            true
        }
        Command::DeleteIp { id } => {
            processing::delete_address(&mut inventory, id)?;
            println!("Deleted address record {id}");
            true
        }
        Command::ListIps { subnet } => {
            let rows = processing::descendant_addresses(&inventory, subnet)?;
            output::print_address_listing(&rows);
            false
        }
        Command::Import { file } => {
            let reader = File::open(&file)?;
            let report = processing::import_addresses(&mut inventory, reader)?;
            println!("Import completed: {} created", report.created);
            for error in &report.errors {
                println!("  error: {error}");
            }
            true
        }
        Command::Export { output: target } => {
            let csv = output::export_addresses(&inventory)?;
            match target {
                Some(path) => {
                    std::fs::write(&path, csv)?;
                    println!("Exported {} addresses to {}", inventory.addresses.len(), path.display());
                }
                None => print!("{csv}"),
            }
            false
        }
    };

    if mutated {
        inventory.save(&args.store)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_run_create_and_list_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = dir.path().join("inventory.json");

        run(Args {
            store: store.clone(),
            command: Command::CreateSubnet {
                cidr: "10.0.0.0/16".to_string(),
                name: "lab".to_string(),
                description: "".to_string(),
                parent: None,
            },
        })
        .expect("create subnet");

        run(Args {
            store: store.clone(),
            command: Command::AddIp {
                subnet: 1,
                address: "10.0.0.5".to_string(),
                dns_name: "web01".to_string(),
                architecture: "VM".to_string(),
                function: "frontend".to_string(),
            },
        })
        .expect("add ip");

        let inventory = Inventory::load(&store).expect("reload");
        assert_eq!(inventory.subnets.len(), 1);
        assert_eq!(inventory.addresses.len(), 1);
        assert_eq!(inventory.addresses[&1].dns_name, "web01");
    }
}

//! Output formatting.
//!
//! - [`csv`] - address export in the fixed exchange field order
//! - [`terminal`] - colored listings for the command-line shell

pub mod csv;
pub mod terminal;

pub use self::csv::export_addresses;
pub use terminal::{format_field, print_address_listing, print_subnet_overview};

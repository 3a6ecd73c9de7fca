use clap::Parser;
use netplan_ipam::cli;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");

    let args = cli::Args::parse();
    log::info!("#Start main()");

    cli::run(args)?;

    Ok(())
}

//! Province Example
//!
//! Prints the market figures for every province in a fixture set.
//!
//! Use `-f` to load a fixture set by name
//! Use `-l` (or `RUST_LOG`) to set the log level

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use playbill::{fixtures::Fixture, utils::DemoArgs};

/// Province Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let fixture = Fixture::from_set(&args.fixture)?;

    let mut keys: Vec<&str> = fixture.province_keys().collect();
    keys.sort_unstable();

    for key in keys {
        let province = fixture.province(key)?;

        println!("{}", province.name());

        for producer in province.producers() {
            println!(
                "  {}: {} @ {}",
                producer.name(),
                producer.production(),
                producer.cost()
            );
        }

        println!("  demand:     {} @ {}", province.demand(), province.price());
        println!("  production: {}", province.total_production());
        println!("  shortfall:  {}", province.shortfall());
        println!("  profit:     {}\n", province.profit());
    }

    Ok(())
}

//! Statement Example
//!
//! Prints the statement for every invoice in a fixture set.
//!
//! Use `-f` to load a fixture set by name
//! Use `--table` to render each statement as a table
//! Use `-l` (or `RUST_LOG`) to set the log level

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use playbill::{fixtures::Fixture, statement::Statement, utils::DemoArgs};

/// Statement Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let fixture = Fixture::from_set(&args.fixture)?;

    for invoice in fixture.invoices() {
        match Statement::new(invoice, fixture.catalog()) {
            Ok(statement) if args.table => println!("{}", statement.to_table()),
            Ok(statement) => println!("{statement}"),
            Err(error) => tracing::error!(customer = %invoice.customer, %error, "statement failed"),
        }
    }

    Ok(())
}

//! Utils

use clap::Parser;

/// Arguments for the demo programs
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Fixture set to load
    #[clap(short, long, default_value = "sample")]
    pub fixture: String,

    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn, error)
    #[clap(short, long, default_value = "info")]
    pub log_level: String,

    /// Render statements as tables
    #[clap(long)]
    pub table: bool,
}

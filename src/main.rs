use anyhow::Result;
use clap::Parser;

use sentimap::cli::{Cli, Commands};
use sentimap::commands::analyze;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()))
        .init();

    match &cli.command {
        Commands::Analyze(args) => analyze::run(args),
    }
}

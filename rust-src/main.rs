//! South African business guide CLI.
//!
//! Renders the guide sections in the terminal and exports their charts.

mod cli;
mod commands;
mod config;
mod models;
mod pages;
mod visualization;

use clap::Parser;
use tracing_subscriber::EnvFilter;


fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}


fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! gridwalk: find a path across a character map with breadth-first and
//! depth-first search.
//!
//! Run: cargo run -- [MAP] [--algorithm bfs|dfs|both]

mod app;
mod config;
mod output;
mod run;

use clap::Parser;

use crate::app::Cli;
use crate::config::RunConfig;

fn main() {
    let cli = Cli::parse();

    // Warnings always reach stderr; --verbose shows search statistics; RUST_LOG overrides.
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let config = RunConfig::from(&cli);
    let result = run::run(&config).and_then(|report| output::print_report(&report, config.json));
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

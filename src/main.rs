//! bower-concat - Bower bundle builder
//!
//! Resolves installed Bower components into a dependency-ordered list of
//! JavaScript main files and concatenates them into a single bundle.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod bower;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod operations;
mod output;
mod path_utils;
mod resolver;

use cli::{Cli, Commands};

/// Set up logging to stderr
///
/// `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(cli.workspace, args),
        Commands::Concat(args) => commands::concat::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("Help: {help}");
        }
        std::process::exit(1);
    }
}

//! Command-line caller for the Discover ranking engine.
//!
//! The service subcommands print the same JSON bodies a transport adapter
//! would return; `demo` prints a readable overview of every ranker.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use log::debug;

mod catalog;
mod demo;
mod error;
mod service;

pub use error::CliError;

use demo::{DemoArgs, run_demo_with};
use service::{
    AutocompleteArgs, FeedArgs, PlaceArgs, SearchArgs, run_autocomplete_with, run_feed_with,
    run_place_with, run_search_with,
};

const ARG_CATALOG: &str = "catalog";
const ARG_PAGE: &str = "page";
const ARG_LIMIT: &str = "limit";
const ARG_QUERY: &str = "query";
const ARG_NAME: &str = "name";
const ARG_JSON: &str = "json";
const ENV_SEARCH_QUERY: &str = "DISCOVER_CMDS_SEARCH_QUERY";
const ENV_AUTOCOMPLETE_QUERY: &str = "DISCOVER_CMDS_AUTOCOMPLETE_QUERY";
const ENV_PLACE_NAME: &str = "DISCOVER_CMDS_PLACE_NAME";

/// Run the Discover CLI with the current process arguments and environment.
///
/// Responses are written to standard output.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    let mut stdout = std::io::stdout().lock();
    run_command_with(cli.command, &mut stdout)
}

fn run_command_with(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Feed(args) => run_feed_with(args, writer),
        Command::Search(args) => run_search_with(args, writer),
        Command::Autocomplete(args) => run_autocomplete_with(args, writer),
        Command::Place(args) => run_place_with(args, writer),
        Command::Demo(args) => run_demo_with(args, writer),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        debug!("logger already installed");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "discover",
    about = "Rank, search and recommend tourist destinations",
    version
)]
struct Cli {
    /// Log progress and fallbacks at info level.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a page of the recommendation feed.
    Feed(FeedArgs),
    /// Search the catalog by keyword.
    Search(SearchArgs),
    /// Suggest completions for a partial query.
    Autocomplete(AutocompleteArgs),
    /// Show one place and similar places.
    Place(PlaceArgs),
    /// Print a human-readable overview of the rankers.
    Demo(DemoArgs),
}

#[cfg(test)]
mod tests;

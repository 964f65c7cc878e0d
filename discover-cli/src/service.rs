//! Service-style subcommands that print engine responses as JSON.
//!
//! Each command resolves its layered configuration, loads the catalog, runs
//! one [`DiscoverEngine`](discover_ranker::DiscoverEngine) operation and
//! writes the response body. A rejected request writes an [`ErrorBody`]
//! instead and fails with [`CliError::Service`].

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use discover_ranker::engine::DEFAULT_FEED_LIMIT;
use discover_ranker::{ErrorBody, ServiceError};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::{catalog_or_default, open_engine};
use crate::{
    ARG_CATALOG, ARG_LIMIT, ARG_NAME, ARG_PAGE, ARG_QUERY, CliError, ENV_AUTOCOMPLETE_QUERY,
    ENV_PLACE_NAME, ENV_SEARCH_QUERY,
};

/// CLI arguments for the `feed` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print one page of hybrid recommendations as JSON. Page N \
                 is a slice of the blend computed for N pages, so pages are \
                 deterministic for a given catalog.",
    about = "Print a page of the recommendation feed"
)]
#[ortho_config(prefix = "DISCOVER")]
pub(crate) struct FeedArgs {
    /// Path to the destination catalog CSV.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// One-based page number (default 1).
    #[arg(long = ARG_PAGE, value_name = "n")]
    #[serde(default)]
    pub(crate) page: Option<usize>,
    /// Places per page (default 20).
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl FeedArgs {
    pub(crate) fn into_config(self) -> Result<FeedConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(FeedConfig::from(merged))
    }
}

/// Resolved `feed` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FeedConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) page: usize,
    pub(crate) limit: usize,
}

impl From<FeedArgs> for FeedConfig {
    fn from(args: FeedArgs) -> Self {
        Self {
            catalog: catalog_or_default(args.catalog),
            page: args.page.unwrap_or(1),
            limit: args.limit.unwrap_or(DEFAULT_FEED_LIMIT),
        }
    }
}

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Search place names, cities, states and best-time text, \
                 ignoring case, and print the most relevant places as JSON.",
    about = "Search the catalog by keyword"
)]
#[ortho_config(prefix = "DISCOVER")]
pub(crate) struct SearchArgs {
    /// Keyword to look for.
    #[arg(value_name = ARG_QUERY)]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Path to the destination catalog CSV.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryConfig::try_from(merged)
    }
}

impl TryFrom<SearchArgs> for QueryConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        QueryConfig::resolve(args.query, args.catalog, ARG_QUERY, ENV_SEARCH_QUERY)
    }
}

/// CLI arguments for the `autocomplete` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Suggest place names, cities and states containing the \
                 partially typed text. Matching is case-sensitive and needs \
                 at least two characters.",
    about = "Suggest completions for a partial query"
)]
#[ortho_config(prefix = "DISCOVER")]
pub(crate) struct AutocompleteArgs {
    /// Partially typed text.
    #[arg(value_name = ARG_QUERY)]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Path to the destination catalog CSV.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl AutocompleteArgs {
    pub(crate) fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryConfig::try_from(merged)
    }
}

impl TryFrom<AutocompleteArgs> for QueryConfig {
    type Error = CliError;

    fn try_from(args: AutocompleteArgs) -> Result<Self, Self::Error> {
        QueryConfig::resolve(args.query, args.catalog, ARG_QUERY, ENV_AUTOCOMPLETE_QUERY)
    }
}

/// CLI arguments for the `place` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the first place whose name contains the given text, \
                 ignoring case, together with its most similar places.",
    about = "Show one place and similar places"
)]
#[ortho_config(prefix = "DISCOVER")]
pub(crate) struct PlaceArgs {
    /// Full or partial place name.
    #[arg(value_name = ARG_NAME)]
    #[serde(default)]
    pub(crate) name: Option<String>,
    /// Path to the destination catalog CSV.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl PlaceArgs {
    pub(crate) fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryConfig::try_from(merged)
    }
}

impl TryFrom<PlaceArgs> for QueryConfig {
    type Error = CliError;

    fn try_from(args: PlaceArgs) -> Result<Self, Self::Error> {
        QueryConfig::resolve(args.name, args.catalog, ARG_NAME, ENV_PLACE_NAME)
    }
}

/// Resolved configuration for commands that take one text argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueryConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) text: String,
}

impl QueryConfig {
    fn resolve(
        text: Option<String>,
        catalog: Option<Utf8PathBuf>,
        field: &'static str,
        env: &'static str,
    ) -> Result<Self, CliError> {
        let text = text.ok_or(CliError::MissingArgument { field, env })?;
        Ok(Self {
            catalog: catalog_or_default(catalog),
            text,
        })
    }
}

pub(crate) fn run_feed_with(args: FeedArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let engine = open_engine(&config.catalog)?;
    respond(writer, engine.feed(config.page, config.limit))
}

pub(crate) fn run_search_with(args: SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let engine = open_engine(&config.catalog)?;
    respond(writer, engine.search(&config.text))
}

pub(crate) fn run_autocomplete_with(
    args: AutocompleteArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let engine = open_engine(&config.catalog)?;
    write_json(writer, &engine.autocomplete(&config.text))
}

pub(crate) fn run_place_with(args: PlaceArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let engine = open_engine(&config.catalog)?;
    respond(writer, engine.place_detail(&config.text))
}

/// Write a successful body, or the error body followed by the failure.
pub(crate) fn respond<T: Serialize>(
    writer: &mut dyn Write,
    outcome: Result<T, ServiceError>,
) -> Result<(), CliError> {
    match outcome {
        Ok(body) => write_json(writer, &body),
        Err(err) => {
            write_json(writer, &ErrorBody::from(&err))?;
            Err(CliError::Service(err))
        }
    }
}

pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    body: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(body).map_err(CliError::SerialiseResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn feed_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<FeedConfig, CliError> {
    let merged = FeedArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(FeedConfig::from(merged))
}

#[cfg(test)]
pub(crate) fn search_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<QueryConfig, CliError> {
    let merged = SearchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    QueryConfig::try_from(merged)
}

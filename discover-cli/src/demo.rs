//! Tour of every ranker over one catalog, as text or JSON.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use discover_core::{CatalogSummary, Place};
use discover_ranker::{DiscoverEngine, PlaceRecord};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::{catalog_or_default, open_engine};
use crate::service::write_json;
use crate::{ARG_CATALOG, ARG_JSON, CliError};

/// Place whose neighbours the overview lists.
pub(crate) const SIMILAR_EXAMPLE: &str = "Taj Mahal";
/// Queries whose top hits the overview lists.
pub(crate) const SEARCH_EXAMPLES: [&str; 2] = ["Delhi", "Beach"];

const POPULAR_SHOWN: usize = 5;
const SIMILAR_SHOWN: usize = 3;
const HYBRID_SHOWN: usize = 5;
const SEARCH_SHOWN: usize = 3;

/// CLI arguments for the `demo` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load the catalog and print a short overview: catalog \
                 figures, the most popular places, places similar to the \
                 Taj Mahal, hybrid recommendations and sample searches. \
                 With --json, print the figures and rankings as JSON.",
    about = "Print an overview of the rankers"
)]
#[ortho_config(prefix = "DISCOVER")]
pub(crate) struct DemoArgs {
    /// Path to the destination catalog CSV.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Print the overview as JSON instead of text.
    #[arg(long = ARG_JSON)]
    #[serde(default)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo_with(args: DemoArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let engine = open_engine(&catalog_or_default(merged.catalog))?;
    if merged.json {
        write_json(writer, &Overview::new(&engine))
    } else {
        write_overview(&engine, writer).map_err(CliError::WriteOutput)
    }
}

/// Machine-readable form of the overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Overview {
    pub(crate) summary: CatalogSummary,
    pub(crate) popular: Vec<PlaceRecord>,
    pub(crate) similar: Vec<PlaceRecord>,
    pub(crate) recommended: Vec<PlaceRecord>,
}

impl Overview {
    pub(crate) fn new(engine: &DiscoverEngine) -> Self {
        let records = |places: Vec<&Place>| -> Vec<PlaceRecord> {
            places.into_iter().map(PlaceRecord::from).collect()
        };
        Self {
            summary: engine.catalog().summary(),
            popular: records(engine.popularity().top(POPULAR_SHOWN)),
            similar: records(
                engine
                    .similarity()
                    .similar_to(SIMILAR_EXAMPLE, SIMILAR_SHOWN),
            ),
            recommended: records(engine.recommender().recommend(HYBRID_SHOWN)),
        }
    }
}

/// Write the overview of `engine` to `writer`.
pub(crate) fn write_overview(
    engine: &DiscoverEngine,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    let summary = engine.catalog().summary();
    writeln!(writer, "Catalog")?;
    writeln!(writer, "  destinations: {}", summary.destinations)?;
    writeln!(writer, "  states: {}", summary.states)?;
    writeln!(writer, "  cities: {}", summary.cities)?;
    match summary.average_rating {
        Some(rating) => writeln!(writer, "  average rating: {rating:.2}")?,
        None => writeln!(writer, "  average rating: n/a")?,
    }

    write_section(
        writer,
        &format!("Top {POPULAR_SHOWN} popular"),
        &engine.popularity().top(POPULAR_SHOWN),
    )?;
    write_section(
        writer,
        &format!("Similar to {SIMILAR_EXAMPLE}"),
        &engine.similarity().similar_to(SIMILAR_EXAMPLE, SIMILAR_SHOWN),
    )?;
    write_section(
        writer,
        &format!("Top {HYBRID_SHOWN} recommended"),
        &engine.recommender().recommend(HYBRID_SHOWN),
    )?;
    for query in SEARCH_EXAMPLES {
        let hits: Vec<&Place> = engine
            .searcher()
            .search(query, SEARCH_SHOWN)
            .into_iter()
            .map(|hit| hit.place)
            .collect();
        write_section(writer, &format!("Search: {query}"), &hits)?;
    }
    Ok(())
}

fn write_section(writer: &mut dyn Write, title: &str, places: &[&Place]) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{title}")?;
    if places.is_empty() {
        writeln!(writer, "  (none)")?;
    }
    for (rank, place) in places.iter().enumerate() {
        writeln!(
            writer,
            "  {}. {} ({}) rating {:.1}, popularity {:.3}",
            rank + 1,
            place.name(),
            place.location(),
            place.rating(),
            place.popularity_score()
        )?;
    }
    Ok(())
}

//! Locating and loading the catalog file shared by every subcommand.

use camino::{Utf8Path, Utf8PathBuf};
use discover_fs::PathKind;
use discover_ranker::DiscoverEngine;
use log::info;

use crate::{ARG_CATALOG, CliError};

/// Catalog location used when no layer provides one.
pub(crate) const DEFAULT_CATALOG: &str = "data/places_clean.csv";

/// The configured catalog path, or [`DEFAULT_CATALOG`].
pub(crate) fn catalog_or_default(path: Option<Utf8PathBuf>) -> Utf8PathBuf {
    path.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG))
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_catalog(path: &Utf8Path) -> Result<(), CliError> {
    match discover_fs::probe(path) {
        Ok(PathKind::File) => Ok(()),
        Ok(PathKind::Missing) => Err(CliError::MissingSourceFile {
            field: ARG_CATALOG,
            path: path.to_path_buf(),
        }),
        Ok(PathKind::Other) => Err(CliError::SourcePathNotFile {
            field: ARG_CATALOG,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field: ARG_CATALOG,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load the catalog at `path` and build an engine over it.
pub(crate) fn open_engine(path: &Utf8Path) -> Result<DiscoverEngine, CliError> {
    require_catalog(path)?;
    let catalog = discover_data::load_catalog(path).map_err(|source| CliError::LoadCatalog {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;
    info!("serving {} places from {path}", catalog.len());
    Ok(DiscoverEngine::new(catalog))
}

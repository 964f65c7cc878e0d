//! Facade crate for the Discover destination ranking engine.
//!
//! This crate re-exports the catalog types and the rankers, and exposes the
//! CSV catalog loader behind the `loader-csv` feature.

#![forbid(unsafe_code)]

pub use discover_core::{Catalog, CatalogSummary, Place, RawPlace};

pub use discover_ranker::{
    AutocompleteMatcher, AutocompleteResults, ContentSimilarity, DiscoverEngine, ErrorBody,
    FeedPage, HybridRecommender, PlaceDetail, PlaceRecord, PopularityRanker, RankingError,
    SearchHit, SearchMatcher, SearchResults, ServiceError, SimilarPlaceRecord, SimilarityIndex,
    Suggestion, SuggestionKind, ValidationError,
};

#[cfg(feature = "loader-csv")]
pub use discover_data::{DataLoadError, load_catalog, read_catalog};

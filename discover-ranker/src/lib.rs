//! Ranking engine for the Discover destination catalog.
//!
//! The crate layers request-time rankers over an immutable
//! [`Catalog`](discover_core::Catalog):
//! - [`PopularityRanker`] orders rows by their popularity score.
//! - [`SimilarityIndex`] weights every row's combined text with TF-IDF and
//!   answers "places like this one" by cosine similarity.
//! - [`HybridRecommender`] blends the two, deduplicating by name.
//! - [`SearchMatcher`] and [`AutocompleteMatcher`] answer keyword and
//!   type-ahead queries.
//! - [`DiscoverEngine`] wraps them all behind the feed, search,
//!   autocomplete, and place-detail operations that transport adapters call.
//!
//! Everything is built once and then only read, so an engine can be shared
//! across threads behind an `Arc`.
//!
//! # Examples
//!
//! ```
//! use discover_core::{Catalog, RawPlace};
//! use discover_ranker::DiscoverEngine;
//!
//! let engine = DiscoverEngine::new(Catalog::from_records([
//!     RawPlace::new("Taj Mahal", "Agra", "Uttar Pradesh").with_rating(4.8).with_review_volume(50.0),
//!     RawPlace::new("Red Fort", "Delhi", "Delhi").with_rating(4.5).with_review_volume(30.0),
//!     RawPlace::new("Goa Beach", "Panaji", "Goa").with_rating(4.2).with_review_volume(40.0),
//! ]));
//! let results = engine.search("delhi").expect("non-empty query");
//! assert_eq!(results.total_results, 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod autocomplete;
pub mod engine;
mod error;
mod hybrid;
mod popularity;
mod search;
mod similarity;

pub use autocomplete::{AutocompleteMatcher, MIN_QUERY_CHARS, Suggestion, SuggestionKind};
pub use engine::{
    AutocompleteResults, DiscoverEngine, ErrorBody, FeedPage, PlaceDetail, PlaceRecord,
    SearchResults, ServiceError, SimilarPlaceRecord, ValidationError,
};
pub use error::RankingError;
pub use hybrid::{HybridRecommender, NEIGHBOURS_PER_SEED, SEED_COUNT};
pub use popularity::PopularityRanker;
pub use search::{SearchHit, SearchMatcher};
pub use similarity::{ContentSimilarity, SimilarityIndex};

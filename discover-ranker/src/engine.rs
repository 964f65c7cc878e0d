//! Request-level operations consumed by transport adapters.
//!
//! [`DiscoverEngine`] owns the shared catalog and every ranker built from it.
//! Its operations validate their arguments, run the rankers, and return plain
//! records ready for serialisation; failures become [`ServiceError`] values
//! that render as an [`ErrorBody`].

use std::sync::Arc;

use discover_core::{Catalog, Place};
use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use crate::{
    AutocompleteMatcher, HybridRecommender, PopularityRanker, SearchMatcher, SimilarityIndex,
    Suggestion,
};

/// Most places returned by [`DiscoverEngine::search`].
pub const SEARCH_RESULTS: usize = 20;
/// Most suggestions returned by [`DiscoverEngine::autocomplete`].
pub const AUTOCOMPLETE_SUGGESTIONS: usize = 8;
/// Similar places attached to a [`PlaceDetail`].
pub const SIMILAR_PLACES: usize = 5;
/// Feed page size used when the caller does not choose one.
pub const DEFAULT_FEED_LIMIT: usize = 20;

/// Rejected request arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The search query was empty after trimming.
    #[error("Query parameter is required")]
    EmptyQuery,
    /// The place name was empty after trimming.
    #[error("Place name is required")]
    EmptyName,
    /// Feed pages are numbered from 1.
    #[error("page must be at least 1")]
    ZeroPage,
    /// Feed pages hold at least one place.
    #[error("limit must be at least 1")]
    ZeroLimit,
}

/// Failures reported by [`DiscoverEngine`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request was rejected before any ranking ran.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No place name contains the requested name.
    #[error("Place not found: {name}")]
    NotFound {
        /// Name as requested.
        name: String,
    },
}

/// Wire form of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Always `false`.
    pub success: bool,
    /// Human-readable reason.
    pub error: String,
}

impl From<&ServiceError> for ErrorBody {
    fn from(err: &ServiceError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
        }
    }
}

/// A place as returned by feed, search, and detail requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceRecord {
    /// Display name.
    pub name: String,
    /// `"{city}, {state}"`.
    pub location: String,
    /// Imputed rating.
    pub rating: f64,
    /// Imputed review volume in lakhs.
    pub reviews: f64,
    /// Best time to visit.
    pub best_time: String,
    /// Image reference, empty when absent.
    pub image_url: String,
    /// Ranking signal.
    pub popularity_score: f64,
}

impl From<&Place> for PlaceRecord {
    fn from(place: &Place) -> Self {
        Self {
            name: place.name().to_owned(),
            location: place.location(),
            rating: place.rating(),
            reviews: place.review_volume(),
            best_time: place.best_time().to_owned(),
            image_url: place.image_url().to_owned(),
            popularity_score: place.popularity_score(),
        }
    }
}

/// Abridged record for places listed alongside a [`PlaceDetail`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarPlaceRecord {
    /// Display name.
    pub name: String,
    /// `"{city}, {state}"`.
    pub location: String,
    /// Imputed rating.
    pub rating: f64,
    /// Image reference, empty when absent.
    pub image_url: String,
}

impl From<&Place> for SimilarPlaceRecord {
    fn from(place: &Place) -> Self {
        Self {
            name: place.name().to_owned(),
            location: place.location(),
            rating: place.rating(),
            image_url: place.image_url().to_owned(),
        }
    }
}

/// One page of the recommendation feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedPage {
    /// Always `true`.
    pub success: bool,
    /// Places on this page.
    pub places: Vec<PlaceRecord>,
    /// Page number as requested.
    pub page: usize,
    /// Whether the page was full.
    pub has_more: bool,
}

/// Result of a keyword search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    /// Always `true`.
    pub success: bool,
    /// Matching places, most relevant first.
    pub places: Vec<PlaceRecord>,
    /// Trimmed query.
    pub query: String,
    /// Number of places returned.
    pub total_results: usize,
}

/// Result of a type-ahead request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutocompleteResults {
    /// Always `true`.
    pub success: bool,
    /// Suggestions, highest priority first.
    pub suggestions: Vec<Suggestion>,
    /// Trimmed query.
    pub query: String,
}

/// A single place with its nearest neighbours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetail {
    /// Always `true`.
    pub success: bool,
    /// The resolved place.
    pub place: PlaceRecord,
    /// Content-similar places.
    pub similar_places: Vec<SimilarPlaceRecord>,
}

/// Read-only ranking service over one catalog.
///
/// Building the engine builds the similarity index; afterwards every
/// operation only reads shared state, so one engine can serve concurrent
/// callers through an `Arc`.
///
/// # Examples
/// ```
/// use discover_core::{Catalog, RawPlace};
/// use discover_ranker::DiscoverEngine;
///
/// let engine = DiscoverEngine::new(Catalog::from_records([
///     RawPlace::new("Taj Mahal", "Agra", "Uttar Pradesh").with_rating(4.8).with_review_volume(50.0),
///     RawPlace::new("Red Fort", "Delhi", "Delhi").with_rating(4.5).with_review_volume(30.0),
/// ]));
/// // Two slots: one from popularity, one from the content share.
/// let page = engine.feed(1, 2).expect("valid page");
/// assert_eq!(page.places[0].name, "Taj Mahal");
/// assert_eq!(page.places.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DiscoverEngine {
    catalog: Arc<Catalog>,
    similarity: Arc<SimilarityIndex>,
    recommender: HybridRecommender<Arc<SimilarityIndex>>,
    search: SearchMatcher,
    autocomplete: AutocompleteMatcher,
}

impl DiscoverEngine {
    /// Build every ranker over `catalog`.
    #[must_use]
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        let shared: Arc<Catalog> = catalog.into();
        let similarity = Arc::new(SimilarityIndex::build(Arc::clone(&shared)));
        let recommender = HybridRecommender::new(
            PopularityRanker::new(Arc::clone(&shared)),
            Arc::clone(&similarity),
        );
        debug!("discover engine ready over {} places", shared.len());
        Self {
            search: SearchMatcher::new(Arc::clone(&shared)),
            autocomplete: AutocompleteMatcher::new(Arc::clone(&shared)),
            catalog: shared,
            similarity,
            recommender,
        }
    }

    /// The served catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The popularity ranking.
    #[must_use]
    pub const fn popularity(&self) -> &PopularityRanker {
        self.recommender.popularity()
    }

    /// The content-similarity index.
    #[must_use]
    pub fn similarity(&self) -> &SimilarityIndex {
        &self.similarity
    }

    /// The hybrid recommender.
    #[must_use]
    pub const fn recommender(&self) -> &HybridRecommender<Arc<SimilarityIndex>> {
        &self.recommender
    }

    /// The keyword matcher.
    #[must_use]
    pub const fn searcher(&self) -> &SearchMatcher {
        &self.search
    }

    /// The type-ahead matcher.
    #[must_use]
    pub const fn autocompleter(&self) -> &AutocompleteMatcher {
        &self.autocomplete
    }

    /// Page `page` of the hybrid feed with `limit` places per page.
    ///
    /// The full prefix up to the end of the page is recommended on every
    /// call and then sliced, so pages agree with a single large request.
    ///
    /// # Errors
    /// Returns [`ValidationError::ZeroPage`] or [`ValidationError::ZeroLimit`].
    pub fn feed(&self, page: usize, limit: usize) -> Result<FeedPage, ServiceError> {
        if page == 0 {
            return Err(ValidationError::ZeroPage.into());
        }
        if limit == 0 {
            return Err(ValidationError::ZeroLimit.into());
        }
        let offset = (page - 1).saturating_mul(limit);
        let wanted = page.saturating_mul(limit);
        let mut recommended = self.recommender.recommend(wanted);
        if recommended.is_empty() {
            warn!("hybrid feed was empty; using popularity ranking");
            recommended = self.popularity().top(wanted);
        }
        let places: Vec<PlaceRecord> = recommended
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(PlaceRecord::from)
            .collect();
        Ok(FeedPage {
            success: true,
            has_more: places.len() == limit,
            places,
            page,
        })
    }

    /// Up to [`SEARCH_RESULTS`] places matching `query`.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyQuery`] when `query` is blank.
    pub fn search(&self, query: &str) -> Result<SearchResults, ServiceError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyQuery.into());
        }
        let places: Vec<PlaceRecord> = self
            .search
            .search(trimmed, SEARCH_RESULTS)
            .into_iter()
            .map(|hit| PlaceRecord::from(hit.place))
            .collect();
        Ok(SearchResults {
            success: true,
            total_results: places.len(),
            places,
            query: trimmed.to_owned(),
        })
    }

    /// Up to [`AUTOCOMPLETE_SUGGESTIONS`] suggestions for `query`.
    ///
    /// Short queries succeed with no suggestions.
    #[must_use]
    pub fn autocomplete(&self, query: &str) -> AutocompleteResults {
        let trimmed = query.trim();
        AutocompleteResults {
            success: true,
            suggestions: self.autocomplete.suggest(trimmed, AUTOCOMPLETE_SUGGESTIONS),
            query: trimmed.to_owned(),
        }
    }

    /// The first place whose name contains `name`, ignoring case, with its
    /// [`SIMILAR_PLACES`] nearest neighbours.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyName`] for a blank name and
    /// [`ServiceError::NotFound`] when no name matches.
    pub fn place_detail(&self, name: &str) -> Result<PlaceDetail, ServiceError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let place = self
            .catalog
            .find_by_name(trimmed)
            .ok_or_else(|| ServiceError::NotFound {
                name: trimmed.to_owned(),
            })?;
        let similar_places = self
            .similarity
            .similar_to(place.name(), SIMILAR_PLACES)
            .into_iter()
            .map(SimilarPlaceRecord::from)
            .collect();
        Ok(PlaceDetail {
            success: true,
            place: PlaceRecord::from(place),
            similar_places,
        })
    }
}

//! Blend of popularity and content similarity.
//!
//! Sixty percent of the requested places come from the popularity ranking.
//! The remainder comes from places similar to the ten most popular ones. The
//! union is deduplicated by name and ordered by popularity.

use std::collections::HashSet;

use discover_core::{Catalog, Place};
use log::warn;

use crate::popularity::by_popularity;
use crate::{ContentSimilarity, PopularityRanker, RankingError};

/// Number of popular places whose neighbours seed the content share.
pub const SEED_COUNT: usize = 10;

/// Neighbours requested per seed.
pub const NEIGHBOURS_PER_SEED: usize = 2;

/// Mixes [`PopularityRanker`] output with a [`ContentSimilarity`] source.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use discover_core::{Catalog, Place, RawPlace};
/// use discover_ranker::{HybridRecommender, PopularityRanker, SimilarityIndex};
///
/// let catalog = Arc::new(Catalog::from_records([
///     RawPlace::new("Taj Mahal", "Agra", "Uttar Pradesh").with_rating(4.8).with_review_volume(50.0),
///     RawPlace::new("Red Fort", "Delhi", "Delhi").with_rating(4.5).with_review_volume(30.0),
///     RawPlace::new("Goa Beach", "Panaji", "Goa").with_rating(4.2).with_review_volume(40.0),
/// ]));
/// let recommender = HybridRecommender::new(
///     PopularityRanker::new(Arc::clone(&catalog)),
///     SimilarityIndex::build(catalog),
/// );
/// let names: Vec<&str> = recommender.recommend(3).into_iter().map(Place::name).collect();
/// assert_eq!(names, ["Taj Mahal", "Goa Beach", "Red Fort"]);
/// ```
#[derive(Debug, Clone)]
pub struct HybridRecommender<S> {
    popularity: PopularityRanker,
    content: S,
}

impl<S: ContentSimilarity> HybridRecommender<S> {
    /// Combine a popularity ranking with a content source over the same
    /// catalog.
    #[must_use]
    pub const fn new(popularity: PopularityRanker, content: S) -> Self {
        Self {
            popularity,
            content,
        }
    }

    /// The popularity ranking used for the collaborative share and fallback.
    #[must_use]
    pub const fn popularity(&self) -> &PopularityRanker {
        &self.popularity
    }

    /// The content source.
    #[must_use]
    pub const fn content(&self) -> &S {
        &self.content
    }

    /// Up to `n` places with distinct names, most popular first.
    ///
    /// When the blend fails as a whole the result is the plain popularity
    /// ranking.
    #[must_use]
    pub fn recommend(&self, n: usize) -> Vec<&Place> {
        self.try_recommend(n).unwrap_or_else(|err| {
            warn!("hybrid blend failed ({err}); using popularity ranking");
            self.popularity.top(n)
        })
    }

    /// The blend without the popularity fallback.
    ///
    /// A seed whose lookup fails is skipped.
    ///
    /// # Errors
    /// Returns [`RankingError::UnknownRow`] when the content source names a
    /// row outside the catalog.
    pub fn try_recommend(&self, n: usize) -> Result<Vec<&Place>, RankingError> {
        let catalog = self.popularity.catalog();
        let collab_count = collaborative_share(n);
        let content_count = n.saturating_sub(collab_count);

        let collab = self.popularity.top_rows(collab_count);
        let mut neighbours = Vec::new();
        for seed in self.popularity.top_rows(SEED_COUNT) {
            let seed_place = place_at(catalog, seed)?;
            match self.content.similar_rows(seed_place.name(), NEIGHBOURS_PER_SEED) {
                Ok(rows) => neighbours.extend(rows),
                Err(err) => warn!("skipping seed {:?}: {err}", seed_place.name()),
            }
        }
        let mut content = distinct_by_name(catalog, neighbours)?;
        content.truncate(content_count);

        let mut combined = distinct_by_name(catalog, collab.into_iter().chain(content))?;
        combined.sort_by(|&left, &right| {
            by_popularity(
                catalog.get(left).map_or(f64::NAN, Place::popularity_score),
                catalog.get(right).map_or(f64::NAN, Place::popularity_score),
            )
            .then(left.cmp(&right))
        });
        combined
            .into_iter()
            .take(n)
            .map(|row| place_at(catalog, row))
            .collect()
    }
}

/// `floor(0.6 * n)`.
const fn collaborative_share(n: usize) -> usize {
    n.saturating_mul(3).div_euclid(5)
}

fn place_at(catalog: &Catalog, row: usize) -> Result<&Place, RankingError> {
    catalog.get(row).ok_or(RankingError::UnknownRow { row })
}

/// Keep the first row for each name, in input order.
fn distinct_by_name(
    catalog: &Catalog,
    rows: impl IntoIterator<Item = usize>,
) -> Result<Vec<usize>, RankingError> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    for row in rows {
        if seen.insert(place_at(catalog, row)?.name()) {
            distinct.push(row);
        }
    }
    Ok(distinct)
}

//! Content-based similarity between catalog rows.
//!
//! Each row's combined text is weighted with TF-IDF once, when the index is
//! built; queries then rank rows by cosine similarity to a resolved row.

mod stopwords;
mod tfidf;

use std::cmp::Ordering;
use std::sync::Arc;

use discover_core::{Catalog, Place};
use log::{debug, info};

use crate::RankingError;
use tfidf::{MAX_FEATURES, TermVector, fit_transform};

/// Source of content-similar rows for a named place.
///
/// [`HybridRecommender`](crate::HybridRecommender) blends popularity with
/// whatever an implementation returns, so alternative similarity measures and
/// test doubles plug in here.
pub trait ContentSimilarity {
    /// Row positions of up to `n` places similar to the place named by
    /// `name_query`.
    ///
    /// # Errors
    /// Implementations report lookups they cannot serve with a
    /// [`RankingError`]; the hybrid blend skips that seed.
    fn similar_rows(&self, name_query: &str, n: usize) -> Result<Vec<usize>, RankingError>;
}

impl<T: ContentSimilarity + ?Sized> ContentSimilarity for Arc<T> {
    fn similar_rows(&self, name_query: &str, n: usize) -> Result<Vec<usize>, RankingError> {
        (**self).similar_rows(name_query, n)
    }
}

/// TF-IDF index over every row's combined text.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use discover_core::{Catalog, Place, RawPlace};
/// use discover_ranker::SimilarityIndex;
///
/// let catalog = Arc::new(Catalog::from_records([
///     RawPlace::new("Baga Beach", "Goa", "Goa"),
///     RawPlace::new("Red Fort", "Delhi", "Delhi"),
///     RawPlace::new("Calangute Beach", "Goa", "Goa"),
/// ]));
/// let index = SimilarityIndex::build(catalog);
/// let names: Vec<&str> = index.similar_to("baga", 1).into_iter().map(Place::name).collect();
/// assert_eq!(names, ["Calangute Beach"]);
/// ```
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    catalog: Arc<Catalog>,
    vectors: Vec<TermVector>,
}

impl SimilarityIndex {
    /// Weight every row of `catalog`.
    #[must_use]
    pub fn build(catalog: Arc<Catalog>) -> Self {
        let weighted = fit_transform(catalog.iter().map(Place::combined_text), MAX_FEATURES);
        let empty_rows = weighted
            .vectors
            .iter()
            .filter(|vector| vector.is_zero())
            .count();
        debug!(
            "built similarity index: {} rows, {} terms, {empty_rows} rows without terms",
            weighted.vectors.len(),
            weighted.vocabulary
        );
        Self {
            catalog,
            vectors: weighted.vectors,
        }
    }

    /// The indexed catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Up to `n` places most similar to the first place whose name contains
    /// `name_query`, ignoring case.
    ///
    /// The resolved place itself is never returned. Equal similarities keep
    /// catalog order. When no name matches, the first `n` rows in catalog
    /// order are returned instead.
    #[must_use]
    pub fn similar_to(&self, name_query: &str, n: usize) -> Vec<&Place> {
        self.try_similar_to(name_query, n).unwrap_or_else(|err| {
            info!("{err}; returning the first {n} places instead");
            self.catalog.head(n).collect()
        })
    }

    /// Like [`similar_to`](Self::similar_to) without the fallback.
    ///
    /// # Errors
    /// Returns [`RankingError::NotFound`] when no name contains `name_query`.
    pub fn try_similar_to(&self, name_query: &str, n: usize) -> Result<Vec<&Place>, RankingError> {
        let rows = self.resolved_neighbours(name_query, n)?;
        Ok(rows
            .into_iter()
            .filter_map(|row| self.catalog.get(row))
            .collect())
    }

    /// Cosine similarity between rows `left` and `right`, in `0.0..=1.0`.
    ///
    /// Rows without any retained term are dissimilar to every row, themselves
    /// included.
    ///
    /// # Errors
    /// Returns [`RankingError::UnknownRow`] when either row is outside the
    /// catalog.
    pub fn similarity(&self, left: usize, right: usize) -> Result<f64, RankingError> {
        let left_vector = self.vector(left)?;
        let right_vector = self.vector(right)?;
        Ok(left_vector.cosine(right_vector))
    }

    fn vector(&self, row: usize) -> Result<&TermVector, RankingError> {
        self.vectors.get(row).ok_or(RankingError::UnknownRow { row })
    }

    fn resolved_neighbours(&self, name_query: &str, n: usize) -> Result<Vec<usize>, RankingError> {
        let row = self
            .catalog
            .position_by_name(name_query)
            .ok_or_else(|| RankingError::NotFound {
                query: name_query.to_owned(),
            })?;
        Ok(self.neighbours(row, n))
    }

    fn neighbours(&self, row: usize, n: usize) -> Vec<usize> {
        let Some(target) = self.vectors.get(row) else {
            return Vec::new();
        };
        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != row)
            .map(|(other, vector)| (other, target.cosine(vector)))
            .collect();
        scored.sort_by(|left, right| right.1.partial_cmp(&left.1).unwrap_or(Ordering::Equal));
        scored.into_iter().take(n).map(|(other, _)| other).collect()
    }
}

impl ContentSimilarity for SimilarityIndex {
    fn similar_rows(&self, name_query: &str, n: usize) -> Result<Vec<usize>, RankingError> {
        Ok(self
            .resolved_neighbours(name_query, n)
            .unwrap_or_else(|err| {
                info!("{err}; returning the first {n} rows instead");
                (0..self.catalog.len()).take(n).collect()
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discover_core::RawPlace;
    use discover_core::test_support::{destinations, three_landmarks};
    use rstest::{fixture, rstest};

    #[fixture]
    fn index() -> SimilarityIndex {
        SimilarityIndex::build(Arc::new(destinations()))
    }

    fn names<'a>(places: &[&'a Place]) -> Vec<&'a str> {
        places.iter().map(|place| place.name()).collect()
    }

    #[rstest]
    fn never_returns_the_resolved_place(index: SimilarityIndex) {
        let similar = index.similar_to("Taj Mahal", 5);
        assert_eq!(similar.len(), 5);
        assert!(similar.iter().all(|place| place.name() != "Taj Mahal"));
    }

    #[rstest]
    fn shared_city_and_season_rank_first(index: SimilarityIndex) {
        // Agra Fort shares state, city, and best-time text with the Taj Mahal.
        let similar = index.similar_to("taj", 1);
        assert_eq!(names(&similar), ["Agra Fort"]);
    }

    #[rstest]
    fn unmatched_query_falls_back_to_head_rows(index: SimilarityIndex) {
        let similar = index.similar_to("Lotus Temple", 3);
        assert_eq!(names(&similar), ["Taj Mahal", "Agra Fort", "Red Fort"]);
    }

    #[rstest]
    fn strict_lookup_reports_unmatched_query(index: SimilarityIndex) {
        let err = index
            .try_similar_to("Lotus Temple", 3)
            .expect_err("no place is named Lotus Temple");
        assert_eq!(
            err,
            RankingError::NotFound {
                query: "Lotus Temple".to_owned()
            }
        );
    }

    #[rstest]
    fn trait_lookup_applies_fallback(index: SimilarityIndex) {
        let rows = index
            .similar_rows("Lotus Temple", 2)
            .expect("fallback never fails");
        assert_eq!(rows, [0, 1]);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "test compares float similarity")]
    fn similarity_is_symmetric_and_bounded(index: SimilarityIndex) {
        let forward = index.similarity(0, 1).expect("rows exist");
        let backward = index.similarity(1, 0).expect("rows exist");
        assert!((forward - backward).abs() < 1e-12);
        assert!((0.0..=1.0).contains(&forward));
        assert!((index.similarity(2, 2).expect("row exists") - 1.0).abs() < 1e-9);
    }

    #[rstest]
    fn similarity_rejects_rows_outside_catalog(index: SimilarityIndex) {
        assert_eq!(
            index.similarity(0, 99),
            Err(RankingError::UnknownRow { row: 99 })
        );
    }

    #[rstest]
    fn zero_vector_rows_are_dissimilar_to_everything() {
        let catalog = Catalog::from_records([
            RawPlace::default(),
            RawPlace::new("Red Fort", "Delhi", "Delhi"),
        ]);
        let index = SimilarityIndex::build(Arc::new(catalog));
        assert_eq!(index.similarity(0, 1), Ok(0.0));
        assert_eq!(index.similarity(0, 0), Ok(0.0));
    }

    #[rstest]
    fn requesting_more_than_available_returns_all_others() {
        let index = SimilarityIndex::build(Arc::new(three_landmarks()));
        assert_eq!(index.similar_to("Red Fort", 10).len(), 2);
    }
}

//! Global ranking by popularity score.

use std::cmp::Ordering;
use std::sync::Arc;

use discover_core::{Catalog, Place};

/// Ranks every catalog row by its popularity score.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use discover_core::{Catalog, Place, RawPlace};
/// use discover_ranker::PopularityRanker;
///
/// let catalog = Arc::new(Catalog::from_records([
///     RawPlace::new("Red Fort", "Delhi", "Delhi").with_rating(4.5).with_review_volume(30.0),
///     RawPlace::new("Taj Mahal", "Agra", "Uttar Pradesh").with_rating(4.8).with_review_volume(50.0),
/// ]));
/// let ranker = PopularityRanker::new(catalog);
/// let names: Vec<&str> = ranker.top(1).into_iter().map(Place::name).collect();
/// assert_eq!(names, ["Taj Mahal"]);
/// ```
#[derive(Debug, Clone)]
pub struct PopularityRanker {
    catalog: Arc<Catalog>,
}

impl PopularityRanker {
    /// Rank rows of a shared catalog.
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The catalog being ranked.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The `n` most popular places, most popular first.
    ///
    /// Equal scores keep catalog order. Non-finite scores sort after every
    /// finite one.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&Place> {
        self.top_rows(n)
            .into_iter()
            .filter_map(|row| self.catalog.get(row))
            .collect()
    }

    /// Row positions of the `n` most popular places.
    #[must_use]
    pub fn top_rows(&self, n: usize) -> Vec<usize> {
        let mut ranked: Vec<(usize, f64)> = self
            .catalog
            .iter()
            .map(Place::popularity_score)
            .enumerate()
            .collect();
        ranked.sort_by(|left, right| by_popularity(left.1, right.1));
        ranked.into_iter().take(n).map(|(row, _)| row).collect()
    }
}

/// Descending order on popularity scores with non-finite values last.
///
/// Callers rely on a stable sort to keep catalog order among equal scores.
pub(crate) fn by_popularity(left: f64, right: f64) -> Ordering {
    match (left.is_finite(), right.is_finite()) {
        (true, true) => right.partial_cmp(&left).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

//! Case-insensitive keyword search over place names and locations.

use std::sync::Arc;

use discover_core::text::{contains_folded, equals_folded, fold};
use discover_core::{Catalog, Place};

use crate::popularity::by_popularity;

/// Bonus when the name equals the query.
pub const EXACT_NAME: u32 = 10;
/// Bonus when the city equals the query.
pub const EXACT_CITY: u32 = 8;
/// Bonus when the state equals the query.
pub const EXACT_STATE: u32 = 6;
/// Bonus when the name contains the query.
pub const PARTIAL_NAME: u32 = 5;
/// Bonus when the city contains the query.
pub const PARTIAL_CITY: u32 = 3;
/// Bonus when the state contains the query.
pub const PARTIAL_STATE: u32 = 2;

/// A matching place and its relevance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    /// The matching place.
    pub place: &'a Place,
    /// Sum of every bonus the place earned.
    pub relevance: u32,
}

/// Keyword search with additive relevance scoring.
///
/// A row qualifies when its name, city, state, or best-time text contains the
/// query, ignoring case. Exact and partial bonuses stack, so a city equal to
/// the query earns both [`EXACT_CITY`] and [`PARTIAL_CITY`]. Best-time matches
/// qualify a row without adding relevance.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use discover_core::{Catalog, RawPlace};
/// use discover_ranker::SearchMatcher;
///
/// let catalog = Arc::new(Catalog::from_records([
///     RawPlace::new("Taj Mahal", "Agra", "Uttar Pradesh"),
///     RawPlace::new("India Gate", "New Delhi", "Delhi"),
/// ]));
/// let matcher = SearchMatcher::new(catalog);
/// let hits = matcher.search("DELHI", 5);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].relevance, 11);
/// ```
#[derive(Debug, Clone)]
pub struct SearchMatcher {
    catalog: Arc<Catalog>,
}

impl SearchMatcher {
    /// Search a shared catalog.
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Up to `n` matching places by relevance, then popularity, then catalog
    /// order.
    ///
    /// No match yields an empty result.
    #[must_use]
    pub fn search(&self, query: &str, n: usize) -> Vec<SearchHit<'_>> {
        let folded = fold(query);
        let mut hits: Vec<SearchHit<'_>> = self
            .catalog
            .iter()
            .filter(|place| qualifies(place, &folded))
            .map(|place| SearchHit {
                place,
                relevance: relevance(place, &folded),
            })
            .collect();
        hits.sort_by(|left, right| {
            right.relevance.cmp(&left.relevance).then_with(|| {
                by_popularity(left.place.popularity_score(), right.place.popularity_score())
            })
        });
        hits.truncate(n);
        hits
    }
}

fn qualifies(place: &Place, folded: &str) -> bool {
    [place.name(), place.city(), place.state(), place.best_time()]
        .into_iter()
        .any(|field| contains_folded(field, folded))
}

fn relevance(place: &Place, folded: &str) -> u32 {
    let bonuses = [
        (equals_folded(place.name(), folded), EXACT_NAME),
        (equals_folded(place.city(), folded), EXACT_CITY),
        (equals_folded(place.state(), folded), EXACT_STATE),
        (contains_folded(place.name(), folded), PARTIAL_NAME),
        (contains_folded(place.city(), folded), PARTIAL_CITY),
        (contains_folded(place.state(), folded), PARTIAL_STATE),
    ];
    bonuses
        .into_iter()
        .filter_map(|(earned, bonus)| earned.then_some(bonus))
        .sum()
}

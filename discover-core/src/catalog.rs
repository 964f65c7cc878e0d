//! The immutable, ordered set of destinations every ranker reads.
//!
//! Row order is input order and doubles as the tie-break for every ranking.
//! Rows are identified by their position; deduplication across rankers uses
//! the `name` field.

use std::collections::BTreeSet;

use log::warn;

use crate::text::{contains_folded, fold};
use crate::{Place, RawPlace};

/// Ordered, read-only collection of prepared places.
///
/// # Examples
/// ```
/// use discover_core::{Catalog, RawPlace};
///
/// let catalog = Catalog::from_records([
///     RawPlace::new("Red Fort", "Delhi", "Delhi").with_rating(4.5),
///     RawPlace::new("Qutub Minar", "Delhi", "Delhi"),
/// ]);
/// assert_eq!(catalog.position_by_name("qutub"), Some(1));
/// assert!(catalog.find_by_name("lotus").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    /// Prepare a catalog from raw records.
    ///
    /// Missing ratings and review volumes are replaced with the mean of the
    /// values present in the input, computed once before any replacement.
    /// A field with no present values at all is filled with `0.0`.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawPlace>,
    {
        let records: Vec<RawPlace> = records.into_iter().collect();
        let rating_fill = fill_value("rating", records.iter().map(|raw| raw.rating));
        let review_fill = fill_value(
            "review volume",
            records.iter().map(|raw| raw.review_volume),
        );
        let places = records
            .into_iter()
            .map(|raw| Place::prepare(raw, rating_fill, review_fill))
            .collect();
        Self { places }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Report whether the catalog has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Return the row at `row`, if present.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&Place> {
        self.places.get(row)
    }

    /// All rows in catalog order.
    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Iterate over rows in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Place> {
        self.places.iter()
    }

    /// The first `n` rows in catalog order.
    pub fn head(&self, n: usize) -> impl Iterator<Item = &Place> {
        self.places.iter().take(n)
    }

    /// Position of the first row whose name contains `query`, ignoring case.
    #[must_use]
    pub fn position_by_name(&self, query: &str) -> Option<usize> {
        let folded = fold(query);
        self.places
            .iter()
            .position(|place| contains_folded(place.name(), &folded))
    }

    /// First row whose name contains `query`, ignoring case.
    #[must_use]
    pub fn find_by_name(&self, query: &str) -> Option<&Place> {
        self.position_by_name(query).and_then(|row| self.get(row))
    }

    /// Aggregate counts for an overview of the catalog.
    ///
    /// # Examples
    /// ```
    /// use discover_core::{Catalog, RawPlace};
    ///
    /// let catalog = Catalog::from_records([
    ///     RawPlace::new("Red Fort", "Delhi", "Delhi").with_rating(4.0),
    ///     RawPlace::new("Taj Mahal", "Agra", "Uttar Pradesh").with_rating(5.0),
    /// ]);
    /// let summary = catalog.summary();
    /// assert_eq!(summary.destinations, 2);
    /// assert_eq!(summary.states, 2);
    /// assert_eq!(summary.average_rating, Some(4.5));
    /// ```
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        let states: BTreeSet<&str> = self.distinct(Place::state);
        let cities: BTreeSet<&str> = self.distinct(Place::city);
        CatalogSummary {
            destinations: self.len(),
            states: states.len(),
            cities: cities.len(),
            average_rating: mean(self.places.iter().map(Place::rating)),
        }
    }

    fn distinct<'a>(&'a self, field: fn(&'a Place) -> &'a str) -> BTreeSet<&'a str> {
        self.places
            .iter()
            .map(field)
            .filter(|value| !value.is_empty())
            .collect()
    }
}

impl FromIterator<RawPlace> for Catalog {
    fn from_iter<T: IntoIterator<Item = RawPlace>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Place;
    type IntoIter = std::slice::Iter<'a, Place>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Overview figures for a catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatalogSummary {
    /// Number of rows.
    pub destinations: usize,
    /// Number of distinct non-empty states.
    pub states: usize,
    /// Number of distinct non-empty cities.
    pub cities: usize,
    /// Mean imputed rating, absent for an empty catalog.
    pub average_rating: Option<f64>,
}

fn fill_value(field: &str, values: impl Iterator<Item = Option<f64>>) -> f64 {
    if let Some(value) = mean(values.flatten()) {
        value
    } else {
        warn!("no {field} values present; imputing 0.0 for every row");
        0.0
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0_f64, 0_usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    (count > 0).then(|| sum / count as f64)
}

//! Type-ahead suggestions drawn from names, cities, and states.
//!
//! Matching here is case-sensitive, unlike [`SearchMatcher`](crate::SearchMatcher).

use std::collections::HashSet;
use std::sync::Arc;

use discover_core::{Catalog, Place};
use serde::Serialize;

/// Shortest trimmed query that produces suggestions.
pub const MIN_QUERY_CHARS: usize = 2;

/// Label given to state suggestions in place of a location.
const STATE_LOCATION: &str = "State";

/// Which field a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// A place name.
    Name,
    /// A city.
    City,
    /// A state.
    State,
}

impl SuggestionKind {
    /// Fixed ordering weight of the kind; higher sorts first.
    #[must_use]
    pub const fn priority(self) -> u32 {
        match self {
            Self::Name => 100,
            Self::City => 50,
            Self::State => 25,
        }
    }
}

/// One type-ahead entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// Field the text came from.
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Text to complete to.
    pub text: String,
    /// Where the suggestion is, for display.
    pub location: String,
    /// Rating of the row that produced the suggestion.
    pub rating: f64,
    /// Ordering weight taken from [`SuggestionKind::priority`].
    #[serde(rename = "relevance_score")]
    pub priority: u32,
}

impl Suggestion {
    fn new(kind: SuggestionKind, place: &Place) -> Self {
        let (text, location) = match kind {
            SuggestionKind::Name => (place.name().to_owned(), place.location()),
            SuggestionKind::City => (place.city().to_owned(), place.state().to_owned()),
            SuggestionKind::State => (place.state().to_owned(), STATE_LOCATION.to_owned()),
        };
        Self {
            kind,
            text,
            location,
            rating: place.rating(),
            priority: kind.priority(),
        }
    }
}

/// Produces suggestions for partially typed queries.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use discover_core::{Catalog, RawPlace};
/// use discover_ranker::{AutocompleteMatcher, SuggestionKind};
///
/// let catalog = Arc::new(Catalog::from_records([
///     RawPlace::new("Goa Beach", "Panaji", "Goa").with_rating(4.2),
/// ]));
/// let matcher = AutocompleteMatcher::new(catalog);
/// let kinds: Vec<SuggestionKind> = matcher.suggest("Go", 8).iter().map(|s| s.kind).collect();
/// assert_eq!(kinds, [SuggestionKind::Name, SuggestionKind::State]);
/// assert!(matcher.suggest("go", 8).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct AutocompleteMatcher {
    catalog: Arc<Catalog>,
}

impl AutocompleteMatcher {
    /// Suggest from a shared catalog.
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Up to `max` suggestions for `query`.
    ///
    /// Queries shorter than [`MIN_QUERY_CHARS`] after trimming yield nothing.
    /// Each distinct kind and text appears once, names before cities before
    /// states, each group in catalog order.
    #[must_use]
    pub fn suggest(&self, query: &str, max: usize) -> Vec<Suggestion> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }
        let fields: [(SuggestionKind, fn(&Place) -> &str); 3] = [
            (SuggestionKind::Name, Place::name),
            (SuggestionKind::City, Place::city),
            (SuggestionKind::State, Place::state),
        ];
        let mut seen = HashSet::new();
        let mut suggestions: Vec<Suggestion> = fields
            .into_iter()
            .flat_map(|(kind, field)| {
                self.catalog
                    .iter()
                    .filter(move |&place| field(place).contains(trimmed))
                    .map(move |place| Suggestion::new(kind, place))
            })
            .filter(|suggestion| seen.insert((suggestion.kind, suggestion.text.clone())))
            .collect();
        suggestions.sort_by(|left, right| right.priority.cmp(&left.priority));
        suggestions.truncate(max);
        suggestions
    }
}

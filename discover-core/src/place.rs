//! Catalog rows: the raw input record and the prepared [`Place`].

/// A destination as read from the source, before imputation.
///
/// Text fields are `None` when the source cell was empty. Numeric fields are
/// `None` when the cell was empty or not a finite number.
///
/// # Examples
/// ```
/// use discover_core::RawPlace;
///
/// let raw = RawPlace::new("Red Fort", "Delhi", "Delhi")
///     .with_rating(4.5)
///     .with_best_time("Winter");
/// assert_eq!(raw.name.as_deref(), Some("Red Fort"));
/// assert!(raw.review_volume.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawPlace {
    /// Display name; also the identity used for deduplication.
    pub name: Option<String>,
    /// City the destination belongs to.
    pub city: Option<String>,
    /// State the destination belongs to.
    pub state: Option<String>,
    /// Free-text advice on when to visit.
    pub best_time: Option<String>,
    /// Review rating, nominally `0.0..=5.0`.
    pub rating: Option<f64>,
    /// Number of reviews in lakhs (hundred-thousands).
    pub review_volume: Option<f64>,
    /// Image reference.
    pub image_url: Option<String>,
}

impl RawPlace {
    /// Construct a record with the three identifying text fields.
    pub fn new(name: impl Into<String>, city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            city: Some(city.into()),
            state: Some(state.into()),
            ..Self::default()
        }
    }

    /// Set the rating while returning `self` for chaining.
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the review volume while returning `self` for chaining.
    #[must_use]
    pub fn with_review_volume(mut self, review_volume: f64) -> Self {
        self.review_volume = Some(review_volume);
        self
    }

    /// Set the best-time text while returning `self` for chaining.
    #[must_use]
    pub fn with_best_time(mut self, best_time: impl Into<String>) -> Self {
        self.best_time = Some(best_time.into());
        self
    }

    /// Set the image reference while returning `self` for chaining.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// A prepared catalog row.
///
/// Places are only built by [`Catalog`](crate::Catalog), which guarantees the
/// numeric fields are imputed and the derived fields agree with them. Fields
/// are read through accessors so a shared catalog cannot be altered.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    name: String,
    city: String,
    state: String,
    best_time: String,
    rating: f64,
    review_volume: f64,
    image_url: String,
    popularity_score: f64,
    combined_text: String,
}

impl Place {
    /// Prepare a row using the catalog-wide means for missing numbers.
    pub(crate) fn prepare(raw: RawPlace, rating_fill: f64, review_fill: f64) -> Self {
        let rating = raw.rating.unwrap_or(rating_fill);
        let review_volume = raw.review_volume.unwrap_or(review_fill);
        let name = raw.name.unwrap_or_default();
        let city = raw.city.unwrap_or_default();
        let state = raw.state.unwrap_or_default();
        let best_time = raw.best_time.unwrap_or_default();
        let combined_text = [
            state.as_str(),
            city.as_str(),
            name.as_str(),
            best_time.as_str(),
        ]
        .join(" ");
        Self {
            popularity_score: popularity(rating, review_volume),
            name,
            city,
            state,
            best_time,
            rating,
            review_volume,
            image_url: raw.image_url.unwrap_or_default(),
            combined_text,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// City, or `""` when the source had none.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// State, or `""` when the source had none.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Best time to visit, or `""` when the source had none.
    #[must_use]
    pub fn best_time(&self) -> &str {
        &self.best_time
    }

    /// Imputed rating.
    #[must_use]
    pub const fn rating(&self) -> f64 {
        self.rating
    }

    /// Imputed review volume in lakhs.
    #[must_use]
    pub const fn review_volume(&self) -> f64 {
        self.review_volume
    }

    /// Image reference, or `""` when absent.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// `rating * ln(1 + review_volume)`.
    #[must_use]
    pub const fn popularity_score(&self) -> f64 {
        self.popularity_score
    }

    /// State, city, name and best time joined by single spaces.
    #[must_use]
    pub fn combined_text(&self) -> &str {
        &self.combined_text
    }

    /// `"{city}, {state}"`, as shown next to a place.
    ///
    /// # Examples
    /// ```
    /// use discover_core::{Catalog, RawPlace};
    ///
    /// let catalog = Catalog::from_records([RawPlace::new("Red Fort", "Delhi", "Delhi")]);
    /// let place = catalog.get(0).expect("one row");
    /// assert_eq!(place.location(), "Delhi, Delhi");
    /// ```
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

fn popularity(rating: f64, review_volume: f64) -> f64 {
    rating * review_volume.ln_1p()
}

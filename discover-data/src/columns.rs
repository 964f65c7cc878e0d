//! Header names of the destination file.

/// State column.
pub const STATE: &str = "State";
/// City column.
pub const CITY: &str = "City";
/// Destination name column.
pub const NAME: &str = "Name";
/// Review rating column.
pub const RATING: &str = "Google review rating";
/// Review volume column, in lakhs.
pub const REVIEW_VOLUME: &str = "Number of google review in lakhs";
/// Best-time-to-visit column.
pub const BEST_TIME: &str = "Best Time to visit";
/// Optional image reference column.
pub const IMAGE_URL: &str = "image_url";

/// Columns a source must provide.
pub const REQUIRED: [&str; 6] = [STATE, CITY, NAME, RATING, REVIEW_VOLUME, BEST_TIME];

//! Test-only catalog fixtures used by unit and behaviour tests across the
//! workspace.

use crate::{Catalog, RawPlace};

/// Three well-known landmarks with distinct popularity scores.
///
/// Popularity order is Taj Mahal, Goa Beach, Red Fort.
#[must_use]
pub fn three_landmarks() -> Catalog {
    Catalog::from_records([
        RawPlace::new("Taj Mahal", "Agra", "Uttar Pradesh")
            .with_rating(4.8)
            .with_review_volume(50.0),
        RawPlace::new("Red Fort", "Delhi", "Delhi")
            .with_rating(4.5)
            .with_review_volume(30.0),
        RawPlace::new("Goa Beach", "Panaji", "Goa")
            .with_rating(4.2)
            .with_review_volume(40.0),
    ])
}

/// A larger catalog with shared cities and states, best-time text, images,
/// a duplicated name, and one row with missing numbers.
#[must_use]
pub fn destinations() -> Catalog {
    Catalog::from_records(destination_records())
}

/// Raw records behind [`destinations`].
#[must_use]
pub fn destination_records() -> Vec<RawPlace> {
    vec![
        place("Taj Mahal", "Agra", "Uttar Pradesh", 4.6, 2.1, "October to March"),
        place("Agra Fort", "Agra", "Uttar Pradesh", 4.5, 0.9, "October to March"),
        place("Red Fort", "Delhi", "Delhi", 4.5, 1.6, "October to March"),
        place("Qutub Minar", "Delhi", "Delhi", 4.5, 1.5, "All year"),
        place("India Gate", "Delhi", "Delhi", 4.6, 2.6, "All year"),
        place("Baga Beach", "Goa", "Goa", 4.4, 0.8, "November to February"),
        place("Calangute Beach", "Goa", "Goa", 4.3, 0.9, "November to February"),
        place("Gateway of India", "Mumbai", "Maharashtra", 4.6, 1.9, "All year"),
        place("Marine Drive", "Mumbai", "Maharashtra", 4.7, 1.4, "Evening all year"),
        place("Golden Temple", "Amritsar", "Punjab", 4.9, 1.9, "All year"),
        place("Hawa Mahal", "Jaipur", "Rajasthan", 4.4, 0.8, "October to March"),
        place("Amber Fort", "Jaipur", "Rajasthan", 4.6, 0.7, "October to March"),
        place("Red Fort", "Old Delhi", "Delhi", 4.0, 0.1, "Winter"),
        RawPlace::new("Charminar", "Hyderabad", "Telangana")
            .with_best_time("October to March")
            .with_image_url("https://img.example/charminar.jpg"),
    ]
}

fn place(
    name: &str,
    city: &str,
    state: &str,
    rating: f64,
    review_volume: f64,
    best_time: &str,
) -> RawPlace {
    RawPlace::new(name, city, state)
        .with_rating(rating)
        .with_review_volume(review_volume)
        .with_best_time(best_time)
}

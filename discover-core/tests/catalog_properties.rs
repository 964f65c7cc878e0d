//! Property checks for catalog preparation.

use discover_core::{Catalog, RawPlace};
use proptest::prelude::*;

fn raw_place() -> impl Strategy<Value = RawPlace> {
    (
        "[A-Za-z ]{1,12}",
        proptest::option::of(0.0_f64..=5.0),
        proptest::option::of(0.0_f64..=100.0),
    )
        .prop_map(|(name, rating, review_volume)| RawPlace {
            name: Some(name),
            rating,
            review_volume,
            ..RawPlace::default()
        })
}

proptest! {
    #[test]
    fn popularity_is_non_negative_for_non_negative_ratings(
        records in proptest::collection::vec(raw_place(), 0..24)
    ) {
        let catalog = Catalog::from_records(records);
        for place in &catalog {
            prop_assert!(place.popularity_score() >= 0.0);
        }
    }

    #[test]
    fn preparation_keeps_every_row_in_order(
        records in proptest::collection::vec(raw_place(), 0..24)
    ) {
        let names: Vec<String> = records.iter().filter_map(|raw| raw.name.clone()).collect();
        let catalog = Catalog::from_records(records);
        let prepared: Vec<String> = catalog.iter().map(|place| place.name().to_owned()).collect();
        prop_assert_eq!(prepared, names);
    }

    #[test]
    fn present_values_are_never_replaced(
        records in proptest::collection::vec(raw_place(), 1..24)
    ) {
        let catalog = Catalog::from_records(records.clone());
        for (raw, place) in records.iter().zip(&catalog) {
            if let Some(rating) = raw.rating {
                prop_assert!((place.rating() - rating).abs() < 1e-12);
            }
        }
    }
}

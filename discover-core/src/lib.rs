//! Core domain types for the Discover engine.
//!
//! A [`Catalog`] is the ordered, immutable set of [`Place`] rows every ranker
//! reads. It is built once from [`RawPlace`] records: missing numeric cells
//! are imputed with the mean of the present values, and each row gains a
//! popularity score and a concatenated text field for similarity search.
//!
//! # Examples
//!
//! ```
//! use discover_core::{Catalog, RawPlace};
//!
//! let catalog = Catalog::from_records([
//!     RawPlace::new("Taj Mahal", "Agra", "Uttar Pradesh")
//!         .with_rating(4.8)
//!         .with_review_volume(50.0),
//!     RawPlace::new("Red Fort", "Delhi", "Delhi").with_review_volume(30.0),
//! ]);
//!
//! assert_eq!(catalog.len(), 2);
//! // The missing rating is imputed with the mean of the present ratings.
//! assert_eq!(catalog.get(1).map(|place| place.rating()), Some(4.8));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod place;
pub mod text;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogSummary};
pub use place::{Place, RawPlace};

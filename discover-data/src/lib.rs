//! Catalog sources for the Discover engine.
//!
//! Responsibilities:
//! - Read the tabular destination file and coerce its cells into
//!   [`RawPlace`](discover_core::RawPlace) records.
//! - Reject sources that are missing, unreadable, malformed, or lack a
//!   required column with a [`DataLoadError`].
//!
//! Boundaries:
//! - Imputation and derived fields are domain rules and live in
//!   `discover-core`.
//!
//! Loading is the only step that can abort start-up; everything downstream
//! works on the prepared, immutable [`Catalog`](discover_core::Catalog).
#![forbid(unsafe_code)]

pub mod columns;
mod error;
mod loader;

pub use error::DataLoadError;
pub use loader::{load_catalog, read_catalog, read_records};

//! Translation catalog parser.
//!
//! Catalogs are the on-disk form of one language's sub-map. The parser only
//! produces entries; the table layer decides what a duplicate key means.

mod catalog;
pub mod error;

pub use catalog::{CatalogEntry, parse_catalog};
pub use error::ParseError;

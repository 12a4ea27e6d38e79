//! Site-wide image data management.
//!
//! This module holds the table that maps image identifiers to metadata
//! records. The host build pipeline loads the table from a data file
//! before any page renders; tag instances only ever read it.
//!
//! # Data file
//!
//! One TOML table per image:
//!
//! ```toml
//! [squirrel]
//! alt = "A lovely squirrel (via include + data)"
//! path = "/images/squirrel.jpg"
//! caption = "A lovely squirrel (via include + data)"
//! credit_url = "https://www.flickr.com/photos/47644980@N00/5681166704"
//! credit_name = "hakim.cassimally"
//! ```
//!
//! Records are schemaless: the `image.html` partial decides which fields
//! mean something, the table just carries them.

mod error;
mod table;
mod types;

pub use error::DataError;
pub use table::{ImageTable, SharedImageTable};
pub use types::ImageRecord;

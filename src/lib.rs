//! An `image` shortcode for tera-based static sites.
//!
//! Pages refer to images by identifier; the identifier resolves against a
//! site-wide data table and renders through a shared `image.html` partial.
//! Markup lives in the partial, metadata lives in the data file, and pages
//! only ever write `{{ image(id="squirrel") }}`.
//!
//! # Architecture
//!
//! ```text
//! page template ──► image(id="...") ──► ImageTag::parse
//!                                            │
//!                  ImageTable (shared) ◄── lookup (fresh on every render)
//!                                            │
//!                  Bindings::with_binding("include", record)
//!                                            │
//!                  Partials::render("image.html") ──► <figure> markup
//! ```
//!
//! The table and the partial set are injected into each [`RenderContext`];
//! nothing is resolved through a global registry. The `include` binding is
//! scoped to one tag render and unwound on success and failure alike, so
//! sibling and nested tags never observe each other's records.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use image_tag::{ImageTable, ImageTag, Partials, RenderContext};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = ImageTable::from_path(Path::new("data/images.toml"))?.into_shared();
//! let partials = Arc::new(Partials::from_dir(Path::new("includes"))?);
//!
//! let mut context = RenderContext::new(table, partials);
//! let figure = ImageTag::parse("squirrel").render(&mut context)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Unknown identifiers
//!
//! A lookup miss is a hard error, not an empty figure. The build fails
//! with `unknown image identifier` naming the offending id; see
//! [`TagError`].

pub mod data;
pub mod render;
pub mod tag;

pub use data::{DataError, ImageRecord, ImageTable, SharedImageTable};
pub use render::{Bindings, IMAGE_PARTIAL, Partials, PartialsError, RenderContext};
pub use tag::{ImageTag, TagError, function::register};

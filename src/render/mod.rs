//! Host-engine surfaces consumed by the tag.
//!
//! Three small pieces sit between the tag and the `tera` engine:
//!
//! - [`Partials`]: the site's includes directory, parsed once and
//!   rendered by name.
//! - [`Bindings`]: the page's variable environment, with a scoped
//!   bind-render-restore construct.
//! - [`RenderContext`]: one page render's view of the world; the image
//!   table and partials are injected here, never looked up ambiently.

mod bindings;
mod context;
mod error;
mod partials;

pub use bindings::Bindings;
pub use context::RenderContext;
pub use error::PartialsError;
pub use partials::{IMAGE_PARTIAL, Partials};

//! The image tag.
//!
//! An image tag turns an identifier written in a page source into a
//! `<figure>` block: it looks the identifier up in the site's image
//! table and renders the `image.html` partial with the record bound to
//! `include`. All markup decisions belong to the partial; the tag
//! returns its output unmodified.
//!
//! # Lifecycle
//!
//! A tag instance is parsed once per occurrence in a template and reused
//! across every render pass of that template. The table lookup happens
//! fresh on each render, so a table reload between builds is observed
//! without re-parsing the page.
//!
//! # Unknown identifiers
//!
//! A lookup miss fails the render with [`TagError::UnknownImage`] rather
//! than producing a figure with blank fields. A figure that looks right
//! but is empty survives review far longer than a build error does.

mod error;
pub mod function;

use crate::render::{IMAGE_PARTIAL, RenderContext};

pub use error::TagError;

/// One `image` tag occurrence in a page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTag {
    id: String,
}

impl ImageTag {
    /// Parse the tag's argument text into an identifier.
    ///
    /// Surrounding whitespace is trimmed; nothing else is validated here.
    /// An empty identifier is accepted and fails at render time as an
    /// unknown image.
    pub fn parse(text: &str) -> Self {
        Self {
            id: text.trim().to_string(),
        }
    }

    /// The identifier this tag renders.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Render this tag within the given context.
    ///
    /// Looks the identifier up in the context's image table, binds the
    /// record to `include` for the duration of the partial render, and
    /// returns the partial's output. The binding is unwound whether the
    /// render succeeds or fails.
    pub fn render(&self, context: &mut RenderContext) -> Result<String, TagError> {
        let record = context
            .table()
            .read()
            .get(&self.id)
            .cloned()
            .ok_or_else(|| TagError::UnknownImage(self.id.clone()))?;
        let record = tera::to_value(record).map_err(tera::Error::from)?;

        let partials = std::sync::Arc::clone(context.partials());
        let html = context
            .bindings_mut()
            .with_binding("include", record, |vars| {
                partials.render(IMAGE_PARTIAL, vars)
            })?;
        Ok(html)
    }
}

//! Per-render context handed to tag instances.
//!
//! The image table and the partial set are injected here at construction
//! instead of being reached through a build-wide registry: a tag can only
//! see what its context was given.

use std::sync::Arc;

use crate::data::SharedImageTable;

use super::bindings::Bindings;
use super::partials::Partials;

/// Everything a tag needs to render: the variable environment for the
/// current page, the shared image table, and the loaded partials.
///
/// One context belongs to one page render; independent pages get
/// independent contexts (sharing the table and partials through their
/// `Arc` handles) so concurrent page renders never contend on bindings.
pub struct RenderContext {
    bindings: Bindings,
    table: SharedImageTable,
    partials: Arc<Partials>,
}

impl RenderContext {
    /// Create a context over the given table and partials.
    pub fn new(table: SharedImageTable, partials: Arc<Partials>) -> Self {
        Self {
            bindings: Bindings::new(),
            table,
            partials,
        }
    }

    /// Replace the page's variable environment (front-matter, page vars).
    pub fn with_bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// The shared image table.
    pub fn table(&self) -> &SharedImageTable {
        &self.table
    }

    /// The loaded partial templates.
    pub fn partials(&self) -> &Arc<Partials> {
        &self.partials
    }

    /// The page's variable environment.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Mutable access to the page's variable environment.
    pub fn bindings_mut(&mut self) -> &mut Bindings {
        &mut self.bindings
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::data::ImageTable;

    use super::*;

    #[test]
    fn test_with_bindings_replaces_environment() {
        let dir = tempfile::tempdir().unwrap();
        let partials = Arc::new(Partials::from_dir(dir.path()).unwrap());

        let mut page_vars = Bindings::new();
        page_vars.insert("page", &json!({"title": "Post"}));

        let context =
            RenderContext::new(ImageTable::new().into_shared(), partials).with_bindings(page_vars);
        assert_eq!(context.bindings().get("page"), Some(&json!({"title": "Post"})));
        assert!(context.table().read().is_empty());
    }
}

//! Registration of the `image` function with the page engine.
//!
//! Page templates invoke the tag as `{{ image(id="squirrel") }}`. Each
//! invocation parses a fresh [`ImageTag`] from the `id` argument and
//! delegates to the tag's render path, so the page function and the
//! programmatic API cannot drift apart.

use std::collections::HashMap;
use std::sync::Arc;

use tera::{Tera, Value};

use crate::data::SharedImageTable;
use crate::render::{Partials, RenderContext};

use super::ImageTag;

/// Build the `image` function over the given table and partials.
pub fn image_fn(table: SharedImageTable, partials: Arc<Partials>) -> impl tera::Function {
    move |args: &HashMap<String, Value>| -> tera::Result<Value> {
        let id = args
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| tera::Error::msg("the `image` function requires a string `id` argument"))?;

        let tag = ImageTag::parse(id);
        let mut context = RenderContext::new(Arc::clone(&table), Arc::clone(&partials));
        let html = tag
            .render(&mut context)
            .map_err(|e| tera::Error::msg(e.to_string()))?;
        Ok(Value::String(html))
    }
}

/// Register the `image` function on a page engine.
///
/// The table and partials handles are cloned into the function, so the
/// engine outliving the caller's handles is fine.
pub fn register(tera: &mut Tera, table: SharedImageTable, partials: Arc<Partials>) {
    tera.register_function("image", image_fn(table, partials));
}

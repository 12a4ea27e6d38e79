//! Scoped variable bindings over the engine context.
//!
//! The original "push a variable, render, restore" pattern is expressed
//! here as a single construct: [`Bindings::with_binding`] saves whatever
//! value the name had before, binds the new one, runs the closure, and
//! puts the old state back on every return path. Nested scopes restore
//! in reverse order, so sibling and recursive invocations never observe
//! each other's bindings.

use serde::Serialize;
use tera::Value;

/// Variable environment for one page render.
#[derive(Debug, Default, Clone)]
pub struct Bindings {
    inner: tera::Context,
}

impl Bindings {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable for the rest of the render (unscoped).
    pub fn insert(&mut self, name: &str, value: &impl Serialize) {
        self.inner.insert(name, value);
    }

    /// Current value of a variable, if bound.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.inner.get(name)
    }

    /// Run `f` with `name` bound to `value`, restoring the prior binding
    /// afterwards.
    ///
    /// The restore happens whether `f` returns Ok or Err; a name that was
    /// unbound before becomes unbound again.
    pub fn with_binding<T>(
        &mut self,
        name: &str,
        value: Value,
        f: impl FnOnce(&tera::Context) -> T,
    ) -> T {
        let prior = self.inner.remove(name);
        self.inner.insert(name, &value);

        let result = f(&self.inner);

        match prior {
            Some(prev) => self.inner.insert(name, &prev),
            None => {
                self.inner.remove(name);
            }
        }
        result
    }

    /// View of the underlying engine context.
    pub fn context(&self) -> &tera::Context {
        &self.inner
    }
}

impl From<tera::Context> for Bindings {
    fn from(inner: tera::Context) -> Self {
        Self { inner }
    }
}

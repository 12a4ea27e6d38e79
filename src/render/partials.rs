//! Partial template loading and rendering.
//!
//! Partials live in the site's includes directory and are parsed once at
//! load time; `Tera` keeps the parsed form, so repeated renders never
//! touch the disk again. This crate does not manage that cache itself.

use std::path::Path;

use tera::Tera;

use super::error::PartialsError;

/// Conventional name of the image partial within the includes directory.
pub const IMAGE_PARTIAL: &str = "image.html";

/// Parsed partial templates from the site's includes directory.
pub struct Partials {
    engine: Tera,
}

impl Partials {
    /// Load every `.html` partial under `dir`, recursively.
    ///
    /// Parsing errors in any partial are fatal and surface here; an empty
    /// or missing directory loads an empty set, and the miss is reported
    /// later when a render asks for a partial that is not there.
    pub fn from_dir(dir: &Path) -> Result<Self, PartialsError> {
        let pattern = dir.join("**/*.html");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| PartialsError::NonUtf8Path(dir.to_path_buf()))?;
        let mut engine = Tera::new(pattern)?;
        // Escaping decisions belong to the partial author. Tera's default
        // `.html` autoescape would also mangle plain paths (`/` becomes
        // `&#x2F;`), so record fields are inserted verbatim.
        engine.autoescape_on(vec![]);
        tracing::debug!(
            dir = %dir.display(),
            count = engine.get_template_names().count(),
            "loaded partials"
        );
        Ok(Self { engine })
    }

    /// Render a partial by name with the given context.
    ///
    /// An unknown partial name is the engine's template-not-found error,
    /// propagated unchanged.
    pub fn render(&self, name: &str, context: &tera::Context) -> tera::Result<String> {
        self.engine.render(name, context)
    }

    /// Whether a partial with this name was loaded.
    pub fn contains(&self, name: &str) -> bool {
        self.engine.get_template_names().any(|n| n == name)
    }
}

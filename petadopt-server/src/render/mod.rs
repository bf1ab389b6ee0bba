//! Server-side HTML rendering
//!
//! Templates are compiled into the binary and loaded into a minijinja
//! environment once at startup. `.html` templates auto-escape their input.

use minijinja::Environment;
use serde::Serialize;

/// Home page with the adoption form
pub const HOME: &str = "home.html";

/// Adoption history (and the /submit echo)
pub const ADOPTIONS: &str = "adoptions.html";

const SOURCES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/layout.html")),
    (HOME, include_str!("../../templates/home.html")),
    (ADOPTIONS, include_str!("../../templates/adoptions.html")),
];

/// Named HTML templates
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Load the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to parse.
    pub fn load() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in SOURCES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render a named template with the given context.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

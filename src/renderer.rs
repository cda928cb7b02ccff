//! Variable substitution for template files.
//! Renders `{{ variable }}` references against a fixed variable set using
//! MiniJinja; an unresolved reference is an error naming the variable.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use minijinja::{Environment, UndefinedBehavior};
use regex::Regex;
use std::sync::LazyLock;

/// The variable set applied to every file of one scaffolding run.
pub type TemplateVariables = IndexMap<String, String>;

static VARIABLE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap()
});

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given variables.
    ///
    /// Pure and deterministic: no I/O, identical inputs produce identical
    /// output. Input without variable references is returned unchanged.
    ///
    /// # Errors
    /// * `Error::UndefinedVariable` naming the first reference that has no
    ///   value in `variables`
    fn render(&self, template: &str, variables: &TemplateVariables) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with strict undefined-variable behavior.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // Keep rendering idempotent: without this, every render would strip
        // one trailing newline from the input.
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, variables: &TemplateVariables) -> Result<String> {
        // MiniJinja's strict mode rejects undefined variables but its error
        // does not carry the variable name, so scan for references first.
        for capture in VARIABLE_REF.captures_iter(template) {
            let variable = &capture[1];
            if !variables.contains_key(variable) {
                return Err(Error::UndefinedVariable { variable: variable.to_string() });
            }
        }

        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        tmpl.render(variables).map_err(Error::MinijinjaError)
    }
}

//! Template Renderer - render artifact templates with Handlebars
//!
//! Rendering is a pure function of template identifier and data. Templates are
//! compiled once at construction; one that fails to parse is remembered and
//! reported on every attempt to render it.

use std::collections::HashMap;

use handlebars::Handlebars;
use log::{debug, warn};
use serde::Serialize;

use crate::error::{CtpError, Result};

use super::helpers::HelperSet;
use super::loader::{TemplateId, TemplateSet};

/// Renders artifact templates using Handlebars templating
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
    /// Template name -> parse error
    broken: HashMap<String, String>,
}

impl TemplateRenderer {
    /// Compile every template in `templates` with access to `helpers`
    pub fn new(templates: &TemplateSet, helpers: HelperSet) -> Self {
        let mut handlebars = Handlebars::new();
        // Missing fields render as empty strings
        handlebars.set_strict_mode(false);
        // Output is source code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        debug!("Registering helpers: {}", helpers.names().join(", "));
        for (name, helper) in helpers.into_inner() {
            handlebars.register_helper(&name, helper);
        }

        let mut broken = HashMap::new();
        for (name, source) in templates.iter() {
            if let Err(e) = handlebars.register_template_string(name, source) {
                warn!("Template '{}' failed to compile: {}", name, e);
                broken.insert(name.to_string(), e.to_string());
            }
        }

        Self { handlebars, broken }
    }

    /// Built-in templates with the standard helpers
    pub fn builtin() -> Self {
        Self::new(&TemplateSet::builtin(), HelperSet::standard())
    }

    /// Render one of the artifact templates
    pub fn render<T: Serialize>(&self, id: TemplateId, data: &T) -> Result<String> {
        self.render_named(id.name(), data)
    }

    /// Render a template by name
    pub fn render_named<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        if let Some(error) = self.broken.get(name) {
            return Err(CtpError::TemplateSyntax(format!("{}: {}", name, error)));
        }
        if !self.has_template(name) {
            return Err(CtpError::TemplateNotFound(name.to_string()));
        }

        self.handlebars
            .render(name, data)
            .map_err(|e| CtpError::Render(format!("Failed to render template '{}': {}", name, e)))
    }

    /// Check if a named template compiled successfully
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.get_template(name).is_some()
    }
}

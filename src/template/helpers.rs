//! Template helpers
//!
//! Helpers are handed to the renderer as a value instead of being registered in
//! some process-wide table, so every renderer states exactly what it can call.

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderErrorReason, handlebars_helper,
};

use crate::casing;
use crate::domain::FieldType;

handlebars_helper!(camel_case: |s: str| casing::to_camel_case(s));
handlebars_helper!(pascal_case: |s: str| casing::to_pascal_case(s));
handlebars_helper!(kebab_case: |s: str| casing::to_kebab_case(s));
handlebars_helper!(snake_case: |s: str| casing::to_snake_case(s));
handlebars_helper!(identifier: |s: str| casing::sanitize_identifier(s));
handlebars_helper!(ts_type: |s: str| FieldType::parse(s).map(|t| t.ts_type()).unwrap_or("unknown"));

/// `{{json value}}`: the value as a compact JSON source literal
fn json(h: &Helper, _: &Handlebars, _: &Context, _: &mut RenderContext, out: &mut dyn Output) -> HelperResult {
    let value = h
        .param(0)
        .map(|p| p.value())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("json", 0))?;
    let literal = serde_json::to_string(value).map_err(RenderErrorReason::SerdeError)?;
    out.write(&literal)?;
    Ok(())
}

/// Named helper functions available inside templates
#[derive(Default)]
pub struct HelperSet {
    helpers: Vec<(String, Box<dyn HelperDef + Send + Sync>)>,
}

impl HelperSet {
    /// An empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Casing helpers (`camelCase`, `pascalCase`, `kebabCase`, `snakeCase`),
    /// `identifier` for property names, `json` for source literals and
    /// `tsType` for parameter types
    pub fn standard() -> Self {
        Self::new()
            .with("camelCase", camel_case)
            .with("pascalCase", pascal_case)
            .with("kebabCase", kebab_case)
            .with("snakeCase", snake_case)
            .with("identifier", identifier)
            .with("json", json)
            .with("tsType", ts_type)
    }

    /// Add a helper under `name`
    pub fn with(mut self, name: impl Into<String>, helper: impl HelperDef + Send + Sync + 'static) -> Self {
        self.helpers.push((name.into(), Box::new(helper)));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.helpers.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    pub(crate) fn into_inner(self) -> Vec<(String, Box<dyn HelperDef + Send + Sync>)> {
        self.helpers
    }
}

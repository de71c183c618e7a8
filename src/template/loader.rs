//! Template Loader - the fixed set of template assets
//!
//! Built-in templates are compiled into the binary. A directory of `<id>.hbs`
//! files can replace any of them; the result is never modified after loading.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use log::debug;

use crate::error::{CtpError, Result};

/// File extension of template files
pub const TEMPLATE_EXTENSION: &str = "hbs";

const TOOL_DEFINITION_SOURCE: &str = include_str!("../../templates/tool-definition.hbs");
const CLIENT_IMPLEMENTATION_SOURCE: &str = include_str!("../../templates/client-implementation.hbs");
const TEST_SUITE_SOURCE: &str = include_str!("../../templates/test-suite.hbs");

/// Identifies one of the artifact templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    ToolDefinition,
    ClientImplementation,
    TestSuite,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [Self::ToolDefinition, Self::ClientImplementation, Self::TestSuite];

    /// Asset name, also the file stem in a template directory
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToolDefinition => "tool-definition",
            Self::ClientImplementation => "client-implementation",
            Self::TestSuite => "test-suite",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == s)
    }

    fn builtin_source(&self) -> &'static str {
        match self {
            Self::ToolDefinition => TOOL_DEFINITION_SOURCE,
            Self::ClientImplementation => CLIENT_IMPLEMENTATION_SOURCE,
            Self::TestSuite => TEST_SUITE_SOURCE,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Template sources keyed by name
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    sources: HashMap<String, String>,
}

impl TemplateSet {
    /// An empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// The templates compiled into the binary
    pub fn builtin() -> Self {
        let sources = TemplateId::ALL
            .into_iter()
            .map(|id| (id.name().to_string(), id.builtin_source().to_string()))
            .collect();
        Self { sources }
    }

    /// Built-ins, with any `<name>.hbs` files in `override_dir` replacing them
    pub fn load(override_dir: Option<&Path>) -> Result<Self> {
        let mut set = Self::builtin();
        if let Some(dir) = override_dir {
            let overrides = Self::from_dir(dir)?;
            debug!("Loaded {} template override(s) from {}", overrides.len(), dir.display());
            for name in overrides.names() {
                if TemplateId::parse(name).is_none() {
                    debug!("Template '{}' does not replace a built-in", name);
                }
            }
            set.sources.extend(overrides.sources);
        }
        Ok(set)
    }

    /// Every `*.hbs` file in `dir`, keyed by file stem
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir).map_err(|e| {
            CtpError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read templates directory {:?}: {}", dir, e),
            ))
        })?;

        let mut sources = HashMap::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION)
                && let Some(name) = path.file_stem().and_then(|s| s.to_str())
            {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    CtpError::Io(std::io::Error::new(
                        e.kind(),
                        format!("Failed to load template '{}' from {:?}: {}", name, path, e),
                    ))
                })?;
                sources.insert(name.to_string(), content);
            }
        }

        Ok(Self { sources })
    }

    /// Add or replace a template source
    pub fn with_template(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.sources.insert(name.into(), source.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.sources.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    /// Template names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        names.sort();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sources.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

//! Known-tools catalog and duplicate search
//!
//! The catalog is a fixed list of tool records loaded from TOML once at
//! startup. Search is a permissive keyword filter over it.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CtpError, Result};

const BUILTIN_CATALOG: &str = include_str!("../catalog/known-tools.toml");

/// Similarity label reported for every match.
///
/// Not derived from overlap; callers may depend on the constant.
pub const SIMILARITY: &str = "medium";

/// A tool that already exists
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KnownTool {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl KnownTool {
    /// Terms a description is matched against: lowercased name, tags, id
    fn terms(&self) -> Vec<String> {
        let mut terms = Vec::with_capacity(self.tags.len() + 2);
        terms.push(self.name.to_lowercase());
        terms.extend(self.tags.iter().cloned());
        terms.push(self.id.clone());
        terms
    }

    fn matches(&self, words: &[String]) -> bool {
        let terms = self.terms();
        words
            .iter()
            .any(|word| terms.iter().any(|term| term.contains(word.as_str()) || word.contains(term.as_str())))
    }
}

/// A catalog entry similar to the searched description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateMatch {
    pub id: String,
    pub name: String,
    pub category: String,
    pub similarity: String,
}

impl From<&KnownTool> for DuplicateMatch {
    fn from(tool: &KnownTool) -> Self {
        Self {
            id: tool.id.clone(),
            name: tool.name.clone(),
            category: tool.category.clone(),
            similarity: SIMILARITY.to_string(),
        }
    }
}

/// TOML file structure
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(rename = "tool", default)]
    tools: Vec<KnownTool>,
}

/// Read-only list of known tools, in file order
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<KnownTool>,
}

impl ToolCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Load `path` if given, the built-in catalog otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    /// Load catalog from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CtpError::Catalog(format!("Failed to read catalog file {:?}: {}", path, e)))?;
        Self::from_toml(&content)
    }

    /// Load catalog from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let catalog: TomlCatalog =
            toml::from_str(content).map_err(|e| CtpError::Catalog(format!("Failed to parse TOML: {}", e)))?;

        let mut tools: Vec<KnownTool> = Vec::with_capacity(catalog.tools.len());
        for mut tool in catalog.tools {
            if tools.iter().any(|t| t.id == tool.id) {
                return Err(CtpError::Catalog(format!("Duplicate tool id '{}'", tool.id)));
            }
            tool.tags = tool.tags.iter().map(|t| t.to_lowercase()).collect();
            tools.push(tool);
        }

        Ok(Self { tools })
    }

    /// Entries sharing a keyword with `description`.
    ///
    /// A description word matches when it contains, or is contained in, any term
    /// of an entry. `category`, when given and not blank, must equal the entry's
    /// category exactly.
    pub fn search(&self, description: &str, category: Option<&str>) -> Vec<DuplicateMatch> {
        let category = category.filter(|c| !c.trim().is_empty());
        let words: Vec<String> = description.to_lowercase().split_whitespace().map(str::to_string).collect();

        let matches: Vec<DuplicateMatch> = self
            .tools
            .iter()
            .filter(|tool| category.is_none_or(|c| tool.category == c))
            .filter(|tool| tool.matches(&words))
            .map(DuplicateMatch::from)
            .collect();

        debug!("Duplicate search over {} tool(s) found {} match(es)", self.tools.len(), matches.len());
        matches
    }

    pub fn tools(&self) -> &[KnownTool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

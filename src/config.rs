use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use ctpgen::domain::ArtifactLayout;
use ctpgen::ipc::DEFAULT_MAX_LENGTH;
use ctpgen::service::DEFAULT_NEXT_STEPS;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub templates: TemplatesConfig,
    pub catalog: CatalogConfig,
    pub generation: GenerationConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Directory of `<id>.hbs` files overriding the built-in templates
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog replacing the built-in known tools
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub tools_dir: String,
    pub tests_dir: String,
    pub next_steps: Vec<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let layout = ArtifactLayout::default();
        Self {
            tools_dir: layout.tools_dir,
            tests_dir: layout.tests_dir,
            next_steps: DEFAULT_NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GenerationConfig {
    pub fn layout(&self) -> ArtifactLayout {
        ArtifactLayout {
            tools_dir: self.tools_dir.clone(),
            tests_dir: self.tests_dir.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub max_message_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            templates: TemplatesConfig::default(),
            catalog: CatalogConfig::default(),
            generation: GenerationConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert!(config.templates.dir.is_none());
        assert!(config.catalog.path.is_none());
        assert_eq!(config.generation.layout(), ArtifactLayout::default());
        assert_eq!(config.generation.next_steps.len(), 4);
        assert_eq!(config.server.max_message_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ctpgen.yml");
        fs::write(
            &path,
            "log_level: debug\ngeneration:\n  tools_dir: lib/tools\ncatalog:\n  path: /etc/ctpgen/tools.toml\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.generation.tools_dir, "lib/tools");
        assert_eq!(config.generation.tests_dir, "src/tools/__tests__");
        assert_eq!(config.catalog.path, Some(PathBuf::from("/etc/ctpgen/tools.toml")));
        assert_eq!(config.server.max_message_bytes, DEFAULT_MAX_LENGTH);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yml");
        fs::write(&path, "server: [not, a, map").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}

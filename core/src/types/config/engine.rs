use crate::types::config::{IndexSettings, StopwordSet, StoreConfig};
use crate::types::document_type::{BuiltinDocumentType, DocumentTypeRegistry};
use crate::types::posting_key::KeyScheme;
use crate::types::validation::ValidationError;
use crate::types::Environment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Process configuration, persisted as `<env>.toml`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub document_types: DocumentTypesConfig,
    #[serde(default)]
    pub stopwords: StopwordsConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl EngineConfig {
    /// Returns the config file path for `env` within the given config directory.
    pub fn path(config_dir: &Path, env: Environment) -> PathBuf {
        config_dir.join(format!("{env}.toml"))
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.document_types.available.is_empty() {
            errors.push("document_types.available must list at least one type".to_string());
        }

        if let Err(e) = DocumentTypeRegistry::new(&self.document_types.available) {
            errors.push(format!("document_types.available: {e}"));
        }

        errors
    }

    /// Builds engine settings. A relative stopword path is resolved against
    /// `base_dir`; without a path, stopword removal runs over an empty set.
    pub fn settings(&self, base_dir: &Path) -> Result<IndexSettings, ConfigError> {
        let registry = DocumentTypeRegistry::new(&self.document_types.available)?;

        let stopwords = match &self.stopwords.path {
            Some(path) => StopwordSet::load(&base_dir.join(path))?,
            None => StopwordSet::default(),
        };

        Ok(IndexSettings {
            registry,
            stopwords,
            stopword_removal: self.index.stopword_removal,
            key_scheme: self.index.key_scheme,
        })
    }

    /// Store location with a relative `data_dir` resolved against `base_dir`.
    pub fn store_config(&self, base_dir: &Path) -> StoreConfig {
        StoreConfig {
            data_dir: base_dir.join(&self.store.data_dir),
        }
    }
}

/// Tokenization and key layout settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IndexConfig {
    #[serde(default)]
    pub stopword_removal: bool,
    #[serde(default)]
    pub key_scheme: KeyScheme,
}

/// Recognized document types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DocumentTypesConfig {
    #[serde(default = "default_document_types")]
    pub available: Vec<String>,
}

impl Default for DocumentTypesConfig {
    fn default() -> Self {
        Self {
            available: default_document_types(),
        }
    }
}

fn default_document_types() -> Vec<String> {
    BuiltinDocumentType::ALL
        .iter()
        .map(|t| t.as_str().to_string())
        .collect()
}

/// Stopword list location.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StopwordsConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("stopword file error: {0}")]
    Stopwords(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Validation(#[from] ValidationError),
}

mod engine;
mod environment;
mod settings;
mod stopwords;
mod store;

pub use engine::{ConfigError, DocumentTypesConfig, EngineConfig, IndexConfig, StopwordsConfig};
pub use environment::Environment;
pub use settings::IndexSettings;
pub use stopwords::StopwordSet;
pub use store::StoreConfig;

#[cfg(test)]
mod tests;

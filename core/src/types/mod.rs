pub(crate) mod config;
pub use config::{
    ConfigError, DocumentTypesConfig, EngineConfig, Environment, IndexConfig, IndexSettings,
    StopwordSet, StopwordsConfig, StoreConfig,
};

pub(crate) mod document_id;
pub use document_id::{DocumentId, DocumentIdError};

pub(crate) mod document_type;
pub use document_type::{BuiltinDocumentType, DocumentType, DocumentTypeRegistry};

pub(crate) mod posting_key;
pub use posting_key::{INVERTED_INDEX_NAMESPACE, KEY_SEPARATOR, KeyScheme, PostingKey};

pub(crate) mod rank;
pub use rank::SearchResultEntry;

pub(crate) mod term;
pub use term::{Term, TermError, TermSet};

pub(crate) mod validation;
pub use validation::ValidationError;

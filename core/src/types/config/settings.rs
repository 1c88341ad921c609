use crate::types::config::StopwordSet;
use crate::types::document_type::DocumentTypeRegistry;
use crate::types::posting_key::KeyScheme;

/// Immutable configuration an [`Engine`](crate::Engine) is built with.
#[derive(Clone, Debug, Default)]
pub struct IndexSettings {
    pub registry: DocumentTypeRegistry,
    pub stopwords: StopwordSet,
    pub stopword_removal: bool,
    pub key_scheme: KeyScheme,
}

use thiserror::Error;

/// Rejections raised before any set-store access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid document type: {0}")]
    InvalidDocumentType(String),

    #[error("Document type is required")]
    DocumentTypeRequired,

    #[error("Document type name cannot be registered: {0:?}")]
    UnusableDocumentTypeName(String),

    #[error("Invalid document ID: {0}")]
    InvalidDocumentId(i64),

    #[error("Document name must not be empty")]
    EmptyDocumentName,

    #[error("Old document name must not be empty")]
    EmptyOldDocumentName,

    #[error("Search term is required")]
    EmptySearchTerm,

    #[error("Keyword prefix is required")]
    EmptyPrefix,
}

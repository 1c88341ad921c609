//! Indexing and query engine.
//!
//! Combines the document type registry, the tokenizer and a [`SetStore`] into
//! the four inbound operations: create index, update index, search and keyword
//! suggestion.

use crate::store::SetStore;
use crate::types::{DocumentType, IndexSettings, PostingKey, Term, TermSet};

pub use fetcher::{FetchedPostings, Postings};
pub use ranking::rank;
pub use searching::SearchResults;
pub use tokenizer::tokenize;

mod fetcher;
mod indexing;
mod ranking;
mod searching;
mod suggestion;
mod tokenizer;

pub mod error {
    use crate::store::error::StoreError;
    use crate::types::{PostingKey, ValidationError};
    use std::fmt;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum IndexError {
        #[error("Validation error: {0}")]
        Validation(#[from] ValidationError),

        #[error("{0}")]
        PartialFailure(#[from] PartialFailure),
    }

    /// Posting keys whose store operation failed during a best-effort fan-out.
    /// The other keys of the same call were applied.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct PartialFailure {
        pub failed_removals: Vec<PostingKey>,
        pub failed_additions: Vec<PostingKey>,
    }

    impl PartialFailure {
        pub fn is_empty(&self) -> bool {
            self.failed_removals.is_empty() && self.failed_additions.is_empty()
        }
    }

    impl fmt::Display for PartialFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if !self.failed_removals.is_empty() {
                write!(f, "Error on removing keys: ")?;
                write_keys(f, &self.failed_removals)?;
                if !self.failed_additions.is_empty() {
                    write!(f, "; ")?;
                }
            }
            if !self.failed_additions.is_empty() {
                write!(f, "Error on adding keys: ")?;
                write_keys(f, &self.failed_additions)?;
            }
            Ok(())
        }
    }

    impl std::error::Error for PartialFailure {}

    fn write_keys(f: &mut fmt::Formatter<'_>, keys: &[PostingKey]) -> fmt::Result {
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }

    #[derive(Debug, Error)]
    pub enum SuggestError {
        #[error("Validation error: {0}")]
        Validation(#[from] ValidationError),

        #[error("Store error: {0}")]
        Store(#[from] StoreError),
    }
}

/// Inverted index over a [`SetStore`].
///
/// Holds no state besides the immutable settings, so a shared reference can
/// serve concurrent requests when the store allows it.
pub struct Engine<S> {
    store: S,
    settings: IndexSettings,
}

impl<S: SetStore> Engine<S> {
    pub fn new(store: S, settings: IndexSettings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &IndexSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tokenizes `text` with this engine's stopword settings.
    pub fn tokenize(&self, text: &str) -> TermSet {
        tokenizer::tokenize(
            text,
            self.settings.stopword_removal,
            &self.settings.stopwords,
        )
    }

    fn posting_key(&self, doc_type: &DocumentType, term: &Term) -> PostingKey {
        self.settings.key_scheme.posting_key(doc_type, term)
    }
}

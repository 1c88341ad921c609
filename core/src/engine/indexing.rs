use crate::engine::Engine;
use crate::engine::error::{IndexError, PartialFailure};
use crate::store::SetStore;
use crate::types::{DocumentId, DocumentType, PostingKey, TermSet, ValidationError};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug)]
enum Mutation {
    Add,
    Remove,
}

impl Mutation {
    fn as_str(self) -> &'static str {
        match self {
            Mutation::Add => "add",
            Mutation::Remove => "remove",
        }
    }
}

/// Index operations.
impl<S: SetStore> Engine<S> {
    /// Indexes `document_name` under `document_id`.
    ///
    /// Validates the document type, then the ID, then the name. Every term is
    /// attempted even after a failure; `Err(PartialFailure)` lists the keys
    /// that were not written.
    pub fn create_index(
        &self,
        document_id: i64,
        document_type: &str,
        document_name: &str,
    ) -> Result<(), IndexError> {
        let doc_type = self.settings.registry.validate(document_type)?;
        let document_id = validate_document_id(document_id)?;
        if document_name.trim().is_empty() {
            return Err(ValidationError::EmptyDocumentName.into());
        }

        let terms = self.tokenize(document_name);
        let failed_additions = self.apply(Mutation::Add, &doc_type, document_id, &terms);

        finish(
            PartialFailure {
                failed_removals: vec![],
                failed_additions,
            },
            &doc_type,
            document_id,
        )
    }

    /// Moves `document_id` from the terms of `old_document_name` to the terms
    /// of `new_document_name`.
    ///
    /// All old postings are removed first, then all new postings are added.
    /// Terms present in both names are removed and added again.
    pub fn update_index(
        &self,
        document_id: i64,
        document_type: &str,
        old_document_name: &str,
        new_document_name: &str,
    ) -> Result<(), IndexError> {
        let doc_type = self.settings.registry.validate(document_type)?;
        let document_id = validate_document_id(document_id)?;
        if old_document_name.trim().is_empty() {
            return Err(ValidationError::EmptyOldDocumentName.into());
        }
        if new_document_name.trim().is_empty() {
            return Err(ValidationError::EmptyDocumentName.into());
        }

        let old_terms = self.tokenize(old_document_name);
        let new_terms = self.tokenize(new_document_name);

        let failed_removals = self.apply(Mutation::Remove, &doc_type, document_id, &old_terms);
        let failed_additions = self.apply(Mutation::Add, &doc_type, document_id, &new_terms);

        finish(
            PartialFailure {
                failed_removals,
                failed_additions,
            },
            &doc_type,
            document_id,
        )
    }

    /// Applies `mutation` to the posting set of every term. Returns the keys
    /// that failed.
    fn apply(
        &self,
        mutation: Mutation,
        doc_type: &DocumentType,
        document_id: DocumentId,
        terms: &TermSet,
    ) -> Vec<PostingKey> {
        let member = document_id.to_member();
        let mut failed = Vec::new();

        for term in terms {
            let key = self.posting_key(doc_type, term);
            let result = match mutation {
                Mutation::Add => self.store.add_member(key.as_str(), &member),
                Mutation::Remove => self.store.remove_member(key.as_str(), &member),
            };

            if let Err(e) = result {
                warn!(
                    %key,
                    %document_id,
                    op = mutation.as_str(),
                    error = %e,
                    "failed to update posting"
                );
                failed.push(key);
            }
        }

        failed
    }
}

fn validate_document_id(raw: i64) -> Result<DocumentId, ValidationError> {
    DocumentId::try_new(raw).map_err(|_| ValidationError::InvalidDocumentId(raw))
}

fn finish(
    failure: PartialFailure,
    doc_type: &DocumentType,
    document_id: DocumentId,
) -> Result<(), IndexError> {
    if failure.is_empty() {
        debug!(%doc_type, %document_id, "index updated");
        return Ok(());
    }
    Err(failure.into())
}
